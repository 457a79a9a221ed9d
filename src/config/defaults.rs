//! Built-in English word lists and pattern tables
//!
//! These are the lists the filter runs with when no custom configuration is
//! supplied. The substitution table maps each canonical letter to the
//! characters commonly used to disguise it; the first entry of every list is
//! the letter itself.

/// Characters treated as optional noise between the letters of an obfuscated
/// profanity. The period is special-cased by the separator builder.
pub const DEFAULT_SEPARATORS: &[char] = &[
    '@', '#', '%', '&', '_', ';', '\'', '"', ',', '~', '`', '|', '!', '(', ')', '[', ']', '{',
    '}', '<', '>', '.', '*', '-', '+', '=', ':', '?', '/', '\\', '^',
];

/// Look-alike characters per canonical letter.
pub const DEFAULT_SUBSTITUTIONS: &[(char, &[char])] = &[
    ('a', &['a', '4', '@', 'á', 'à', 'â', 'ä', 'ã', 'å', 'Á', 'À', 'Â', 'Ä', 'Ã', 'Å']),
    ('b', &['b', '8', 'ß']),
    ('c', &['c', 'ç', 'Ç', '(', '<', '{', '©']),
    ('d', &['d', 'ð', 'Ð']),
    ('e', &['e', '3', '€', 'è', 'é', 'ê', 'ë', 'È', 'É', 'Ê', 'Ë']),
    ('f', &['f', 'ƒ']),
    ('g', &['g', '6', '9']),
    ('h', &['h']),
    ('i', &['i', '1', '!', '|', 'l', 'í', 'ì', 'î', 'ï', 'Í', 'Ì', 'Î', 'Ï']),
    ('j', &['j']),
    ('k', &['k']),
    ('l', &['l', '1', '|', '£']),
    ('m', &['m']),
    ('n', &['n', 'ñ', 'Ñ']),
    ('o', &['o', '0', 'ø', 'Ø', 'ö', 'ó', 'ò', 'ô', 'õ', 'Ö', 'Ó', 'Ò', 'Ô', 'Õ', '°']),
    ('p', &['p']),
    ('q', &['q']),
    ('r', &['r']),
    ('s', &['s', '5', '$', '§']),
    ('t', &['t', '7', '+']),
    ('u', &['u', 'ü', 'ú', 'ù', 'û', 'Ü', 'Ú', 'Ù', 'Û', 'µ', 'v']),
    ('v', &['v', 'u']),
    ('w', &['w']),
    ('x', &['x', '×']),
    ('y', &['y', 'ý', 'ÿ', 'Ý', '¥']),
    ('z', &['z', '2']),
];

/// Canonical blocked terms, lowercase.
pub const DEFAULT_PROFANITIES: &[&str] = &[
    "anal",
    "arse",
    "arsehole",
    "ass",
    "asshole",
    "bastard",
    "bitch",
    "bollocks",
    "bugger",
    "bullshit",
    "butt",
    "clusterfuck",
    "cock",
    "cocksucker",
    "crap",
    "cunt",
    "damn",
    "dick",
    "dickhead",
    "douche",
    "dumbass",
    "fag",
    "faggot",
    "fick",
    "fuck",
    "fucked",
    "fucker",
    "fucking",
    "goddamn",
    "hell",
    "jackass",
    "jerkoff",
    "knob",
    "motherfucker",
    "penis",
    "piss",
    "pissed",
    "prick",
    "pussy",
    "sex",
    "shit",
    "shitcunt",
    "shite",
    "slut",
    "twat",
    "wank",
    "wanker",
    "whore",
];

/// Whole words (case-insensitive) that must never be flagged even though a
/// compiled pattern matches inside them. Entries may contain internal
/// whitespace: a match that bridges a space recovers a space-containing
/// full-word context.
pub const DEFAULT_FALSE_POSITIVES: &[&str] = &[
    "ambassador",
    "analog",
    "analogue",
    "analogy",
    "analysis",
    "analyst",
    "analytical",
    "analytics",
    "arsenal",
    "arsenic",
    "assassin",
    "assassination",
    "assemble",
    "assembly",
    "assess",
    "assessment",
    "asset",
    "assets",
    "assign",
    "assignment",
    "assist",
    "assistance",
    "assistant",
    "associate",
    "association",
    "assorted",
    "assume",
    "assumption",
    "assure",
    "assured",
    "banal",
    "bass",
    "bassist",
    "benedict",
    "blackcock",
    "blackcocktail",
    "brass",
    "butter",
    "butterfly",
    "butterscotch",
    "button",
    "buttons",
    "buttress",
    "bypass",
    "canal",
    "canvass",
    "carcass",
    "casserole",
    "cassette",
    "class",
    "classes",
    "classic",
    "classics",
    "classification",
    "classroom",
    "coarse",
    "cockburn",
    "cockerel",
    "cockney",
    "cockpit",
    "cocktail",
    "cocktails",
    "compass",
    "countryside",
    "dickens",
    "dickie",
    "dickinson",
    "embarrass",
    "embarrassment",
    "embassy",
    "encompass",
    "essex",
    "fickle",
    "flick",
    "flicked",
    "flicker",
    "flickering",
    "flicks",
    "gamecock",
    "glass",
    "glasses",
    "grass",
    "hancock",
    "harass",
    "harassment",
    "hassle",
    "hearse",
    "hello",
    "hitchcock",
    "hoarse",
    "knobbly",
    "lightwater",
    "mass",
    "masses",
    "massage",
    "massive",
    "michelle",
    "middlesex",
    "mitchell",
    "musicals hit",
    "othello",
    "overpass",
    "parse",
    "pass",
    "passage",
    "passed",
    "passenger",
    "passes",
    "passing",
    "passion",
    "passionate",
    "password",
    "peacock",
    "peacocks",
    "peninsula",
    "penistone",
    "potassium",
    "prickly",
    "push it",
    "rebuttal",
    "rehearse",
    "sassy",
    "scrap",
    "scrape",
    "scraped",
    "scrapes",
    "scrapped",
    "scrapping",
    "scraps",
    "scunthorpe",
    "seashell",
    "sextant",
    "sextet",
    "sexton",
    "shell",
    "shellfish",
    "shuttlecock",
    "skyscraper",
    "sparse",
    "stopcock",
    "surpass",
    "sussex",
    "swank",
    "swanky",
    "trafficked",
    "trafficker",
    "trafficking",
    "trespass",
    "underpass",
    "unisex",
    "woodcock",
];
