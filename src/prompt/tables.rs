// src/prompt/tables.rs
// Fixed content tables the daily prompt is drawn from

/// Trending keyword sets per month (index 0 = January)
pub const TRENDING_KEYWORDS: [&[&str]; 12] = [
    // January
    &[
        "new year resolutions, gym selfies, dry january",
        "winter sales, cozy gaming, cold plunge",
        "award season, red carpet fails, snow day",
    ],
    // February
    &[
        "valentine's day, situationships, heart emojis",
        "super bowl ads, halftime show, snack tables",
        "groundhog day, leap years, seasonal depression memes",
    ],
    // March
    &[
        "spring break, bracket busters, march madness",
        "daylight saving time, lost sleep, time change memes",
        "st patrick's day, four leaf clovers, everything green",
    ],
    // April
    &[
        "april fools, fake announcements, pranks gone wrong",
        "tax season, receipts, spreadsheet panic",
        "spring cleaning, pollen, allergy season",
    ],
    // May
    &[
        "graduation caps, cap and gown photoshoots, commencement speeches",
        "mother's day, brunch reservations, flower shops",
        "festival season, sunburn, lost phones",
    ],
    // June
    &[
        "summer vacation, out of office replies, pool floats",
        "pride month, rainbow merch, parades",
        "wedding season, plus ones, dance floor chaos",
    ],
    // July
    &[
        "fireworks, backyard barbecues, heat waves",
        "prime day deals, impulse buys, package thieves",
        "summer blockbusters, popcorn buckets, spoiler warnings",
    ],
    // August
    &[
        "back to school, crowded malls, new backpacks",
        "shark week, beach reads, last days of summer",
        "hot girl walks, iced coffee, sweaty commutes",
    ],
    // September
    &[
        "pumpkin spice, sweater weather, early halloween decor",
        "new phone launches, upgrade envy, cracked screens",
        "fantasy football, group chats, trash talk",
    ],
    // October
    &[
        "halloween costumes, haunted houses, candy trades",
        "spooky season, true crime podcasts, fake cobwebs",
        "corn mazes, apple picking, flannel everything",
    ],
    // November
    &[
        "thanksgiving dinner, family debates, leftovers",
        "black friday, doorbusters, shopping carts",
        "no shave november, mustaches, cozy socks",
    ],
    // December
    &[
        "holiday lights, ugly sweaters, gift wrapping",
        "year in review, wrapped playlists, top nine posts",
        "new year's eve, countdowns, confetti cleanup",
    ],
];

/// Seasonal context phrases, indexed by [`crate::prompt::Season`]
pub const SEASONAL_CONTEXT: [&str; 4] = [
    "It's winter: short days, frozen windshields and everyone hibernating indoors.",
    "It's spring: things are blooming, allergies are peaking and everyone is restless.",
    "It's summer: long days, heat waves and everyone pretending to be on vacation.",
    "It's autumn: leaves are falling, sweaters are back and everything tastes like pumpkin.",
];

pub const TONES: &[&str] = &[
    "absurd",
    "deadpan",
    "chaotic",
    "wholesome",
    "unhinged",
    "dramatic",
    "cryptic",
    "nostalgic",
];

/// Style exemplars shown to the model
pub const EXAMPLE_PROMPTS: &[&str] = &[
    "A toaster running for president.",
    "Your houseplant's secret night job.",
    "The last slice of pizza at a group chat meeting.",
    "A pigeon with a podcast.",
    "Your alarm clock's villain origin story.",
    "The group chat after someone sends a voice memo.",
    "A cat who just discovered taxes.",
    "Your wifi router on its day off.",
    "A raccoon influencer's morning routine.",
    "The sock that escaped the dryer.",
    "A snowman who refuses to melt.",
    "Your phone at 1% battery, dramatically.",
];

/// Served when generation is unavailable
pub const FALLBACK_PROMPTS: &[&str] = &[
    "A penguin on its first day at the office.",
    "Your fridge judging your midnight snack.",
    "A dragon who is afraid of birthday candles.",
    "The moon taking a selfie.",
    "A very tired superhero doing laundry.",
    "A dog explaining the internet to a goldfish.",
];

/// Ceiling on prompt length, repeated to the model in both instructions
pub const MAX_PROMPT_WORDS: usize = 15;

/// Number of exemplars sampled into each request
pub const EXAMPLE_SAMPLE_SIZE: usize = 5;
