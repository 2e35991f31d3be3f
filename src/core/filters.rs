use super::{contains_either_way, contains_phrase, normalize, words};

/// Related keywords for a primary expertise term
///
/// A bid whose category mentions one of the keywords is considered adjacent
/// to any expertise entry that contains the primary term.
const RELATED_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "medical supplies",
        &["healthcare", "emergency", "first aid", "ppe", "hospital", "pharmaceutical", "laboratory"],
    ),
    (
        "office supplies",
        &["stationery", "paper", "printing", "school supplies", "ink", "toner"],
    ),
    (
        "it equipment",
        &["computer", "laptop", "printer", "software", "network", "ict"],
    ),
    (
        "construction",
        &["infrastructure", "building", "road", "roads", "civil works", "renovation", "repair"],
    ),
    ("food", &["catering", "meals", "rice", "groceries", "subsistence"]),
    ("janitorial", &["cleaning", "sanitation", "disinfectant", "waste"]),
    ("furniture", &["fixtures", "cabinet", "chairs", "tables"]),
    ("vehicles", &["transport", "motor", "automotive", "spare parts"]),
];

/// Words too generic to count as category overlap on their own
const GENERIC_WORDS: &[&str] = &[
    "and", "of", "for", "the", "with", "other", "various", "supply", "supplies", "equipment",
    "service", "services", "materials", "goods", "items", "products", "works",
];

/// Keywords that mark a procuring entity as a public body
const GOVERNMENT_KEYWORDS: &[&str] = &[
    "department",
    "bureau",
    "commission",
    "university",
    "college",
    "authority",
    "administration",
    "office of",
    "council",
    "municipality",
    "province",
    "provincial",
    "city government",
    "barangay",
];

/// Distinctive words of a category or expertise entry
fn distinctive_words(value: &str) -> impl Iterator<Item = &str> {
    words(value).filter(|word| word.len() >= 3 && !GENERIC_WORDS.contains(word))
}

fn shares_distinctive_word(category: &str, expertise: &str) -> bool {
    distinctive_words(category).any(|word| distinctive_words(expertise).any(|other| other == word))
}

/// Classify a bid category against the profile's expertise (0, 50, 75 or 100)
///
/// Checks run in order and the first hit wins:
/// exact match, then partial overlap, then related keywords.
pub fn category_match(category: &str, expertise: &[String]) -> u8 {
    let category = normalize(category);
    let expertise: Vec<String> = expertise.iter().map(|entry| normalize(entry)).collect();

    if !category.is_empty() && expertise.iter().any(|entry| *entry == category) {
        return 100;
    }

    if expertise.iter().any(|entry| {
        contains_either_way(&category, entry) || shares_distinctive_word(&category, entry)
    }) {
        return 75;
    }

    let related = RELATED_KEYWORDS.iter().any(|(primary, keywords)| {
        expertise.iter().any(|entry| contains_phrase(entry, primary))
            && keywords.iter().any(|keyword| contains_phrase(&category, keyword))
    });
    if related {
        return 50;
    }

    0
}

/// Whether the delivery location falls inside the declared service area
#[inline]
pub fn in_service_area(delivery_location: &str, reach: &[String]) -> bool {
    let delivery = normalize(delivery_location);
    reach
        .iter()
        .any(|place| contains_either_way(&delivery, &normalize(place)))
}

/// Classify a procuring entity against preferred agencies (30, 50, 75 or 100)
pub fn agency_relationship(procuring_entity: &str, preferred_agencies: &[String]) -> u8 {
    let entity = normalize(procuring_entity);
    let preferred: Vec<String> = preferred_agencies.iter().map(|a| normalize(a)).collect();

    if !entity.is_empty() && preferred.iter().any(|agency| *agency == entity) {
        return 100;
    }

    if preferred.iter().any(|agency| contains_either_way(&entity, agency)) {
        return 75;
    }

    if GOVERNMENT_KEYWORDS.iter().any(|keyword| contains_phrase(&entity, keyword)) {
        return 50;
    }

    30
}

/// Classify a procurement mode against preferred modes (40 to 100)
pub fn procurement_fit(procurement_mode: &str, preferred_modes: &[String]) -> u8 {
    let mode = normalize(procurement_mode);
    let preferred: Vec<String> = preferred_modes.iter().map(|m| normalize(m)).collect();

    if !mode.is_empty() && preferred.iter().any(|preferred| *preferred == mode) {
        return 100;
    }

    if preferred.iter().any(|preferred| contains_either_way(&mode, preferred)) {
        return 75;
    }

    if contains_phrase(&mode, "small value") {
        80
    } else if contains_phrase(&mode, "shopping") {
        70
    } else if contains_phrase(&mode, "public bidding") || contains_phrase(&mode, "competitive") {
        60
    } else {
        40
    }
}
