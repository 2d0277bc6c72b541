use crate::models::StudentCandidate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of tags returned per candidate
pub const MAX_TAGS: usize = 5;

/// Characters kept from each of cover letter and bio
const MAX_TEXT_CHARS: usize = 1000;

/// Keyword checklist, in output order
pub const TAG_VOCABULARY: [&str; 20] = [
    "food",
    "street food",
    "history",
    "culture",
    "art",
    "museums",
    "architecture",
    "nightlife",
    "shopping",
    "nature",
    "hiking",
    "photography",
    "music",
    "sports",
    "adventure",
    "local markets",
    "walking tours",
    "budget-friendly",
    "kid-friendly",
    "coffee",
];

/// One whole-word pattern per vocabulary entry
///
/// Hyphens bound a word, so "food-obsessed" still tags "food", and a space
/// inside a phrase also matches a hyphen ("street-food").
static TAG_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    TAG_VOCABULARY
        .iter()
        .map(|keyword| {
            let phrase = regex::escape(keyword).replace(' ', "[ -]");
            let pattern = format!(r"(?:^|[^\p{{L}}\p{{N}}]){}(?:$|[^\p{{L}}\p{{N}}])", phrase);
            (*keyword, Regex::new(&pattern).expect("static tag pattern"))
        })
        .collect()
});

static STRIP_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s-]").expect("static punctuation pattern"));

static COLLAPSE_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static whitespace pattern"));

/// Lowercase, drop punctuation except hyphens, collapse whitespace
pub fn normalize_text(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped = STRIP_PUNCTUATION.replace_all(&lowered, " ");
    COLLAPSE_WHITESPACE
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Extract up to five keyword tags from a candidate's cover letter and bio
///
/// Tags come back in checklist order, not in the order they appear in the
/// text, and each keyword appears at most once.
pub fn extract_tags(candidate: &StudentCandidate) -> Vec<String> {
    let cover_letter = truncate_chars(candidate.cover_letter.as_deref().unwrap_or(""), MAX_TEXT_CHARS);
    let bio = truncate_chars(candidate.bio.as_deref().unwrap_or(""), MAX_TEXT_CHARS);

    let text = normalize_text(&format!("{} {}", cover_letter, bio));
    if text.is_empty() {
        return Vec::new();
    }

    TAG_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(&text))
        .map(|(keyword, _)| keyword.to_string())
        .take(MAX_TAGS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate_with(bio: Option<&str>, cover_letter: Option<&str>) -> StudentCandidate {
        StudentCandidate {
            id: "s1".to_string(),
            name: None,
            nationality: None,
            languages: vec![],
            interests: vec![],
            institute: None,
            trips_hosted: 0,
            average_rating: None,
            no_show_count: 0,
            reliability_badge: None,
            acceptance_rate: None,
            bio: bio.map(str::to_string),
            cover_letter: cover_letter.map(str::to_string),
            price_range: None,
        }
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("Hello,   WORLD!"), "hello world");
        assert_eq!(normalize_text("Kid-Friendly tours; food."), "kid-friendly tours food");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn test_no_text_no_tags() {
        assert!(extract_tags(&candidate_with(None, None)).is_empty());
    }

    #[test]
    fn test_tags_follow_checklist_order() {
        let candidate = candidate_with(
            Some("I love photography and HISTORY."),
            Some("Food lover, happy to show you the best coffee!"),
        );

        assert_eq!(extract_tags(&candidate), vec!["food", "history", "photography", "coffee"]);
    }

    #[test]
    fn test_whole_word_only() {
        let candidate = candidate_with(Some("Seafood and artistic cafes, smart shopping"), None);

        assert_eq!(extract_tags(&candidate), vec!["shopping"]);
    }

    #[test]
    fn test_hyphenated_phrase() {
        let candidate = candidate_with(Some("Very kid-friendly and budget-friendly walks"), None);

        assert_eq!(extract_tags(&candidate), vec!["budget-friendly", "kid-friendly"]);
    }

    #[test]
    fn test_keywords_inside_hyphenated_compounds() {
        let candidate = candidate_with(Some("street-food lover"), None);
        assert_eq!(extract_tags(&candidate), vec!["food", "street food"]);

        let candidate = candidate_with(
            Some("Food-obsessed art-loving history-buff, street-food expert"),
            None,
        );
        assert_eq!(extract_tags(&candidate), vec!["food", "street food", "history", "art"]);
    }

    #[test]
    fn test_every_keyword_tags_itself() {
        for keyword in TAG_VOCABULARY {
            let candidate = candidate_with(Some(keyword), None);
            assert!(
                extract_tags(&candidate).contains(&keyword.to_string()),
                "keyword {} not tagged",
                keyword
            );
        }
        assert_eq!(TAG_PATTERNS.len(), TAG_VOCABULARY.len());
    }

    #[test]
    fn test_capped_at_five_and_unique() {
        let candidate = candidate_with(
            Some("food food history culture art museums architecture nightlife music"),
            Some("history history"),
        );

        let tags = extract_tags(&candidate);

        assert_eq!(tags, vec!["food", "history", "culture", "art", "museums"]);
    }

    #[test]
    fn test_long_text_is_truncated() {
        let padding = "x".repeat(MAX_TEXT_CHARS);
        let candidate = candidate_with(Some(&format!("{} hiking", padding)), None);

        assert!(extract_tags(&candidate).is_empty());
    }
}
