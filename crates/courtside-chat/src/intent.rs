//! Turn intent classification.

/// Phrases that mark a message as a news request.
const NEWS_PHRASES: &[&str] = &[
    "news",
    "update",
    "happening",
    "latest",
    "recent",
    "what's new",
];

/// Whether a message is asking for news rather than lore.
///
/// Case-insensitive substring check, mirroring the catalog matcher's
/// intentionally simple matching.
pub fn is_news_request(message: &str) -> bool {
    let lower = message.to_lowercase();
    NEWS_PHRASES.iter().any(|phrase| lower.contains(phrase))
}
