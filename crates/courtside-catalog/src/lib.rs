//! Static catalog of infamous and iconic sports moments, plus the keyword
//! matcher that maps free text onto catalog entries.
//!
//! Matching is deliberately simple: lowercase substring search over each
//! entry's keyword list, results in catalog declaration order, no scoring.
//! Callers cap the result count.

use courtside_core::types::SportsClip;

mod entries;

pub use entries::CATALOG;

/// One entry in the compiled-in clip catalog.
#[derive(Debug)]
pub struct CatalogEntry {
    /// Stable catalog identity.
    pub key: &'static str,
    /// Lowercase keywords and phrases that trigger this entry.
    pub keywords: &'static [&'static str],
    pub title: &'static str,
    pub description: &'static str,
    pub youtube_id: &'static str,
    /// Optional start offset in seconds.
    pub start_secs: Option<u32>,
}

impl CatalogEntry {
    /// Materialize the entry as an owned clip for attachment to a turn.
    pub fn to_clip(&self) -> SportsClip {
        SportsClip {
            key: self.key.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            youtube_id: self.youtube_id.to_string(),
            timestamp: self.start_secs,
        }
    }
}

/// Match free text against the catalog.
///
/// An entry matches when any of its keywords occurs as a substring of the
/// lowercased input. Returns matches in catalog declaration order. Empty or
/// whitespace-only input yields no matches.
pub fn search(text: &str) -> Vec<SportsClip> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let needle = text.to_lowercase();

    CATALOG
        .iter()
        .filter(|entry| entry.keywords.iter().any(|kw| needle.contains(kw)))
        .map(CatalogEntry::to_clip)
        .collect()
}

/// Look up a single entry by its stable key.
pub fn get(key: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.key == key)
}

/// All keywords across all entries, sorted and deduplicated.
pub fn all_keywords() -> Vec<&'static str> {
    let mut keywords: Vec<&'static str> = CATALOG
        .iter()
        .flat_map(|entry| entry.keywords.iter().copied())
        .collect();
    keywords.sort_unstable();
    keywords.dedup();
    keywords
}
