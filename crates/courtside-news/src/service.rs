//! News service: fetch per team, filter to important items, rank and cap.

use std::sync::Arc;

use tracing::warn;

use courtside_core::types::{NewsImportance, NewsItem, UserPreferences};

use crate::feed::NewsFeed;
use crate::filter::filter_important;

/// Aggregates the feed and the importance filter for the orchestrator.
///
/// Per-team fetch failures are logged and treated as zero items for that
/// team; this service never returns an error.
pub struct NewsService {
    feed: Arc<dyn NewsFeed>,
    max_items: usize,
}

impl NewsService {
    pub fn new(feed: Arc<dyn NewsFeed>, max_items: usize) -> Self {
        Self { feed, max_items }
    }

    /// Important news for the user's followed teams.
    ///
    /// Playoff items sort ahead of local items (stable within each bucket);
    /// the result is capped at the configured maximum.
    pub async fn important_news(&self, preferences: &UserPreferences) -> Vec<NewsItem> {
        let mut all_news = Vec::new();
        for team in &preferences.teams {
            match self.feed.fetch_team_news(team).await {
                Ok(items) => all_news.extend(items),
                Err(e) => {
                    warn!(team = %team.team_name, error = %e, "News fetch failed; skipping team");
                }
            }
        }

        let mut important = filter_important(all_news, &preferences.teams);
        important.sort_by_key(|item| match item.importance {
            NewsImportance::Playoff => 0,
            _ => 1,
        });
        important.truncate(self.max_items);
        important
    }

    /// Whether there is news worth proactively sharing, plus the items.
    ///
    /// Only playoff news triggers a proactive notification.
    pub async fn check_proactive_news(
        &self,
        preferences: &UserPreferences,
    ) -> (bool, Vec<NewsItem>) {
        let news = self.important_news(preferences).await;
        let should_notify = news
            .iter()
            .any(|item| item.importance == NewsImportance::Playoff);
        (should_notify, news)
    }
}
