//! News feed collaborator: trait seam plus the ESPN-style HTTP client.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use courtside_core::config::NewsConfig;
use courtside_core::types::{NewsImportance, NewsItem, TeamPreference};

/// Headline keywords that mark an article as playoff-relevant.
const PLAYOFF_KEYWORDS: &[&str] = &["playoff", "championship", "finals", "wildcard"];

/// Errors from the news feed collaborator.
///
/// These never abort a turn; callers treat any of them as zero news items.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Request(String),
    #[error("feed returned malformed payload: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Request(err.to_string())
    }
}

/// Fetch-by-team source of raw news items.
#[async_trait]
pub trait NewsFeed: Send + Sync {
    async fn fetch_team_news(&self, team: &TeamPreference) -> Result<Vec<NewsItem>, FeedError>;
}

/// ESPN-style HTTP news feed.
pub struct EspnFeed {
    http: reqwest::Client,
    base_url: String,
    articles_per_league: usize,
}

impl EspnFeed {
    pub fn new(config: &NewsConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            articles_per_league: config.articles_per_league,
        })
    }
}

#[async_trait]
impl NewsFeed for EspnFeed {
    async fn fetch_team_news(&self, team: &TeamPreference) -> Result<Vec<NewsItem>, FeedError> {
        let url = format!("{}/{}/news", self.base_url, team.league);
        let response = self.http.get(&url).send().await?;
        let response = response
            .error_for_status()
            .map_err(|e| FeedError::Request(e.to_string()))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| FeedError::Malformed(e.to_string()))?;

        let articles = body
            .get("articles")
            .and_then(Value::as_array)
            .ok_or_else(|| FeedError::Malformed("missing 'articles' array".to_string()))?;

        let items: Vec<NewsItem> = articles
            .iter()
            .take(self.articles_per_league)
            .filter_map(|article| article_to_item(article, team))
            .collect();

        debug!(
            team = %team.team_name,
            league = %team.league,
            count = items.len(),
            "Fetched team news"
        );
        Ok(items)
    }
}

/// Convert one feed article into a news item, if it mentions the team.
///
/// Classification: a playoff keyword in the headline marks the item
/// `playoff`; otherwise a local team's article is `local` and anything else
/// is `general`.
pub fn article_to_item(article: &Value, team: &TeamPreference) -> Option<NewsItem> {
    let headline = article.get("headline").and_then(Value::as_str).unwrap_or("");
    let description = article
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or("");

    let name = team.team_name.to_lowercase();
    let mentioned = headline.to_lowercase().contains(&name)
        || description.to_lowercase().contains(&name);
    if !mentioned {
        return None;
    }

    Some(NewsItem {
        title: headline.to_string(),
        description: description.to_string(),
        team: team.team_name.clone(),
        sport: team.sport.clone(),
        importance: classify_headline(headline, team.is_local),
        link: article
            .pointer("/links/web/href")
            .and_then(Value::as_str)
            .map(str::to_string),
        published: article
            .get("published")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

/// Classify an article headline into an importance bucket.
pub fn classify_headline(headline: &str, is_local_team: bool) -> NewsImportance {
    let lower = headline.to_lowercase();
    if PLAYOFF_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        NewsImportance::Playoff
    } else if is_local_team {
        NewsImportance::Local
    } else {
        NewsImportance::General
    }
}

/// In-memory feed that returns a fixed set of items per team name.
///
/// Used by orchestrator and endpoint tests; `failing()` simulates an
/// unavailable feed.
#[derive(Default)]
pub struct StaticFeed {
    items: Vec<NewsItem>,
    fail: bool,
}

impl StaticFeed {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self { items, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            items: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl NewsFeed for StaticFeed {
    async fn fetch_team_news(&self, team: &TeamPreference) -> Result<Vec<NewsItem>, FeedError> {
        if self.fail {
            return Err(FeedError::Request("feed unavailable".to_string()));
        }
        Ok(self
            .items
            .iter()
            .filter(|item| item.team.eq_ignore_ascii_case(&team.team_name))
            .cloned()
            .collect())
    }
}
