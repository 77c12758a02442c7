//! Sports news: feed client, importance filtering, and location defaults.
//!
//! The feed is an external collaborator behind the [`NewsFeed`] trait; feed
//! failures always degrade to "no notable news" rather than surfacing errors
//! to a conversation turn.

pub mod feed;
pub mod filter;
pub mod locations;
pub mod service;

pub use feed::{EspnFeed, FeedError, NewsFeed, StaticFeed};
pub use filter::filter_important;
pub use locations::{available_locations, default_teams_for_location, LocationInfo};
pub use service::NewsService;
