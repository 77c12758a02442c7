//! Importance filter: decides which raw news items are worth surfacing.

use courtside_core::types::{NewsImportance, NewsItem, TeamPreference};

/// Select items meeting the "important" policy.
///
/// An item passes if its importance is `playoff`, or its importance is
/// `local` and its team is among the locality-flagged followed teams
/// (case-insensitive name match). Everything else, including unrecognized
/// importance values, is dropped. Input order is preserved; no deduplication
/// happens here.
pub fn filter_important(items: Vec<NewsItem>, followed: &[TeamPreference]) -> Vec<NewsItem> {
    let local_teams: Vec<String> = followed
        .iter()
        .filter(|team| team.is_local)
        .map(|team| team.team_name.to_lowercase())
        .collect();

    items
        .into_iter()
        .filter(|item| match item.importance {
            NewsImportance::Playoff => true,
            NewsImportance::Local => local_teams.contains(&item.team.to_lowercase()),
            NewsImportance::General | NewsImportance::Unknown => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(team: &str, importance: NewsImportance) -> NewsItem {
        NewsItem {
            title: format!("{} headline", team),
            description: String::new(),
            team: team.to_string(),
            sport: "baseball".to_string(),
            importance,
            link: None,
            published: None,
        }
    }

    fn team(name: &str, is_local: bool) -> TeamPreference {
        TeamPreference {
            team_name: name.to_string(),
            team_id: "1".to_string(),
            sport: "baseball".to_string(),
            league: "mlb".to_string(),
            is_local,
        }
    }

    #[test]
    fn test_playoff_always_passes() {
        let items = vec![item("Anywhere FC", NewsImportance::Playoff)];
        let out = filter_important(items, &[]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_local_requires_locality_flagged_membership() {
        let followed = vec![team("Seattle Mariners", true), team("New York Yankees", false)];

        // Local item for a locality-flagged team passes.
        let kept = filter_important(
            vec![item("Seattle Mariners", NewsImportance::Local)],
            &followed,
        );
        assert_eq!(kept.len(), 1);

        // Local item for a followed-but-not-local team is dropped.
        let dropped = filter_important(
            vec![item("New York Yankees", NewsImportance::Local)],
            &followed,
        );
        assert!(dropped.is_empty());

        // Local item for an unfollowed team is dropped.
        let unfollowed = filter_important(
            vec![item("Boston Red Sox", NewsImportance::Local)],
            &followed,
        );
        assert!(unfollowed.is_empty());
    }

    #[test]
    fn test_local_match_is_case_insensitive() {
        let followed = vec![team("Seattle Mariners", true)];
        let kept = filter_important(
            vec![item("SEATTLE MARINERS", NewsImportance::Local)],
            &followed,
        );
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_general_and_unknown_are_dropped() {
        let followed = vec![team("Seattle Mariners", true)];
        let items = vec![
            item("Seattle Mariners", NewsImportance::General),
            item("Seattle Mariners", NewsImportance::Unknown),
        ];
        assert!(filter_important(items, &followed).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent_on_playoff_sequence() {
        let items = vec![
            item("A", NewsImportance::Playoff),
            item("B", NewsImportance::Playoff),
            item("C", NewsImportance::Playoff),
        ];
        let once = filter_important(items, &[]);
        let titles: Vec<String> = once.iter().map(|i| i.title.clone()).collect();
        let twice = filter_important(once, &[]);
        let titles_again: Vec<String> = twice.iter().map(|i| i.title.clone()).collect();
        assert_eq!(titles, titles_again);
        assert_eq!(twice.len(), 3);
    }

    #[test]
    fn test_input_order_preserved() {
        let followed = vec![team("Home", true)];
        let items = vec![
            item("X", NewsImportance::Playoff),
            item("Home", NewsImportance::Local),
            item("Y", NewsImportance::Playoff),
        ];
        let out = filter_important(items, &followed);
        let titles: Vec<&str> = out.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["X headline", "Home headline", "Y headline"]);
    }

    #[test]
    fn test_empty_input_yields_empty() {
        assert!(filter_important(Vec::new(), &[team("Home", true)]).is_empty());
    }
}
