//! Static location → default-teams table for onboarding.

use serde::Serialize;

use courtside_core::types::{TeamPreference, UserPreferences};

/// A supported location and its covered teams, for the onboarding UI.
#[derive(Debug, Clone, Serialize)]
pub struct LocationInfo {
    pub name: String,
    pub teams: Vec<String>,
}

/// Default team preferences for a location.
///
/// Unknown locations return the location with an empty team list.
pub fn default_teams_for_location(location: &str) -> UserPreferences {
    let teams = if location.eq_ignore_ascii_case("seattle") {
        vec![
            TeamPreference {
                team_name: "Seattle Mariners".to_string(),
                team_id: "12".to_string(),
                sport: "baseball".to_string(),
                league: "mlb".to_string(),
                is_local: true,
            },
            TeamPreference {
                team_name: "Seattle Seahawks".to_string(),
                team_id: "26".to_string(),
                sport: "football".to_string(),
                league: "nfl".to_string(),
                is_local: true,
            },
        ]
    } else {
        Vec::new()
    };

    UserPreferences {
        location: location.to_string(),
        teams,
    }
}

/// Locations with configured team coverage.
pub fn available_locations() -> Vec<LocationInfo> {
    vec![LocationInfo {
        name: "Seattle".to_string(),
        teams: vec![
            "Seattle Mariners (MLB)".to_string(),
            "Seattle Seahawks (NFL)".to_string(),
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seattle_defaults() {
        let prefs = default_teams_for_location("Seattle");
        assert_eq!(prefs.teams.len(), 2);
        assert!(prefs.teams.iter().all(|t| t.is_local));
        assert_eq!(prefs.teams[0].team_name, "Seattle Mariners");
        assert_eq!(prefs.teams[1].league, "nfl");
    }

    #[test]
    fn test_location_match_ignores_case() {
        assert_eq!(default_teams_for_location("seattle").teams.len(), 2);
        assert_eq!(default_teams_for_location("SEATTLE").teams.len(), 2);
    }

    #[test]
    fn test_unknown_location_is_empty() {
        let prefs = default_teams_for_location("Duluth");
        assert_eq!(prefs.location, "Duluth");
        assert!(prefs.teams.is_empty());
    }

    #[test]
    fn test_available_locations_listed() {
        let locations = available_locations();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].name, "Seattle");
    }
}
