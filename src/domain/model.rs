use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

pub const EDITING_DEPARTMENT: &str = "Editing";

/// One entry of a TMDB discover page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    /// Kept as the upstream number so `8` stays `8` and `8.5` stays `8.5`.
    #[serde(default = "zero_rating", deserialize_with = "rating_or_zero")]
    pub vote_average: Number,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn zero_rating() -> Number {
    Number::from(0)
}

fn rating_or_zero<'de, D>(deserializer: D) -> Result<Number, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Number>::deserialize(deserializer)?.unwrap_or_else(zero_rating))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoverPage {
    // TMDB may send `null`; treat it the same as an empty page.
    #[serde(default)]
    pub results: Option<Vec<MovieSummary>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    #[serde(default)]
    pub known_for_department: Option<String>,
}

impl CrewMember {
    pub fn is_editor(&self) -> bool {
        self.known_for_department.as_deref() == Some(EDITING_DEPARTMENT)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieCredits {
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

impl MovieCredits {
    /// Names of crew members credited under Editing, in credit order.
    pub fn editor_names(self) -> Vec<String> {
        self.crew
            .into_iter()
            .filter(CrewMember::is_editor)
            .map(|member| member.name)
            .collect()
    }
}

/// Response row for `GET /movies/:year`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieResult {
    pub title: String,
    pub release_date: String,
    pub vote_average: Number,
    pub editors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_page_accepts_null_results() {
        let page: DiscoverPage = serde_json::from_str(r#"{"page":1,"results":null}"#).unwrap();
        assert!(page.results.is_none());

        let page: DiscoverPage = serde_json::from_str(r#"{"page":1}"#).unwrap();
        assert!(page.results.is_none());
    }

    #[test]
    fn test_movie_summary_tolerates_missing_fields() {
        let movie: MovieSummary = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(movie.id, 7);
        assert_eq!(movie.title, "");
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.vote_average, Number::from(0));
    }

    #[test]
    fn test_movie_summary_treats_nulls_as_defaults() {
        let movie: MovieSummary = serde_json::from_str(
            r#"{"id": 7, "title": null, "release_date": null, "vote_average": null}"#,
        )
        .unwrap();
        assert_eq!(movie.title, "");
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.vote_average, Number::from(0));
    }

    #[test]
    fn test_vote_average_keeps_upstream_representation() {
        let page: DiscoverPage = serde_json::from_str(
            r#"{"results": [{"id": 1, "vote_average": 8}, {"id": 2, "vote_average": 7.25}]}"#,
        )
        .unwrap();
        let movies = page.results.unwrap();
        assert_eq!(serde_json::to_string(&movies[0].vote_average).unwrap(), "8");
        assert_eq!(serde_json::to_string(&movies[1].vote_average).unwrap(), "7.25");
    }

    #[test]
    fn test_editor_names_keeps_only_editing_in_order() {
        let credits: MovieCredits = serde_json::from_value(serde_json::json!({
            "id": 1,
            "crew": [
                {"name": "Editor B", "known_for_department": "Editing"},
                {"name": "Director", "known_for_department": "Directing"},
                {"name": "No Department"},
                {"name": "Editor A", "known_for_department": "Editing"}
            ]
        }))
        .unwrap();

        assert_eq!(credits.editor_names(), vec!["Editor B", "Editor A"]);
    }

    #[test]
    fn test_credits_without_crew_are_empty() {
        let credits: MovieCredits = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(credits.editor_names().is_empty());
    }
}
