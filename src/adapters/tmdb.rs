use crate::domain::model::{DiscoverPage, MovieCredits, MovieSummary};
use crate::domain::ports::{ConfigProvider, MovieSource};
use crate::utils::error::{MovieError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

const DISCOVER_LANGUAGE: &str = "en-US";
const DISCOVER_PAGE: &str = "1";
const DISCOVER_SORT: &str = "popularity.desc";

/// TMDB v3 REST client authenticated with an `api_key` query parameter.
pub struct TmdbClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> TmdbClient<C> {
    pub fn new(config: C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url().trim_end_matches('/'), path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        tracing::debug!("Making TMDB request to: {}", path);

        let response = self
            .client
            .get(self.endpoint(path))
            .query(&[("api_key", self.config.api_key())])
            .query(params)
            .send()
            .await?;

        tracing::debug!("TMDB response status for {}: {}", path, response.status());

        if !response.status().is_success() {
            // 不回傳完整 URL，避免 api_key 出現在日誌
            return Err(MovieError::UpstreamStatus {
                status: response.status().as_u16(),
                endpoint: path.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl<C: ConfigProvider> MovieSource for TmdbClient<C> {
    async fn discover_by_year(&self, year: &str) -> Result<Option<Vec<MovieSummary>>> {
        let page: DiscoverPage = self
            .get_json(
                "/discover/movie",
                &[
                    ("language", DISCOVER_LANGUAGE),
                    ("page", DISCOVER_PAGE),
                    ("primary_release_year", year),
                    ("sort_by", DISCOVER_SORT),
                ],
            )
            .await?;
        Ok(page.results)
    }

    async fn movie_credits(&self, movie_id: i64) -> Result<MovieCredits> {
        self.get_json(&format!("/movie/{}/credits", movie_id), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct MockConfig {
        base_url: String,
    }

    impl ConfigProvider for MockConfig {
        fn api_key(&self) -> &str {
            "test-key"
        }

        fn api_base_url(&self) -> &str {
            &self.base_url
        }

        fn timeout_seconds(&self) -> Option<u64> {
            Some(5)
        }
    }

    fn client_for(server: &MockServer) -> TmdbClient<MockConfig> {
        TmdbClient::new(MockConfig {
            base_url: server.base_url(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_discover_sends_expected_query() {
        let server = MockServer::start();
        let discover_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/discover/movie")
                .query_param("api_key", "test-key")
                .query_param("language", "en-US")
                .query_param("page", "1")
                .query_param("primary_release_year", "2019")
                .query_param("sort_by", "popularity.desc");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "page": 1,
                    "results": [
                        {"id": 10, "title": "First", "release_date": "2019-05-01", "vote_average": 7.1},
                        {"id": 11, "title": "Second", "release_date": "", "vote_average": 6.0}
                    ]
                }));
        });

        let movies = client_for(&server)
            .discover_by_year("2019")
            .await
            .unwrap()
            .unwrap();

        discover_mock.assert();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, 10);
        assert_eq!(movies[0].release_date.as_deref(), Some("2019-05-01"));
        assert_eq!(movies[1].title, "Second");
    }

    #[tokio::test]
    async fn test_discover_propagates_http_errors() {
        let server = MockServer::start();
        let discover_mock = server.mock(|when, then| {
            when.method(GET).path("/discover/movie");
            then.status(401)
                .json_body(serde_json::json!({"status_message": "Invalid API key"}));
        });

        let result = client_for(&server).discover_by_year("2019").await;

        discover_mock.assert();
        match result {
            Err(MovieError::UpstreamStatus { status, endpoint }) => {
                assert_eq!(status, 401);
                assert_eq!(endpoint, "/discover/movie");
            }
            other => panic!("expected UpstreamStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_discover_rejects_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/discover/movie");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("not json");
        });

        let result = client_for(&server).discover_by_year("2019").await;
        assert!(matches!(result, Err(MovieError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_movie_credits_path_and_key() {
        let server = MockServer::start();
        let credits_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/movie/42/credits")
                .query_param("api_key", "test-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": 42,
                    "cast": [],
                    "crew": [
                        {"name": "Cutter", "known_for_department": "Editing"},
                        {"name": "Shooter", "known_for_department": "Camera"}
                    ]
                }));
        });

        let credits = client_for(&server).movie_credits(42).await.unwrap();

        credits_mock.assert();
        assert_eq!(credits.crew.len(), 2);
        assert_eq!(credits.editor_names(), vec!["Cutter"]);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = TmdbClient::new(MockConfig {
            base_url: "http://localhost:9000/3/".to_string(),
        })
        .unwrap();
        assert_eq!(
            client.endpoint("/discover/movie"),
            "http://localhost:9000/3/discover/movie"
        );
    }
}
