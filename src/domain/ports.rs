use crate::domain::model::{MovieCredits, MovieSummary};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote movie metadata catalogue (TMDB in production).
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// First page of movies released in `year`, most popular first.
    /// `None` when the source reports no result list at all.
    async fn discover_by_year(&self, year: &str) -> Result<Option<Vec<MovieSummary>>>;

    async fn movie_credits(&self, movie_id: i64) -> Result<MovieCredits>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn api_base_url(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}
