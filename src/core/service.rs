use crate::core::{MovieSource, MovieSummary, Result};

/// Wraps a [`MovieSource`] with the failure policy of the service:
/// discovery errors propagate, credit lookups degrade to an empty list.
pub struct MovieService<S: MovieSource> {
    source: S,
}

impl<S: MovieSource> MovieService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn movies_by_year(&self, year: &str) -> Result<Option<Vec<MovieSummary>>> {
        self.source.discover_by_year(year).await.map_err(|e| {
            tracing::error!("Error fetching movies for {}: {}", year, e);
            e
        })
    }

    /// Editor names for one movie. Never fails: a lookup error yields `[]`.
    pub async fn editors(&self, movie_id: i64) -> Vec<String> {
        match self.source.movie_credits(movie_id).await {
            Ok(credits) => credits.editor_names(),
            Err(e) => {
                tracing::warn!("Error fetching credits for movie {}: {}", movie_id, e);
                Vec::new()
            }
        }
    }
}
