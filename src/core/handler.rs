use crate::core::service::MovieService;
use crate::core::{MovieResult, MovieSource, MovieSummary, Result};
use crate::utils::date::format_release_date;
use crate::utils::error::MovieError;
use crate::utils::validation::validate_year;
use futures::future::join_all;

/// Year lookup pipeline: validate, discover, enrich every movie concurrently.
pub struct MovieHandler<S: MovieSource> {
    service: MovieService<S>,
}

impl<S: MovieSource> MovieHandler<S> {
    pub fn new(source: S) -> Self {
        Self {
            service: MovieService::new(source),
        }
    }

    pub async fn movies_for_year(&self, year: &str) -> Result<Vec<MovieResult>> {
        // 驗證年份格式，失敗時不呼叫外部 API
        validate_year(year)?;

        let movies = self.service.movies_by_year(year).await?.unwrap_or_default();
        if movies.is_empty() {
            return Err(MovieError::NoMoviesFound {
                year: year.to_string(),
            });
        }

        tracing::debug!("Enriching {} movies for {}", movies.len(), year);

        // join_all keeps input order regardless of completion order
        let results = join_all(movies.into_iter().map(|movie| self.enrich(movie))).await;

        tracing::info!("Returning {} movies for {}", results.len(), year);
        Ok(results)
    }

    async fn enrich(&self, movie: MovieSummary) -> MovieResult {
        let editors = self.service.editors(movie.id).await;

        MovieResult {
            release_date: format_release_date(movie.release_date.as_deref()),
            title: movie.title,
            vote_average: movie.vote_average,
            editors,
        }
    }
}
