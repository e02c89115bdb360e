//! HTTP routes for the year lookup.

use crate::core::handler::MovieHandler;
use crate::core::{MovieResult, MovieSource};
use crate::utils::error::{MovieError, Result};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router<S: MovieSource + 'static>(handler: Arc<MovieHandler<S>>) -> Router {
    Router::new()
        .route("/movies", get(missing_year))
        .route("/movies/", get(missing_year))
        .route("/movies/:year", get(movies_by_year::<S>))
        .route("/movies/:year/", get(movies_by_year::<S>))
        .with_state(handler)
        .layer(TraceLayer::new_for_http())
}

/// GET /movies/:year
async fn movies_by_year<S: MovieSource + 'static>(
    State(handler): State<Arc<MovieHandler<S>>>,
    year: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<MovieResult>>> {
    // 無法解碼的路徑片段 (例如非 UTF-8) 視同年份格式錯誤
    let Path(year) = year.map_err(|rejection| MovieError::InvalidYear {
        value: rejection.body_text(),
    })?;
    handler.movies_for_year(&year).await.map(Json)
}

/// GET /movies without a year segment
async fn missing_year() -> MovieError {
    MovieError::InvalidYear {
        value: String::new(),
    }
}
