pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::tmdb::TmdbClient;
pub use api::build_router;
pub use config::{AppConfig, PartialConfig};
pub use crate::core::handler::MovieHandler;
pub use utils::error::{MovieError, Result};
