pub mod handler;
pub mod service;

pub use crate::domain::model::{CrewMember, MovieCredits, MovieResult, MovieSummary};
pub use crate::domain::ports::{ConfigProvider, MovieSource};
pub use crate::utils::error::Result;
