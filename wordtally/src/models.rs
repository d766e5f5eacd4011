// src/models.rs
mod analysis_request;
mod collision_policy;
mod config;
mod tally;

pub use analysis_request::AnalysisRequest;
pub use collision_policy::CollisionPolicy;
pub use config::Config;
pub use tally::{LetterCounts, Tally, WordCounts};
