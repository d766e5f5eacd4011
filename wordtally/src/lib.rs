// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod inputs;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, build_request, init_logging, render_output, run};
pub use crate::core::report::{NO_CONTENT_MESSAGE, render};
pub use crate::core::scanner::{analyze, analyze_counts};
pub use crate::core::stop_words::loader::{find_config_file, load_config, read_config_file};
pub use crate::core::stop_words::{StopWordRegistry, StopWordSet};
pub use crate::error::{AnalysisError, ConfigError};
pub use crate::inputs::{collect_inputs, walk_directory};
pub use crate::models::{AnalysisRequest, CollisionPolicy, Config, LetterCounts, Tally, WordCounts};
pub use crate::utils::parse_path_list;
