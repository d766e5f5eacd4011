// src/models/analysis_request.rs
use std::path::PathBuf;

use crate::models::CollisionPolicy;

/// One "analyze" invocation: which files, which stop words, and how to treat case.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub paths: Vec<PathBuf>,
    pub language: String,
    pub case_sensitive: bool,
    pub collision_policy: CollisionPolicy,
}

impl AnalysisRequest {
    #[inline]
    #[must_use]
    pub fn new<I, P>(paths: I, language: &str, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            language: language.to_owned(),
            case_sensitive,
            collision_policy: CollisionPolicy::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }
}
