// src/models/config.rs
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub default_language: Option<String>,
    /// Extra stop-word lists keyed by language name.
    pub languages: BTreeMap<String, Vec<String>>,
}
