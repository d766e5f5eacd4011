// src/core.rs
pub mod report;
pub mod scanner;
pub mod stop_words;
