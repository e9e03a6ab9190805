// Library modules shared by the binary and integration tests
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod server;
pub mod services;
pub mod text_processing;

pub use text_processing::{normalize, Pipeline, UnitVocabulary};
