pub mod cleanup;
pub mod lexicon;
pub mod pipeline;
pub mod readers;
pub mod rules;
pub mod units;
pub mod width;

pub use pipeline::{normalize, Pass, Pipeline};
pub use units::{UnitVocabulary, DEFAULT_UNITS};
