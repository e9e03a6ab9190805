pub mod normalizer;

pub use normalizer::NormalizerService;
