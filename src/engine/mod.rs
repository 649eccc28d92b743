mod aggregator;
mod classifier;
mod normalizer;
mod pipeline;

pub use aggregator::Aggregator;
pub use classifier::Classifier;
pub use normalizer::Normalizer;
pub use pipeline::LedgerEngine;
