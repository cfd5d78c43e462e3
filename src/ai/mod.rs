//! Text generation: the generator capability and its hosted implementation

pub mod client;
pub mod generator;

// Re-export main types for convenience
pub use client::InferenceClient;
pub use generator::{
    EstimatingCounter, Generator, TASK_PREFIX, TokenCounter, build_model_input, estimate_tokens,
};
