//! Document summarization: paragraphs in, joined summaries out

pub mod summarize;

pub use summarize::Summarizer;
