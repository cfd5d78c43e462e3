pub mod budget;
pub mod config;
pub mod document;
pub mod models;
