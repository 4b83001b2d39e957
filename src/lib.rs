pub mod cli;
pub mod config;
pub mod credential;
pub mod error;
pub mod image_file;
pub mod analyzer;
pub mod report;
pub mod export;
