//! fibseq library — application logic for the sequence tool.

pub mod app;
pub mod config;
pub mod errors;
pub mod interactive;
