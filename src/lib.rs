// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod log;
pub mod report;
pub mod runner;
pub mod selector;

pub use error::{Result, ScrapeError};
