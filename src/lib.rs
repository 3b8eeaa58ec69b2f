pub mod config;
pub mod error;
pub mod logger;
pub mod macros;
pub mod model;
pub mod repl;
pub mod service;
pub mod time;

pub use service::{build_timeline, merge_chronologically, reconstruct, select_job};
