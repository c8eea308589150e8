//! CLI library components for the traffic-statistics normalizer.

pub mod cli;
pub mod commands;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod stats;
pub mod summary;
pub mod types;
