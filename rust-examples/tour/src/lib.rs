//! Driver for the basics tour.
//!
//! The binary is a thin shell over this library: it parses the command
//! line into a [`TourConfig`], then hands stdout to [`run_tour`]. Tests
//! hand it a `Vec<u8>` instead.

pub mod config;
pub mod runner;

pub use config::TourConfig;
pub use runner::{list_topics, run_topic, run_tour};
