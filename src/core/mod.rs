pub mod config;
pub mod coord;
pub mod error;
pub mod line;
pub mod pattern;
