pub mod core;
pub mod emit;
pub mod encoding;
pub mod games;
