//! CLI library components for the place-name dictionary builder.

pub mod logging;
pub mod pipeline;
