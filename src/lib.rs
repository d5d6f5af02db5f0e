pub mod stream_engine;
pub use stream_engine::*;

pub mod cli;

pub mod utils;
