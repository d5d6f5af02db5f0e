pub mod constants;

pub mod entry;
pub use entry::*;
