pub use streamlog_entry::constants::*;
