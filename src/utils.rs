mod parse_block_duration;
pub use parse_block_duration::parse_block_duration;

mod parse_count;
pub use parse_count::parse_count;

mod parse_range_bound;
pub use parse_range_bound::parse_range_bound;

mod parse_stream_id;
pub use parse_stream_id::parse_stream_id;
