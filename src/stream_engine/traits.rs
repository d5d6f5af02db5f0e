mod reader;
pub use reader::StreamReader;

mod writer;
pub use writer::StreamWriter;
