pub mod file_reader;
pub mod file_writer;

pub use file_reader::{FileReader, normalize_lines};
pub use file_writer::FileWriter;
