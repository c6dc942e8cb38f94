pub mod csv_writer;
pub mod mark_generator;

pub use csv_writer::CsvWriter;
pub use mark_generator::MarkGenerator;
