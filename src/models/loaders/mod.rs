pub mod text_loader;

pub use text_loader::{read_assignments, read_rows, read_student_records};
