pub mod loaders;
pub mod mark_table;
pub mod student;

pub use loaders::{read_assignments, read_rows, read_student_records};
pub use mark_table::{MarkTable, HEADER_LABEL};
pub use student::StudentRecord;
