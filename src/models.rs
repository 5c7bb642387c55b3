pub mod course;
pub mod term;

pub use course::{Course, CourseAttributes, FinalExam, Meeting, Units};
pub use term::{Season, Term};
