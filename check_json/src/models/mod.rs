pub mod document;
pub mod report;

pub use document::{Document, FieldValue};
pub use report::CheckMkReport;
