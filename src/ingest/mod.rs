pub mod gate;
pub mod loader;
pub mod schema;

pub use gate::{validate_document, GateIssue};
pub use loader::load_report;
