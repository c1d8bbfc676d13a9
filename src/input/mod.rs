mod document;
mod loader;
mod snapshot;

pub use document::{estimate_document, override_student_count, DemandDocument};
pub use loader::load_document;
pub use snapshot::{count_students, snapshot_to_document};
