//! Value Objects

pub mod email;
pub mod subject_id;

pub use email::Email;
pub use subject_id::SubjectId;
