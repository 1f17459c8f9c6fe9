//! Domain model structs and DTOs.
//!
//! Each submodule contains some of:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for submissions (camelCase on the wire)
//! - A `Serialize` view DTO shaping what listings return

pub mod academic_record;
pub mod activity;
pub mod comment;
pub mod email_request;
pub mod hobby;
pub mod image;
pub mod social_item;
pub mod work_record;
