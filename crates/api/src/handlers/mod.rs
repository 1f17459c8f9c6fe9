pub mod comments;
pub mod contact;
pub mod records;
