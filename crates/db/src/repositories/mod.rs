//! Repository layer: one unit struct per table with static async methods
//! taking an explicit pool handle.

pub mod academic_record_repo;
pub mod activity_repo;
pub mod comment_repo;
pub mod email_request_repo;
pub mod hobby_repo;
pub mod image_repo;
pub mod social_item_repo;
pub mod work_record_repo;

pub use academic_record_repo::AcademicRecordRepo;
pub use activity_repo::ActivityRepo;
pub use comment_repo::CommentRepo;
pub use email_request_repo::{EmailRequestRepo, RATE_LIMIT_WINDOW_SECS};
pub use hobby_repo::HobbyRepo;
pub use image_repo::ImageRepo;
pub use social_item_repo::SocialItemRepo;
pub use work_record_repo::WorkRecordRepo;
