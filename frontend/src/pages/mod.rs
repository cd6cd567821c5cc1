pub mod about;
pub mod community;
pub mod dashboard;
pub mod faq;
pub mod home;
pub mod insights;
pub mod not_found;
