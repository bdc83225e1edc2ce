pub mod home;
pub mod logo;
