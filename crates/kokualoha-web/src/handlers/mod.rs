pub mod assistant;
pub mod contact;
pub mod home;
