pub mod profile;
pub mod profile_edit;
pub mod user;
