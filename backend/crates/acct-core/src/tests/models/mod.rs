mod profile;
mod user;
