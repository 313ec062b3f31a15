//! User Repository (cache-aside over the relational store) and the
//! Account Service that drives it.

pub mod error;
pub mod repository;
pub mod service;

pub use error::{Result, UserError};
pub use repository::UserRepository;
pub use service::AccountService;
