//! Domain types for Pragatix
//! Defines the core data structures and business objects used throughout the application.

pub mod error;
pub mod review;
pub mod user;

pub use error::*;
pub use review::*;
pub use user::*;
