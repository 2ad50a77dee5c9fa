//! Repository implementations for data access in Pragatix.
//!
//! Provides database operations for the persisted user collection.

mod user;

pub use user::UserRepository;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub(super) type DbConn = Arc<Mutex<Connection>>;
