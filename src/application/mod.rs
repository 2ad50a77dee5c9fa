//! Application layer (use-cases, policies).
//!
//! This module is intended to orchestrate domain logic and define
//! app-specific policies without depending on UI frameworks or storage.

pub mod auth;
pub mod board;
