//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (SQLite, configuration files).

pub mod app_config;
pub mod db;
