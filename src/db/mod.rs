//! Database module for SQLite operations.
//!
//! This module provides:
//! - Connection settings and per-operation connections
//! - Database initialization, pragmas and schema creation
//! - Repository layer for student and report card queries

pub mod connection;
pub mod migrations;
pub mod repo;

pub use connection::Database;
pub use migrations::init_db;
pub use repo::Repository;
