//! # JSON Storage Module
//!
//! File-backed implementation of the session slot: one JSON document holding
//! the ordered array of pending session records.
//!
//! ## File Format
//!
//! `sessions.json` contains a single serialized array:
//! ```json
//! [
//!   {"court":"Court A","date":"2025-10-06","startTime":"14:00","endTime":"15:00","credits":10}
//! ]
//! ```
//!
//! An absent or unparsable file reads as the empty array. There is no schema
//! version field and no migration logic.

pub mod connection;
pub mod session_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use session_repository::SessionRepository;
