//! Domain types shared by the passenger board crates.
//!
//! Contains no I/O: the database layer lives in `pboard-db` and the HTTP
//! surface in `pboard-api`.

pub mod error;
pub mod render;
pub mod types;
