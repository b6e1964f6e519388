//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod passenger_repo;

pub use passenger_repo::PassengerRepo;
