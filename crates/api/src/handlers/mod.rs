pub mod dashboard;
pub mod passengers;
