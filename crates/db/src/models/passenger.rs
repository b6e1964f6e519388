//! Passenger entity model.

use pboard_core::render::TableRow;
use pboard_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `passengers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Passenger {
    pub id: DbId,
    pub name: String,
    pub location: String,
}

impl TableRow for Passenger {
    const COLUMNS: &'static [&'static str] = &["id", "name", "location"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.location.clone()]
    }
}
