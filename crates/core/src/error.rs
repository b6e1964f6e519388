#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Row {row} has {actual} cells, expected {expected}")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
