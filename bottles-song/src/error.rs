/// Contract violations raised by an [`Inventory`](crate::Inventory).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WallError {
    #[error("no more bottles of beer to take")]
    OutOfStock,

    #[error("not enough beer to take {requested}, only {available} left")]
    InsufficientStock { requested: f64, available: u32 },

    #[error("cannot move {0} bottles of beer")]
    InvalidQuantity(f64),
}

/// Errors surfaced while writing verses.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SongError {
    #[error(transparent)]
    Wall(#[from] WallError),

    #[error("action description requested before the action was performed")]
    NotPerformed,

    #[error("cannot count down from {start} to {end}")]
    InvalidRange { start: u32, end: u32 },
}
