//! Move rejection reasons.

/// Why a move was not applied.
///
/// Every variant is an expected, recoverable rejection. The engine state is
/// left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside `[0, size)`.
    #[display("Position ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
    },

    /// The target intersection already holds a stone.
    #[display("Position ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Why a serialized board or game state was refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum SnapshotError {
    /// `size * size` does not fit in memory addressing.
    #[display("Board size {size} is too large")]
    SizeTooLarge {
        /// Declared side length.
        size: usize,
    },

    /// The cell list does not cover the declared grid.
    #[display("Board of size {size} needs {expected} cells, found {found}")]
    CellCount {
        /// Declared side length.
        size: usize,
        /// `size * size`.
        expected: usize,
        /// Cells actually present.
        found: usize,
    },

    /// The move counter disagrees with the stones on the board.
    #[display("Move count {move_count} does not match {occupied} stones on the board")]
    MoveCount {
        /// Declared move count.
        move_count: usize,
        /// Stones on the board.
        occupied: usize,
    },

    /// Black moves first, so Black has as many stones as White or one more.
    #[display("Stone counts are unbalanced: {black} black, {white} white")]
    Unbalanced {
        /// Black stones.
        black: usize,
        /// White stones.
        white: usize,
    },
}
