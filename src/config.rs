/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Vessel lengths placed on each board, largest first so the crowded board
/// fills before only single-cell gaps remain.
pub const VESSEL_LENGTHS: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Random placement attempts allowed per board before the generator throws
/// the whole board away and starts over.
pub const PLACEMENT_ATTEMPTS: usize = 2000;
