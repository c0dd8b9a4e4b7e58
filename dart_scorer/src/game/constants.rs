//! Board geometry and rule limits shared by the scorer and the state machine.

use super::entities::Points;

/// Segment values clockwise from the top of the board.
pub const BOARD_ORDER: [u8; 20] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

/// Highest numbered segment.
pub const MAX_SEGMENT: u8 = 20;

/// The bull's face value. The outer bull scores it once, the inner bull twice.
pub const BULL: u8 = 25;

pub const MAX_THROWS_PER_ROUND: usize = 3;

/// Three triple twenties.
pub const MAX_ROUND_SCORE: Points = 180;
