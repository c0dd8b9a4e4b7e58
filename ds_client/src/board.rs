//! Dartboard hit-testing for touch input.
//!
//! Coordinates are millimetres from the centre of the bull, `x` to the
//! right and `y` up, on a regulation board.

use dart_scorer::{
    BOARD_ORDER, BULL,
    entities::{Multiplier, Throw},
    functional::create_throw,
};

pub const INNER_BULL_RADIUS: f64 = 6.35;
pub const OUTER_BULL_RADIUS: f64 = 15.9;
pub const TRIPLE_INNER_RADIUS: f64 = 99.0;
pub const TRIPLE_OUTER_RADIUS: f64 = 107.0;
pub const DOUBLE_INNER_RADIUS: f64 = 162.0;
pub const DOUBLE_OUTER_RADIUS: f64 = 170.0;

const SEGMENT_DEGREES: f64 = 360.0 / BOARD_ORDER.len() as f64;

/// The dart a hit at `(x, y)` scores, or `None` off the scoring area.
///
/// Points exactly on a wire count for the inner ring.
#[must_use]
pub fn hit_test(x: f64, y: f64) -> Option<Throw> {
    let radius = x.hypot(y);
    if !radius.is_finite() {
        return None;
    }

    if radius <= INNER_BULL_RADIUS {
        return Some(create_throw(BULL, Multiplier::Double));
    }
    if radius <= OUTER_BULL_RADIUS {
        return Some(create_throw(BULL, Multiplier::Single));
    }
    if radius > DOUBLE_OUTER_RADIUS {
        return None;
    }

    let multiplier = if (TRIPLE_INNER_RADIUS..=TRIPLE_OUTER_RADIUS).contains(&radius) {
        Multiplier::Triple
    } else if radius >= DOUBLE_INNER_RADIUS {
        Multiplier::Double
    } else {
        Multiplier::Single
    };
    Some(create_throw(segment_at(x, y), multiplier))
}

/// Segment number under the angle of `(x, y)`, with 20 straight up and the
/// numbers running clockwise.
#[must_use]
pub fn segment_at(x: f64, y: f64) -> u8 {
    let degrees = x.atan2(y).to_degrees().rem_euclid(360.0);
    let idx = ((degrees + SEGMENT_DEGREES / 2.0) / SEGMENT_DEGREES) as usize % BOARD_ORDER.len();
    BOARD_ORDER[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Segment Tests ===

    #[test]
    fn test_cardinal_segments() {
        assert_eq!(segment_at(0.0, 50.0), 20);
        assert_eq!(segment_at(50.0, 0.0), 6);
        assert_eq!(segment_at(0.0, -50.0), 3);
        assert_eq!(segment_at(-50.0, 0.0), 11);
    }

    #[test]
    fn test_segments_run_clockwise() {
        for (i, &expected) in BOARD_ORDER.iter().enumerate() {
            let radians = (i as f64 * SEGMENT_DEGREES).to_radians();
            let (x, y) = (radians.sin() * 130.0, radians.cos() * 130.0);
            assert_eq!(segment_at(x, y), expected, "segment {i}");
        }
    }

    #[test]
    fn test_segment_edges() {
        // 20 spans -9..9 degrees; just past 9 is 1, just before -9 is 5.
        let just_right = 9.5_f64.to_radians();
        assert_eq!(segment_at(just_right.sin(), just_right.cos()), 1);
        let just_left = (-9.5_f64).to_radians();
        assert_eq!(segment_at(just_left.sin(), just_left.cos()), 5);
    }

    // === Ring Tests ===

    #[test]
    fn test_bulls() {
        assert_eq!(hit_test(0.0, 0.0), Some(create_throw(25, Multiplier::Double)));
        assert_eq!(hit_test(3.0, -3.0), Some(create_throw(25, Multiplier::Double)));
        assert_eq!(hit_test(0.0, 10.0), Some(create_throw(25, Multiplier::Single)));
    }

    #[test]
    fn test_rings_on_twenty() {
        assert_eq!(hit_test(0.0, 50.0), Some(create_throw(20, Multiplier::Single)));
        assert_eq!(hit_test(0.0, 103.0), Some(create_throw(20, Multiplier::Triple)));
        assert_eq!(hit_test(0.0, 130.0), Some(create_throw(20, Multiplier::Single)));
        assert_eq!(hit_test(0.0, 166.0), Some(create_throw(20, Multiplier::Double)));
    }

    #[test]
    fn test_miss_outside_doubles() {
        assert_eq!(hit_test(0.0, 171.0), None);
        assert_eq!(hit_test(-200.0, 200.0), None);
        assert_eq!(hit_test(f64::NAN, 0.0), None);
    }

    #[test]
    fn test_every_hit_is_valid() {
        for step in 0..360 {
            let radians = f64::from(step).to_radians();
            for radius in [5.0, 12.0, 60.0, 100.0, 140.0, 165.0] {
                if let Some(throw) = hit_test(radians.sin() * radius, radians.cos() * radius) {
                    assert!(dart_scorer::functional::validate_throw(&throw));
                }
            }
        }
    }
}
