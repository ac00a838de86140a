//! Rotation to sector resolution
//!
//! Sector 0 is drawn at the top of the wheel and numbering proceeds
//! clockwise. The wheel turns under a fixed pointer, so clockwise rotation
//! brings lower-numbered sectors under it:
//!
//! ```text
//! rotation (8 sectors)   0   1..=45   46..=90   180   360
//! landed sector          0   7        6         4     0
//! ```

use crate::normalize_degrees;

/// Angular width of one sector, 0 for an empty wheel
#[inline]
pub fn sector_angle(sector_count: usize) -> f64 {
    if sector_count == 0 {
        return 0.0;
    }
    360.0 / sector_count as f64
}

/// Rotation reduced to [0, 360)
#[inline]
pub fn normalize_rotation(rotation: f64) -> f64 {
    normalize_degrees(rotation)
}

/// Sector under the pointer, falling back to 0 for an empty wheel
///
/// Kept for callers that expect an index unconditionally; prefer
/// [`safe_landing_sector`], which refuses to invent a sector.
pub fn landing_sector(rotation: f64, sector_count: usize) -> usize {
    safe_landing_sector(rotation, sector_count).unwrap_or(0)
}

/// Sector under the pointer, or `None` when there are no sectors
pub fn safe_landing_sector(rotation: f64, sector_count: usize) -> Option<usize> {
    if sector_count == 0 {
        return None;
    }
    let normalized = normalize_rotation(rotation);
    // (360 - r) / (360 / n), multiplied out so exact boundaries stay exact
    let raw = ((360.0 - normalized) * sector_count as f64 / 360.0).floor();
    // NaN and negative casts saturate to 0
    Some(raw as usize % sector_count)
}

/// A rotation in [0, 360) that lands in the middle of sector `index`
pub fn sector_rotation(index: usize, sector_count: usize) -> Option<f64> {
    if index >= sector_count {
        return None;
    }
    let width = sector_angle(sector_count);
    Some(normalize_rotation(360.0 - (index as f64 + 0.5) * width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_angle() {
        assert_eq!(sector_angle(8), 45.0);
        assert_eq!(sector_angle(1), 360.0);
        assert_eq!(sector_angle(0), 0.0);
    }

    #[test]
    fn test_landing_sector_reference_table() {
        assert_eq!(landing_sector(0.0, 8), 0);
        assert_eq!(landing_sector(45.0, 8), 7);
        assert_eq!(landing_sector(180.0, 8), 4);
        assert_eq!(landing_sector(360.0, 8), 0);
    }

    #[test]
    fn test_landing_sector_boundaries() {
        assert_eq!(landing_sector(1.0, 8), 7);
        assert_eq!(landing_sector(44.0, 8), 7);
        assert_eq!(landing_sector(46.0, 8), 6);
        assert_eq!(landing_sector(90.0, 8), 6);
        assert_eq!(landing_sector(359.0, 8), 0);
    }

    #[test]
    fn test_landing_sector_negative_and_multi_turn() {
        assert_eq!(landing_sector(-45.0, 8), landing_sector(315.0, 8));
        assert_eq!(landing_sector(-45.0, 8), 1);
        assert_eq!(landing_sector(3600.0 + 180.0, 8), 4);
        assert_eq!(landing_sector(-3600.0 - 180.0, 8), 4);
    }

    #[test]
    fn test_landing_sector_odd_counts_stay_in_range() {
        for count in [1, 3, 7, 11, 13] {
            assert_eq!(landing_sector(0.0, count), 0);
            for step in 0..720 {
                let rotation = step as f64 * 0.5 - 180.0;
                assert!(landing_sector(rotation, count) < count);
            }
        }
    }

    #[test]
    fn test_empty_wheel() {
        for rotation in [0.0, 45.0, -720.0, 1e12] {
            assert_eq!(landing_sector(rotation, 0), 0);
            assert_eq!(safe_landing_sector(rotation, 0), None);
        }
    }

    #[test]
    fn test_non_finite_rotation_is_total() {
        assert_eq!(safe_landing_sector(f64::NAN, 8), Some(0));
        assert!(landing_sector(f64::INFINITY, 8) < 8);
    }

    #[test]
    fn test_sector_rotation_inverts_landing() {
        for count in [1, 2, 6, 8, 12] {
            for index in 0..count {
                let rotation = sector_rotation(index, count).unwrap();
                assert!((0.0..360.0).contains(&rotation));
                assert_eq!(landing_sector(rotation, count), index);
            }
        }
        assert_eq!(sector_rotation(8, 8), None);
        assert_eq!(sector_rotation(0, 0), None);
    }
}
