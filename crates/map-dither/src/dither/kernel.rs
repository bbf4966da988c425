//! Error diffusion kernel definitions.
//!
//! A kernel specifies how the quantization error of one pixel is
//! distributed to neighboring pixels that have not been processed yet.

/// An error diffusion kernel.
///
/// Each entry specifies an offset (dx, dy) and an integer weight. A
/// neighbor receives `error * weight / divisor`, truncated toward zero.
///
/// # Scan Order Invariant
///
/// Every entry must point strictly forward in row-major scan order:
/// `dy > 0`, or `dy == 0` and `dx > 0`. Diffusing into an already visited
/// pixel would change the output.
///
/// # Buffer Sizing
///
/// The `max_dy` field indicates how many rows ahead the kernel reaches,
/// which determines the error buffer depth needed: `max_dy + 1` rows.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (positive = below current row)
    /// - `weight`: numerator of the fraction of error to diffuse
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,

    /// Maximum dy value in entries.
    pub max_dy: usize,
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // east
        (-1, 1, 3), // southwest
        (0, 1, 5),  // south
        (1, 1, 1),  // southeast
    ],
    divisor: 16,
    max_dy: 1,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floyd_steinberg_propagation_100_percent() {
        let sum: u8 = FLOYD_STEINBERG.entries.iter().map(|(_, _, w)| w).sum();
        assert_eq!(sum, 16, "Floyd-Steinberg weights should sum to 16");
        assert_eq!(
            FLOYD_STEINBERG.divisor, 16,
            "Floyd-Steinberg divisor should be 16"
        );
    }

    #[test]
    fn test_floyd_steinberg_max_dy() {
        let actual_max_dy = FLOYD_STEINBERG
            .entries
            .iter()
            .map(|(_, dy, _)| *dy as usize)
            .max()
            .unwrap();
        assert_eq!(
            actual_max_dy, FLOYD_STEINBERG.max_dy,
            "Floyd-Steinberg max_dy mismatch"
        );
    }

    #[test]
    fn test_entries_point_forward_in_scan_order() {
        for &(dx, dy, _) in FLOYD_STEINBERG.entries {
            assert!(
                dy > 0 || (dy == 0 && dx > 0),
                "entry ({dx}, {dy}) would write to an already visited pixel"
            );
        }
    }
}
