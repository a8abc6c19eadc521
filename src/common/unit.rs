//! Unit conversion utilities.
//!
//! All geometry in a presentation package is expressed in English Metric
//! Units (EMU): 914,400 EMU per inch, 12,700 EMU per point. These helpers
//! convert the inch- and point-based measurements used by the deck layer
//! into EMU values for DrawingML attributes.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMUs.
///
/// # Examples
///
/// ```
/// use slideberry::common::unit::inches_to_emu;
///
/// assert_eq!(inches_to_emu(1.0), 914_400);
/// assert_eq!(inches_to_emu(0.5), 457_200);
/// ```
#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64) as i64
}

/// Convert points to EMUs.
#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

/// Convert EMUs back to inches.
#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(inches_to_emu(10.0), 9_144_000);
        assert_eq!(inches_to_emu(7.5), 6_858_000);
        assert_eq!(inches_to_emu(0.2), 182_880);
        // Truncates: 8.6 sits just below 8.6 in binary
        assert_eq!(inches_to_emu(8.6), 7_863_839);
    }

    #[test]
    fn test_pt_to_emu() {
        assert_eq!(pt_to_emu(1.0), 12_700);
        assert_eq!(pt_to_emu(72.0), 914_400);
    }

    #[test]
    fn test_emu_to_inches() {
        assert!((emu_to_inches(914_400) - 1.0).abs() < 1e-10);
        assert!((emu_to_inches(inches_to_emu(4.2)) - 4.2).abs() < 1e-10);
    }
}
