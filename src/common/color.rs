use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the
/// range 0-255. The hex form feeds DrawingML `a:srgbClr` values.
///
/// # Examples
///
/// ```rust
/// use slideberry::common::RGBColor;
///
/// // Create a color from components
/// let dark_blue = RGBColor::new(31, 78, 121);
/// assert_eq!(dark_blue.to_hex(), "1F4E79");
///
/// // Create from hex string
/// let white = RGBColor::from_hex("FFFFFF").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "FF0000" or "#FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slideberry::common::RGBColor;
    ///
    /// let color = RGBColor::new(68, 114, 196);
    /// assert_eq!(color.to_hex(), "4472C4");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = RGBColor::new(89, 89, 89);
        assert_eq!(color.to_hex(), "595959");
        assert_eq!(RGBColor::from_hex("595959"), Some(color));
        assert_eq!(RGBColor::from_hex("#595959"), Some(color));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert_eq!(RGBColor::from_hex("FFF"), None);
        assert_eq!(RGBColor::from_hex("GGGGGG"), None);
        assert_eq!(RGBColor::from_hex(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBColor::new(244, 67, 54).to_string(), "#F44336");
    }
}
