use std::fmt;

/// An RGBA color with 8-bit channels. Alpha is 255 (fully opaque) unless the
/// input supplied a fourth component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// An opaque color carries no alpha information: it renders as 6 hex
    /// digits and displays as plain RGB.
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Uppercase `#RRGGBB` hex code, with an `AA` suffix when not opaque.
    pub fn hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Decimal channel list as it appeared in the input, for console diagnostics.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, ", {}", self.a)?;
        }
        Ok(())
    }
}
