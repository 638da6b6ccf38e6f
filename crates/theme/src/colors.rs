/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const VAPOR_BG:   Self = Self { r: 0.102, g: 0.035, b: 0.200, a: 1.0 }; // #1a0933
    pub const VAPOR_TEXT: Self = Self { r: 0.196, g: 0.984, b: 0.886, a: 1.0 }; // #32fbe2
    pub const VAPOR_PINK: Self = Self { r: 0.918, g: 0.224, b: 0.722, a: 1.0 }; // #ea39b8
    pub const CARD:       Self = Self { r: 0.165, g: 0.078, b: 0.329, a: 1.0 }; // #2a1454
    pub const TEAL:       Self = Self { r: 0.0,   g: 0.502, b: 0.502, a: 1.0 }; // #008080

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: byte(&hex[6..8])? as f32 / 255.0,
            }),
            _ => None,
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_and_eight_digit_hex() {
        let c = Color::from_hex("#ff0080").unwrap();
        assert_eq!((c.r, c.g, c.a), (1.0, 0.0, 1.0));
        assert_eq!(Color::from_hex("00000000").unwrap().a, 0.0);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#gg0000").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }
}
