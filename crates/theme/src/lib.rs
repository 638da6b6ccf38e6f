pub mod colors;
pub mod style;

pub use colors::Color;

use dash_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible: invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:    Color,
    pub foreground:    Color,
    pub accent:        Color,
    pub card:          Color,
    pub series:        Color,
    pub font_size:     f32,
    pub border_radius: f32,
    pub padding:       u16,
    pub gap:           u16,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background:    Color::from_hex(&cfg.background).unwrap_or(Color::VAPOR_BG),
            foreground:    Color::from_hex(&cfg.foreground).unwrap_or(Color::VAPOR_TEXT),
            accent:        Color::from_hex(&cfg.accent).unwrap_or(Color::VAPOR_PINK),
            card:          Color::from_hex(&cfg.card).unwrap_or(Color::CARD),
            series:        Color::from_hex(&cfg.series).unwrap_or(Color::TEAL),
            font_size:     cfg.font_size,
            border_radius: cfg.border_radius,
            padding:       cfg.padding,
            gap:           cfg.gap,
        }
    }

    /// Iced palette matching this theme, for built-in widget styling.
    pub fn to_iced(&self, name: &str) -> iced::Theme {
        iced::Theme::custom(
            name.to_string(),
            iced::theme::Palette {
                background: self.background.to_iced(),
                text:       self.foreground.to_iced(),
                primary:    self.accent.to_iced(),
                success:    self.series.to_iced(),
                warning:    iced::Color::from_rgb8(0xff, 0xc1, 0x07),
                danger:     iced::Color::from_rgb8(0xe4, 0x4d, 0x26),
            },
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_colors_fall_back() {
        let cfg = ThemeConfig {
            accent: "pink".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg);
        assert_eq!(theme.accent, Color::VAPOR_PINK);
    }
}
