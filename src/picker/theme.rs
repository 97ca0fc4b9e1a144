use ratatui::style::Color;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
}

/// Colors used by the picker
#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub accent: Color,
    pub highlight: Color,
    pub muted: Color,
    pub foreground: Color,
    pub route: Color,
    pub warning: Color,
    pub error: Color,
}

impl ColorPalette {
    /// Pick a palette for the terminal background
    ///
    /// `COLORFGBG` is "fg;bg" where background 0-7 is dark and 8-15 light;
    /// dark is assumed when it is missing or unparsable.
    pub fn detect() -> Self {
        let background = env::var("COLORFGBG")
            .ok()
            .and_then(|value| value.split(';').nth(1).and_then(|bg| bg.parse::<u8>().ok()))
            .map(|bg| if bg < 8 { BackgroundType::Dark } else { BackgroundType::Light })
            .unwrap_or(BackgroundType::Dark);

        Self::for_background(background)
    }

    pub fn for_background(bg: BackgroundType) -> Self {
        match bg {
            BackgroundType::Dark => Self {
                accent: Color::Magenta,
                highlight: Color::LightBlue,
                muted: Color::DarkGray,
                foreground: Color::White,
                route: Color::Cyan,
                warning: Color::Yellow,
                error: Color::Red,
            },
            BackgroundType::Light => Self {
                accent: Color::Magenta,
                highlight: Color::Blue,
                muted: Color::Gray,
                foreground: Color::Black,
                route: Color::Blue,
                warning: Color::Yellow,
                error: Color::Red,
            },
        }
    }
}
