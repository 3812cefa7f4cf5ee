use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// RGB color specification.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            primary: ColorSpec::rgb(125, 207, 255),      // Blue
            secondary: ColorSpec::rgb(158, 206, 106),    // Green
            banner: ColorSpec::rgb(255, 159, 196),       // Magenta
            text: ColorSpec::rgb(169, 177, 214),         // Foreground
            text_muted: ColorSpec::rgb(117, 121, 148),   // Comment
            success: ColorSpec::rgb(158, 206, 106),      // Green
            warning: ColorSpec::rgb(255, 202, 40),       // Yellow
            error: ColorSpec::rgb(247, 118, 142),        // Red
            border_active: ColorSpec::rgb(125, 207, 255),
            border_normal: ColorSpec::rgb(117, 121, 148),
            highlight_bg: ColorSpec::rgb(125, 207, 255),
            highlight_fg: ColorSpec::rgb(26, 27, 38),    // Background
        }
    }
}
