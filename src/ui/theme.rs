use crate::config::ThemeName;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub panel: Color,
    pub display_bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub result: Color,        // Result line and highlights
    pub expression: Color,    // Expression line and operators
    pub function_key: Color,  // sin/cos/tan, constants, parentheses
    pub control_key: Color,   // C, AC, backspace
    pub digit_key: Color,
    pub error: Color,
    pub border_normal: Color,
}

/// Neon arcade cabinet: the default palette
pub const NEON_THEME: Theme = Theme {
    bg: Color::Rgb(18, 4, 88),
    panel: Color::Rgb(27, 14, 145),
    display_bg: Color::Rgb(0, 0, 0),
    fg: Color::Rgb(255, 255, 255),
    dim: Color::Rgb(170, 170, 170),
    result: Color::Rgb(255, 41, 117),       // Neon pink
    expression: Color::Rgb(38, 206, 252),   // Cyan
    function_key: Color::Rgb(155, 93, 229), // Purple
    control_key: Color::Rgb(241, 91, 181),  // Pink
    digit_key: Color::Rgb(27, 14, 145),
    error: Color::Rgb(255, 41, 117),
    border_normal: Color::Rgb(8, 2, 48),
};

/// Red cabinet
pub const ARCADE_THEME: Theme = Theme {
    bg: Color::Rgb(51, 0, 0),
    panel: Color::Rgb(102, 0, 0),
    display_bg: Color::Rgb(0, 0, 0),
    fg: Color::Rgb(255, 255, 255),
    dim: Color::Rgb(204, 204, 204),
    result: Color::Rgb(255, 51, 51),
    expression: Color::Rgb(255, 102, 102),
    function_key: Color::Rgb(153, 0, 0),
    control_key: Color::Rgb(34, 34, 34),
    digit_key: Color::Rgb(102, 0, 0),
    error: Color::Rgb(255, 51, 51),
    border_normal: Color::Rgb(34, 0, 0),
};

/// Greyscale
pub const BASIC_THEME: Theme = Theme {
    bg: Color::Rgb(34, 34, 34),
    panel: Color::Rgb(51, 51, 51),
    display_bg: Color::Rgb(17, 17, 17),
    fg: Color::Rgb(255, 255, 255),
    dim: Color::Rgb(187, 187, 187),
    result: Color::Rgb(255, 255, 255),
    expression: Color::Rgb(221, 221, 221),
    function_key: Color::Rgb(153, 153, 153),
    control_key: Color::Rgb(68, 68, 68),
    digit_key: Color::Rgb(51, 51, 51),
    error: Color::Rgb(255, 255, 255),
    border_normal: Color::Rgb(17, 17, 17),
};

pub fn theme_for(name: ThemeName) -> &'static Theme {
    match name {
        ThemeName::Neon => &NEON_THEME,
        ThemeName::Arcade => &ARCADE_THEME,
        ThemeName::Basic => &BASIC_THEME,
    }
}
