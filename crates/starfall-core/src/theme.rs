//! Visual theme for the demo chrome.

use starfall_types::color::Color;

/// Colors and metrics for everything outside the animated stage.
pub struct Theme {
    /// Window clear color behind stage and panel.
    pub background: Color,
    /// Control panel strip background.
    pub panel_bg: Color,

    /// Trigger button background.
    pub button_bg: Color,
    /// Trigger button background on hover.
    pub button_bg_hover: Color,
    /// Trigger button background while pressed.
    pub button_bg_pressed: Color,
    /// Trigger button background while its animation is running.
    pub button_bg_disabled: Color,

    /// Button label color.
    pub text: Color,
    /// Button label color while disabled.
    pub text_disabled: Color,

    /// Panel/stage separator line.
    pub border: Color,
    /// Fill color of the generated star texture.
    pub star: Color,

    /// Label font size in pixels.
    pub font_size: u16,
    /// Button corner radius in pixels.
    pub button_radius: u16,
}

impl Theme {
    /// Dark theme: night sky behind a golden star.
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(18, 18, 24),
            panel_bg: Color::rgb(30, 30, 40),

            button_bg: Color::rgb(50, 50, 70),
            button_bg_hover: Color::rgb(65, 65, 90),
            button_bg_pressed: Color::rgb(40, 40, 55),
            button_bg_disabled: Color::rgb(35, 35, 45),

            text: Color::rgb(230, 230, 240),
            text_disabled: Color::rgb(100, 100, 120),

            border: Color::rgb(60, 60, 80),
            star: Color::rgb(255, 210, 60),

            font_size: 8,
            button_radius: 4,
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            background: Color::rgb(245, 245, 250),
            panel_bg: Color::rgb(255, 255, 255),

            button_bg: Color::rgb(230, 230, 240),
            button_bg_hover: Color::rgb(220, 220, 230),
            button_bg_pressed: Color::rgb(200, 200, 215),
            button_bg_disabled: Color::rgb(240, 240, 245),

            text: Color::rgb(20, 20, 30),
            text_disabled: Color::rgb(170, 170, 180),

            border: Color::rgb(210, 210, 220),
            star: Color::rgb(240, 175, 20),

            font_size: 8,
            button_radius: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_has_dark_background() {
        let t = Theme::dark();
        assert!(t.background.r < 50);
        assert!(t.background.g < 50);
        assert!(t.background.b < 50);
    }

    #[test]
    fn light_has_light_background() {
        let t = Theme::light();
        assert!(t.background.r > 200);
        assert!(t.background.g > 200);
        assert!(t.background.b > 200);
    }

    #[test]
    fn star_is_a_warm_color() {
        for t in [Theme::dark(), Theme::light()] {
            // High red, mid green, low blue: gold.
            assert!(t.star.r > 200);
            assert!(t.star.g > 100);
            assert!(t.star.b < 100);
        }
    }

    #[test]
    fn disabled_text_is_dimmer_than_enabled() {
        let t = Theme::dark();
        let enabled = t.text.r as u32 + t.text.g as u32 + t.text.b as u32;
        let disabled = t.text_disabled.r as u32 + t.text_disabled.g as u32 + t.text_disabled.b as u32;
        assert!(disabled < enabled);
    }

    #[test]
    fn hover_is_brighter_than_normal() {
        let t = Theme::dark();
        assert!(t.button_bg_hover.r >= t.button_bg.r);
        assert!(t.button_bg_hover.g >= t.button_bg.g);
        assert!(t.button_bg_hover.b >= t.button_bg.b);
    }

    #[test]
    fn star_is_opaque_in_all_themes() {
        for t in [Theme::dark(), Theme::light()] {
            assert_eq!(t.star.a, 255);
        }
    }
}
