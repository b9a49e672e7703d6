//! Pocket calculator theme
//!
//! Dark panel, white display text, square keys. Function keys get a pale
//! violet fill so they stand apart from the grey digit keys.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct PocketColors;

impl PocketColors {
    pub const BACKGROUND: Color32 = Color32::from_rgb(0x1E, 0x1E, 0x1E);
    pub const DISPLAY_TEXT: Color32 = Color32::WHITE;
    pub const KEY_TEXT: Color32 = Color32::BLACK;
    pub const DIGIT_KEY: Color32 = Color32::from_rgb(0xBD, 0xBD, 0xBD);
    pub const FUNCTION_KEY: Color32 = Color32::from_rgb(0xD1, 0xC4, 0xE9);
}

/// Theme configuration for the calculator window
pub struct PocketTheme {
    pub font_size_body: f32,
    pub font_size_key: f32,
    pub font_size_heading: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for PocketTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_key: 24.0,
            font_size_heading: 22.0,
            window_padding: 16.0,
            item_spacing: 8.0,
        }
    }
}

impl PocketTheme {
    /// Apply the calculator theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body - 3.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_key, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::dark();
        visuals.panel_fill = PocketColors::BACKGROUND;
        visuals.window_fill = PocketColors::BACKGROUND;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, PocketColors::DIGIT_KEY);

        let square = |ws: &mut egui::style::WidgetVisuals| {
            ws.rounding = Rounding::ZERO;
        };
        square(&mut visuals.widgets.noninteractive);
        square(&mut visuals.widgets.inactive);
        square(&mut visuals.widgets.hovered);
        square(&mut visuals.widgets.active);
        square(&mut visuals.widgets.open);

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);

        ctx.set_style(style);
    }

    /// Fill colour for a keypad key.
    pub fn key_fill(is_digit: bool) -> Color32 {
        if is_digit {
            PocketColors::DIGIT_KEY
        } else {
            PocketColors::FUNCTION_KEY
        }
    }

    /// Central panel frame: dark fill with the window padding.
    pub fn panel_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(PocketColors::BACKGROUND)
            .inner_margin(egui::Margin::same(self.window_padding))
    }
}
