//! PocketCalc application

use std::path::PathBuf;

use egui::{Context, Event, Key};
use pocketcore::theme::PocketColors;
use pocketcore::{
    dispatch, dispatch_all, CalculatorState, LayoutMode, PocketTheme, Preferences, Token,
};

/// Keypad labels, row by row.
const KEYPAD: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", "C", "=", "+"],
];

/// Largest key edge, in points.
const MAX_KEY_SIZE: f32 = 96.0;
const MIN_KEY_SIZE: f32 = 32.0;

pub struct PocketCalcApp {
    state: CalculatorState,
    prefs: Preferences,
    prefs_path: PathBuf,
    theme: PocketTheme,
    show_about: bool,
}

impl PocketCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, prefs: Preferences, prefs_path: PathBuf) -> Self {
        Self {
            state: CalculatorState::new(),
            prefs,
            prefs_path,
            theme: PocketTheme::default(),
            show_about: false,
        }
    }

    fn press(&mut self, token: Token) {
        let state = std::mem::take(&mut self.state);
        self.state = dispatch(state, token);
    }

    fn set_layout(&mut self, layout: LayoutMode) {
        if self.prefs.layout == layout {
            return;
        }
        self.prefs.layout = layout;
        self.save_prefs();
    }

    fn step_font_size(&mut self, steps: i32) {
        self.prefs.step_display_font_size(steps);
        self.save_prefs();
    }

    fn save_prefs(&self) {
        if let Err(err) = self.prefs.save(&self.prefs_path) {
            tracing::warn!(%err, "could not save preferences");
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let tokens = ctx.input(|i| key_tokens(&i.events));
        if tokens.is_empty() {
            return;
        }
        let state = std::mem::take(&mut self.state);
        self.state = dispatch_all(state, tokens);
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let font_size = self.prefs.display_font_size;
        egui::Frame::none()
            .fill(PocketColors::BACKGROUND)
            .inner_margin(egui::Margin::symmetric(4.0, 8.0))
            .show(ui, |ui| {
                ui.set_min_height(font_size * 1.4);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.state.display())
                                .font(egui::FontId::proportional(font_size))
                                .color(PocketColors::DISPLAY_TEXT),
                        )
                        .truncate(true),
                    );
                });
            });
    }

    /// Draw the keypad and return the key pressed this frame, if any.
    fn render_keypad(&self, ui: &mut egui::Ui) -> Option<Token> {
        let spacing = ui.spacing().item_spacing.x;
        let side = ((ui.available_width() - 3.0 * spacing) / 4.0).clamp(MIN_KEY_SIZE, MAX_KEY_SIZE);
        let mut pressed = None;

        for row in KEYPAD {
            ui.horizontal(|ui| {
                for label in row {
                    let Some(token) = Token::from_label(label) else {
                        continue;
                    };
                    let key = egui::Button::new(
                        egui::RichText::new(label)
                            .size(self.theme.font_size_key)
                            .color(PocketColors::KEY_TEXT),
                    )
                    .fill(PocketTheme::key_fill(token.is_digit()));
                    if ui.add_sized([side, side], key).clicked() {
                        pressed = Some(token);
                    }
                }
            });
        }
        pressed
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(concat!("version ", env!("CARGO_PKG_VERSION")));
                });
                ui.separator();
                ui.label("keys: 0-9 + - * / = Enter C Esc");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for PocketCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("view", |ui| {
                    for layout in LayoutMode::ALL {
                        let selected = self.prefs.layout == layout;
                        if ui.selectable_label(selected, layout.name()).clicked() {
                            self.set_layout(layout);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("larger text").clicked() {
                        self.step_font_size(1);
                    }
                    if ui.button("smaller text").clicked() {
                        self.step_font_size(-1);
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        let screen = ctx.screen_rect();
        let landscape = self.prefs.layout.is_landscape(screen.width(), screen.height());

        let mut pressed = None;
        egui::CentralPanel::default()
            .frame(self.theme.panel_frame())
            .show(ctx, |ui| {
                if landscape {
                    ui.columns(2, |cols| {
                        cols[0].with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            ui.add_space(ui.available_height() / 3.0);
                            self.render_display(ui);
                        });
                        pressed = self.render_keypad(&mut cols[1]);
                    });
                } else {
                    self.render_display(ui);
                    ui.add_space(16.0);
                    pressed = self.render_keypad(ui);
                }
            });
        if let Some(token) = pressed {
            self.press(token);
        }

        if self.show_about {
            self.render_about(ctx);
        }
    }
}

/// Translate raw keyboard events into calculator tokens.
///
/// Characters arrive as text so shifted symbols (`*`, `+`) map correctly.
/// Pasted text is replayed the same way. Enter and Escape produce no text
/// and are matched as keys.
fn key_tokens(events: &[Event]) -> Vec<Token> {
    let mut tokens = Vec::new();
    for event in events {
        match event {
            Event::Text(text) | Event::Paste(text) => {
                tokens.extend(
                    text.chars()
                        .filter_map(|c| Token::from_label(&c.to_ascii_uppercase().to_string())),
                );
            }
            Event::Key { key: Key::Enter, pressed: true, .. } => tokens.push(Token::Equals),
            Event::Key { key: Key::Escape, pressed: true, .. } => tokens.push(Token::Clear),
            _ => {}
        }
    }
    tokens
}
