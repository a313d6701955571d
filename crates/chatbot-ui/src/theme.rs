//! Colours and widget styling for the chat widget.

use egui::{Color32, CornerRadius, FontId, Stroke, TextStyle, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(17, 24, 39);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(31, 41, 55);
pub const BG_SURFACE: Color32 = Color32::from_rgb(55, 65, 81);
pub const USER_BUBBLE: Color32 = Color32::from_rgb(37, 99, 235);
pub const ERROR_BUBBLE: Color32 = Color32::from_rgb(69, 26, 26);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(243, 244, 246);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(156, 163, 175);
pub const ACCENT: Color32 = Color32::from_rgb(14, 165, 233);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
pub const WARNING: Color32 = Color32::from_rgb(250, 204, 21);

pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(10);
pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Install the widget look on an egui context.
/// Inputs and buttons share the bubble rounding so the widget reads as one surface.
pub fn apply_theme(ctx: &egui::Context) {
    ctx.style_mut(|style| {
        let visuals = &mut style.visuals;
        visuals.dark_mode = true;
        visuals.panel_fill = BG_PRIMARY;
        visuals.window_fill = BG_SECONDARY;
        visuals.window_corner_radius = BUBBLE_ROUNDING;
        visuals.extreme_bg_color = BG_SECONDARY;
        visuals.faint_bg_color = BG_SURFACE;
        visuals.hyperlink_color = ACCENT;
        visuals.selection.bg_fill = USER_BUBBLE.linear_multiply(0.5);
        visuals.selection.stroke = Stroke::new(1.0, ACCENT);

        for (widget, fill) in [
            (&mut visuals.widgets.inactive, BG_SURFACE),
            (&mut visuals.widgets.hovered, BG_SURFACE),
            (&mut visuals.widgets.active, ACCENT),
        ] {
            widget.bg_fill = fill;
            widget.weak_bg_fill = fill;
            widget.corner_radius = PANEL_ROUNDING;
        }
        visuals.widgets.inactive.bg_stroke = Stroke::NONE;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);

        style.text_styles.insert(TextStyle::Body, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Small, FontId::proportional(11.0));
        style.text_styles.insert(TextStyle::Heading, FontId::proportional(17.0));

        style.spacing.item_spacing = Vec2::new(6.0, 6.0);
        style.spacing.button_padding = Vec2::new(10.0, 5.0);
    });
}
