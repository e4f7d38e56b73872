// src/gui/components/feedback.rs
//
// Paints the feedback layer. Opacity animates towards each widget's target;
// egui snaps the first value for a new id, so a widget created this frame
// starts at 0 and fades in once it turns Visible.

use eframe::egui::{self, Align2, Color32, Id, Order, RichText, Vec2};
use crate::{
    config::consts::TOOLTIP_OFFSET,
    feedback::{Anchor, Phase, WidgetId, WidgetKind},
    gui::app::App,
};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let fade = app.feedback.options().fade.as_secs_f32();
    let mut closed = Vec::new();

    for w in app.feedback.widgets() {
        let alpha = ctx.animate_value_with_time(Id::new(("feedback", w.id.0)), w.opacity(), fade);
        match &w.kind {
            WidgetKind::Overlay { text } => {
                if overlay(ctx, w.id, text, alpha, w.phase != Phase::Dismissed) {
                    closed.push(w.id);
                }
            }
            WidgetKind::Tooltip { message, anchor } => tooltip(ctx, w.id, message, *anchor, alpha),
        }
    }

    for id in closed {
        logd!("UI: overlay {:?} closed", id);
        app.feedback.dismiss(&mut app.timers, id);
    }

    alert(ctx, app);
}

/// Returns true when Close was clicked.
fn overlay(ctx: &egui::Context, id: WidgetId, text: &str, alpha: f32, interactive: bool) -> bool {
    let mut close = false;
    egui::Area::new(Id::new(("overlay", id.0)))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.set_opacity(alpha);
            egui::Frame::window(ui.style()).show(ui, |ui| {
                // &str buffer: selectable and copyable, not editable
                let mut view = text;
                ui.add(
                    egui::TextEdit::multiline(&mut view)
                        .desired_width(500.0)
                        .desired_rows(16)
                        .font(egui::TextStyle::Monospace),
                );
                ui.add_space(10.0);
                close = ui.add_enabled(interactive, egui::Button::new("Close")).clicked();
            });
        });
    close
}

fn tooltip(ctx: &egui::Context, id: WidgetId, message: &str, anchor: Anchor, alpha: f32) {
    let (x, y) = anchor.below(TOOLTIP_OFFSET);
    egui::Area::new(Id::new(("tooltip", id.0)))
        .order(Order::Tooltip)
        .fixed_pos(egui::pos2(x, y))
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_opacity(alpha);
            egui::Frame::new()
                .fill(Color32::BLACK)
                .corner_radius(5.0)
                .inner_margin(egui::Margin::symmetric(10, 5))
                .show(ui, |ui| {
                    ui.label(RichText::new(message).color(Color32::WHITE).size(12.0));
                });
        });
}

fn alert(ctx: &egui::Context, app: &mut App) {
    let Some(message) = app.feedback.alert_message().map(str::to_owned) else { return };

    let modal = egui::Modal::new(Id::new("alert")).show(ctx, |ui| {
        ui.label(message);
        ui.add_space(8.0);
        ui.button("OK").clicked()
    });

    if modal.inner || modal.should_close() {
        app.feedback.acknowledge_alert();
    }
}
