//! Widget sections of the color changer window. Each section reads the
//! current snapshot and pushes intents; none of them mutate state directly.

use eframe::egui;
use shared::{
    domain::{Background, ColorValue},
    protocol::{ColorSnapshot, Intent},
};

use crate::ui::swatch;

const OVERLAY_TEXT: egui::Color32 = egui::Color32::WHITE;
const CHIP_SIZE: f32 = 36.0;

#[derive(Debug, Clone, Copy)]
pub struct Backdrop {
    pub gradient_start: egui::Color32,
    pub gradient_end: egui::Color32,
}

impl Backdrop {
    pub fn from_tokens(start: &ColorValue, end: &ColorValue) -> Self {
        Self {
            gradient_start: swatch::resolve_or_unknown(start.as_str()),
            gradient_end: swatch::resolve_or_unknown(end.as_str()),
        }
    }
}

pub fn paint_background(
    painter: &egui::Painter,
    rect: egui::Rect,
    snapshot: &ColorSnapshot,
    backdrop: &Backdrop,
) {
    match snapshot.background() {
        Background::Solid(color) => {
            painter.rect_filled(rect, 0.0, swatch::resolve_or_unknown(color.as_str()));
        }
        Background::DefaultGradient => {
            painter.add(egui::Shape::mesh(horizontal_gradient(
                rect,
                backdrop.gradient_start,
                backdrop.gradient_end,
            )));
        }
    }
}

fn horizontal_gradient(rect: egui::Rect, left: egui::Color32, right: egui::Color32) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}

fn overlay_frame(alpha: u8) -> egui::Frame {
    egui::Frame::NONE
        .fill(egui::Color32::from_black_alpha(alpha))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(14, 8))
}

pub fn header(ui: &mut egui::Ui, snapshot: &ColorSnapshot, scale: f32, intents: &mut Vec<Intent>) {
    overlay_frame(110).show(ui, |ui| {
        ui.label(
            egui::RichText::new("🎨 Color Changer App")
                .size(30.0 * scale)
                .strong()
                .color(OVERLAY_TEXT),
        );
    });
    ui.add_space(10.0);
    overlay_frame(80).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&snapshot.background_label)
                    .size(17.0)
                    .color(OVERLAY_TEXT),
            );
            let icon = if snapshot.copied { "✔" } else { "📋" };
            let copy = ui
                .add(
                    egui::Button::new(egui::RichText::new(icon).color(OVERLAY_TEXT))
                        .min_size(egui::vec2(24.0, 24.0))
                        .stroke(egui::Stroke::NONE)
                        .fill(egui::Color32::TRANSPARENT),
                )
                .on_hover_text("Copy color");
            if copy.clicked() {
                intents.push(Intent::Copy);
            }
        });
    });
}

pub fn custom_picker(ui: &mut egui::Ui, snapshot: &ColorSnapshot, intents: &mut Vec<Intent>) {
    egui::Frame::NONE
        .fill(egui::Color32::from_white_alpha(50))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let draft = snapshot.custom_draft.as_str();
                let mut rgb = draft
                    .strip_prefix('#')
                    .and_then(swatch::parse_hex)
                    .unwrap_or([0x80, 0x80, 0x80]);
                if ui.color_edit_button_srgb(&mut rgb).changed() {
                    intents.push(Intent::UpdateDraft(swatch::format_hex(rgb).into()));
                }

                let mut text = draft.to_string();
                let edit = egui::TextEdit::singleline(&mut text)
                    .desired_width(96.0)
                    .font(egui::TextStyle::Monospace);
                if ui.add(edit).changed() {
                    intents.push(Intent::UpdateDraft(text.into()));
                }

                if ui.button("Apply Custom Color").clicked() {
                    intents.push(Intent::ApplyDraft);
                }
                if ui
                    .button("⟲ Reset")
                    .on_hover_text("Reset to default gradient")
                    .clicked()
                {
                    intents.push(Intent::Reset);
                }
            });
        });
}

pub fn history(ui: &mut egui::Ui, snapshot: &ColorSnapshot, intents: &mut Vec<Intent>) {
    if snapshot.history.is_empty() {
        return;
    }

    ui.set_max_width(520.0);
    ui.horizontal(|ui| {
        overlay_frame(80).show(ui, |ui| {
            ui.label(
                egui::RichText::new("Recently Used Colors")
                    .strong()
                    .color(OVERLAY_TEXT),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let clear = ui
                .add(
                    egui::Button::new(egui::RichText::new("🗑 Clear").color(OVERLAY_TEXT))
                        .fill(egui::Color32::from_black_alpha(80)),
                )
                .on_hover_text("Clear history");
            if clear.clicked() {
                intents.push(Intent::ClearHistory);
            }
        });
    });
    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        for (index, color) in snapshot.history.iter().enumerate() {
            let chip = ui
                .add(
                    egui::Button::new("")
                        .min_size(egui::vec2(CHIP_SIZE, CHIP_SIZE))
                        .fill(swatch::resolve_or_unknown(color.as_str()))
                        .corner_radius(CHIP_SIZE / 2.0),
                )
                .on_hover_text(color.as_str());
            if chip.clicked() {
                intents.push(Intent::SelectHistory(index));
            }
        }
    });
}

pub fn palette(ui: &mut egui::Ui, palette: &[ColorValue], intents: &mut Vec<Intent>) {
    egui::Frame::NONE
        .fill(egui::Color32::from_white_alpha(230))
        .corner_radius(20.0)
        .inner_margin(egui::Margin::symmetric(18, 14))
        .show(ui, |ui| {
            ui.set_max_width(880.0);
            ui.horizontal_wrapped(|ui| {
                for (index, color) in palette.iter().enumerate() {
                    let button = egui::Button::new(
                        egui::RichText::new(color.as_str())
                            .color(OVERLAY_TEXT)
                            .strong(),
                    )
                    .fill(swatch::resolve_or_unknown(color.as_str()))
                    .corner_radius(14.0);
                    if ui.add(button).clicked() {
                        intents.push(Intent::SelectPreset(index));
                    }
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_mesh_spans_rect_left_to_right() {
        let rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(200.0, 100.0));
        let mesh = horizontal_gradient(rect, egui::Color32::RED, egui::Color32::BLUE);

        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.vertices[0].color, egui::Color32::RED);
        assert_eq!(mesh.vertices[2].pos, rect.right_bottom());
        assert_eq!(mesh.vertices[2].color, egui::Color32::BLUE);
    }

    #[test]
    fn backdrop_resolves_default_gradient_tokens() {
        let backdrop = Backdrop::from_tokens(&"#4e54c8".into(), &"#8f94fb".into());
        assert_eq!(
            backdrop.gradient_start,
            egui::Color32::from_rgb(0x4e, 0x54, 0xc8)
        );
        assert_eq!(
            backdrop.gradient_end,
            egui::Color32::from_rgb(0x8f, 0x94, 0xfb)
        );
    }
}
