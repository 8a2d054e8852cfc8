use color_core::{ClipboardSink, ColorStateController, DeadlineTimers, Settings, SystemClock};
use eframe::egui;

use crate::controller::orchestration::apply_frame_intents;
use crate::ui::panels::{self, Backdrop};

const PULSE_SCALE: f32 = 1.05;
const PULSE_TRANSITION_SECS: f32 = 0.5;

pub struct ColorChangerApp {
    controller: ColorStateController<DeadlineTimers<SystemClock>>,
    backdrop: Backdrop,
    status: String,
}

impl ColorChangerApp {
    pub fn new(settings: &Settings, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            controller: ColorStateController::new(
                settings,
                DeadlineTimers::new(SystemClock::new()),
                clipboard,
            ),
            backdrop: Backdrop::from_tokens(&settings.gradient_start, &settings.gradient_end),
            status: String::new(),
        }
    }
}

impl eframe::App for ColorChangerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.pump_timers();
        let snapshot = self.controller.snapshot();
        let mut intents = Vec::new();

        let scale = ctx.animate_value_with_time(
            egui::Id::new("color_pulse_scale"),
            if snapshot.animating { PULSE_SCALE } else { 1.0 },
            PULSE_TRANSITION_SECS,
        );

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                panels::paint_background(ui.painter(), ui.max_rect(), &snapshot, &self.backdrop);

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add_space(24.0);
                    panels::palette(ui, self.controller.palette(), &mut intents);

                    ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                        ui.add_space(28.0);
                        panels::header(ui, &snapshot, scale, &mut intents);
                        ui.add_space(20.0);
                        panels::custom_picker(ui, &snapshot, &mut intents);
                        ui.add_space(20.0);
                        panels::history(ui, &snapshot, &mut intents);
                        if !self.status.is_empty() {
                            ui.add_space(8.0);
                            ui.label(
                                egui::RichText::new(&self.status)
                                    .color(egui::Color32::WHITE)
                                    .small(),
                            );
                        }
                    });
                });
            });

        if apply_frame_intents(&mut self.controller, intents, &mut self.status) {
            ctx.request_repaint();
        }

        if let Some(wait) = self.controller.timers().time_until_next() {
            ctx.request_repaint_after(wait);
        }
    }
}
