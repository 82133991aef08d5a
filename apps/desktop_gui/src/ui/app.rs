use std::time::Duration;

use clock_core::LetterGrid;
use clock_runtime::{ClockEvent, SchedulerHandle};
use crossbeam_channel::Receiver;
use eframe::egui;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    face::{self, FaceLayout},
    theme::FaceTheme,
};
use crate::controller::events::ClockModel;

pub const SETTINGS_STORAGE_KEY: &str = "wordclock.face";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PersistedFaceSettings {
    pub debug_overlay: bool,
}

pub fn load_face_settings(storage: &dyn eframe::Storage) -> Option<PersistedFaceSettings> {
    let text = storage.get_string(SETTINGS_STORAGE_KEY)?;
    match serde_json::from_str(&text) {
        Ok(settings) => Some(settings),
        Err(err) => {
            warn!(error = %err, "ignoring unreadable face settings");
            None
        }
    }
}

pub fn store_face_settings(storage: &mut dyn eframe::Storage, settings: &PersistedFaceSettings) {
    match serde_json::to_string(settings) {
        Ok(serialized) => storage.set_string(SETTINGS_STORAGE_KEY, serialized),
        Err(err) => warn!(error = %err, "failed to serialize face settings"),
    }
}

pub struct WordClockApp {
    grid: LetterGrid,
    model: ClockModel,
    events: Receiver<ClockEvent>,
    // Dropping the handle stops the scheduler thread.
    _scheduler: SchedulerHandle,
    theme: FaceTheme,
    debug_overlay: bool,
    repaint_interval: Duration,
}

impl WordClockApp {
    pub fn new(
        grid: LetterGrid,
        events: Receiver<ClockEvent>,
        scheduler: SchedulerHandle,
        repaint_interval: Duration,
        debug_overlay: bool,
        persisted: Option<PersistedFaceSettings>,
    ) -> Self {
        let debug_overlay = debug_overlay || persisted.is_some_and(|p| p.debug_overlay);

        Self {
            grid,
            model: ClockModel::default(),
            events,
            _scheduler: scheduler,
            theme: FaceTheme::default(),
            debug_overlay,
            repaint_interval,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (toggle_overlay, quit) =
            ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::Escape)));

        if toggle_overlay {
            self.debug_overlay = !self.debug_overlay;
            debug!(enabled = self.debug_overlay, "debug overlay toggled");
        }
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn show_face(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.theme.background))
            .show(ctx, |ui| {
                let window = ui.max_rect();
                let layout = FaceLayout::new(window, self.grid.columns(), self.grid.rows());
                let painter = ui.painter();

                face::paint_face(
                    painter,
                    &layout,
                    &self.grid,
                    self.model.latest(),
                    &self.theme,
                    self.debug_overlay,
                );

                if self.debug_overlay {
                    painter.text(
                        window.left_bottom() + egui::vec2(face::MARGIN, -face::MARGIN / 2.0),
                        egui::Align2::LEFT_CENTER,
                        format!("ticks: {}", self.model.ticks()),
                        egui::FontId::monospace(12.0),
                        self.theme.debug_outline,
                    );
                }

                if let Some(reason) = self.model.failure() {
                    painter.text(
                        window.center_bottom() - egui::vec2(0.0, face::MARGIN / 2.0),
                        egui::Align2::CENTER_CENTER,
                        reason,
                        egui::FontId::proportional(14.0),
                        self.theme.failure,
                    );
                }
            });
    }
}

impl eframe::App for WordClockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.model.drain(&self.events);
        self.handle_keys(ctx);
        self.show_face(ctx);

        ctx.request_repaint_after(self.repaint_interval);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        store_face_settings(
            storage,
            &PersistedFaceSettings {
                debug_overlay: self.debug_overlay,
            },
        );
    }
}
