// ui.rs - Drawing, clicks and controls for the Life window

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use life_core::{SimulationState, MAX_STEP_INTERVAL_SECS, MIN_STEP_INTERVAL_SECS, PATTERNS};

use crate::GameOfLife;

const MAX_CELL_SIZE: f32 = 16.0;
const MIN_CELL_SIZE: f32 = 2.0;
const RANDOM_DENSITY: f64 = 0.33;

/// Slider range in generations per second, matching the intervals a config
/// may ask for.
pub fn speed_range() -> std::ops::RangeInclusive<f32> {
    (1.0 / MAX_STEP_INTERVAL_SECS)..=(1.0 / MIN_STEP_INTERVAL_SECS)
}

/// Label of the simulate/pause button for a given state.
pub fn sim_button_label(state: SimulationState) -> &'static str {
    match state {
        SimulationState::Editing => "▶ Simulate Game of Life",
        SimulationState::Running => "⏸ Pause Game of Life",
    }
}

/// Grid coordinates under a screen position. Positions left of or above the
/// board map to negative coordinates rather than being clamped.
pub fn screen_to_grid(pos: Pos2, board_origin: Pos2, pitch: f32) -> (isize, isize) {
    let x = ((pos.x - board_origin.x) / pitch).floor() as isize;
    let y = ((pos.y - board_origin.y) / pitch).floor() as isize;
    (x, y)
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;
        self.life.advance(elapsed);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                if ui.button(sim_button_label(self.life.state())).clicked() {
                    self.life.toggle_running();
                }

                let editing = !self.life.is_running();

                if ui.add_enabled(editing, egui::Button::new("Step")).clicked() {
                    self.life.step();
                }

                if ui.add_enabled(editing, egui::Button::new("⏹ Clear")).clicked() {
                    self.life.clear();
                }

                if ui.add_enabled(editing, egui::Button::new("🎲 Random")).clicked() {
                    self.life.randomize(rand::random(), RANDOM_DENSITY);
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.add_enabled(editing, egui::Button::new("Apply Pattern")).clicked() {
                    self.life.stamp(&PATTERNS[self.selected_pattern]);
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation_label.get()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1.0 / self.life.step_interval().as_secs_f32();
                if ui.add(egui::Slider::new(&mut speed, speed_range()).suffix(" gen/sec")).changed() {
                    self.life.set_step_interval(Duration::from_secs_f32(1.0 / speed));
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            if self.life.renderer().is_empty() && !self.life.is_running() {
                ui.label("Click cells or apply a pattern, then Simulate to let the generations run.");
            } else {
                ui.label("Click cells to toggle them while paused.");
            }

            ui.separator();

            // Board
            let (width, height) = (self.life.width(), self.life.height());
            let pitch = (ui.available_width() / width as f32).clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
            let spacing = if pitch > 4.0 { 0.5 } else { 0.0 };
            let total_size = Vec2::new(pitch * width as f32, pitch * height as f32);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, self.dead_color);

            // Only the visual layer is drawn; the board itself is never read here
            for &(x, y) in self.life.renderer().iter() {
                let min = origin + Vec2::new(x as f32 * pitch, y as f32 * pitch);
                let rect = Rect::from_min_size(min, Vec2::splat(pitch - spacing));
                painter.rect_filled(rect, 1.0, self.live_color);
            }

            painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::from_gray(90)));

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let (x, y) = screen_to_grid(pos, origin, pitch);
                    self.life.toggle_cell(x, y);
                }
            }

            ui.separator();

            // Statistics
            let total = width * height;
            let live_cells = self.life.renderer().len();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Keep the clock ticking while running
        if self.life.is_running() {
            ctx.request_repaint();
        }
    }
}
