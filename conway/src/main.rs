// main.rs - Interactive Conway's Game of Life
// Optional first argument: path to a JSON config (width, height, step_interval_secs)

use eframe::egui;
use egui::Color32;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use life_core::{Board, ConfigError, LifeConfig, LifeGrid, StepClock};

mod sprites;
mod ui;

use sprites::CellSprites;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => LifeConfig::load(&path).unwrap_or_else(|e| {
            log::error!("Ignoring config {path}: {e}");
            LifeConfig::default()
        }),
        None => LifeConfig::default(),
    };
    log::info!("Starting {}x{} board, {}s per generation",
               config.width, config.height, config.step_interval_secs);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    let app = GameOfLife::from_config(&config).unwrap_or_else(|e| {
        log::error!("Falling back to default board: {e}");
        GameOfLife::new(LifeGrid::with_renderer(
            Board::default(), StepClock::default(), CellSprites::default()))
    });
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
}

/// Window state around the simulation.
pub struct GameOfLife {
    pub life: LifeGrid<CellSprites>,
    pub generation_label: Rc<Cell<u64>>,
    pub last_frame: Instant,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl GameOfLife {
    pub fn from_config(config: &LifeConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(LifeGrid::from_config(config, CellSprites::default())?))
    }

    pub fn new(mut life: LifeGrid<CellSprites>) -> Self {
        // Generation display listens like any other subscriber
        let generation_label = Rc::new(Cell::new(0));
        let label = Rc::clone(&generation_label);
        life.subscribe(move |generation| label.set(generation));
        life.announce();

        Self {
            life,
            generation_label,
            last_frame: Instant::now(),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        }
    }
}
