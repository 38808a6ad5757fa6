// life.rs - The interactive Life simulation

use std::time::Duration;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, CellChange};
use crate::clock::StepClock;
use crate::config::{ConfigError, LifeConfig};
use crate::events::{CellRenderer, NullRenderer, Observers, Subscription};
use crate::patterns::Pattern;

/// Whether clicks edit the board or the clock drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationState {
    #[default]
    Editing,
    Running,
}

/// Conway's Game of Life bound to a render collaborator.
///
/// Owns the board, the generation counter and the generation-changed
/// observers. Every cell that changes state, whether by a click, an editing
/// operation or a generation step, is forwarded to the renderer `R`.
#[derive(Debug)]
pub struct LifeGrid<R: CellRenderer = NullRenderer> {
    board: Board,
    generation: u64,
    state: SimulationState,
    clock: StepClock,
    generation_changed: Observers<u64>,
    renderer: R,
}

impl LifeGrid<NullRenderer> {
    /// Headless grid of the given size with the default one-second pace.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_renderer(Board::new(width, height), StepClock::default(), NullRenderer)
    }
}

impl<R: CellRenderer> LifeGrid<R> {
    /// Validates `config` and builds an empty grid from it.
    pub fn from_config(config: &LifeConfig, renderer: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_renderer(
            Board::new(config.width, config.height),
            StepClock::new(config.step_interval()),
            renderer,
        ))
    }

    /// Builds a grid around an existing board, creating a visual for each
    /// cell that is already alive.
    pub fn with_renderer(board: Board, clock: StepClock, mut renderer: R) -> Self {
        for (x, y) in board.alive_cells() {
            renderer.create_visual(x, y);
        }
        Self {
            board,
            generation: 0,
            state: SimulationState::Editing,
            clock,
            generation_changed: Observers::new(),
            renderer,
        }
    }

    pub fn width(&self) -> usize { self.board.width() }
    pub fn height(&self) -> usize { self.board.height() }
    pub fn generation(&self) -> u64 { self.generation }
    pub fn state(&self) -> SimulationState { self.state }
    pub fn is_running(&self) -> bool { self.state == SimulationState::Running }
    pub fn population(&self) -> usize { self.board.population() }
    pub fn board(&self) -> &Board { &self.board }
    pub fn renderer(&self) -> &R { &self.renderer }
    pub fn renderer_mut(&mut self) -> &mut R { &mut self.renderer }
    pub fn step_interval(&self) -> Duration { self.clock.interval() }

    /// # Panics
    /// If `interval` is zero.
    pub fn set_step_interval(&mut self, interval: Duration) {
        self.clock.set_interval(interval);
    }

    /// State of (x, y), or `None` outside the board.
    pub fn is_alive(&self, x: isize, y: isize) -> Option<bool> {
        self.board.contains(x, y).then(|| self.board.get(x as usize, y as usize))
    }

    /// # Panics
    /// If (x, y) is outside the board.
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        self.board.neighbor_count(x, y)
    }

    pub fn subscribe(&mut self, callback: impl FnMut(u64) + 'static) -> Subscription {
        self.generation_changed.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, handle: Subscription) -> bool {
        self.generation_changed.unsubscribe(handle)
    }

    /// Sends the current generation to every subscriber without stepping.
    pub fn announce(&mut self) {
        self.generation_changed.emit(self.generation);
    }

    pub fn set_running(&mut self, running: bool) {
        let state = if running { SimulationState::Running } else { SimulationState::Editing };
        if state != self.state {
            info!("Simulation {:?} -> {:?} at generation {}", self.state, state, self.generation);
            self.state = state;
        }
    }

    /// Flips between Editing and Running and returns the new state.
    pub fn toggle_running(&mut self) -> SimulationState {
        self.set_running(!self.is_running());
        self.state
    }

    /// Flips the cell at (x, y). Returns `false` without touching anything
    /// when the cell is off the board or the simulation is running.
    pub fn toggle_cell(&mut self, x: isize, y: isize) -> bool {
        if self.is_running() || !self.board.contains(x, y) {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        let alive = self.board.flip(x, y);
        trace!("Toggled ({x}, {y}) -> {alive}");
        self.notify(CellChange { x, y, alive });
        true
    }

    /// Advances one generation. The counter is bumped and announced before
    /// the rule is applied.
    pub fn step(&mut self) {
        self.generation += 1;
        self.generation_changed.emit(self.generation);

        let changes = self.board.next_generation();
        let born = changes.iter().filter(|c| c.alive).count();
        debug!("Generation {}: {} born, {} died, population {}",
               self.generation, born, changes.len() - born, self.board.population());
        for change in changes {
            self.notify(change);
        }
    }

    /// Feeds frame time to the clock and runs every step that has come due.
    /// Returns the number of steps taken; always 0 while editing.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let steps = self.clock.tick(elapsed);
        for _ in 0..steps {
            self.step();
        }
        steps
    }

    /// Kills every cell. Editing only.
    pub fn clear(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        info!("Clearing board ({} live cells)", self.board.population());
        self.kill_all();
        true
    }

    /// Replaces the board contents with `pattern`, centred. Editing only.
    pub fn stamp(&mut self, pattern: &Pattern) -> bool {
        if self.is_running() {
            return false;
        }
        info!("Stamping pattern {}", pattern.name);
        self.kill_all();
        let cells: Vec<_> = pattern.placed(self.width(), self.height()).collect();
        for (x, y) in cells {
            if !self.board.get(x, y) {
                self.board.set(x, y, true);
                self.notify(CellChange { x, y, alive: true });
            }
        }
        true
    }

    /// Replaces the board contents with noise: each cell is alive with
    /// probability `density` (clamped to 0..=1). The same seed always yields
    /// the same board. Editing only.
    pub fn randomize(&mut self, seed: u64, density: f64) -> bool {
        if self.is_running() {
            return false;
        }
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        info!("Randomizing board (seed {seed}, density {density:.2})");
        self.kill_all();
        let mut rng = StdRng::seed_from_u64(seed);
        for y in 0..self.height() {
            for x in 0..self.width() {
                if rng.gen_bool(density) {
                    self.board.set(x, y, true);
                    self.notify(CellChange { x, y, alive: true });
                }
            }
        }
        true
    }

    fn kill_all(&mut self) {
        let alive: Vec<_> = self.board.alive_cells().collect();
        for (x, y) in alive {
            self.board.set(x, y, false);
            self.notify(CellChange { x, y, alive: false });
        }
    }

    fn notify(&mut self, change: CellChange) {
        if change.alive {
            self.renderer.create_visual(change.x, change.y);
        } else {
            self.renderer.destroy_visual(change.x, change.y);
        }
    }
}

impl Default for LifeGrid<NullRenderer> {
    fn default() -> Self {
        Self::with_renderer(Board::default(), StepClock::default(), NullRenderer)
    }
}
