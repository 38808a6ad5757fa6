// lib.rs - Conway's Game of Life core

//! Conway's Game of Life for an interactive, frame-driven front end.
//!
//! [`LifeGrid`] owns a fixed W×H board and advances it under the B3/S23
//! rule. It knows nothing about windows or input: cell visuals are pushed
//! to a [`CellRenderer`], clicks arrive as grid coordinates through
//! [`LifeGrid::toggle_cell`], and frame time is fed to
//! [`LifeGrid::advance`] while the simulation is running.
//!
//! ```rust
//! use std::time::Duration;
//! use life_core::{LifeGrid, Pattern};
//!
//! let mut life = LifeGrid::new(20, 20);
//! life.stamp(Pattern::find("Blinker").unwrap());
//! life.subscribe(|generation| println!("generation {generation}"));
//!
//! life.set_running(true);
//! life.advance(Duration::from_secs(2));
//! assert_eq!(life.generation(), 2);
//! ```

pub mod board;
pub mod clock;
pub mod config;
pub mod events;
pub mod life;
pub mod patterns;

pub use board::{Board, CellChange};
pub use clock::StepClock;
pub use config::{ConfigError, LifeConfig, MAX_CELLS, MAX_STEP_INTERVAL_SECS, MIN_STEP_INTERVAL_SECS};
pub use events::{CellRenderer, NullRenderer, Observers, Subscription};
pub use life::{LifeGrid, SimulationState};
pub use patterns::{Pattern, PATTERNS};
