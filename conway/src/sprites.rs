// sprites.rs - Visual layer for live cells

use std::collections::HashSet;

use life_core::CellRenderer;

/// The set of cell visuals currently on screen. Filled purely from the
/// simulation's create/destroy notifications; the board is never read.
#[derive(Debug, Default)]
pub struct CellSprites {
    cells: HashSet<(usize, usize)>,
}

impl CellSprites {
    pub fn iter(&self) -> impl Iterator<Item = &(usize, usize)> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl CellRenderer for CellSprites {
    fn create_visual(&mut self, x: usize, y: usize) {
        if !self.cells.insert((x, y)) {
            log::warn!("Visual already present at ({x}, {y})");
        }
    }

    fn destroy_visual(&mut self, x: usize, y: usize) {
        if !self.cells.remove(&(x, y)) {
            log::warn!("No visual to destroy at ({x}, {y})");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::{LifeConfig, LifeGrid, Pattern};

    #[test]
    fn test_sprites_follow_simulation() {
        let config = LifeConfig { width: 12, height: 12, ..Default::default() };
        let mut life = LifeGrid::from_config(&config, CellSprites::default()).unwrap();
        life.stamp(Pattern::find("Toad").unwrap());
        assert_eq!(life.renderer().len(), 6);

        life.step();
        let mut drawn: Vec<_> = life.renderer().iter().copied().collect();
        let mut alive: Vec<_> = life.board().alive_cells().collect();
        drawn.sort();
        alive.sort();
        assert_eq!(drawn, alive);
    }
}
