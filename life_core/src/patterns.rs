// patterns.rs - Named seed patterns

/// A named arrangement of live cells. Offsets are (x, y) from the
/// pattern's top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

impl Pattern {
    /// Looks a pattern up by name, ignoring case.
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box (width, height).
    pub fn size(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Absolute coordinates of the pattern centred on a `width`×`height`
    /// board. Cells that would land off the board are dropped.
    pub fn placed(&self, width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (w, h) = self.size();
        let ox = (width as isize - w as isize) / 2;
        let oy = (height as isize - h as isize) / 2;
        self.cells.iter().filter_map(move |&(x, y)| {
            let (ax, ay) = (ox + x as isize, oy + y as isize);
            (ax >= 0 && ay >= 0 && (ax as usize) < width && (ay as usize) < height)
                .then_some((ax as usize, ay as usize))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pattern_cells_are_unique() {
        for pattern in PATTERNS {
            let unique: HashSet<_> = pattern.cells.iter().collect();
            assert_eq!(unique.len(), pattern.cells.len(), "{} has duplicates", pattern.name);
        }
    }

    #[test]
    fn test_sizes() {
        assert_eq!(Pattern::find("blinker").unwrap().size(), (3, 1));
        assert_eq!(Pattern::find("Pulsar").unwrap().size(), (13, 13));
        assert_eq!(Pattern::find("Gosper Glider Gun").unwrap().size(), (36, 9));
        assert_eq!(Pattern::find("Gosper Glider Gun").unwrap().cells.len(), 36);
    }

    #[test]
    fn test_placed_is_centred() {
        let blinker = Pattern::find("Blinker").unwrap();
        let cells: Vec<_> = blinker.placed(5, 5).collect();
        assert_eq!(cells, vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_placed_drops_cells_off_small_board() {
        let gun = Pattern::find("Gosper Glider Gun").unwrap();
        let cells: Vec<_> = gun.placed(10, 10).collect();
        assert!(cells.len() < gun.cells.len());
        assert!(cells.iter().all(|&(x, y)| x < 10 && y < 10));
    }

    #[test]
    fn test_find_unknown() {
        assert!(Pattern::find("spaceship").is_none());
    }
}
