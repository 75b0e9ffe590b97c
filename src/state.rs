use macroquad::prelude::*;

use crate::constants::{CELL_SIZE, GRID_CELLS};
use crate::elements::Element;

/// One cell of the logical board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Board-centered world position. Cell (0, 0, 0) lands at the grid's
    /// negative corner; link rows sit half a cell above the floor plane.
    pub fn to_world(self) -> Vec3 {
        let half = GRID_CELLS as f32 * CELL_SIZE * 0.5;
        vec3(
            self.x as f32 * CELL_SIZE - half,
            self.y as f32 * CELL_SIZE + 0.5,
            self.z as f32 * CELL_SIZE - half,
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GridSize {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// A serpent: an ordered chain of grid cells, head first.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: &'static str,
    pub name: &'static str,
    pub element: Element,
    pub color: Color,
    pub links: Vec<GridPos>,
}

/// A static pickup at a fixed cell.
#[derive(Debug, Clone, Copy)]
pub struct Orb {
    pub pos: GridPos,
    pub element: Element,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: GridSize,
    pub players: Vec<Player>,
    pub orbs: Vec<Orb>,
}

/// Placeholder score shown in the HUD. Nothing updates it.
pub const MOCK_SCORE: i32 = 120;

/// The fixed board shown by the game screen. Created once at screen entry
/// and never mutated.
pub fn mock_state() -> GameState {
    GameState {
        grid: GridSize { x: 20, y: 20, z: 20 },
        players: vec![
            Player {
                id: "player1",
                name: "Your Serpent",
                element: Element::Fire,
                color: Color::from_rgba(255, 68, 68, 255),
                links: vec![
                    GridPos::new(10, 0, 10),
                    GridPos::new(11, 0, 10),
                    GridPos::new(12, 0, 10),
                    GridPos::new(13, 0, 10),
                ],
            },
            Player {
                id: "bot1",
                name: "Earth Wyrm",
                element: Element::Earth,
                color: Color::from_rgba(68, 255, 68, 255),
                links: vec![
                    GridPos::new(5, 0, 15),
                    GridPos::new(5, 0, 14),
                    GridPos::new(5, 0, 13),
                    GridPos::new(5, 0, 12),
                ],
            },
        ],
        orbs: vec![
            Orb {
                pos: GridPos::new(8, 0, 8),
                element: Element::Water,
                color: Color::from_rgba(68, 68, 255, 255),
            },
            Orb {
                pos: GridPos::new(15, 0, 5),
                element: Element::Fire,
                color: Color::from_rgba(255, 68, 68, 255),
            },
            Orb {
                pos: GridPos::new(3, 0, 18),
                element: Element::Wind,
                color: Color::from_rgba(68, 255, 255, 255),
            },
            Orb {
                pos: GridPos::new(18, 0, 12),
                element: Element::Earth,
                color: Color::from_rgba(68, 255, 68, 255),
            },
            Orb {
                pos: GridPos::new(10, 0, 3),
                element: Element::Void,
                color: Color::from_rgba(255, 68, 255, 255),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_state_shape() {
        let state = mock_state();
        assert_eq!(state.players.len(), 2);
        assert_eq!(state.orbs.len(), 5);
        assert_eq!(state.grid.x, 20);
        assert_eq!(state.grid.y, 20);
        assert_eq!(state.grid.z, 20);
        for p in &state.players {
            assert_eq!(p.links.len(), 4);
        }
        let total_links: usize = state.players.iter().map(|p| p.links.len()).sum();
        assert_eq!(total_links, 8);
    }

    #[test]
    fn to_world_centers_the_board() {
        // Cell (10, 0, 10) is the first head in the mock state; it maps to
        // the board center column.
        let w = GridPos::new(10, 0, 10).to_world();
        assert!((w.x - 0.0).abs() < 1e-6);
        assert!((w.y - 0.5).abs() < 1e-6);
        assert!((w.z - 0.0).abs() < 1e-6);

        let corner = GridPos::new(0, 0, 0).to_world();
        assert!((corner.x + 10.0).abs() < 1e-6);
        assert!((corner.z + 10.0).abs() < 1e-6);
    }
}
