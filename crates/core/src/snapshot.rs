use crate::types::GameState;

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub state: GameState,
    pub score: u32,
    pub paddle_x: u16,
    pub object_x: u16,
    pub object_y: u16,
    pub width: u16,
    pub height: u16,
}

impl GameSnapshot {
    /// Row the paddle is drawn on.
    pub fn paddle_row(&self) -> u16 {
        self.height.saturating_sub(1)
    }

    pub fn is_object_at(&self, x: u16, y: u16) -> bool {
        self.object_x == x && self.object_y == y
    }

    pub fn is_paddle_at(&self, x: u16, y: u16) -> bool {
        self.paddle_x == x && self.paddle_row() == y
    }
}
