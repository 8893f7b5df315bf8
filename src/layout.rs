//! Screen-space layout derived from the viewport and board size
//!
//! Positions here are a cache for whoever draws the board; nothing in the
//! engine depends on them except pointer hit testing.

use glam::Vec2;

use crate::board::BoardType;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub board_size: usize,
}

impl Layout {
    pub fn new(width: f32, height: f32, board_size: usize) -> Self {
        Self {
            width,
            height,
            board_size: board_size.max(1),
        }
    }

    /// Distance between neighbouring cell centers (the board is sized to the viewport height)
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.height / self.board_size as f32
    }

    /// Drawn radius of an emitter node; also its click radius
    #[inline]
    pub fn node_radius(&self) -> f32 {
        NODE_RADIUS_FACTOR * self.pitch()
    }

    pub fn cell_center(&self, col: usize, row: usize) -> Vec2 {
        let pitch = self.pitch();
        Vec2::new((col as f32 + 0.5) * pitch, (row as f32 + 0.5) * pitch)
    }

    /// Center of the menu button for `board_type`
    pub fn mode_button_center(&self, board_type: BoardType) -> Vec2 {
        let r = self.node_radius();
        let x_start = (self.width - (4.0 * r + 3.0 * MODE_BUTTON_GAP)) / 2.0;
        let i = f32::from(board_type.index());
        Vec2::new(
            x_start + (r + MODE_BUTTON_GAP) * i + r / 2.0,
            self.height - MODE_BUTTON_BOTTOM_OFFSET,
        )
    }

    /// Menu button under `point`, if any
    pub fn mode_button_at(&self, point: Vec2) -> Option<BoardType> {
        BoardType::ALL
            .into_iter()
            .find(|&ty| point.distance(self.mode_button_center(ty)) <= MODE_BUTTON_SIZE / 2.0)
    }

    /// Back control as `(min, max)` corners
    pub fn back_button(&self) -> (Vec2, Vec2) {
        let (x, y, w, h) = BACK_BUTTON_RECT;
        (Vec2::new(x, y), Vec2::new(x + w, y + h))
    }

    pub fn back_button_hit(&self, point: Vec2) -> bool {
        let (min, max) = self.back_button();
        point.cmpge(min).all() && point.cmple(max).all()
    }

    /// Whether `point` lies on the node drawn for `(col, row)`
    pub fn node_hit(&self, col: usize, row: usize, point: Vec2) -> bool {
        point.distance(self.cell_center(col, row)) <= self.node_radius()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT, DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let layout = Layout::default();
        assert_eq!(layout.pitch(), 80.0);
        assert_eq!(layout.node_radius(), 36.0);
        assert_eq!(layout.cell_center(0, 0), Vec2::new(40.0, 40.0));
        assert_eq!(layout.cell_center(9, 4), Vec2::new(760.0, 360.0));
    }

    #[test]
    fn test_mode_buttons_are_spread_along_bottom() {
        let layout = Layout::default();
        // r = 36: x_start = (800 - 384) / 2 = 208, step = 116
        let first = layout.mode_button_center(BoardType::Blocks);
        let last = layout.mode_button_center(BoardType::Prisms);
        assert_eq!(first, Vec2::new(226.0, 600.0));
        assert_eq!(last, Vec2::new(574.0, 600.0));

        assert_eq!(layout.mode_button_at(first), Some(BoardType::Blocks));
        assert_eq!(
            layout.mode_button_at(first + Vec2::new(116.0, 10.0)),
            Some(BoardType::SplitMirrors)
        );
        assert_eq!(layout.mode_button_at(Vec2::new(400.0, 100.0)), None);
    }

    #[test]
    fn test_back_button_rect() {
        let layout = Layout::default();
        assert!(layout.back_button_hit(Vec2::new(100.0, 680.0)));
        assert!(layout.back_button_hit(Vec2::new(150.0, 690.0)));
        assert!(!layout.back_button_hit(Vec2::new(201.0, 690.0)));
        assert!(!layout.back_button_hit(Vec2::new(150.0, 679.0)));
    }

    #[test]
    fn test_node_hit_uses_radius() {
        let layout = Layout::default();
        assert!(layout.node_hit(0, 3, Vec2::new(40.0, 280.0 + 35.0)));
        assert!(!layout.node_hit(0, 3, Vec2::new(40.0, 280.0 + 37.0)));
    }
}
