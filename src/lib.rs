//! Lightbox - a grid of mirrors, blocks and border emitters
//!
//! Core modules:
//! - `board`: Deterministic engine (grid, catalog, generator, light, decay)
//! - `layout`: Viewport geometry and pointer hit testing
//! - `session`: Menu/level state machine and seed text editing
//! - `settings`: Configuration loaded from JSON
//! - `error`: Error kinds shared by the modules above

pub mod board;
pub mod error;
pub mod layout;
pub mod session;
pub mod settings;

pub use error::{BoardError, SettingsError};
pub use layout::Layout;
pub use session::{FrameInput, GameSession, GameState};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Storage capacity per axis; configured board sizes are clamped to this
    pub const MAX_BOARD_SIZE: usize = 16;
    /// Smallest board whose interior still fits one 3x3 object
    pub const MIN_BOARD_SIZE: usize = 5;
    pub const DEFAULT_BOARD_SIZE: usize = 10;

    pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;
    pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

    /// Charge ceiling (also the brightness used for full opacity)
    pub const MAX_CHARGE: f32 = 100.0;
    /// Charge lost by every cell once per tick
    pub const DECAY_STEP: f32 = 0.25;
    /// Value multiplier applied by both mirror types
    pub const MIRROR_ATTENUATION: f32 = 0.9;

    /// Objects stamped per board (inclusive range)
    pub const MIN_OBJECTS: usize = 2;
    pub const MAX_OBJECTS: usize = 4;
    /// Anchor rolls allowed per object before generation gives up
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 512;

    /// Seed text holds at most this many digits
    pub const MAX_SEED_DIGITS: usize = 6;

    /// Node radius as a fraction of the cell pitch
    pub const NODE_RADIUS_FACTOR: f32 = 0.45;
    /// Menu buttons: hit radius, gap between buttons, distance from bottom edge
    pub const MODE_BUTTON_SIZE: f32 = 60.0;
    pub const MODE_BUTTON_GAP: f32 = 80.0;
    pub const MODE_BUTTON_BOTTOM_OFFSET: f32 = 200.0;
    /// Back control rectangle (x, y, width, height) in screen space
    pub const BACK_BUTTON_RECT: (f32, f32, f32, f32) = (100.0, 680.0, 100.0, 25.0);

    /// Outline/text color for the board frame (RGBA)
    pub const BOX_COLOR: [u8; 4] = [99, 110, 114, 255];
}
