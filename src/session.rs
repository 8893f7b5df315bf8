//! Game session: menu/level state, seed text editing and input routing
//!
//! The presentation layer owns one `GameSession`, feeds it input each
//! frame and reads back the grid, seed text and board type to draw.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{self, BoardType, Grid, Trace};
use crate::consts::MAX_SEED_DIGITS;
use crate::error::BoardError;
use crate::layout::Layout;
use crate::settings::Settings;

/// Character the input layer sends for the backspace key
pub const BACKSPACE: char = '\u{8}';

/// Largest seed the text field can hold
pub const MAX_SEED: u32 = 999_999;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Board type picker
    #[default]
    Menu,
    /// Playing a generated board
    Level,
}

/// Input gathered by the presentation layer for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer position while the primary button is held
    pub pointer: Option<Vec2>,
    /// Characters typed this frame, in order
    pub chars: Vec<char>,
}

/// Parse seed text; empty text means seed 0
pub fn parse_seed(text: &str) -> Result<u32, BoardError> {
    if text.is_empty() {
        return Ok(0);
    }
    text.parse()
        .map_err(|_| BoardError::InvalidSeedText(text.to_string()))
}

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    board_type: BoardType,
    seed: u32,
    seed_text: String,
    layout: Layout,
    grid: Grid,
}

impl GameSession {
    /// Start in the menu with a board already generated for the default type
    pub fn new(settings: &Settings) -> Self {
        let settings = settings.clamped();
        let seed = match settings.seed {
            Some(seed) if seed > MAX_SEED => {
                log::warn!("Seed {seed} has more than {MAX_SEED_DIGITS} digits, using {MAX_SEED}");
                MAX_SEED
            }
            Some(seed) => seed,
            None => rand::rng().random_range(1000..=9999),
        };
        let layout = Layout::new(
            settings.window_width,
            settings.window_height,
            settings.board_size,
        );

        let mut session = Self {
            state: GameState::Menu,
            board_type: BoardType::default(),
            seed,
            seed_text: format!("{seed:04}"),
            layout,
            grid: Grid::new(settings.board_size),
        };
        log::info!("New session with seed {}", session.seed_text);
        session.regenerate();
        session
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board_type(&self) -> BoardType {
        self.board_type
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn seed_text(&self) -> &str {
        &self.seed_text
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Emitter color for the current board type
    pub fn accent(&self) -> [u8; 4] {
        self.board_type.accent()
    }

    /// Throw away the board and build it again from the current seed and type
    fn regenerate(&mut self) {
        let size = self.layout.board_size;
        self.grid = board::generate(size, self.board_type, self.seed).unwrap_or_else(|err| {
            log::warn!("{err}; falling back to a board without objects");
            Grid::bordered(size)
        });
        self.grid.update_positions(&self.layout);
    }

    /// Viewport changed: recompute every cell position
    pub fn resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            log::debug!("Ignoring resize to {width}x{height}");
            return;
        }
        self.layout = Layout::new(width, height, self.layout.board_size);
        self.grid.update_positions(&self.layout);
    }

    /// Menu -> Level with the chosen board type
    pub fn select_board_type(&mut self, index: u8) -> Result<(), BoardError> {
        let board_type = BoardType::try_from(index)?;
        if self.state != GameState::Menu {
            log::debug!("Board type selection ignored outside the menu");
            return Ok(());
        }
        self.board_type = board_type;
        self.state = GameState::Level;
        log::info!("Entering level: {}", board_type.label());
        self.regenerate();
        Ok(())
    }

    /// Level -> Menu; the board is left as it is
    pub fn click_back(&mut self) {
        if self.state == GameState::Level {
            self.state = GameState::Menu;
            log::info!("Back to menu");
        }
    }

    /// Pulse the emitter at `(col, row)`; `None` when nothing fired
    pub fn click_cell(&mut self, col: usize, row: usize) -> Result<Option<Trace>, BoardError> {
        if self.state != GameState::Level {
            return Ok(None);
        }
        board::pulse_emitter(&mut self.grid, col, row)
    }

    /// Append a digit to the seed text. Returns false when the input was rejected.
    pub fn digit_key(&mut self, digit: u8) -> bool {
        if self.state != GameState::Level {
            return false;
        }
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            log::debug!("Ignoring non-digit key {digit}");
            return false;
        };
        if self.seed_text.len() >= MAX_SEED_DIGITS {
            return false;
        }
        // A padded seed sheds its leading zero instead of growing
        if self.seed_text.len() == MAX_SEED_DIGITS - 1 && self.seed_text.starts_with('0') {
            self.seed_text.remove(0);
        }
        self.seed_text.push(ch);
        self.apply_seed_text();
        true
    }

    /// Drop the last seed digit. Returns false when there was nothing to remove.
    pub fn backspace_key(&mut self) -> bool {
        if self.state != GameState::Level || self.seed_text.pop().is_none() {
            return false;
        }
        self.apply_seed_text();
        true
    }

    /// Route one typed character (digits and backspace; everything else is ignored)
    pub fn handle_char(&mut self, ch: char) -> bool {
        match ch {
            BACKSPACE => self.backspace_key(),
            '0'..='9' => self.digit_key(ch as u8 - b'0'),
            _ => false,
        }
    }

    fn apply_seed_text(&mut self) {
        self.seed = parse_seed(&self.seed_text).unwrap_or_else(|err| {
            log::warn!("{err}; using seed 0");
            0
        });
        log::info!("Seed changed to {}", self.seed);
        self.regenerate();
    }

    /// Advance charge decay by one frame (only while a level is showing)
    pub fn tick(&mut self) {
        if self.state == GameState::Level {
            board::decay(&mut self.grid);
        }
    }

    /// Held pointer at `point`: menu buttons, emitters, then the back control
    pub fn pointer_down(&mut self, point: Vec2) -> Result<(), BoardError> {
        match self.state {
            GameState::Menu => {
                if let Some(board_type) = self.layout.mode_button_at(point) {
                    self.select_board_type(board_type.index())?;
                }
            }
            GameState::Level => {
                let hits: Vec<(usize, usize)> = self
                    .grid
                    .iter()
                    .filter(|(col, row, cell)| {
                        cell.is_emitter() && self.layout.node_hit(*col, *row, point)
                    })
                    .map(|(col, row, _)| (col, row))
                    .collect();
                for (col, row) in hits {
                    self.click_cell(col, row)?;
                }
                if self.layout.back_button_hit(point) {
                    self.click_back();
                }
            }
        }
        Ok(())
    }

    /// Run one frame: decay, typed keys, then the held pointer
    pub fn frame(&mut self, input: &FrameInput) -> Result<(), BoardError> {
        if self.state == GameState::Level {
            self.tick();
            for &ch in &input.chars {
                self.handle_char(ch);
            }
        }
        if let Some(point) = input.pointer {
            self.pointer_down(point)?;
        }
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
