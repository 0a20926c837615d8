//! Board rendering
//!
//! The simulation never draws; the match loop hands a [`Scene`] and the
//! resolved trajectories to a [`Render`] implementation.

pub mod ascii;
pub mod canvas;

pub use ascii::AsciiRenderer;
pub use canvas::{Canvas, Cell};

use std::io;

use crate::sim::{Aabb, GameState, Player, Trajectory};

/// Fill colour of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Blue,
    Red,
    Black,
}

impl Tint {
    /// Colour of a player's tank
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::One => Tint::Blue,
            Player::Two => Tint::Red,
        }
    }

    /// ANSI SGR sequence for this colour
    pub fn ansi(&self) -> &'static str {
        match self {
            Tint::Blue => "\x1b[34m",
            Tint::Red => "\x1b[31m",
            Tint::Black => "\x1b[90m",
        }
    }
}

/// Everything drawn before a shot
#[derive(Debug, Clone)]
pub struct Scene {
    pub title: String,
    /// Wind readout, if any
    pub wind: Option<f64>,
    pub boxes: Vec<(Aabb, Tint)>,
}

impl Scene {
    /// Board as seen by the player about to shoot
    pub fn for_turn(state: &GameState, player: Player) -> Self {
        Self {
            title: format!("Player {}'s Turn", player.number()),
            wind: Some(state.wind),
            boxes: vec![
                (*state.tank(Player::One), Tint::for_player(Player::One)),
                (*state.tank(Player::Two), Tint::for_player(Player::Two)),
                (state.obstacle, Tint::Black),
            ],
        }
    }
}

/// A surface the match loop can draw on
pub trait Render {
    /// Clear and draw the board
    fn draw_board(&mut self, scene: &Scene) -> io::Result<()>;

    /// Overlay a trajectory on the current board and present it
    fn draw_trajectory(&mut self, path: &Trajectory) -> io::Result<()>;

    /// Show a line of text below the board
    fn message(&mut self, text: &str) -> io::Result<()>;
}
