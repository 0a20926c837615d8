//! Match loop
//!
//! Wires the simulation to its collaborators: each turn draws the board,
//! asks for velocity and angle, resolves the shot and draws its path.

use crate::error::{GameError, SimError};
use crate::input::{NumberSource, ValidRange};
use crate::renderer::{Render, Scene};
use crate::settings::Settings;
use crate::sim::{GameState, Player, ShotOutcome, TurnInput, TurnReport, take_turn};

pub const VELOCITY_PROMPT: &str = "Enter velocity > ";
pub const ANGLE_PROMPT: &str = "Enter angle > ";
pub const CONTINUE_PROMPT: &str = "Press Enter to Continue";

/// A match in progress
pub struct Game<I, R> {
    state: GameState,
    velocity_range: ValidRange,
    angle_range: ValidRange,
    input: I,
    renderer: R,
}

impl<I: NumberSource, R: Render> Game<I, R> {
    /// Start a match on a board generated from `seed`
    pub fn new(seed: u64, settings: &Settings, input: I, renderer: R) -> Result<Self, GameError> {
        let state = GameState::new(seed, settings)?;
        Ok(Self::from_state(state, settings, input, renderer))
    }

    /// Continue from an existing state
    pub fn from_state(state: GameState, settings: &Settings, input: I, renderer: R) -> Self {
        Self {
            state,
            velocity_range: settings.velocity_range.into(),
            angle_range: settings.angle_range.into(),
            input,
            renderer,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_parts(self) -> (GameState, I, R) {
        (self.state, self.input, self.renderer)
    }

    /// Play turns until someone is hit; returns the winner
    pub fn play(&mut self) -> Result<Player, GameError> {
        log::info!(
            "Game started (seed {}, wind {:.2})",
            self.state.seed,
            self.state.wind
        );

        loop {
            let report = self.play_turn()?;
            if report.outcome().is_hit() {
                break;
            }
            self.input.pause(CONTINUE_PROMPT)?;
        }

        let winner = self
            .state
            .winner()
            .ok_or_else(|| std::io::Error::other("game loop ended without a winner"))?;
        self.renderer
            .message(&format!("Congratulations, player {}!", winner.number()))?;
        log::info!(
            "Player {} won after {} shots",
            winner.number(),
            self.state.shots_fired
        );
        Ok(winner)
    }

    /// Draw the board, collect one shot and resolve it
    pub fn play_turn(&mut self) -> Result<TurnReport, GameError> {
        let player = match self.state.winner() {
            Some(winner) => return Err(SimError::GameFinished { winner }.into()),
            None => self.state.active_player().unwrap_or(Player::One),
        };

        self.renderer.draw_board(&Scene::for_turn(&self.state, player))?;

        let velocity = self.input.get_number(VELOCITY_PROMPT, self.velocity_range)?;
        let angle_deg = self.input.get_number(ANGLE_PROMPT, self.angle_range)?;

        let report = take_turn(&mut self.state, TurnInput { velocity, angle_deg })?;

        self.renderer.draw_trajectory(&report.shot.path)?;
        let summary = match report.outcome() {
            ShotOutcome::Miss => format!("Player {} missed.", player.number()),
            ShotOutcome::ObstacleBlocked => {
                format!("Player {}'s shot hit the obstacle.", player.number())
            }
            ShotOutcome::Hit => format!("Player {} hit the enemy tank!", player.number()),
        };
        self.renderer.message(&summary)?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::sim::{Aabb, GamePhase, Physics, Trajectory};
    use std::io;

    /// Records what it was asked to draw
    #[derive(Default)]
    struct Recorder {
        titles: Vec<String>,
        paths: Vec<Trajectory>,
        messages: Vec<String>,
    }

    impl Render for Recorder {
        fn draw_board(&mut self, scene: &Scene) -> io::Result<()> {
            self.titles.push(scene.title.clone());
            Ok(())
        }

        fn draw_trajectory(&mut self, path: &Trajectory) -> io::Result<()> {
            self.paths.push(path.clone());
            Ok(())
        }

        fn message(&mut self, text: &str) -> io::Result<()> {
            self.messages.push(text.to_string());
            Ok(())
        }
    }

    fn duel() -> GameState {
        GameState::with_layout(
            [
                Aabb::new(0.0, 5.0, 0.0, 5.0).unwrap(),
                Aabb::new(90.0, 95.0, 0.0, 5.0).unwrap(),
            ],
            Aabb::new(40.0, 60.0, 0.0, 10.0).unwrap(),
            0.0,
            Physics {
                sample_count: 2000,
                ..Physics::default()
            },
        )
    }

    fn game(script: &[f64]) -> Game<ScriptedInput, Recorder> {
        Game::from_state(
            duel(),
            &Settings::default(),
            ScriptedInput::new(script.iter().copied()),
            Recorder::default(),
        )
    }

    #[test]
    fn test_full_match() {
        // Player one drops a shot, player two drops a shot, player one lobs
        let mut game = game(&[0.0, 90.0, 0.0, 90.0, 30.0, 45.0]);
        let winner = game.play().unwrap();
        assert_eq!(winner, Player::One);

        let (state, input, recorder) = game.into_parts();
        assert_eq!(state.phase, GamePhase::GameOver { winner: Player::One });
        assert_eq!(state.shots_fired, 3);
        assert_eq!(input.remaining(), 0);
        assert_eq!(
            recorder.titles,
            ["Player 1's Turn", "Player 2's Turn", "Player 1's Turn"]
        );
        assert_eq!(recorder.paths.len(), 3);
        assert_eq!(recorder.messages.last().unwrap(), "Congratulations, player 1!");
    }

    #[test]
    fn test_player_two_can_win() {
        let mut game = game(&[0.0, 90.0, 30.0, 45.0]);
        assert_eq!(game.play().unwrap(), Player::Two);
        let (_, _, recorder) = game.into_parts();
        assert!(recorder.messages.contains(&"Player 1 missed.".to_string()));
        assert!(recorder.messages.contains(&"Player 2 hit the enemy tank!".to_string()));
    }

    #[test]
    fn test_out_of_range_input_is_skipped() {
        // 500 exceeds the velocity range and 270 the angle range
        let mut game = game(&[500.0, 0.0, 270.0, 90.0]);
        let report = game.play_turn().unwrap();
        assert_eq!(report.outcome(), ShotOutcome::Miss);
        assert_eq!(report.launch.speed, 0.0);
        assert_eq!(report.launch.angle_deg, 90.0);
    }

    #[test]
    fn test_exhausted_input_stops_the_match() {
        let mut game = game(&[0.0, 90.0, 10.0]);
        let err = game.play().unwrap_err();
        assert!(matches!(err, GameError::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
        assert_eq!(game.state().shots_fired, 1);
        assert_eq!(game.state().active_player(), Some(Player::Two));
    }

    #[test]
    fn test_no_turns_after_game_over() {
        let mut game = game(&[30.0, 45.0, 0.0, 90.0]);
        assert_eq!(game.play().unwrap(), Player::One);
        assert!(matches!(
            game.play_turn(),
            Err(GameError::Sim(SimError::GameFinished { winner: Player::One }))
        ));
    }

    #[test]
    fn test_invalid_settings_rejected_at_setup() {
        let settings = Settings {
            wind_limit: -1.0,
            ..Settings::default()
        };
        let result = Game::new(7, &settings, ScriptedInput::default(), Recorder::default());
        assert!(matches!(
            result,
            Err(GameError::Sim(SimError::InvalidSettings(_)))
        ));
    }

    #[test]
    fn test_seeded_game_setup() {
        let settings = Settings::default();
        let game = Game::new(42, &settings, ScriptedInput::default(), Recorder::default()).unwrap();
        assert_eq!(game.state().seed, 42);
        assert_eq!(*game.state(), GameState::new(42, &settings).unwrap());
    }
}
