//! Game controller: the turn-by-turn state machine that ties the board engine,
//! the score tracker and the collaborator ports together.
//!
//! ```text
//!   Ready --start--> InProgress --changed move--> InProgress
//!                        |                 \
//!                        | Won (policy)     \ Lost
//!                        v                   v
//!                       Won ---------------> Lost
//!   any state --Quit--> Quit        Won/Lost --Restart--> InProgress
//! ```
//!
//! The controller owns the grid, the score and the random generator for the
//! whole session. It reaches the outside world only through [`InputSource`],
//! [`Renderer`] and [`HighScoreStore`].

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    app::GameConfig,
    board::{self, Direction, GameStatus, Grid},
    high_scores::{HighScoreEntry, HighScores, MAX_ENTRIES},
    ports::{HighScoreStore, InputSource, Renderer},
    score::Score,
};

/// A decoded player command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    ViewHighScores,
    Restart,
    Quit,
}

/// Controller lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerState {
    Ready,
    InProgress,
    Won,
    Lost,
    Quit,
}

/// What happens once the win tile appears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WinPolicy {
    /// Announce the win once, then keep playing until the board locks up
    #[default]
    Continue,
    /// End the game on the win, exactly like a loss
    Stop,
}

/// Which screen a frame asks the renderer to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Welcome,
    Board,
    HighScores(HighScores),
    /// Final score screen; `rank` is set when the score entered the table
    Summary {
        rank: Option<usize>,
        table: HighScores,
    },
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub grid: Grid,
    pub score: Score,
    pub high_score: u64,
    pub status: GameStatus,
    pub state: ControllerState,
    /// The game has ended; moves are ignored until restart
    pub game_over: bool,
    pub moves: u32,
    pub view: View,
}

/// Totals reported when a session ends
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub games_played: usize,
    pub final_score: u64,
    pub highest_tile: u32,
    pub best_score: u64,
    /// Rank earned by the last recorded game, if any
    pub last_rank: Option<usize>,
}

/// Turn-based game controller.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use terminal_2048::adapters::InMemoryHighScoreStore;
/// use terminal_2048::app::GameConfig;
/// use terminal_2048::board::Direction;
/// use terminal_2048::controller::{Command, ControllerState, GameController};
///
/// let store = InMemoryHighScoreStore::new();
/// let mut game = GameController::new(&GameConfig::default(), StdRng::seed_from_u64(1));
/// game.start();
/// assert_eq!(game.state(), ControllerState::InProgress);
///
/// for direction in Direction::ALL {
///     game.handle(Command::Move(direction), &store);
/// }
/// assert!(game.score().value() < 1_000);
/// ```
pub struct GameController<R: Rng> {
    grid: Grid,
    score: Score,
    state: ControllerState,
    moves: u32,
    win_tile: u32,
    win_policy: WinPolicy,
    rng: R,
    high_score: u64,
    /// Set once the win tile has been reached in the current game
    win_announced: bool,
    /// Whether the current game's score has already been offered to the store
    recorded: bool,
    /// A non-board view is on screen; an ignored command redraws the board
    overlay: bool,
    games_played: usize,
    last_rank: Option<usize>,
}

impl<R: Rng> GameController<R> {
    pub fn new(config: &GameConfig, rng: R) -> Self {
        Self {
            grid: Grid::empty(),
            score: Score::default(),
            state: ControllerState::Ready,
            moves: 0,
            win_tile: config.win_tile,
            win_policy: config.win_policy,
            rng,
            high_score: 0,
            win_announced: false,
            recorded: false,
            overlay: false,
            games_played: 0,
            last_rank: None,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// True once the current game has ended and only restart, quit or the
    /// high score view are accepted
    pub fn is_game_over(&self) -> bool {
        match self.state {
            ControllerState::Lost => true,
            ControllerState::Won => self.recorded,
            _ => false,
        }
    }

    /// Advisory engine status of the current grid
    pub fn status(&self) -> GameStatus {
        board::status(&self.grid, self.win_tile)
    }

    /// Seed the displayed high score, normally from [`HighScoreStore::load_top`]
    pub fn set_high_score(&mut self, value: u64) {
        self.high_score = value;
    }

    /// Begin a fresh game: new grid, zero score.
    pub fn start(&mut self) -> Frame {
        self.grid = board::initialize(&mut self.rng);
        self.score = Score::default();
        self.moves = 0;
        self.win_announced = false;
        self.recorded = false;
        self.overlay = false;
        self.state = ControllerState::InProgress;
        self.games_played += 1;
        info!("game {} started", self.games_played);
        self.frame(View::Board)
    }

    /// Frame describing the current state without changing it
    pub fn snapshot(&self) -> Frame {
        match self.state {
            ControllerState::Ready => self.frame(View::Welcome),
            _ => self.frame(View::Board),
        }
    }

    /// Process one command.
    ///
    /// Returns the frame to render, or `None` if the command was ignored (a
    /// move that changes nothing, or a move after the game has ended).
    pub fn handle<S>(&mut self, command: Command, store: &S) -> Option<Frame>
    where
        S: HighScoreStore + ?Sized,
    {
        if self.state == ControllerState::Quit {
            return None;
        }

        match command {
            Command::Quit => Some(self.quit(store)),
            Command::ViewHighScores => {
                self.overlay = true;
                Some(self.frame(View::HighScores(store.load_top(MAX_ENTRIES))))
            }
            Command::Restart => {
                if self.state != ControllerState::Ready {
                    self.finish_game(store, false);
                }
                Some(self.start())
            }
            Command::Move(direction) => match self.state {
                ControllerState::Ready => Some(self.start()),
                ControllerState::InProgress => self.play_move(direction, store),
                ControllerState::Won if self.win_policy == WinPolicy::Continue && !self.recorded => {
                    self.state = ControllerState::InProgress;
                    self.play_move(direction, store)
                        .or_else(|| Some(self.frame(View::Board)))
                }
                ControllerState::Won | ControllerState::Lost | ControllerState::Quit => {
                    self.redraw_if_covered()
                }
            },
        }
    }

    /// Drive a full session: render, read a command, update, render again,
    /// until the player quits or the input runs dry.
    ///
    /// # Errors
    ///
    /// Returns an error if the input source or renderer fails. Persistence
    /// failures are logged and never abort the session.
    pub fn run<I, D, S>(&mut self, input: &mut I, renderer: &mut D, store: &S) -> Result<SessionSummary>
    where
        I: InputSource + ?Sized,
        D: Renderer + ?Sized,
        S: HighScoreStore + ?Sized,
    {
        self.high_score = store.load_top(MAX_ENTRIES).top();
        renderer.render(&self.snapshot())?;

        while self.state != ControllerState::Quit {
            let command = input.next_command()?.unwrap_or(Command::Quit);
            if let Some(frame) = self.handle(command, store) {
                renderer.render(&frame)?;
            }
        }

        Ok(SessionSummary {
            games_played: self.games_played,
            final_score: self.score.value(),
            highest_tile: self.grid.highest_tile(),
            best_score: self.high_score.max(self.score.value()),
            last_rank: self.last_rank,
        })
    }

    fn play_move<S>(&mut self, direction: Direction, store: &S) -> Option<Frame>
    where
        S: HighScoreStore + ?Sized,
    {
        let outcome = board::apply_move(self.grid, direction);
        if !outcome.changed {
            debug!("move {direction:?} changed nothing");
            return self.redraw_if_covered();
        }

        self.score = self.score.apply(&outcome);
        self.grid = board::spawn_tile(outcome.grid, &mut self.rng);
        self.moves += 1;
        self.overlay = false;
        debug!(
            "move {} {direction:?}: +{} -> {}",
            self.moves,
            outcome.merge_total(),
            self.score
        );

        match board::status(&self.grid, self.win_tile) {
            GameStatus::Won if !self.win_announced => {
                info!("win tile {} reached with score {}", self.win_tile, self.score);
                self.win_announced = true;
                self.state = ControllerState::Won;
                if self.win_policy == WinPolicy::Stop || !board::can_move(&self.grid) {
                    Some(self.end_game(store))
                } else {
                    Some(self.frame(View::Board))
                }
            }
            // Already announced: a locked board still ends the game
            GameStatus::Won if !board::can_move(&self.grid) => {
                self.state = ControllerState::Lost;
                Some(self.end_game(store))
            }
            GameStatus::Lost => {
                info!("no moves left; final score {}", self.score);
                self.state = ControllerState::Lost;
                Some(self.end_game(store))
            }
            GameStatus::Won | GameStatus::InProgress => Some(self.frame(View::Board)),
        }
    }

    fn end_game<S>(&mut self, store: &S) -> Frame
    where
        S: HighScoreStore + ?Sized,
    {
        let (rank, table) = self.finish_game(store, true);
        self.overlay = true;
        self.frame(View::Summary { rank, table })
    }

    fn quit<S>(&mut self, store: &S) -> Frame
    where
        S: HighScoreStore + ?Sized,
    {
        let view = if self.state == ControllerState::Ready {
            View::Board
        } else {
            let (rank, table) = self.finish_game(store, false);
            View::Summary { rank, table }
        };
        info!("session ended after {} game(s)", self.games_played);
        self.state = ControllerState::Quit;
        self.frame(view)
    }

    /// Offer the current score to the store once per game.
    ///
    /// An abandoned game (quit or restart mid-play) is only offered when it
    /// scored something.
    fn finish_game<S>(&mut self, store: &S, game_over: bool) -> (Option<usize>, HighScores)
    where
        S: HighScoreStore + ?Sized,
    {
        if self.recorded || (!game_over && self.score.value() == 0) {
            return (None, store.load_top(MAX_ENTRIES));
        }
        self.recorded = true;

        let entry = HighScoreEntry::now(self.score.value(), &self.grid);
        match store.record(entry) {
            Ok(outcome) => {
                self.high_score = outcome.table.top();
                self.last_rank = outcome.rank;
                if let Some(rank) = outcome.rank {
                    info!("score {} entered the high score table at #{rank}", self.score);
                }
                (outcome.rank, outcome.table)
            }
            Err(e) => {
                warn!("could not record high score: {e}");
                self.high_score = self.high_score.max(self.score.value());
                (None, store.load_top(MAX_ENTRIES))
            }
        }
    }

    fn redraw_if_covered(&mut self) -> Option<Frame> {
        if self.overlay {
            self.overlay = false;
            Some(self.frame(View::Board))
        } else {
            None
        }
    }

    fn frame(&self, view: View) -> Frame {
        Frame {
            grid: self.grid,
            score: self.score,
            high_score: self.high_score,
            status: self.status(),
            state: self.state,
            game_over: self.is_game_over(),
            moves: self.moves,
            view,
        }
    }
}
