//! crossterm front end: keyboard decoding and full-screen rendering

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::trace;

use crate::{
    Result,
    board::{Cell, Direction, SIZE},
    controller::{Command, ControllerState, Frame, View},
    error::Error,
    high_scores::HighScores,
    ports::{InputSource, Renderer},
};

const RULE_WIDTH: usize = 55;
const TABLE_WIDTH: usize = 65;
const BOARD_X: u16 = 13;
/// Inner width of one board cell; fits the six digits of the largest tiles
const CELL_WIDTH: usize = 6;

/// Map a key press to a command; `None` for keys the game does not use.
///
/// # Examples
///
/// ```
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
/// use terminal_2048::adapters::decode_key;
/// use terminal_2048::board::Direction;
/// use terminal_2048::controller::Command;
///
/// let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
/// assert_eq!(decode_key(key), Some(Command::Move(Direction::Left)));
/// ```
pub fn decode_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('z') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(Command::Quit),
            'h' => Some(Command::ViewHighScores),
            'r' => Some(Command::Restart),
            other => Direction::from_char(other).map(Command::Move),
        },
        _ => None,
    }
}

/// Puts the terminal in raw mode on the alternate screen and restores it on
/// drop, including when the session unwinds with an error.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be entered.
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().map_err(|source| Error::Io {
            operation: "enable raw mode".to_string(),
            source,
        })?;
        execute!(io::stdout(), EnterAlternateScreen, Hide).map_err(|source| Error::Io {
            operation: "enter alternate screen".to_string(),
            source,
        })?;
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Blocking keyboard input via crossterm events
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for KeyboardInput {
    fn next_command(&mut self) -> Result<Option<Command>> {
        loop {
            let event = event::read().map_err(|source| Error::Io {
                operation: "read terminal event".to_string(),
                source,
            })?;
            if let Event::Key(key) = event {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match decode_key(key) {
                    Some(command) => return Ok(Some(command)),
                    None => trace!("ignoring key {:?}", key.code),
                }
            }
        }
    }
}

/// Full-screen renderer writing ANSI sequences to `W`
pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        match &frame.view {
            View::Welcome => self.draw_welcome(frame)?,
            View::Board => self.draw_board(frame)?,
            View::HighScores(table) => {
                let y = self.draw_table(0, table)?;
                self.line(0, y + 1, Color::DarkGrey, "Press an arrow key to return to the game...")?;
            }
            View::Summary { rank, table } => self.draw_summary(frame, *rank, table)?,
        }
        self.out.flush()
    }

    fn line(&mut self, x: u16, y: u16, color: Color, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(x, y),
            SetForegroundColor(color),
            Print(text),
            ResetColor
        )
    }

    fn bold(&mut self, x: u16, y: u16, color: Color, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(x, y),
            SetAttribute(Attribute::Bold),
            SetForegroundColor(color),
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }

    fn draw_welcome(&mut self, frame: &Frame) -> io::Result<()> {
        let rule = "=".repeat(60);
        self.bold(0, 0, Color::Cyan, &rule)?;
        self.bold(20, 1, Color::Yellow, "TERMINAL 2048")?;
        self.bold(0, 2, Color::Cyan, &rule)?;
        self.line(0, 4, Color::Green, "Goal: combine tiles to reach 2048!")?;
        self.line(0, 6, Color::White, "Controls:")?;
        self.line(2, 7, Color::White, "W/Up - Up      S/Down - Down")?;
        self.line(2, 8, Color::White, "A/Left - Left  D/Right - Right")?;
        self.line(2, 9, Color::White, "H - High scores  R - Restart  Q - Quit")?;

        let mut y = 11;
        if frame.high_score > 0 {
            let text = format!("Current High Score: {}", frame.high_score);
            self.line(0, y, Color::Cyan, &text)?;
            y += 2;
        }
        self.line(0, y, Color::DarkGrey, "Press any arrow key to start...")
    }

    fn draw_board(&mut self, frame: &Frame) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        self.bold(0, 0, Color::Cyan, &rule)?;
        self.bold(21, 1, Color::Yellow, "2048 GAME")?;
        self.bold(0, 2, Color::Cyan, &rule)?;

        let score_text = format!("Score: {}", frame.score);
        self.bold(0, 4, Color::Green, &score_text)?;
        if frame.high_score > 0 {
            let high_text = format!("  |  High Score: {}", frame.high_score);
            self.bold(score_text.chars().count() as u16, 4, Color::Cyan, &high_text)?;
        }
        self.line(
            0,
            5,
            Color::White,
            "Arrows/WASD to move - H high scores - R restart - Q quit",
        )?;
        self.line(0, 6, Color::Cyan, &"-".repeat(RULE_WIDTH))?;

        let board_y = 7;
        let bottom = self.draw_grid(frame, board_y)?;

        let mut y = bottom + 1;
        match frame.state {
            ControllerState::Won => {
                self.bold(0, y, Color::Yellow, "Congratulations! You reached the win tile!")?;
                y += 1;
                if frame.game_over {
                    self.line(0, y, Color::DarkGrey, "Press R to play again or Q to quit.")?;
                } else {
                    self.line(0, y, Color::Green, "Keep playing to get an even higher score!")?;
                }
            }
            ControllerState::Lost => {
                self.bold(0, y, Color::Red, "Game Over! No more moves available.")?;
                y += 1;
                self.line(0, y, Color::DarkGrey, "Press R to play again or Q to quit.")?;
            }
            _ => {
                let moves = format!("Moves: {}", frame.moves);
                self.line(0, y, Color::DarkGrey, &moves)?;
            }
        }
        y += 2;
        self.line(0, y, Color::Cyan, &"-".repeat(RULE_WIDTH))
    }

    /// Draw the boxed 4x4 grid starting at row `top`; returns the row below it
    fn draw_grid(&mut self, frame: &Frame, top: u16) -> io::Result<u16> {
        let border = |left: &str, mid: &str, right: &str| {
            format!("{left}{}{right}", vec!["─".repeat(CELL_WIDTH); SIZE].join(mid))
        };
        let blank = format!("│{}│", vec![" ".repeat(CELL_WIDTH); SIZE].join("│"));

        let mut y = top;
        queue!(self.out, MoveTo(BOARD_X, y), Print(border("┌", "┬", "┐")))?;
        for r in 0..SIZE {
            y += 1;
            queue!(self.out, MoveTo(BOARD_X, y), Print(&blank))?;
            for c in 0..SIZE {
                if let Cell::Tile(value) = frame.grid.get(r, c) {
                    let (fg, bg) = tile_colors(value);
                    queue!(
                        self.out,
                        MoveTo(BOARD_X + 1 + (c * (CELL_WIDTH + 1)) as u16, y),
                        SetBackgroundColor(bg),
                        SetForegroundColor(fg),
                        Print(format!("{value:^width$}", width = CELL_WIDTH)),
                        ResetColor
                    )?;
                }
            }
            y += 1;
            let edge = if r + 1 == SIZE {
                border("└", "┴", "┘")
            } else {
                border("├", "┼", "┤")
            };
            queue!(self.out, MoveTo(BOARD_X, y), Print(edge))?;
        }
        Ok(y + 1)
    }

    /// Draw the high score table from row `top`; returns the next free row
    fn draw_table(&mut self, top: u16, table: &HighScores) -> io::Result<u16> {
        let mut y = top;
        self.bold(0, y, Color::Yellow, "HIGH SCORES")?;
        y += 1;
        self.line(0, y, Color::Cyan, &"=".repeat(TABLE_WIDTH))?;
        y += 1;

        if table.is_empty() {
            self.line(0, y, Color::DarkGrey, "No high scores yet. Be the first!")?;
            y += 1;
        } else {
            let header = format!("{:<4} {:<8} {:<12} {:<19}", "Rank", "Score", "Highest Tile", "Date");
            self.bold(0, y, Color::White, &header)?;
            y += 1;
            self.line(0, y, Color::Cyan, &"-".repeat(TABLE_WIDTH))?;
            y += 1;

            for (i, entry) in table.entries().iter().enumerate() {
                let rank_color = if i < 3 { Color::Yellow } else { Color::White };
                let tile_color = if entry.highest_tile >= 2048 {
                    Color::Green
                } else {
                    Color::Cyan
                };
                self.line(0, y, rank_color, &format!("{:<4}", i + 1))?;
                self.line(5, y, Color::White, &format!("{:<8}", entry.score))?;
                self.line(14, y, tile_color, &format!("{:<12}", entry.highest_tile))?;
                self.line(27, y, Color::DarkGrey, &format!("{:<19}", entry.date))?;
                y += 1;
            }
        }
        self.line(0, y, Color::Cyan, &"=".repeat(TABLE_WIDTH))?;
        Ok(y + 1)
    }

    fn draw_summary(&mut self, frame: &Frame, rank: Option<usize>, table: &HighScores) -> io::Result<()> {
        let rule = "=".repeat(60);
        self.bold(0, 0, Color::Cyan, &rule)?;
        let title = if frame.state == ControllerState::Quit {
            "THANKS FOR PLAYING"
        } else {
            "GAME OVER"
        };
        self.bold(20, 1, Color::Yellow, title)?;
        self.bold(0, 2, Color::Cyan, &rule)?;

        self.line(0, 4, Color::White, &format!("Final Score: {}", frame.score))?;
        self.line(
            0,
            5,
            Color::White,
            &format!("Highest Tile: {}", frame.grid.highest_tile()),
        )?;

        match rank {
            Some(1) => self.bold(0, 7, Color::Yellow, "CONGRATULATIONS! NEW HIGH SCORE RECORD!")?,
            Some(n) => self.bold(0, 7, Color::Green, &format!("Congratulations! New High Score #{n}!"))?,
            None if table.top() > 0 => {
                self.line(0, 7, Color::Cyan, &format!("High Score to Beat: {}", table.top()))?
            }
            None => {}
        }

        let y = self.draw_table(9, table)?;
        if frame.state != ControllerState::Quit {
            self.line(0, y + 1, Color::DarkGrey, "Press R to play again or Q to quit...")?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        self.draw(frame).map_err(|source| Error::Io {
            operation: "draw frame".to_string(),
            source,
        })
    }
}

/// Foreground and background colours for a tile value
pub fn tile_colors(value: u32) -> (Color, Color) {
    match value {
        2 => (Color::Black, Color::White),
        4 => (Color::Black, Color::Rgb { r: 237, g: 224, b: 200 }),
        8 => (Color::White, Color::Rgb { r: 242, g: 177, b: 121 }),
        16 => (Color::White, Color::Rgb { r: 245, g: 149, b: 99 }),
        32 => (Color::White, Color::Rgb { r: 246, g: 124, b: 95 }),
        64 => (Color::White, Color::Rgb { r: 246, g: 94, b: 59 }),
        128 => (Color::White, Color::Rgb { r: 237, g: 207, b: 114 }),
        256 => (Color::White, Color::Rgb { r: 237, g: 204, b: 97 }),
        512 => (Color::White, Color::Rgb { r: 237, g: 200, b: 80 }),
        1024 => (Color::White, Color::Rgb { r: 237, g: 197, b: 63 }),
        2048 => (Color::White, Color::Rgb { r: 237, g: 194, b: 46 }),
        _ => (Color::White, Color::Rgb { r: 60, g: 58, b: 50 }),
    }
}
