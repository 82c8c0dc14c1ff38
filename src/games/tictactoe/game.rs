//! Tic-tac-toe engine and façade.

use serde::{Deserialize, Serialize};

use crate::core::{Outcome, Side};
use crate::host::{Host, InputChannel, Subscription};
use crate::lifecycle::{EventLog, Game, GameEvent, GameKind, Input, Snapshot};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The eight winning triples: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // cols
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diags
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Side for Mark {
    fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// Render state for tic-tac-toe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeView {
    pub cells: [Option<Mark>; CELLS],
    pub current_player: Mark,
    pub game_over: bool,
    pub outcome: Option<Outcome<Mark>>,
    /// The completed triple, when someone won.
    pub winning_line: Option<[usize; 3]>,
}

/// Tic-tac-toe state.
///
/// The board is a flat row-major sequence of nine cells. X always moves
/// first.
#[derive(Debug)]
pub struct TicTacToe {
    board: [Option<Mark>; CELLS],
    current_player: Mark,
    outcome: Option<Outcome<Mark>>,
    winning_line: Option<[usize; 3]>,
    events: EventLog,
    pointer: Option<Subscription>,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Empty board, X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: [None; CELLS],
            current_player: Mark::X,
            outcome: None,
            winning_line: None,
            events: EventLog::default(),
            pointer: None,
        }
    }

    /// Clear the board and give the first move back to X.
    pub fn reset(&mut self) {
        self.board = [None; CELLS];
        self.current_player = Mark::X;
        self.outcome = None;
        self.winning_line = None;
        self.events.clear();
    }

    /// Place the current player's mark at `index`.
    ///
    /// Returns `false` (and changes nothing) if the index is out of range,
    /// the cell is taken, or the game is over.
    pub fn apply_move(&mut self, index: usize) -> bool {
        if self.outcome.is_some() || index >= CELLS || self.board[index].is_some() {
            log::trace!("tictactoe: rejected move at {index}");
            return false;
        }

        let mark = self.current_player;
        self.board[index] = Some(mark);
        self.events.push(GameEvent::MarkPlaced { index });

        if let Some(line) = self.find_winning_line() {
            self.winning_line = Some(line);
            self.outcome = Some(Outcome::Winner(mark));
            self.events.push(GameEvent::GameOver);
            log::debug!("tictactoe: {mark} wins via {line:?}");
        } else if self.board.iter().all(Option::is_some) {
            self.outcome = Some(Outcome::Tie);
            self.events.push(GameEvent::GameOver);
            log::debug!("tictactoe: tie");
        } else {
            self.current_player = mark.opponent();
            self.events.push(GameEvent::TurnPassed);
        }
        true
    }

    fn find_winning_line(&self) -> Option<[usize; 3]> {
        WIN_LINES.into_iter().find(|&[a, b, c]| {
            self.board[a].is_some() && self.board[a] == self.board[b] && self.board[a] == self.board[c]
        })
    }

    /// The nine cells, row-major.
    #[must_use]
    pub fn board(&self) -> &[Option<Mark>; CELLS] {
        &self.board
    }

    /// Whose move it is. After the game ends this is the last mover.
    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// `None` while the game is in progress.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome<Mark>> {
        self.outcome
    }

    /// The winning triple, if someone won.
    #[must_use]
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// Render state.
    #[must_use]
    pub fn view(&self) -> TicTacToeView {
        TicTacToeView {
            cells: self.board,
            current_player: self.current_player,
            game_over: self.outcome.is_some(),
            outcome: self.outcome,
            winning_line: self.winning_line,
        }
    }
}

impl Game for TicTacToe {
    fn kind(&self) -> GameKind {
        GameKind::TicTacToe
    }

    fn init(&mut self, host: &mut Host) {
        if self.pointer.is_none() {
            self.pointer = Some(host.input.subscribe(InputChannel::Pointer));
        }
    }

    fn new_game(&mut self, _host: &mut Host) {
        self.reset();
    }

    fn cleanup(&mut self, host: &mut Host) {
        host.input.release(&mut self.pointer);
    }

    fn handle_input(&mut self, input: Input) -> bool {
        match input {
            Input::Cell(index) => self.apply_move(index),
            _ => false,
        }
    }

    fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::TicTacToe(self.view())
    }

    fn status(&self) -> String {
        match self.outcome {
            Some(Outcome::Tie) => "It's a tie!".to_string(),
            Some(Outcome::Winner(mark)) => format!("Player {mark} wins!"),
            None => format!("Player {}'s turn", self.current_player),
        }
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }
}
