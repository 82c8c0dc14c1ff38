//! Chess turn machine and façade.

use serde::{Deserialize, Serialize};

use crate::core::player::title_case;
use crate::core::{Board, Side, Square};
use crate::host::{Host, InputChannel, Subscription};
use crate::lifecycle::{EventLog, Game, GameEvent, GameKind, Input, Snapshot};

use super::piece::{starting_board, ChessPiece, Color};
use super::rules;

/// Render state for chess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessView {
    pub board: Vec<Vec<Option<ChessPiece>>>,
    pub current_player: Color,
    pub selected: Option<Square>,
    /// Where the selected piece may go.
    pub legal_targets: Vec<Square>,
    pub game_over: bool,
}

/// Simplified chess.
///
/// Turns alternate after every accepted move. The engine never ends the game
/// on its own; [`Chess::halt`] is the only way in.
#[derive(Debug)]
pub struct Chess {
    board: Board<ChessPiece>,
    current_player: Color,
    selected: Option<Square>,
    game_over: bool,
    events: EventLog,
    pointer: Option<Subscription>,
}

impl Default for Chess {
    fn default() -> Self {
        Self::new()
    }
}

impl Chess {
    /// Standard starting position, white to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: starting_board(),
            current_player: Color::White,
            selected: None,
            game_over: false,
            events: EventLog::default(),
            pointer: None,
        }
    }

    /// Back to the starting position.
    pub fn reset(&mut self) {
        self.board = starting_board();
        self.current_player = Color::White;
        self.selected = None;
        self.game_over = false;
        self.events.clear();
    }

    /// Handle a click on `square`.
    ///
    /// With nothing selected, a click on a friendly piece selects it. With a
    /// selection: clicking it again deselects, a legal destination moves,
    /// another friendly piece reselects, anything else deselects.
    pub fn click(&mut self, square: Square) -> bool {
        if self.game_over || !square.on_board() {
            return false;
        }
        let own_piece = self
            .board
            .get(square)
            .is_some_and(|p| p.color() == self.current_player);

        match self.selected {
            Some(from) if from == square => {
                self.deselect();
                true
            }
            Some(from) if rules::is_valid_move(&self.board, from, square) => {
                self.make_move(from, square);
                true
            }
            Some(_) if own_piece => {
                self.select(square);
                true
            }
            Some(_) => {
                self.deselect();
                true
            }
            None if own_piece => {
                self.select(square);
                true
            }
            None => {
                log::trace!("chess: ignored click on {square}");
                false
            }
        }
    }

    /// Move without going through selection. Returns `false` if the piece on
    /// `from` isn't the mover's or the pattern doesn't allow it.
    pub fn try_move(&mut self, from: Square, to: Square) -> bool {
        let mover = self.board.get(from).map(|p| p.color());
        if self.game_over || mover != Some(self.current_player) {
            return false;
        }
        if !rules::is_valid_move(&self.board, from, to) {
            return false;
        }
        self.make_move(from, to);
        true
    }

    fn select(&mut self, square: Square) {
        self.selected = Some(square);
        self.events.push(GameEvent::Selected { at: square });
    }

    fn deselect(&mut self) {
        if self.selected.take().is_some() {
            self.events.push(GameEvent::Deselected);
        }
    }

    /// Relocate after validation; whatever stood on `to` is destroyed.
    fn make_move(&mut self, from: Square, to: Square) {
        let captured = self.board.relocate(from, to);
        self.events.push(GameEvent::Moved { from, to });
        if let Some(piece) = captured {
            self.events.push(GameEvent::Captured { at: to });
            log::debug!("chess: {} captured {piece} on {to}", self.current_player);
        }
        log::debug!("chess: {} moved {from} -> {to}", self.current_player);

        self.selected = None;
        self.current_player = self.current_player.opponent();
        self.events.push(GameEvent::TurnPassed);
    }

    /// Mark the game finished from outside (resignation, agreed draw, ...).
    pub fn halt(&mut self) {
        if !self.game_over {
            self.game_over = true;
            self.selected = None;
            self.events.push(GameEvent::GameOver);
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board<ChessPiece> {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[must_use]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Destinations of the selected piece, empty with no selection.
    #[must_use]
    pub fn legal_targets(&self) -> Vec<Square> {
        self.selected
            .map(|from| rules::legal_destinations(&self.board, from))
            .unwrap_or_default()
    }

    /// Render state.
    #[must_use]
    pub fn view(&self) -> ChessView {
        ChessView {
            board: self.board.rows(),
            current_player: self.current_player,
            selected: self.selected,
            legal_targets: self.legal_targets(),
            game_over: self.game_over,
        }
    }
}

impl Game for Chess {
    fn kind(&self) -> GameKind {
        GameKind::Chess
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
            Input::Square(square) => self.click(square),
            _ => false,
        }
    }

    fn is_over(&self) -> bool {
        self.game_over
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::Chess(self.view())
    }

    fn status(&self) -> String {
        if self.game_over {
            "Game over".to_string()
        } else {
            format!("{}'s turn", title_case(&self.current_player.to_string()))
        }
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }
}
