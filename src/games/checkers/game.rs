//! Checkers turn machine and façade.
//!
//! ```text
//! idle ──select──► selected ──move──► idle (turn passes)
//!                     │
//!                     └─capture with more jumps─► forced capture
//!                                                   │
//!                       (same piece, jumps only) ◄──┘
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::player::title_case;
use crate::core::{Board, Outcome, Side, Square};
use crate::host::{Host, InputChannel, Subscription};
use crate::lifecycle::{EventLog, Game, GameEvent, GameKind, Input, Snapshot};

use super::rules::{self, starting_board, Checker, Color, Targets};

/// Render state for checkers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckersView {
    pub board: Vec<Vec<Option<Checker>>>,
    pub current_player: Color,
    pub selected: Option<Square>,
    pub legal_targets: Vec<Square>,
    /// The selected piece must keep jumping.
    pub must_capture: bool,
    /// Pieces taken so far this turn, in order.
    pub capture_sequence: Vec<Square>,
    pub game_over: bool,
    pub winner: Option<Color>,
}

/// Checkers with chained captures.
///
/// Capturing is optional when starting a turn, but once a jump leaves the
/// same piece with another jump available, the turn continues with that
/// piece and only jumps are accepted. The game ends when one side has no
/// pieces left.
#[derive(Debug)]
pub struct Checkers {
    board: Board<Checker>,
    current_player: Color,
    selected: Option<Square>,
    must_capture: bool,
    capture_sequence: SmallVec<[Square; 12]>,
    outcome: Option<Outcome<Color>>,
    events: EventLog,
    pointer: Option<Subscription>,
}

impl Default for Checkers {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkers {
    /// Standard setup, red to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_position(starting_board(), Color::Red)
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn with_position(board: Board<Checker>, to_move: Color) -> Self {
        Self {
            board,
            current_player: to_move,
            selected: None,
            must_capture: false,
            capture_sequence: SmallVec::new(),
            outcome: None,
            events: EventLog::default(),
            pointer: None,
        }
    }

    /// Back to the standard setup with red to move.
    pub fn reset(&mut self) {
        self.board = starting_board();
        self.current_player = Color::Red;
        self.selected = None;
        self.must_capture = false;
        self.capture_sequence.clear();
        self.outcome = None;
        self.events.clear();
    }

    /// Handle a click on `square`.
    ///
    /// Outside a capture chain this behaves like chess selection: select a
    /// friendly piece, click it again to deselect, click a target to move,
    /// click another friendly piece to reselect, anything else deselects.
    /// During a chain the chaining piece stays selected and only its jump
    /// targets are accepted.
    pub fn click(&mut self, square: Square) -> bool {
        if self.outcome.is_some() || !square.on_board() {
            return false;
        }
        let own_piece = self
            .board
            .get(square)
            .is_some_and(|p| p.color() == self.current_player);

        let Some(from) = self.selected else {
            if own_piece {
                self.select(square);
                return true;
            }
            log::trace!("checkers: ignored click on {square}");
            return false;
        };

        if rules::is_valid_move(&self.board, from, square, self.must_capture) {
            self.apply_move(from, square);
            return true;
        }
        if self.must_capture {
            log::trace!("checkers: {square} ignored, capture chain pending at {from}");
            return false;
        }
        if square != from && own_piece {
            self.select(square);
        } else {
            self.deselect();
        }
        true
    }

    /// Move without going through selection.
    ///
    /// During a capture chain only the chaining piece may move.
    pub fn try_move(&mut self, from: Square, to: Square) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        if self.must_capture && self.selected != Some(from) {
            return false;
        }
        let mover = self.board.get(from).map(|p| p.color());
        if mover != Some(self.current_player)
            || !rules::is_valid_move(&self.board, from, to, self.must_capture)
        {
            return false;
        }
        self.apply_move(from, to);
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

    /// Execute a validated move and resolve the turn.
    fn apply_move(&mut self, from: Square, to: Square) {
        let captured = self.execute(from, to);

        if captured && rules::has_more_captures(&self.board, to) {
            self.selected = Some(to);
            self.must_capture = true;
            self.events.push(GameEvent::CaptureContinues { at: to });
            log::debug!("checkers: {} continues capturing from {to}", self.current_player);
            return;
        }

        self.selected = None;
        self.must_capture = false;
        self.capture_sequence.clear();
        self.current_player = self.current_player.opponent();
        self.events.push(GameEvent::TurnPassed);
        self.check_game_end();
    }

    /// Mutate the board for a legal move. Returns whether it was a jump.
    fn execute(&mut self, from: Square, to: Square) -> bool {
        let (dr, _) = from.delta_to(to);
        let mut captured = false;
        if dr.abs() == 2 {
            if let Some(over) = from.midpoint(to) {
                self.board.take(over);
                self.capture_sequence.push(over);
                self.events.push(GameEvent::Captured { at: over });
                log::debug!("checkers: {} captured {over}", self.current_player);
                captured = true;
            }
        }

        self.board.relocate(from, to);
        self.events.push(GameEvent::Moved { from, to });

        if let Some(piece) = self.board.get_mut(to) {
            if to.row == piece.color().crowning_row() && piece.promote() {
                self.events.push(GameEvent::Promoted { at: to });
                log::debug!("checkers: {} crowned on {to}", piece.color());
            }
        }
        captured
    }

    fn check_game_end(&mut self) {
        let winner = [Color::Red, Color::Black]
            .into_iter()
            .find(|&side| self.piece_count(side) == 0)
            .map(Color::opponent);
        if let Some(winner) = winner {
            self.outcome = Some(Outcome::Winner(winner));
            self.events.push(GameEvent::GameOver);
            log::debug!("checkers: {winner} wins");
        }
    }

    /// Pieces left for a side.
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.board.count(|p| p.color() == color)
    }

    #[must_use]
    pub fn board(&self) -> &Board<Checker> {
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

    /// Whether a capture chain is in progress.
    #[must_use]
    pub fn must_capture(&self) -> bool {
        self.must_capture
    }

    /// Squares captured so far this turn.
    #[must_use]
    pub fn capture_sequence(&self) -> &[Square] {
        &self.capture_sequence
    }

    /// `None` while the game is in progress.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome<Color>> {
        self.outcome
    }

    /// Targets of the selected piece under the current chain state.
    #[must_use]
    pub fn legal_targets(&self) -> Targets {
        self.selected
            .map(|from| rules::possible_moves(&self.board, from, self.must_capture))
            .unwrap_or_default()
    }

    /// Render state.
    #[must_use]
    pub fn view(&self) -> CheckersView {
        CheckersView {
            board: self.board.rows(),
            current_player: self.current_player,
            selected: self.selected,
            legal_targets: self.legal_targets().to_vec(),
            must_capture: self.must_capture,
            capture_sequence: self.capture_sequence.to_vec(),
            game_over: self.outcome.is_some(),
            winner: self.outcome.and_then(|o| o.winner()),
        }
    }
}

impl Game for Checkers {
    fn kind(&self) -> GameKind {
        GameKind::Checkers
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
        self.outcome.is_some()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::Checkers(self.view())
    }

    fn status(&self) -> String {
        let name = |c: Color| title_case(&c.to_string());
        match self.outcome {
            Some(Outcome::Winner(winner)) => format!("{} wins!", name(winner)),
            Some(Outcome::Tie) => "Draw".to_string(),
            None if self.must_capture => {
                format!("{} must continue capturing", name(self.current_player))
            }
            None => format!("{}'s turn", name(self.current_player)),
        }
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn test_opening_move() {
        let mut game = Checkers::new();
        assert!(game.click(sq(2, 1)));
        assert_eq!(game.selected(), Some(sq(2, 1)));
        assert!(game.click(sq(3, 2)));
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.status(), "Black's turn");
    }

    #[test]
    fn test_cannot_select_opponent_piece() {
        let mut game = Checkers::new();
        assert!(!game.click(sq(5, 0)));
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn test_single_capture_passes_turn() {
        let mut board = Board::empty();
        board.place(sq(2, 1), Checker::man(Color::Red));
        board.place(sq(3, 2), Checker::man(Color::Black));
        board.place(sq(7, 6), Checker::man(Color::Black));
        let mut game = Checkers::with_position(board, Color::Red);

        assert!(game.try_move(sq(2, 1), sq(4, 3)));
        assert!(game.board().is_empty_at(sq(3, 2)));
        assert_eq!(game.current_player(), Color::Black);
        assert!(!game.must_capture());
        assert!(game.capture_sequence().is_empty());
    }

    #[test]
    fn test_chain_keeps_turn_and_selection() {
        let mut board = Board::empty();
        board.place(sq(0, 1), Checker::man(Color::Red));
        board.place(sq(1, 2), Checker::man(Color::Black));
        board.place(sq(3, 4), Checker::man(Color::Black));
        board.place(sq(7, 0), Checker::man(Color::Black));
        let mut game = Checkers::with_position(board, Color::Red);

        game.click(sq(0, 1));
        assert!(game.click(sq(2, 3)));
        assert!(game.must_capture());
        assert_eq!(game.current_player(), Color::Red);
        assert_eq!(game.selected(), Some(sq(2, 3)));
        assert_eq!(game.capture_sequence(), &[sq(1, 2)]);
        assert_eq!(game.status(), "Red must continue capturing");
        // Only the jump is offered.
        assert_eq!(game.legal_targets().to_vec(), vec![sq(4, 5)]);

        // Deselecting is not allowed mid-chain.
        assert!(!game.click(sq(2, 3)));
        assert_eq!(game.selected(), Some(sq(2, 3)));

        assert!(game.click(sq(4, 5)));
        assert!(!game.must_capture());
        assert_eq!(game.current_player(), Color::Black);
        assert_eq!(game.piece_count(Color::Black), 1);
    }

    #[test]
    fn test_chain_blocks_other_pieces() {
        let mut board = Board::empty();
        board.place(sq(0, 1), Checker::man(Color::Red));
        board.place(sq(0, 7), Checker::man(Color::Red));
        board.place(sq(1, 2), Checker::man(Color::Black));
        board.place(sq(3, 4), Checker::man(Color::Black));
        let mut game = Checkers::with_position(board, Color::Red);

        assert!(game.try_move(sq(0, 1), sq(2, 3)));
        assert!(game.must_capture());
        assert!(!game.click(sq(0, 7)));
        assert!(!game.try_move(sq(0, 7), sq(1, 6)));
        // A plain slide by the chaining piece is also refused.
        assert!(!game.try_move(sq(2, 3), sq(3, 2)));
        assert_eq!(game.selected(), Some(sq(2, 3)));
    }

    #[test]
    fn test_promotion() {
        let mut board = Board::empty();
        board.place(sq(6, 1), Checker::man(Color::Red));
        board.place(sq(0, 7), Checker::man(Color::Black));
        let mut game = Checkers::with_position(board, Color::Red);

        assert!(game.try_move(sq(6, 1), sq(7, 0)));
        assert!(game.board().get(sq(7, 0)).is_some_and(|p| p.is_king()));
        let events = game.drain_events();
        assert!(events.contains(&GameEvent::Promoted { at: sq(7, 0) }));
    }

    #[test]
    fn test_king_reaching_back_rank_not_promoted_again() {
        let mut board = Board::empty();
        board.place(sq(1, 1), Checker::king(Color::Black));
        board.place(sq(7, 6), Checker::man(Color::Red));
        let mut game = Checkers::with_position(board, Color::Black);

        assert!(game.try_move(sq(1, 1), sq(0, 0)));
        let events = game.drain_events();
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Promoted { .. })));
        assert!(game.board().get(sq(0, 0)).is_some_and(|p| p.is_king()));
    }

    #[test]
    fn test_last_capture_wins() {
        let mut board = Board::empty();
        board.place(sq(2, 1), Checker::man(Color::Red));
        board.place(sq(3, 2), Checker::man(Color::Black));
        let mut game = Checkers::with_position(board, Color::Red);

        assert!(game.try_move(sq(2, 1), sq(4, 3)));
        assert_eq!(game.outcome(), Some(Outcome::Winner(Color::Red)));
        assert_eq!(game.status(), "Red wins!");
        assert!(!game.click(sq(4, 3)));
    }

    #[test]
    fn test_reset() {
        let mut game = Checkers::new();
        game.try_move(sq(2, 1), sq(3, 2));
        game.reset();
        assert_eq!(game.current_player(), Color::Red);
        assert_eq!(game.piece_count(Color::Red), 12);
        assert!(game.board().get(sq(2, 1)).is_some());
    }

    #[test]
    fn test_invalid_click_deselects() {
        let mut game = Checkers::new();
        game.click(sq(2, 1));
        assert!(game.click(sq(4, 4)));
        assert_eq!(game.selected(), None);
        assert_eq!(game.current_player(), Color::Red);
    }
}
