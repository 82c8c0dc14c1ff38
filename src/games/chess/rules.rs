//! Pattern-only move legality.
//!
//! A move is legal when the destination is not occupied by a friendly piece
//! and the displacement fits the piece's movement pattern. Sliding pieces do
//! not check the squares in between, and nothing here knows about check,
//! castling, en passant or promotion.

use crate::core::{Board, Square};

use super::piece::{ChessPiece, PieceType};

/// Whether the piece on `from` may move to `to`.
#[must_use]
pub fn is_valid_move(board: &Board<ChessPiece>, from: Square, to: Square) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    if !to.on_board() || from == to {
        return false;
    }
    let target = board.get(to);
    if target.is_some_and(|t| t.color() == piece.color()) {
        return false;
    }

    let (dr, dc) = from.delta_to(to);
    let (row_diff, col_diff) = (dr.abs(), dc.abs());

    match piece.kind() {
        PieceType::Pawn => pawn_move_ok(board, *piece, from, dr, dc, target.is_some()),
        PieceType::Rook => row_diff == 0 || col_diff == 0,
        PieceType::Bishop => row_diff == col_diff,
        PieceType::Queen => row_diff == 0 || col_diff == 0 || row_diff == col_diff,
        PieceType::King => row_diff <= 1 && col_diff <= 1,
        PieceType::Knight => (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2),
    }
}

fn pawn_move_ok(
    board: &Board<ChessPiece>,
    pawn: ChessPiece,
    from: Square,
    dr: i32,
    dc: i32,
    occupied: bool,
) -> bool {
    let forward = pawn.color().forward();
    match dc.abs() {
        0 if occupied => false,
        0 if dr == forward => true,
        // Double push: only from the start row, and the skipped square must be free.
        0 if dr == 2 * forward && from.row == pawn.color().pawn_row() => from
            .offset(forward, 0)
            .is_some_and(|between| board.is_empty_at(between)),
        1 => dr == forward && occupied,
        _ => false,
    }
}

/// Every square the piece on `from` may move to.
#[must_use]
pub fn legal_destinations(board: &Board<ChessPiece>, from: Square) -> Vec<Square> {
    if board.get(from).is_none() {
        return Vec::new();
    }
    Square::all()
        .filter(|&to| is_valid_move(board, from, to))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::chess::piece::{starting_board, Color};

    fn lone(kind: PieceType, color: Color, at: Square) -> Board<ChessPiece> {
        let mut board = Board::empty();
        board.place(at, ChessPiece::new(kind, color));
        board
    }

    #[test]
    fn test_pawn_pushes_from_start() {
        let board = starting_board();
        let e2 = Square::new(6, 4);
        assert!(is_valid_move(&board, e2, Square::new(5, 4)));
        assert!(is_valid_move(&board, e2, Square::new(4, 4)));
        assert!(!is_valid_move(&board, e2, Square::new(3, 4)));
        // Backwards
        assert!(!is_valid_move(&board, e2, Square::new(7, 4)));
    }

    #[test]
    fn test_pawn_double_push_only_from_start_row() {
        let board = lone(PieceType::Pawn, Color::White, Square::new(5, 4));
        assert!(is_valid_move(&board, Square::new(5, 4), Square::new(4, 4)));
        assert!(!is_valid_move(&board, Square::new(5, 4), Square::new(3, 4)));
    }

    #[test]
    fn test_pawn_blocked() {
        let mut board = starting_board();
        board.place(Square::new(5, 4), ChessPiece::new(PieceType::Knight, Color::Black));
        let e2 = Square::new(6, 4);
        assert!(!is_valid_move(&board, e2, Square::new(5, 4)));
        // Can't jump the blocker either.
        assert!(!is_valid_move(&board, e2, Square::new(4, 4)));
    }

    #[test]
    fn test_pawn_diagonal_needs_enemy() {
        let mut board = starting_board();
        let e2 = Square::new(6, 4);
        assert!(!is_valid_move(&board, e2, Square::new(5, 5)));
        board.place(Square::new(5, 5), ChessPiece::new(PieceType::Pawn, Color::Black));
        assert!(is_valid_move(&board, e2, Square::new(5, 5)));
        // Friendly piece on the diagonal
        board.place(Square::new(5, 3), ChessPiece::new(PieceType::Pawn, Color::White));
        assert!(!is_valid_move(&board, e2, Square::new(5, 3)));
    }

    #[test]
    fn test_black_pawn_moves_down() {
        let board = starting_board();
        let e7 = Square::new(1, 4);
        assert!(is_valid_move(&board, e7, Square::new(2, 4)));
        assert!(is_valid_move(&board, e7, Square::new(3, 4)));
        assert!(!is_valid_move(&board, e7, Square::new(0, 4)));
    }

    #[test]
    fn test_knight_l_shapes() {
        let board = lone(PieceType::Knight, Color::White, Square::new(4, 4));
        assert_eq!(legal_destinations(&board, Square::new(4, 4)).len(), 8);
        assert!(!is_valid_move(&board, Square::new(4, 4), Square::new(5, 5)));
    }

    #[test]
    fn test_rook_and_bishop_patterns() {
        let rook = lone(PieceType::Rook, Color::Black, Square::new(0, 0));
        assert_eq!(legal_destinations(&rook, Square::new(0, 0)).len(), 14);
        assert!(!is_valid_move(&rook, Square::new(0, 0), Square::new(1, 1)));

        let bishop = lone(PieceType::Bishop, Color::Black, Square::new(0, 0));
        assert_eq!(legal_destinations(&bishop, Square::new(0, 0)).len(), 7);
    }

    #[test]
    fn test_queen_and_king_patterns() {
        let queen = lone(PieceType::Queen, Color::White, Square::new(3, 3));
        assert_eq!(legal_destinations(&queen, Square::new(3, 3)).len(), 27);

        let king = lone(PieceType::King, Color::White, Square::new(3, 3));
        assert_eq!(legal_destinations(&king, Square::new(3, 3)).len(), 8);
        assert!(!is_valid_move(&king, Square::new(3, 3), Square::new(5, 3)));
    }

    #[test]
    fn test_sliders_ignore_obstruction() {
        // The rook on a1 "jumps" its own pawn to reach a4.
        let board = starting_board();
        assert!(is_valid_move(&board, Square::new(7, 0), Square::new(4, 0)));
    }

    #[test]
    fn test_no_friendly_capture() {
        let board = starting_board();
        assert!(!is_valid_move(&board, Square::new(7, 0), Square::new(6, 0)));
    }

    #[test]
    fn test_empty_source() {
        let board = starting_board();
        assert!(!is_valid_move(&board, Square::new(4, 4), Square::new(5, 4)));
        assert!(legal_destinations(&board, Square::new(4, 4)).is_empty());
    }
}
