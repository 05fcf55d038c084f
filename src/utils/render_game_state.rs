//! Terminal-oriented Unicode board renderer.
//!
//! White is drawn at the bottom. Squares of the last move are bracketed so
//! the highlight survives in plain text.

use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(position: &Position) -> String {
    let highlighted = |sq: Square| {
        position
            .last_move
            .is_some_and(|mv| mv.from == sq || mv.to == sq)
    };

    let mut out = String::new();
    out.push_str("   a  b  c  d  e  f  g  h\n");

    for rank in 0..8u8 {
        let label = char::from(b'8' - rank);
        out.push(label);
        out.push(' ');

        for file in 0..8u8 {
            let sq = Square::new_unchecked(file, rank);
            let glyph = position.get(sq).map(piece_to_unicode).unwrap_or('·');
            if highlighted(sq) {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");
    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::utils::algebraic::parse_move;

    #[test]
    fn start_position_renders_black_on_top() {
        let text = render_game_state(&Position::new_game());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[1].starts_with("8  ♜  ♞"));
        assert!(lines[8].starts_with("1  ♖  ♘"));
        assert!(lines[4].contains('·'));
    }

    #[test]
    fn last_move_squares_are_bracketed() {
        let mv = parse_move("e2-e4").expect("move should parse");
        let next = apply_move(&Position::new_game(), mv).expect("move should apply");
        let text = render_game_state(&next);
        assert_eq!(text.matches('[').count(), 2);
        assert!(text.contains("[♙]"));
        assert!(text.contains("[·]"));
    }
}
