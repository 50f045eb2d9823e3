//! PDN (position descriptor notation) import and export.
//!
//! Six space-separated fields: layout (rank 8 first), side to move, castling
//! rights in `KQkq` order or `-`, en-passant target or `-`, halfmove clock,
//! fullmove number.

use std::fmt;
use std::str::FromStr;

use super::error::{MoveError, PdnError};
use super::{CastleSide, CastlingRights, Color, Move, Piece, Position, Square};

/// The standard starting position.
pub const START_PDN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from PDN text.
    ///
    /// Returns an error if the text is malformed or either side does not
    /// have exactly one king.
    pub fn from_pdn(pdn: &str) -> Result<Self, PdnError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = pdn.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(PdnError::WrongFieldCount { found: parts.len() });
        }

        // Piece placement
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(PdnError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 || skip > 8 {
                        return Err(PdnError::InvalidPiece { char: c });
                    }
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(PdnError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file < 8 {
                        position.place(Square(rank, file), color, piece);
                    }
                    file += 1;
                }
                if file > 8 {
                    return Err(PdnError::WrongRankWidth {
                        rank: rank + 1,
                        files: file,
                    });
                }
            }
            if file != 8 {
                return Err(PdnError::WrongRankWidth {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        // Side to move
        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(PdnError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling_rights = parse_castling(parts[2])?;
        position.en_passant_target = parse_en_passant(&position, parts[3])?;

        position.halfmove_clock =
            parts[4]
                .parse()
                .map_err(|_| PdnError::InvalidCounter {
                    field: "halfmove clock",
                    found: parts[4].to_string(),
                })?;
        position.fullmove_number = match parts[5].parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(PdnError::InvalidCounter {
                    field: "fullmove number",
                    found: parts[5].to_string(),
                })
            }
        };

        for color in Color::BOTH {
            let found = position
                .pieces(color)
                .filter(|&(_, piece)| piece == Piece::King)
                .count();
            if found != 1 {
                return Err(PdnError::KingCount { color, found });
            }
        }

        Ok(position)
    }

    /// Serialize the position to PDN text.
    #[must_use]
    pub fn to_pdn(&self) -> String {
        format!(
            "{} {} {}",
            self.key(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why
    /// parsing failed.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveError> {
        let invalid = || MoveError::InvalidNotation {
            notation: text.to_string(),
        };
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(invalid());
        }

        let from: Square = text[0..2].parse().map_err(|_| invalid())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid())?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece @ (Piece::Queen | Piece::Rook | Piece::Bishop | Piece::Knight)) => {
                    Some(piece)
                }
                _ => return Err(invalid()),
            },
        };

        self.legal_moves_for(from)
            .into_iter()
            .find(|mv| mv.to() == to && mv.promotion() == promotion)
            .ok_or_else(|| MoveError::IllegalMove {
                notation: text.to_string(),
            })
    }
}

fn parse_castling(field: &str) -> Result<CastlingRights, PdnError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let (color, side) = match c {
            'K' => (Color::White, CastleSide::KingSide),
            'Q' => (Color::White, CastleSide::QueenSide),
            'k' => (Color::Black, CastleSide::KingSide),
            'q' => (Color::Black, CastleSide::QueenSide),
            _ => {
                return Err(PdnError::InvalidCastling {
                    found: field.to_string(),
                })
            }
        };
        rights.set(color, side);
    }
    // Rejects duplicates and out-of-order letters
    if rights.to_string() != field {
        return Err(PdnError::InvalidCastling {
            found: field.to_string(),
        });
    }
    Ok(rights)
}

fn parse_en_passant(position: &Position, field: &str) -> Result<Option<Square>, PdnError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || PdnError::InvalidEnPassant {
        found: field.to_string(),
    };
    let target: Square = field.parse().map_err(|_| invalid())?;

    // The side that just moved left the target behind its double push
    let pusher = position.side_to_move.opponent();
    if target.rank() != pusher.en_passant_rank() {
        return Err(invalid());
    }
    let pawn_sq = target
        .offset(pusher.pawn_direction(), 0)
        .ok_or_else(invalid)?;
    if position.piece_at(pawn_sq) != Some((pusher, Piece::Pawn)) || !position.is_empty(target) {
        return Err(invalid());
    }
    Ok(Some(target))
}

impl FromStr for Position {
    type Err = PdnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_pdn(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pdn())
    }
}
