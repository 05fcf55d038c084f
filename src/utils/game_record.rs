//! PGN-style export of a session's move log.
//!
//! Tag pairs follow the PGN seven-tag roster. The movetext uses the session's
//! coordinate notation rather than SAN, numbered per full move.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Color;
use crate::session::game_session::GameSession;

#[derive(Debug, Clone)]
pub struct RecordHeaders {
    pub event: String,
    pub site: String,
    pub date: NaiveDate,
    pub white: String,
    pub black: String,
}

impl Default for RecordHeaders {
    fn default() -> Self {
        Self {
            event: "Casual Game".to_owned(),
            site: "Local".to_owned(),
            date: Local::now().date_naive(),
            white: Color::White.name().to_owned(),
            black: Color::Black.name().to_owned(),
        }
    }
}

/// Export with default headers dated today.
pub fn write_game_record(session: &GameSession, initial_fen: &str) -> String {
    write_game_record_with_headers(session, initial_fen, &RecordHeaders::default())
}

pub fn write_game_record_with_headers(
    session: &GameSession,
    initial_fen: &str,
    headers: &RecordHeaders,
) -> String {
    let result = session.status().result_token();

    let mut tags = BTreeMap::<&str, String>::new();
    tags.insert("Event", headers.event.clone());
    tags.insert("Site", headers.site.clone());
    tags.insert("Date", headers.date.format("%Y.%m.%d").to_string());
    tags.insert("Round", "-".to_owned());
    tags.insert("White", headers.white.clone());
    tags.insert("Black", headers.black.clone());
    tags.insert("Result", result.to_owned());
    if initial_fen != STARTING_POSITION_FEN {
        tags.insert("SetUp", "1".to_owned());
        tags.insert("FEN", initial_fen.to_owned());
    }

    let mut out = String::new();
    for (key, value) in &tags {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let black_started = initial_fen.split_whitespace().nth(1) == Some("b");
    let mut movetext = Vec::<String>::with_capacity(session.move_log().len() + 1);
    for (ply, entry) in session.move_log().iter().enumerate() {
        let ply = if black_started { ply + 1 } else { ply };
        let coordinates = entry.split_whitespace().next().unwrap_or(entry);
        if ply % 2 == 0 {
            movetext.push(format!("{}. {}", ply / 2 + 1, coordinates));
        } else if movetext.is_empty() {
            movetext.push(format!("{}... {}", ply / 2 + 1, coordinates));
        } else {
            movetext.push(coordinates.to_owned());
        }
    }
    movetext.push(result.to_owned());

    out.push_str(&movetext.join(" "));
    out.push('\n');
    out
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_headers() -> RecordHeaders {
        RecordHeaders {
            date: NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date"),
            ..RecordHeaders::default()
        }
    }

    #[test]
    fn finished_game_exports_tags_and_numbered_movetext() {
        let mut session = GameSession::new();
        for mv in ["f2-f3", "e7-e5", "g2-g4", "d8-h4"] {
            session.apply_notation(mv).expect("move should be legal");
        }

        let text = write_game_record_with_headers(&session, STARTING_POSITION_FEN, &fixed_headers());
        assert!(text.contains("[Date \"2024.03.09\"]\n"));
        assert!(text.contains("[Result \"0-1\"]\n"));
        assert!(!text.contains("[FEN"));
        assert!(text.ends_with("1. f2-f3 e7-e5 2. g2-g4 d8-h4 0-1\n"));
    }

    #[test]
    fn capture_suffix_is_dropped_from_movetext() {
        let mut session = GameSession::new();
        for mv in ["e2-e4", "d7-d5", "e4-d5"] {
            session.apply_notation(mv).expect("move should be legal");
        }
        let text = write_game_record_with_headers(&session, STARTING_POSITION_FEN, &fixed_headers());
        assert!(text.ends_with("1. e2-e4 d7-d5 2. e4-d5 *\n"));
    }

    #[test]
    fn custom_start_adds_setup_tags_and_black_numbering() {
        let fen = "4k3/8/8/8/8/8/1p6/4K3 b - - 0 1";
        let mut session = GameSession::from_fen(fen).expect("FEN should load");
        session.apply_notation("b2-b1").expect("promotion should be legal");

        let mut headers = fixed_headers();
        headers.event = "Say \"hi\"".to_owned();
        let text = write_game_record_with_headers(&session, fen, &headers);
        assert!(text.contains("[SetUp \"1\"]\n"));
        assert!(text.contains(&format!("[FEN \"{fen}\"]\n")));
        assert!(text.contains("[Event \"Say \\\"hi\\\"\"]\n"));
        assert!(text.ends_with("1... b2-b1 *\n"));
    }
}
