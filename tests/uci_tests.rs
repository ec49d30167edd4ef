//! UCI Protocol Tests
//!
//! These tests drive the protocol loop one line at a time and inspect what
//! it writes back.

use greedy_chess::core::board::Position;
use greedy_chess::uci::UCI;

/// Feed each line to `uci` and collect everything it prints.
fn send(uci: &mut UCI, lines: &[&str]) -> String {
    let mut out: Vec<u8> = Vec::new();
    for line in lines {
        uci.handle_line(line, &mut out).unwrap();
    }
    String::from_utf8(out).unwrap()
}

// ============================================================================
// Handshake Tests
// ============================================================================

#[test]
fn test_uci_handshake() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["uci"]);
    assert!(out.starts_with("id name Greedy Chess"));
    assert!(out.contains("id author"));
    assert_eq!(out.lines().last(), Some("uciok"));
}

#[test]
fn test_isready() {
    let mut uci = UCI::new();
    assert_eq!(send(&mut uci, &["isready"]), "readyok\n");
}

#[test]
fn test_blank_line_is_ignored() {
    let mut uci = UCI::new();
    assert_eq!(send(&mut uci, &["", "   "]), "");
}

#[test]
fn test_quit_stops_the_loop() {
    let mut uci = UCI::new();
    let mut out: Vec<u8> = Vec::new();
    assert!(uci.handle_line("isready", &mut out).unwrap());
    assert!(!uci.handle_line("quit", &mut out).unwrap());
}

#[test]
fn test_setoption_reports_unknown_option() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["setoption name Hash value 16"]);
    assert!(out.contains("no option named Hash"));
}

#[test]
fn test_debug_toggle() {
    let mut uci = UCI::new();
    assert!(!uci.debug());
    send(&mut uci, &["debug on"]);
    assert!(uci.debug());
    send(&mut uci, &["debug off"]);
    assert!(!uci.debug());
}

#[test]
fn test_unknown_command() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["foo"]);
    assert!(out.contains("unknown command: foo"));
}

// ============================================================================
// Position Tests
// ============================================================================

#[test]
fn test_position_startpos_with_moves() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["position startpos moves e2e4 e7e5", "d"]);
    assert!(out.contains("4p3/4P3"));
    assert_eq!(
        uci.position.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w - - 0 1"
    );
}

#[test]
fn test_position_fen() {
    let mut uci = UCI::new();
    send(&mut uci, &["position fen 8/8/8/4k3/8/8/4K3/4Q3 b - - 0 1"]);
    assert_eq!(uci.position.to_fen(), "8/8/8/4k3/8/8/4K3/4Q3 b - - 0 1");
}

#[test]
fn test_position_with_piece_letter_moves() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["position startpos moves e2e4 e7e5 Ng1f3"]);
    assert!(!out.contains("error"));
    assert_eq!(
        uci.position.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b - - 0 1"
    );
}

#[test]
fn test_position_with_capture_mark() {
    let mut uci = UCI::new();
    send(&mut uci, &["position startpos moves e2e4 d7d5 e4xd5"]);
    assert_eq!(
        uci.position.to_fen(),
        "rnbqkbnr/ppp1pppp/8/3P4/8/8/PPPP1PPP/RNBQKBNR b - - 0 1"
    );
}

#[test]
fn test_notated_move_then_go_plays_for_right_side() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["position startpos moves Ng1f3", "go"]);
    let best = out.lines().last().unwrap();
    // Black is to move, so the reply starts from rows 7 or 8.
    let from_row = best.as_bytes()[10];
    assert!(from_row == b'7' || from_row == b'8', "{}", best);
}

#[test]
fn test_bad_move_keeps_previous_position() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["position startpos moves e3e4"]);
    assert!(out.contains("info string error"));
    assert_eq!(uci.position, Position::startpos());
}

#[test]
fn test_ucinewgame_resets_position() {
    let mut uci = UCI::new();
    send(&mut uci, &["position startpos moves d2d4"]);
    assert_ne!(uci.position, Position::startpos());
    send(&mut uci, &["ucinewgame"]);
    assert_eq!(uci.position, Position::startpos());
}

// ============================================================================
// Search Command Tests
// ============================================================================

#[test]
fn test_go_from_startpos() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["position startpos", "go"]);
    assert!(out.contains("info depth 1 score cp 0"));
    assert_eq!(out.lines().last(), Some("bestmove b1a3"));
}

#[test]
fn test_go_takes_hanging_queen() {
    let mut uci = UCI::new();
    let out = send(
        &mut uci,
        &["position fen 4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1", "go depth 5"],
    );
    assert_eq!(out.lines().last(), Some("bestmove e4d5"));
}

#[test]
fn test_go_with_no_legal_move() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["position fen k7/8/1Q6/8/8/8/8/7K b - - 0 1", "go"]);
    assert_eq!(out.lines().last(), Some("bestmove 0000"));
}

#[test]
fn test_go_in_debug_mode_reports_candidates() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["debug on", "go"]);
    assert!(out.contains("info string checked"));
    assert_eq!(out.lines().last(), Some("bestmove b1a3"));
}

// ============================================================================
// Extension Command Tests
// ============================================================================

#[test]
fn test_perft_command() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["perft 2"]);
    assert!(out.starts_with("Nodes: 400"));
}

#[test]
fn test_perft_rejects_bad_depth() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["perft abc"]);
    assert!(out.contains("info string error: invalid perft depth 'abc'"));
    assert!(!out.contains("Nodes"));
}

#[test]
fn test_eval_command() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["eval"]);
    assert!(out.contains("Material: 0"));

    let out = send(&mut uci, &["position fen 4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1", "eval"]);
    assert!(out.contains("Material: -8"));
    assert!(out.contains("Evaluation: -800 cp for white"));
}

#[test]
fn test_display_command() {
    let mut uci = UCI::new();
    let out = send(&mut uci, &["display"]);
    assert!(out.contains("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"));
}
