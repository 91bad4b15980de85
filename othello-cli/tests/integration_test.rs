//! Integration tests for the Othello decision engine
//!
//! Tests the full stack: position parsing, state machine, search, and the
//! `othello` binary's file protocol

use othello_core::{
    AlphaBetaAI, Cell, Emission, GameResult, GameState, MoveOutcome, Player, Position,
    RecordingSink, SearchConfig, Snapshot,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::process::Command;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("othello-it-{}-{}", std::process::id(), name))
}

fn write_position(name: &str, state: &GameState) -> PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, Snapshot::from_state(state).encode()).unwrap();
    path
}

fn othello() -> Command {
    Command::new(env!("CARGO_BIN_EXE_othello"))
}

/// Play random moves from the opening
fn random_game(rng: &mut ChaCha8Rng, plies: usize) -> GameState {
    let mut state = GameState::initial();
    for _ in 0..plies {
        if state.is_terminal() {
            break;
        }
        let moves = state.legal_moves();
        let mv = moves[rng.gen_range(0..moves.len())];
        state.apply_move(mv);
    }
    state
}

// ============================================================================
// ENGINE
// ============================================================================

#[test]
fn test_engine_self_play_completes() {
    let ai = AlphaBetaAI::new(SearchConfig::default().with_depth(2));
    let mut state = GameState::initial();
    let mut plies = 0;

    while !state.is_terminal() {
        let mut sink = RecordingSink::new();
        let mv = ai
            .choose_move(&state, &mut sink)
            .unwrap()
            .expect("ongoing game has a move");
        assert_eq!(state.apply_move(mv), MoveOutcome::Played);
        plies += 1;
        assert!(plies <= 60);
    }

    let total = state.discs(Player::Black) as u32 + state.discs(Player::White) as u32;
    assert_eq!(total + state.count(Cell::Empty) as u32, 64);
    assert_ne!(state.result(), GameResult::Ongoing);
}

#[test]
fn test_chosen_move_is_legal_on_random_positions() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let ai = AlphaBetaAI::new(SearchConfig::default().with_depth(3));

    for plies in [0, 5, 12, 25, 40, 52] {
        let state = random_game(&mut rng, plies);
        if state.is_terminal() {
            continue;
        }
        let mut sink = RecordingSink::new();
        let mv = ai.choose_move(&state, &mut sink).unwrap().unwrap();
        assert!(state.is_legal(mv));
        assert_eq!(sink.emissions.last(), Some(&(mv, Emission::Final)));
        assert_eq!(
            sink.emissions
                .iter()
                .filter(|(_, k)| *k == Emission::Final)
                .count(),
            1
        );
    }
}

#[test]
fn test_snapshot_round_trip_preserves_state() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let state = random_game(&mut rng, 30);
    let text = Snapshot::from_state(&state).encode();
    let parsed = Snapshot::parse(&text).unwrap().to_state();
    assert_eq!(parsed.grid(), state.grid());
    assert_eq!(parsed.legal_moves(), state.legal_moves());
    assert_eq!(parsed.current_player(), state.current_player());
}

// ============================================================================
// BINARY
// ============================================================================

#[test]
fn test_decide_writes_final_move_last() {
    let input = write_position("decide-in", &GameState::initial());
    let output = temp_path("decide-out");

    let status = othello()
        .arg("decide")
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());

    let text = std::fs::read_to_string(&output).unwrap();
    let last = text.lines().last().expect("at least one move");
    let nums: Vec<i8> = last.split(' ').map(|t| t.parse().unwrap()).collect();
    let mv = Position::new(nums[0], nums[1]);
    assert!(GameState::initial().legal_moves().contains(&mv));

    // Every opening move weighs 4, so only the first is provisional
    assert_eq!(text.lines().count(), 2);
    assert_eq!(text.lines().next(), Some("2 3"));
}

#[test]
fn test_decide_rejects_malformed_input() {
    let input = temp_path("bad-in");
    std::fs::write(&input, "3\n0 0\n").unwrap();
    let output = temp_path("bad-out");

    let result = othello()
        .arg("decide")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Malformed position"));
}

#[test]
fn test_analyze_json() {
    let input = write_position("analyze-in", &GameState::initial());
    let result = othello()
        .args(["analyze", "--depth", "2", "--json"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(result.status.success());

    let report: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(report["depth"], 2);
    assert_eq!(report["candidates"].as_array().unwrap().len(), 4);
    assert!(report["chosen"].is_object());
}

#[test]
fn test_show_renders_board() {
    let input = write_position("show-in", &GameState::initial());
    let result = othello().arg("show").arg(&input).output().unwrap();
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("O's turn"));
    assert!(stdout.contains("4 valid moves"));
}
