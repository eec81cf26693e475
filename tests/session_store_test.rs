//! Tests for the per-chat session store.

use std::thread;
use tictactoe_bot::{
    Board, EngineError, FirstFreeSelector, Mark, Marks, Outcome, Phase, Position,
    RandomSelector, ScriptedSelector, SessionError, SessionManager,
};

#[test]
fn test_start_gives_empty_board() {
    let manager = SessionManager::random();
    let board = manager.start("chat").unwrap();
    assert_eq!(board, Board::new());
    assert_eq!(manager.phase("chat"), Ok(Phase::AwaitingMove));
    assert_eq!(manager.list_sessions().unwrap(), vec!["chat".to_string()]);
}

#[test]
fn test_play_requires_start() {
    let manager = SessionManager::random();
    assert_eq!(
        manager.play("nobody", 0, 0),
        Err(SessionError::UnknownSession("nobody".to_string()))
    );
}

#[test]
fn test_play_rejects_off_board() {
    let manager = SessionManager::random();
    manager.start("chat").unwrap();
    assert!(matches!(
        manager.play("chat", 0, 5),
        Err(SessionError::Coordinate(_))
    ));
    assert_eq!(manager.session("chat").unwrap().board(), &Board::new());
}

#[test]
fn test_win_then_game_over_then_restart() {
    let manager = SessionManager::new(
        Marks::default(),
        ScriptedSelector::new([Position::MiddleLeft, Position::Center]),
    );
    manager.start("chat").unwrap();
    assert_eq!(manager.play("chat", 0, 0).unwrap().0, Outcome::Ongoing);
    assert_eq!(manager.play("chat", 0, 1).unwrap().0, Outcome::Ongoing);
    assert_eq!(manager.play("chat", 0, 2).unwrap().0, Outcome::PlayerWin);
    assert_eq!(manager.phase("chat"), Ok(Phase::Terminal));

    assert_eq!(
        manager.play("chat", 2, 2),
        Err(SessionError::Engine(EngineError::GameOver))
    );

    let board = manager.start("chat").unwrap();
    assert_eq!(board, Board::new());
    assert_eq!(manager.phase("chat"), Ok(Phase::AwaitingMove));
}

#[test]
fn test_illegal_move_keeps_awaiting() {
    let manager = SessionManager::new(Marks::new(Mark::O), FirstFreeSelector);
    manager.start("chat").unwrap();
    let (outcome, board) = manager.play("chat", 1, 1).unwrap();
    assert_eq!(outcome, Outcome::Ongoing);
    assert_eq!(board.get(Position::TopLeft), tictactoe_bot::Square::Occupied(Mark::X));

    let (outcome, after) = manager.play("chat", 0, 0).unwrap();
    assert_eq!(outcome, Outcome::IllegalMove);
    assert_eq!(after, board);
    assert_eq!(manager.phase("chat"), Ok(Phase::AwaitingMove));
}

#[test]
fn test_stop_forgets_session() {
    let manager = SessionManager::random();
    manager.start("chat").unwrap();
    manager.stop("chat").unwrap();
    assert!(manager.list_sessions().unwrap().is_empty());
    assert!(matches!(
        manager.stop("chat"),
        Err(SessionError::UnknownSession(_))
    ));
}

#[test]
fn test_sessions_are_independent() {
    let manager = SessionManager::new(Marks::default(), FirstFreeSelector);
    manager.start("a").unwrap();
    manager.start("b").unwrap();
    manager.play("a", 2, 2).unwrap();

    assert_eq!(manager.session("b").unwrap().board(), &Board::new());
    assert_eq!(manager.session("a").unwrap().board().count(Mark::X), 1);
}

#[test]
fn test_clones_share_sessions_across_threads() {
    let manager = SessionManager::new(Marks::default(), RandomSelector::seeded(3));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let manager = manager.clone();
            thread::spawn(move || {
                let id = format!("chat-{i}");
                manager.start(&id).unwrap();
                let (outcome, _) = manager.play(&id, 1, 1).unwrap();
                assert_eq!(outcome, Outcome::Ongoing);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut ids = manager.list_sessions().unwrap();
    ids.sort();
    assert_eq!(ids, vec!["chat-0", "chat-1", "chat-2", "chat-3"]);
    for id in ids {
        let session = manager.session(&id).unwrap();
        assert_eq!(session.board().count(Mark::X), 1);
        assert_eq!(session.board().count(Mark::O), 1);
    }
}
