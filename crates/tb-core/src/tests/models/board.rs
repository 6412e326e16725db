use crate::{Board, WorkItem};

use uuid::Uuid;

#[test]
fn test_board_new() {
    let id = Uuid::new_v4();
    let board = Board::new(id, "Backlog".to_string(), false, vec![]);

    assert_eq!(board.id, id);
    assert_eq!(board.name, "Backlog");
    assert!(!board.synced);
    assert_eq!(board.work_items.len(), 0);
}

#[test]
fn test_board_new_stores_work_items_as_passed() {
    let items = vec![
        WorkItem::new(Uuid::new_v4(), "Task1".to_string()),
        WorkItem::new(Uuid::new_v4(), "Task2".to_string()),
    ];

    let board = Board::new(Uuid::new_v4(), "Doing".to_string(), true, items.clone());

    assert_eq!(board.work_items, items);
}

#[test]
fn test_board_is_mutable() {
    let mut board = Board::new(Uuid::new_v4(), "Doing".to_string(), false, vec![]);

    board.synced = true;
    board
        .work_items
        .push(WorkItem::new(Uuid::new_v4(), "Task1".to_string()));

    assert!(board.synced);
    assert_eq!(board.work_items.len(), 1);
}
