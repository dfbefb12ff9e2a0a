use super::*;
use crate::matrix::{CellPos, Matrix};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

fn create_test_model(amounts: &[Vec<i64>]) -> Model {
    Model::new(
        Matrix::from_amounts(amounts),
        crate::matrix::seeded_rng(Some(11)),
        (100, 30),
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn amounts(model: &Model) -> Vec<Vec<i64>> {
    model.matrix.amounts()
}

// Hover

#[test]
fn test_hover_cell_highlights_nearest() {
    let model = create_test_model(&[vec![10, 11, 50], vec![12, 90, 9]]).with_neighbor_count(3);
    let model = update(model, Message::HoverCell(CellPos::new(0, 0)));

    assert_eq!(model.hovered_cell, Some(CellPos::new(0, 0)));
    assert_eq!(model.cursor, CellPos::new(0, 0));
    let ids: Vec<_> = [(0, 0), (0, 1), (1, 2)]
        .iter()
        .map(|&(r, c)| model.matrix.cell(CellPos::new(r, c)).unwrap().id)
        .collect();
    assert_eq!(model.highlighted.len(), 3);
    for id in ids {
        assert!(model.highlighted.contains(&id));
    }
}

#[test]
fn test_hover_row_sum_clears_cell_hover() {
    let model = create_test_model(&[vec![1, 2], vec![3, 4]]);
    let model = update(model, Message::HoverCell(CellPos::new(0, 1)));
    let model = update(model, Message::HoverRowSum(1));

    assert_eq!(model.hovered_cell, None);
    assert!(model.highlighted.is_empty());
    assert_eq!(model.hovered_sum_row, Some(1));
    assert_eq!(model.focused_row_stats(), Some((1, 7, 3.5)));
}

#[test]
fn test_hover_outside_matrix_clears() {
    let model = create_test_model(&[vec![1, 2]]);
    let model = update(model, Message::HoverCell(CellPos::new(0, 0)));
    let model = update(model, Message::HoverCell(CellPos::new(5, 5)));
    assert!(!model.hover_active());
}

#[test]
fn test_clear_hover() {
    let model = create_test_model(&[vec![1, 2]]);
    let model = update(model, Message::HoverCell(CellPos::new(0, 0)));
    let model = update(model, Message::ClearHover);
    assert!(!model.hover_active());
    assert!(model.highlighted.is_empty());
}

#[test]
fn test_toggle_row_percent_uses_cursor_row() {
    let mut model = create_test_model(&[vec![1, 2], vec![3, 4]]);
    model.cursor = CellPos::new(1, 0);
    let model = update(model, Message::ToggleRowPercent);
    assert_eq!(model.hovered_sum_row, Some(1));
    let model = update(model, Message::ToggleRowPercent);
    assert_eq!(model.hovered_sum_row, None);
}

#[test]
fn test_move_cursor_clamps_to_jagged_rows() {
    let model = create_test_model(&[vec![1, 2, 3], vec![4]]);
    let model = update(model, Message::MoveCursor(Direction::Right));
    let model = update(model, Message::MoveCursor(Direction::Right));
    let model = update(model, Message::MoveCursor(Direction::Right));
    assert_eq!(model.cursor, CellPos::new(0, 2));

    let model = update(model, Message::MoveCursor(Direction::Down));
    assert_eq!(model.cursor, CellPos::new(1, 0));
    assert_eq!(model.hovered_cell, Some(CellPos::new(1, 0)));

    let model = update(model, Message::MoveCursor(Direction::Down));
    assert_eq!(model.cursor, CellPos::new(1, 0));
}

// Edits

#[test]
fn test_increment_cell() {
    let model = create_test_model(&[vec![1, 2], vec![3, 4]]);
    let before = model.matrix.clone();
    let model = update(model, Message::IncrementCell(CellPos::new(1, 0)));

    assert_eq!(amounts(&model), vec![vec![1, 2], vec![4, 4]]);
    assert_eq!(
        model.matrix.cell(CellPos::new(1, 0)).unwrap().id,
        before.cell(CellPos::new(1, 0)).unwrap().id
    );
    assert_eq!(before.amounts(), vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn test_increment_out_of_bounds_warns_and_keeps_matrix() {
    let model = create_test_model(&[vec![1, 2]]);
    let before = model.matrix.clone();
    let model = update(model, Message::IncrementCell(CellPos::new(0, 9)));

    assert_eq!(model.matrix, before);
    let (message, level) = model.active_toast().unwrap();
    assert_eq!(level, ToastLevel::Warning);
    assert!(message.contains("Cannot increment"));
}

#[test]
fn test_delete_cell_zeroes_by_default() {
    let model = create_test_model(&[vec![5, 6], vec![7, 8]]);
    let model = update(model, Message::DeleteCell(CellPos::new(0, 1)));
    assert_eq!(amounts(&model), vec![vec![5, 0], vec![7, 8]]);
}

#[test]
fn test_delete_cell_remove_mode_drops_cell() {
    let model = create_test_model(&[vec![5, 6], vec![7]])
        .with_cell_delete(crate::config::CellDeleteMode::Remove);
    let model = update(model, Message::DeleteCell(CellPos::new(0, 0)));
    assert_eq!(amounts(&model), vec![vec![6], vec![7]]);

    let model = update(model, Message::DeleteCell(CellPos::new(1, 0)));
    assert_eq!(amounts(&model), vec![vec![6]]);
}

#[test]
fn test_remove_row_prunes_hover() {
    let model = create_test_model(&[vec![1], vec![2]]);
    let model = update(model, Message::HoverCell(CellPos::new(1, 0)));
    let model = update(model, Message::RemoveRow(1));

    assert_eq!(amounts(&model), vec![vec![1]]);
    assert_eq!(model.hovered_cell, None);
    assert!(model.highlighted.is_empty());
    assert_eq!(model.cursor, CellPos::new(0, 0));
}

#[test]
fn test_structural_edits_drop_hover() {
    let model = create_test_model(&[vec![1, 2, 3], vec![4, 5, 6]]);
    let model = update(model, Message::HoverCell(CellPos::new(0, 0)));
    let model = update(model, Message::RemoveColumn(0));
    assert_eq!(model.hovered_cell, None);
    assert!(model.highlighted.is_empty());
    assert_eq!(model.cursor, CellPos::new(0, 0));

    let model = update(model, Message::HoverCell(CellPos::new(0, 1)));
    let model = update(model, Message::RemoveRow(1));
    assert!(!model.hover_active());

    let model = update(model, Message::HoverRowSum(0));
    let model = update(
        model.with_cell_delete(crate::config::CellDeleteMode::Remove),
        Message::DeleteCell(CellPos::new(0, 0)),
    );
    assert_eq!(amounts(&model), vec![vec![3]]);
    assert!(!model.hover_active());
}

#[test]
fn test_value_edit_keeps_hover() {
    let model = create_test_model(&[vec![1, 2]]);
    let model = update(model, Message::HoverCell(CellPos::new(0, 1)));
    let model = update(model, Message::IncrementCell(CellPos::new(0, 1)));
    assert_eq!(model.hovered_cell, Some(CellPos::new(0, 1)));
    assert!(!model.highlighted.is_empty());
}

#[test]
fn test_remove_row_out_of_range_is_noop() {
    let model = create_test_model(&[vec![1], vec![2]]);
    let model = update(model, Message::RemoveRow(7));
    assert_eq!(amounts(&model), vec![vec![1], vec![2]]);
}

#[test]
fn test_remove_column() {
    let model = create_test_model(&[vec![1, 2, 3], vec![4, 5]]);
    let model = update(model, Message::RemoveColumn(2));
    assert_eq!(amounts(&model), vec![vec![1, 2], vec![4, 5]]);
    let model = update(model, Message::RemoveColumn(0));
    assert_eq!(amounts(&model), vec![vec![2], vec![5]]);
}

#[test]
fn test_add_row_appends_and_scrolls_into_view() {
    let rows: Vec<Vec<i64>> = (0..40).map(|n| vec![n, n]).collect();
    let model = create_test_model(&rows);
    let model = update(model, Message::AddRow);

    assert_eq!(model.matrix.row_count(), 41);
    let last = model.matrix.row(40).unwrap();
    assert_eq!(last.len(), 2);
    assert!(last.iter().all(|cell| (0..100).contains(&cell.amount)));
    assert!(model.viewport.visible_range().contains(&40));
}

// Scrolling, help and quit

#[test]
fn test_scroll_and_page() {
    let rows: Vec<Vec<i64>> = (0..60).map(|n| vec![n]).collect();
    let model = create_test_model(&rows);
    let model = update(model, Message::ScrollDown(3));
    assert_eq!(model.viewport.offset(), 3);
    let model = update(model, Message::PageDown);
    assert!(model.viewport.offset() > 3);
    let model = update(model, Message::PageUp);
    let model = update(model, Message::ScrollUp(100));
    assert_eq!(model.viewport.offset(), 0);
}

#[test]
fn test_toggle_help_and_quit() {
    let model = create_test_model(&[vec![1]]);
    let model = update(model, Message::ToggleHelp);
    assert!(model.help_visible);
    let model = update(model, Message::HideHelp);
    assert!(!model.help_visible);
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_resize_updates_viewport() {
    let model = create_test_model(&[vec![1]]);
    let model = update(model, Message::Resize(60, 20));
    assert_eq!(model.screen_size, (60, 20));
    assert_eq!(model.viewport.width(), 60);
}

// Key mapping

#[test]
fn test_keys_map_to_messages() {
    let model = create_test_model(&[vec![1, 2], vec![3, 4]]);
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::IncrementCell(CellPos::new(0, 0)))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('x')), &model),
        Some(Message::DeleteCell(CellPos::new(0, 0)))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('d')), &model),
        Some(Message::RemoveRow(0))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('c')), &model),
        Some(Message::RemoveColumn(0))
    );
    assert_eq!(App::handle_key(key(KeyCode::Char('a')), &model), Some(Message::AddRow));
    assert_eq!(
        App::handle_key(key(KeyCode::Char('j')), &model),
        Some(Message::MoveCursor(Direction::Down))
    );
    assert_eq!(App::handle_key(key(KeyCode::Char('q')), &model), Some(Message::Quit));
    assert_eq!(App::handle_key(key(KeyCode::Esc), &model), None);
}

#[test]
fn test_ctrl_c_quits_rather_than_removing_column() {
    let model = create_test_model(&[vec![1, 2]]);
    let mut ctrl_c = key(KeyCode::Char('c'));
    ctrl_c.modifiers = KeyModifiers::CONTROL;
    assert_eq!(App::handle_key(ctrl_c, &model), Some(Message::Quit));
}

#[test]
fn test_any_key_closes_help() {
    let mut model = create_test_model(&[vec![1]]);
    model.help_visible = true;
    assert_eq!(
        App::handle_key(key(KeyCode::Char('a')), &model),
        Some(Message::HideHelp)
    );
}

#[test]
fn test_key_release_ignored() {
    let model = create_test_model(&[vec![1]]);
    let mut release = key(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;
    assert_eq!(App::handle_key(release, &model), None);
}

// Mouse mapping

#[test]
fn test_mouse_move_enters_cell_once() {
    let model = create_test_model(&[vec![1, 2], vec![3, 4]]);
    let layout = model.grid_layout();
    let (x, y) = (layout.column_x(1), layout.row_y(1).unwrap());

    let msg = App::handle_mouse(mouse(MouseEventKind::Moved, x, y), &model);
    assert_eq!(msg, Some(Message::HoverCell(CellPos::new(1, 1))));

    let model = update(model, msg.unwrap());
    assert_eq!(
        App::handle_mouse(mouse(MouseEventKind::Moved, x + 1, y), &model),
        None
    );
}

#[test]
fn test_mouse_move_off_grid_clears_hover() {
    let model = create_test_model(&[vec![1, 2]]);
    let model = update(model, Message::HoverCell(CellPos::new(0, 0)));
    assert_eq!(
        App::handle_mouse(mouse(MouseEventKind::Moved, 99, 29), &model),
        Some(Message::ClearHover)
    );
}

#[test]
fn test_mouse_move_over_row_sum() {
    let model = create_test_model(&[vec![1, 2]]);
    let layout = model.grid_layout();
    let msg = App::handle_mouse(
        mouse(MouseEventKind::Moved, layout.sum_x(), layout.row_y(0).unwrap()),
        &model,
    );
    assert_eq!(msg, Some(Message::HoverRowSum(0)));
}

#[test]
fn test_mouse_clicks() {
    let model = create_test_model(&[vec![1, 2], vec![3, 4]]);
    let layout = model.grid_layout();
    let click = |x, y, model: &Model| {
        App::handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), x, y), model)
    };

    let row_y = layout.row_y(0).unwrap();
    assert_eq!(
        click(layout.column_x(0), row_y, &model),
        Some(Message::IncrementCell(CellPos::new(0, 0)))
    );
    assert_eq!(click(layout.actions_x(), row_y, &model), Some(Message::RemoveRow(0)));
    assert_eq!(
        click(layout.delete_marker_x(1), layout.header_y(), &model),
        Some(Message::RemoveColumn(1))
    );
    assert_eq!(click(layout.column_x(0), 0, &model), Some(Message::AddRow));
    assert_eq!(click(layout.sum_x(), row_y, &model), None);
}

#[test]
fn test_delete_marker_click_requires_hover() {
    let model = create_test_model(&[vec![1, 2]]);
    let layout = model.grid_layout();
    let (x, y) = (layout.delete_marker_x(0), layout.row_y(0).unwrap());
    let up = mouse(MouseEventKind::Up(MouseButton::Left), x, y);

    assert_eq!(
        App::handle_mouse(up, &model),
        Some(Message::IncrementCell(CellPos::new(0, 0)))
    );

    let model = update(model, Message::HoverCell(CellPos::new(0, 0)));
    assert_eq!(
        App::handle_mouse(up, &model),
        Some(Message::DeleteCell(CellPos::new(0, 0)))
    );
}

#[test]
fn test_resize_event() {
    let model = create_test_model(&[vec![1]]);
    assert_eq!(
        App::handle_event(&Event::Resize(40, 12), &model),
        Some(Message::Resize(40, 12))
    );
}

// Startup

#[test]
fn test_initial_model_is_reproducible_with_seed() {
    let app = App::new(4, 3).with_seed(Some(99)).with_neighbor_count(2);
    let a = app.initial_model((80, 24));
    let b = app.initial_model((80, 24));

    assert_eq!(a.matrix, b.matrix);
    assert_eq!(a.matrix.row_count(), 4);
    assert_eq!(a.matrix.column_count(), 3);
    assert_eq!(a.neighbor_count, 2);

    let a = update(a, Message::AddRow);
    let b = update(b, Message::AddRow);
    assert_eq!(a.matrix, b.matrix);
}

#[test]
fn test_default_app_is_five_by_five() {
    let model = App::default().with_seed(Some(1)).initial_model((80, 24));
    assert_eq!(model.matrix.amounts().len(), 5);
    assert!(model.matrix.rows().iter().all(|row| row.len() == 5));
    assert_eq!(model.cell_delete, crate::config::CellDeleteMode::Zero);
}
