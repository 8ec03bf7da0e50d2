// src/app/navigation.rs
use ratatui::widgets::ListState;

// The cursor stops at either end of the list instead of wrapping.

pub fn list_next(state: &mut ListState, list_len: usize) {
    if list_len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(i) if i + 1 >= list_len => list_len - 1,
        Some(i) => i + 1,
        None => 0,
    };
    state.select(Some(i));
}

pub fn list_previous(state: &mut ListState, list_len: usize) {
    if list_len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(i) => i.saturating_sub(1).min(list_len - 1),
        None => 0,
    };
    state.select(Some(i));
}
