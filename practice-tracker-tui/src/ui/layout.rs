// practice-tracker-tui/src/ui/layout.rs
use crate::{
    app::{App, Screen},
    ui::{
        menus::{render_daily_set, render_main_menu, render_submenu},
        modals::{render_help_modal, render_note_drill_modal, render_tempo_popup},
        status_bar::render_status_bar,
    },
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &mut App) {
    let size = f.size();

    // Header on top, content below, status bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status Bar
        ])
        .split(size);

    render_header(f, app, main_chunks[0]);
    render_main_content(f, app, main_chunks[1]);
    render_status_bar(f, app, main_chunks[2]);

    // Popups last so they draw over the list
    if app.screen.is_editing() {
        render_tempo_popup(f, app);
    }
    if let Screen::NoteLocation(drill) = &app.screen {
        render_note_drill_modal(f, drill);
    }
    if app.show_help {
        render_help_modal(f);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.screen {
        Screen::Main | Screen::NoteLocation(_) => "What are we working on?".to_string(),
        Screen::Submenu { technique, .. } => format!("Exercises for {technique}"),
        Screen::FourExercises { .. } => "Today's practice set".to_string(),
    };
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(Style::new().bold())
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn render_main_content(f: &mut Frame, app: &mut App, area: Rect) {
    match app.screen {
        Screen::Main | Screen::NoteLocation(_) => render_main_menu(f, app, area),
        Screen::Submenu { .. } => render_submenu(f, app, area),
        Screen::FourExercises { .. } => render_daily_set(f, app, area),
    }
}

/// Helper function to create a centered rectangle for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Fixed-size centered rectangle, shrunk to fit small terminals.
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
