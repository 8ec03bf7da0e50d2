// practice-tracker-tui/src/ui/status_bar.rs
use crate::app::{App, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = if app.show_help {
        " [Esc/Enter/?] Close Help "
    } else if app.screen.is_editing() {
        " [0-9] Type BPM | [Backspace] Delete | [Enter] Save | [Esc] Cancel "
    } else {
        match app.screen {
            Screen::Main => " [↑↓/jk] Nav | [Enter] Select | [r]andom set | [m]etronome | [?] Help | [q]uit ",
            Screen::Submenu { .. } => " [↑↓/jk] Nav | [e]dit BPM | [m]etronome | [Esc] Back | [?] Help | [q]uit ",
            Screen::FourExercises { .. } => " [↑↓/jk] Nav | [e]dit BPM | [r]eroll | [m]etronome | [Esc] Back | [q]uit ",
            Screen::NoteLocation(_) => " [←→/hl] Count | [Enter] Draw | [Esc] Back ",
        }
    };

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(area);

    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status_paragraph, status_chunks[0]);

    // Errors win over the success banner
    let (message, style) = if let Some(error) = app.last_error.as_deref() {
        (error, Style::default().bg(Color::DarkGray).fg(Color::Red))
    } else if app.success_visible() {
        (
            "Saved ✓ ",
            Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("", Style::default().bg(Color::DarkGray))
    };

    let message_paragraph = Paragraph::new(message)
        .style(style)
        .alignment(Alignment::Right);
    f.render_widget(message_paragraph, status_chunks[1]);
}
