// practice-tracker-tui/src/ui/modals.rs
use crate::{
    app::{
        state::{NOTE_COUNT_MAX, NOTE_COUNT_MIN},
        App, NoteDrill, Screen, TempoPopup,
    },
    ui::layout::{centered_rect, centered_rect_fixed},
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title_style(Style::new().bold())
        .border_style(Style::new().fg(Color::Indexed(62)))
}

pub fn render_tempo_popup(f: &mut Frame, app: &App) {
    let input = match app.screen.popup() {
        Some(TempoPopup::Editing { input }) => input.as_str(),
        _ => return,
    };
    let Some((category, exercise)) = app.edit_target() else {
        return;
    };

    let area = centered_rect_fixed(44, 9, f.size());
    f.render_widget(Clear, area);
    let block = popup_block("Edit Tempo");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let current = match &app.screen {
        Screen::FourExercises { picks, .. } => {
            picks.get(&category).and_then(|pick| pick.get(&exercise)).copied()
        }
        _ => app.service.tempo(&category, &exercise),
    };

    let lines = vec![
        Line::from(format!("Editing [{exercise}] BPM")).style(Style::new().bold()),
        Line::from(Span::styled(
            current.map_or(String::new(), |bpm| format!("currently {bpm}")),
            Style::new().dark_gray(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(input.to_string(), Style::new().yellow()),
            Span::styled("_", Style::new().yellow().slow_blink()),
        ]),
        Line::from(""),
        Line::from("[enter] Save • [esc] Cancel").style(Style::new().dark_gray()),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}

pub fn render_note_drill_modal(f: &mut Frame, drill: &NoteDrill) {
    let area = centered_rect_fixed(50, 11, f.size());
    f.render_widget(Clear, area);
    let block = popup_block("Note Location");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Count selector
            Constraint::Min(1),    // Drawn notes
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let left = if drill.count > NOTE_COUNT_MIN { "◀ " } else { "  " };
    let right = if drill.count < NOTE_COUNT_MAX { " ▶" } else { "  " };
    let selector = Paragraph::new(Line::from(vec![
        Span::raw("How many notes? "),
        Span::raw(left),
        Span::styled(drill.count.to_string(), Style::new().bold().yellow()),
        Span::raw(right),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(selector, chunks[0]);

    let notes_line = if drill.notes.is_empty() {
        Line::from("Press enter to draw notes").style(Style::new().dark_gray())
    } else {
        let names: Vec<String> = drill.notes.iter().map(ToString::to_string).collect();
        Line::from(names.join("   ")).style(Style::new().bold().green())
    };
    let notes = Paragraph::new(notes_line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(notes, chunks[1]);

    let hints = Paragraph::new("[←/→] Count • [enter] Draw • [esc] Back")
        .alignment(Alignment::Center)
        .style(Style::new().dark_gray());
    f.render_widget(hints, chunks[2]);
}

pub fn render_help_modal(f: &mut Frame) {
    let block = Block::default()
        .title("Help (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().yellow());
    let area = centered_rect(60, 70, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let help_text = vec![
        Line::from("--- Menus ---").style(Style::new().bold().underlined()),
        Line::from(" k / ↑: Navigate Up"),
        Line::from(" j / ↓: Navigate Down"),
        Line::from(" m: Open Metronome"),
        Line::from(" ?: Show/Hide This Help"),
        Line::from(" q: Quit"),
        Line::from(""),
        Line::from("--- Techniques ---").style(Style::new().bold().underlined()),
        Line::from(" Enter: Open Technique (↗ opens a link, ♪ starts the note drill)"),
        Line::from(" r: Random Practice Set"),
        Line::from(""),
        Line::from("--- Exercises / Practice Set ---").style(Style::new().bold().underlined()),
        Line::from(" e / Enter: Edit Tempo (digits only)"),
        Line::from(" r: Draw a New Set (practice set only)"),
        Line::from(" Esc: Back to Techniques"),
        Line::from(""),
        Line::from("--- Note Location ---").style(Style::new().bold().underlined()),
        Line::from(" h / ←, l / →: Number of Notes (1-9)"),
        Line::from(" Enter: Draw Notes"),
        Line::from(" Esc: Back"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(Block::default()) // No borders for inner paragraph
        .wrap(Wrap { trim: true });

    let inner_area = area.inner(&ratatui::layout::Margin {
        vertical: 1,
        horizontal: 1,
    });
    f.render_widget(paragraph, inner_area);
}
