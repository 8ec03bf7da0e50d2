// practice-tracker-tui/src/ui/menus.rs
use crate::app::{App, Screen};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Row, Table, TableState},
    Frame,
};

fn highlight_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

/// "95 BPM" plus the snapshot value when it differs.
fn tempo_cell(current: Option<u32>, last: Option<u32>) -> Line<'static> {
    let current_text = current.map_or("-".to_string(), |bpm| format!("{bpm} BPM"));
    match (current, last) {
        (Some(now), Some(then)) if now > then => Line::from(vec![
            Span::raw(current_text),
            Span::styled(format!("  (+{})", now - then), Style::new().green()),
        ]),
        (Some(now), Some(then)) if now < then => Line::from(vec![
            Span::raw(current_text),
            Span::styled(format!("  (-{})", then - now), Style::new().red()),
        ]),
        _ => Line::from(current_text),
    }
}

fn last_period_cell(last: Option<u32>) -> Cell<'static> {
    match last {
        Some(bpm) => Cell::from(format!("{bpm} BPM")),
        None => Cell::from("new").style(Style::new().dark_gray()),
    }
}

pub fn render_main_menu(f: &mut Frame, app: &mut App, area: Rect) {
    let list_items: Vec<ListItem> = app
        .keys
        .iter()
        .map(|category| {
            if app.service.hotkey_url(category).is_some() {
                // Hotkey label: opens a link instead of a submenu
                ListItem::new(Line::from(vec![
                    Span::raw(category.clone()),
                    Span::styled("  ↗", Style::new().cyan()),
                ]))
            } else if app.service.is_note_drill(category) {
                ListItem::new(Line::from(vec![
                    Span::raw(category.clone()),
                    Span::styled("  ♪", Style::new().magenta()),
                ]))
            } else {
                let count = app.service.exercises(category).len();
                ListItem::new(Line::from(vec![
                    Span::raw(category.clone()),
                    Span::styled(format!("  ({count})"), Style::new().dark_gray()),
                ]))
            }
        })
        .collect();

    let list = List::new(list_items)
        .block(Block::default().borders(Borders::ALL).title("Techniques"))
        .highlight_style(highlight_style())
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

pub fn render_submenu(f: &mut Frame, app: &mut App, area: Rect) {
    let Screen::Submenu { technique, .. } = &app.screen else {
        return;
    };

    let rows: Vec<Row> = app
        .keys
        .iter()
        .map(|exercise| {
            let current = app.service.tempo(technique, exercise);
            let last = app.service.last_period_tempo(technique, exercise);
            Row::new(vec![
                Cell::from(exercise.clone()),
                Cell::from(tempo_cell(current, last)),
                last_period_cell(last),
            ])
        })
        .collect();

    let header = Row::new(vec!["Exercise", "Tempo", "Last month"])
        .style(Style::new().bold().underlined())
        .bottom_margin(1);
    let widths = [
        Constraint::Percentage(50),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(technique.clone()))
        .highlight_style(highlight_style())
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(app.list_state.selected());
    f.render_stateful_widget(table, area, &mut table_state);
}

pub fn render_daily_set(f: &mut Frame, app: &mut App, area: Rect) {
    let Screen::FourExercises { picks, .. } = &app.screen else {
        return;
    };

    let rows: Vec<Row> = app
        .keys
        .iter()
        .filter_map(|category| {
            let (exercise, bpm) = picks.get(category)?.iter().next()?;
            let last = app.service.last_period_tempo(category, exercise);
            Some(Row::new(vec![
                Cell::from(category.clone()),
                Cell::from(exercise.clone()),
                Cell::from(tempo_cell(Some(*bpm), last)),
                last_period_cell(last),
            ]))
        })
        .collect();

    let header = Row::new(vec!["Technique", "Exercise", "Tempo", "Last month"])
        .style(Style::new().bold().underlined())
        .bottom_margin(1);
    let widths = [
        Constraint::Percentage(25),
        Constraint::Percentage(35),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ];
    let title = if rows.is_empty() {
        "Nothing to pick: none of the daily categories have exercises"
    } else {
        "Random practice set"
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(highlight_style())
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(app.list_state.selected());
    f.render_stateful_widget(table, area, &mut table_state);
}
