// src/app/input.rs
use super::state::{App, Screen};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

// Main key event handler method on App
impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        self.clear_expired_messages(Instant::now());

        if self.show_help {
            self.handle_help_input(key);
            return Ok(());
        }

        // The edit popup captures every key until it closes
        if self.screen.is_editing() {
            self.handle_tempo_popup_input(key);
            return Ok(());
        }

        match self.screen {
            Screen::Main => self.handle_main_input(key),
            Screen::Submenu { .. } => self.handle_submenu_input(key),
            Screen::FourExercises { .. } => self.handle_daily_set_input(key),
            Screen::NoteLocation(_) => self.handle_note_drill_input(key),
        }
        Ok(())
    }

    fn handle_help_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => self.show_help = false,
            _ => {} // Ignore other keys in help
        }
    }

    fn handle_tempo_popup_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(input) = self.screen.popup_input_mut() {
                    input.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.screen.popup_input_mut() {
                    input.pop();
                }
            }
            KeyCode::Enter => self.submit_tempo(),
            KeyCode::Esc => {
                self.screen.take_popup_input();
            }
            _ => {} // Only digits are accepted
        }
    }

    fn handle_main_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('k') | KeyCode::Up => self.cursor_up(),
            KeyCode::Char('j') | KeyCode::Down => self.cursor_down(),
            KeyCode::Enter => self.enter_selected_category(),
            KeyCode::Char('r') => self.open_daily_set(),
            KeyCode::Char('m') => self.launch_metronome(),
            _ => {}
        }
    }

    fn handle_submenu_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('k') | KeyCode::Up => self.cursor_up(),
            KeyCode::Char('j') | KeyCode::Down => self.cursor_down(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_tempo_popup(),
            KeyCode::Char('m') => self.launch_metronome(),
            KeyCode::Esc => self.back_to_main(),
            _ => {}
        }
    }

    fn handle_daily_set_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('k') | KeyCode::Up => self.cursor_up(),
            KeyCode::Char('j') | KeyCode::Down => self.cursor_down(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_tempo_popup(),
            KeyCode::Char('r') => self.open_daily_set(),
            KeyCode::Char('m') => self.launch_metronome(),
            KeyCode::Esc => self.back_to_main(),
            _ => {}
        }
    }

    fn handle_note_drill_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => self.note_count_down(),
            KeyCode::Char('l') | KeyCode::Right => self.note_count_up(),
            KeyCode::Enter => self.draw_notes(),
            KeyCode::Esc => self.back_to_main(),
            _ => {}
        }
    }
}
