// practice-tracker-tui/src/app/actions.rs
use super::navigation::{list_next, list_previous};
use super::state::{App, NoteDrill, Screen, TempoPopup, NOTE_COUNT_MAX, NOTE_COUNT_MIN};
use practice_tracker_lib::{pick_notes, sorted_keys};

impl App {
    pub(crate) fn cursor_up(&mut self) {
        list_previous(&mut self.list_state, self.keys.len());
    }

    pub(crate) fn cursor_down(&mut self) {
        list_next(&mut self.list_state, self.keys.len());
    }

    pub(crate) fn back_to_main(&mut self) {
        self.screen = Screen::Main;
        let categories = self.service.categories();
        self.set_list(categories);
    }

    /// Enter on a main-menu row: hotkey link, note drill, or technique submenu.
    pub(crate) fn enter_selected_category(&mut self) {
        let Some(category) = self.selected_key().map(str::to_string) else {
            return;
        };

        if let Some(url) = self.service.hotkey_url(&category).map(str::to_string) {
            self.launch_url(&url);
            return;
        }

        if self.service.is_note_drill(&category) {
            self.screen = Screen::NoteLocation(NoteDrill::default());
            self.list_state.select(if self.keys.is_empty() { None } else { Some(0) });
            return;
        }

        let exercises = self.service.exercises(&category);
        self.screen = Screen::Submenu {
            technique: category,
            popup: TempoPopup::Closed,
        };
        self.set_list(exercises);
    }

    pub(crate) fn open_daily_set(&mut self) {
        let picks = self.service.pick_daily(&mut self.rng);
        let categories = sorted_keys(&picks);
        tracing::debug!("Daily set drawn from {} categories", categories.len());
        self.screen = Screen::FourExercises {
            picks,
            popup: TempoPopup::Closed,
        };
        self.set_list(categories);
    }

    pub(crate) fn open_tempo_popup(&mut self) {
        if self.selected_key().is_some() {
            self.screen.open_popup();
        }
    }

    pub(crate) fn launch_metronome(&mut self) {
        let url = self.service.config.metronome_url.clone();
        self.launch_url(&url);
    }

    /// A failed launch only fails this action.
    pub(crate) fn launch_url(&mut self, url: &str) {
        tracing::info!("Opening {url}");
        if let Err(e) = (self.launcher)(url) {
            tracing::warn!("Failed to open {url}: {e}");
            self.set_error(format!("Failed to open {url}: {e}"));
        }
    }

    /// Closes the popup and, if the buffer holds a number, saves it as the new tempo.
    /// Anything unparsable is dropped without a message.
    pub(crate) fn submit_tempo(&mut self) {
        let target = self.edit_target();
        let Some(input) = self.screen.take_popup_input() else {
            return;
        };
        let Ok(bpm) = input.trim().parse::<u32>() else {
            tracing::debug!("Discarding tempo input {input:?}");
            return;
        };
        let Some((category, exercise)) = target else {
            return;
        };

        // Keep the daily set in step with the catalog.
        if let Screen::FourExercises { picks, .. } = &mut self.screen {
            if let Some(pick) = picks.get_mut(&category) {
                pick.insert(exercise.clone(), bpm);
            }
        }

        match self.service.set_tempo(&category, &exercise, bpm) {
            Ok(()) => self.set_success(),
            Err(e) => {
                tracing::error!("{e:#}");
                self.set_error(format!("Save failed: {e}"));
            }
        }
    }

    pub(crate) fn note_count_down(&mut self) {
        if let Screen::NoteLocation(drill) = &mut self.screen {
            drill.count = drill.count.saturating_sub(1).max(NOTE_COUNT_MIN);
        }
    }

    pub(crate) fn note_count_up(&mut self) {
        if let Screen::NoteLocation(drill) = &mut self.screen {
            drill.count = (drill.count + 1).min(NOTE_COUNT_MAX);
        }
    }

    pub(crate) fn draw_notes(&mut self) {
        if let Screen::NoteLocation(drill) = &mut self.screen {
            drill.notes = pick_notes(drill.count, &mut self.rng);
        }
    }
}
