// practice-tracker-tui/src/app/state.rs
use practice_tracker_lib::{Catalog, Note, PracticeService};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

const ERROR_DISPLAY_SECS: u64 = 5;
pub const NOTE_COUNT_MIN: usize = 1;
pub const NOTE_COUNT_MAX: usize = 9;

/// Opens a URL with the OS default handler.
pub type UrlLauncher = Box<dyn FnMut(&str) -> std::io::Result<()>>;

/// Tempo edit overlay. The buffer only exists while editing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum TempoPopup {
    #[default]
    Closed,
    Editing { input: String },
}

/// Note-location drill, owned by its screen so nothing leaks into the next visit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteDrill {
    pub count: usize,
    pub notes: Vec<Note>,
}

impl Default for NoteDrill {
    fn default() -> Self {
        Self {
            count: NOTE_COUNT_MIN,
            notes: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Main,
    Submenu {
        technique: String,
        popup: TempoPopup,
    },
    /// The random daily set: one exercise per category.
    FourExercises {
        picks: Catalog,
        popup: TempoPopup,
    },
    NoteLocation(NoteDrill),
}

impl Screen {
    pub fn popup(&self) -> Option<&TempoPopup> {
        match self {
            Screen::Submenu { popup, .. } | Screen::FourExercises { popup, .. } => Some(popup),
            Screen::Main | Screen::NoteLocation(_) => None,
        }
    }

    fn popup_mut(&mut self) -> Option<&mut TempoPopup> {
        match self {
            Screen::Submenu { popup, .. } | Screen::FourExercises { popup, .. } => Some(popup),
            Screen::Main | Screen::NoteLocation(_) => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.popup(), Some(TempoPopup::Editing { .. }))
    }

    /// Opens the edit popup with an empty buffer. No-op on screens without one.
    pub fn open_popup(&mut self) {
        if let Some(popup) = self.popup_mut() {
            *popup = TempoPopup::Editing {
                input: String::new(),
            };
        }
    }

    /// Closes the popup and hands back whatever was typed.
    pub fn take_popup_input(&mut self) -> Option<String> {
        let popup = self.popup_mut()?;
        match std::mem::take(popup) {
            TempoPopup::Editing { input } => Some(input),
            TempoPopup::Closed => None,
        }
    }

    pub fn popup_input_mut(&mut self) -> Option<&mut String> {
        match self.popup_mut()? {
            TempoPopup::Editing { input } => Some(input),
            TempoPopup::Closed => None,
        }
    }
}

// Holds the application state
pub struct App {
    pub service: PracticeService,
    pub screen: Screen,
    /// Ordered list currently on screen; the list state's selection is the cursor.
    pub keys: Vec<String>,
    pub list_state: ListState,
    pub show_help: bool,
    pub should_quit: bool,

    pub success_until: Option<Instant>,
    pub last_error: Option<String>, // For status bar errors
    pub error_clear_time: Option<Instant>,

    pub(crate) launcher: UrlLauncher,
    pub(crate) rng: StdRng,
}

impl App {
    pub fn new(service: PracticeService) -> Self {
        Self::with_parts(
            service,
            Box::new(|url: &str| open::that(url)),
            StdRng::from_entropy(),
        )
    }

    pub fn with_parts(service: PracticeService, launcher: UrlLauncher, rng: StdRng) -> Self {
        let mut app = App {
            screen: Screen::Main,
            keys: Vec::new(),
            list_state: ListState::default(),
            show_help: false,
            should_quit: false,
            success_until: None,
            last_error: None,
            error_clear_time: None,
            launcher,
            rng,
            service,
        };
        let categories = app.service.categories();
        app.set_list(categories);
        app
    }

    /// Replaces the displayed list and puts the cursor back on the first row.
    pub fn set_list(&mut self, keys: Vec<String>) {
        self.keys = keys;
        self.list_state
            .select(if self.keys.is_empty() { None } else { Some(0) });
    }

    pub fn cursor(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.keys.get(self.cursor()).map(String::as_str)
    }

    /// Category and exercise the tempo popup writes to.
    pub fn edit_target(&self) -> Option<(String, String)> {
        let selected = self.selected_key()?;
        match &self.screen {
            Screen::Submenu { technique, .. } => Some((technique.clone(), selected.to_string())),
            Screen::FourExercises { picks, .. } => {
                let exercise = picks.get(selected)?.keys().next()?;
                Some((selected.to_string(), exercise.clone()))
            }
            Screen::Main | Screen::NoteLocation(_) => None,
        }
    }

    pub fn set_success(&mut self) {
        self.success_until =
            Some(Instant::now() + Duration::from_secs(self.service.config.success_banner_secs));
    }

    pub fn success_visible(&self) -> bool {
        self.success_until.is_some()
    }

    // Method to set status bar errors
    pub fn set_error(&mut self, msg: String) {
        self.last_error = Some(msg);
        self.error_clear_time = Some(Instant::now() + Duration::from_secs(ERROR_DISPLAY_SECS));
    }

    /// Drops banners whose time is up. Runs once per input event, not on a timer.
    pub(crate) fn clear_expired_messages(&mut self, now: Instant) {
        if self.success_until.is_some_and(|until| now >= until) {
            self.success_until = None;
        }
        if let Some(clear_time) = self.error_clear_time {
            if now >= clear_time {
                self.last_error = None;
                self.error_clear_time = None;
            }
        }
    }
}
