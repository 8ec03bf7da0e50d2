//src/picker.rs
use crate::store::{Catalog, Exercises};
use rand::seq::SliceRandom;
use rand::Rng;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

/// Categories the daily set draws from unless the config says otherwise.
pub const DAILY_CATEGORIES: [&str; 4] = [
    "Alternate Picking",
    "Economy Picking",
    "Legato",
    "Sweep Picking",
];

/// The note-location drill alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum Note {
    A,
    #[strum(serialize = "A#")]
    ASharp,
    B,
    C,
    #[strum(serialize = "C#")]
    CSharp,
    D,
    #[strum(serialize = "D#")]
    DSharp,
    E,
    F,
    #[strum(serialize = "F#")]
    FSharp,
    G,
}

/// Picks one exercise per listed category. Categories missing from the
/// catalog or without exercises get no entry.
pub fn pick_daily<R, S>(catalog: &Catalog, categories: &[S], rng: &mut R) -> Catalog
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let mut chosen = Catalog::new();

    for category in categories {
        let category = category.as_ref();
        let Some(exercises) = catalog.get(category) else {
            continue;
        };
        // Sorted keys, so a seeded rng always picks the same exercise.
        let names: Vec<&String> = exercises.keys().collect();
        let Some(name) = names.choose(rng) else {
            continue;
        };

        let mut pick = Exercises::new();
        pick.insert((*name).clone(), exercises[*name]);
        chosen.insert(category.to_string(), pick);
    }

    chosen
}

/// Draws up to `count` distinct notes in the order they were drawn.
pub fn pick_notes<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Note> {
    let mut remaining: Vec<Note> = Note::iter().collect();
    let mut notes = Vec::with_capacity(count.min(remaining.len()));

    while notes.len() < count && !remaining.is_empty() {
        let index = rng.gen_range(0..remaining.len());
        notes.push(remaining.swap_remove(index));
    }

    notes
}
