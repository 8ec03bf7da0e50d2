// src/app/mod.rs
mod actions;
mod input;
mod navigation;
pub mod state;

pub use state::{App, NoteDrill, Screen, TempoPopup};
