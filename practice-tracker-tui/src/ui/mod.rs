mod layout;
mod menus;
mod modals;
mod status_bar;

// Re-export the main render function
pub use layout::render_ui;
