//! TUI widgets: transcript, input bar, quick actions, launcher, status.

mod chat;
mod input;
mod launcher;
mod quick_actions;
mod status;

pub use chat::render as render_chat;
pub use input::render as render_input;
pub use launcher::render as render_launcher;
pub use launcher::{HEIGHT as LAUNCHER_HEIGHT, WIDTH as LAUNCHER_WIDTH};
pub use quick_actions::render as render_quick_actions;
pub use status::render as render_status;
