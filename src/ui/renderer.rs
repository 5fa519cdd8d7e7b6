//! Top-level render: collapsed launcher, or the open panel's regions.

use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::theme::SPINNER;
use crate::ui::widgets::{
    render_chat, render_input, render_launcher, render_quick_actions, render_status,
    LAUNCHER_HEIGHT, LAUNCHER_WIDTH,
};

pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if !app.state.panel_open {
        let rect = layout::launcher_rect(area, LAUNCHER_WIDTH, LAUNCHER_HEIGHT);
        render_launcher(f, rect);
        return;
    }

    let panel = layout::panel_rect(area);
    let regions = layout::compute(panel, app.state.quick_actions_visible);

    let effective = render_chat(
        f,
        &app.state.transcript,
        regions.chat,
        app.state.follow,
        app.state.scroll,
        app.tick,
    );
    // Keep the stored offset in sync so the next manual scroll starts from
    // what is actually on screen.
    app.state.scroll = effective;

    if let Some(buttons) = regions.buttons {
        render_quick_actions(f, buttons);
    }
    render_input(
        f,
        app.state.input_buffer(),
        app.state.input_cursor(),
        app.state.input_visible,
        regions.input,
    );

    let spinner_char = SPINNER[app.tick % SPINNER.len()];
    render_status(f, regions.status, app.awaiting_replies(), spinner_char);
}
