//! Panel controller: action dispatch, send flow, and exchange settlement.

use std::collections::HashMap;

use tracing::info;

use crate::actions::{Action, QuickAction};
use crate::config::PanelVariant;
use crate::exchange::{Effect, ExchangeEvent, ExchangeId};
use crate::fetcher::ReplyOutcome;
use crate::state::AppState;
use crate::transcript::{Direction, EntryId};

/// Interim text a placeholder carries until its exchange settles.
pub const THINKING_TEXT: &str = "Thinking...";
/// Fixed text for every failed exchange, whatever the cause.
pub const FAILURE_TEXT: &str = "Oops! Something went wrong. Please try again";
/// Greeting appended after either quick-action flow.
pub const GREETING_TEXT: &str = "Hi! Welcome to the help desk. How can I help you with that?";

const SCROLL_PAGE: usize = 10;

pub struct App {
    pub state: AppState,
    pub should_quit: bool,
    /// For spinner animation (incremented each tick).
    pub tick: usize,
    /// Placeholder entry for each exchange still awaiting its reply.
    pending: HashMap<ExchangeId, EntryId>,
    next_exchange: u64,
    effects: Vec<Effect>,
}

impl App {
    pub fn new(variant: PanelVariant) -> Self {
        Self {
            state: AppState::new(variant),
            should_quit: false,
            tick: 0,
            pending: HashMap::new(),
            next_exchange: 0,
            effects: Vec::new(),
        }
    }

    /// Effects queued since the last drain, for the worker to run.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn awaiting_replies(&self) -> usize {
        self.pending.len()
    }

    pub fn input_empty(&self) -> bool {
        self.state.input_buffer.is_empty()
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                let pos = self.state.input_cursor.min(self.state.input_buffer.len());
                self.state.input_buffer.insert(pos, c);
                self.state.input_cursor = pos + c.len_utf8();
            }
            Action::Backspace => {
                let cursor = self.state.input_cursor.min(self.state.input_buffer.len());
                if let Some(c) = self.state.input_buffer[..cursor].chars().next_back() {
                    let pos = cursor - c.len_utf8();
                    self.state.input_buffer.remove(pos);
                    self.state.input_cursor = pos;
                }
            }
            Action::ClearInput => {
                self.state.input_buffer.clear();
                self.state.input_cursor = 0;
            }

            Action::Submit => self.submit_input(),
            Action::Quick(action) => self.run_quick_action(action),

            Action::TogglePanel => {
                self.state.panel_open = !self.state.panel_open;
                if self.state.panel_open {
                    self.state.reveal_input();
                }
            }
            Action::ClosePanel => self.state.panel_open = false,

            Action::ScrollUp => self.scroll_by(-1),
            Action::ScrollDown => self.scroll_by(1),
            Action::ScrollPageUp => self.scroll_by(-(SCROLL_PAGE as isize)),
            Action::ScrollPageDown => self.scroll_by(SCROLL_PAGE as isize),
        }
    }

    /// Apply a worker event. Per exchange, `ThinkingDue` precedes `Settled`;
    /// events from different exchanges interleave freely.
    pub fn apply(&mut self, event: ExchangeEvent) {
        match event {
            ExchangeEvent::ThinkingDue { exchange } => {
                let id = self.state.transcript.append_pending(THINKING_TEXT.into());
                self.pending.insert(exchange, id);
                self.follow_bottom();
            }
            ExchangeEvent::Settled { exchange, outcome } => {
                if let Some(id) = self.pending.remove(&exchange) {
                    match outcome {
                        ReplyOutcome::Reply(text) => self.state.transcript.settle(id, text, false),
                        ReplyOutcome::Failed => {
                            self.state.transcript.settle(id, FAILURE_TEXT.into(), true)
                        }
                    }
                }
                self.follow_bottom();
            }
            ExchangeEvent::GreetingDue => {
                self.state
                    .transcript
                    .append(GREETING_TEXT.into(), Direction::Incoming);
                self.state.reveal_input();
                self.follow_bottom();
            }
        }
    }

    /// The send affordance. Reveals the input even on an empty buffer; an
    /// empty or whitespace-only message is otherwise ignored outright.
    fn submit_input(&mut self) {
        self.state.reveal_input();
        let message = self.state.input_buffer.trim().to_string();
        if message.is_empty() {
            return;
        }
        self.state.input_buffer.clear();
        self.state.input_cursor = 0;
        self.send_message(message);
    }

    fn run_quick_action(&mut self, action: QuickAction) {
        if !self.state.quick_actions_visible {
            return;
        }
        match action {
            QuickAction::SupportService => {
                info!("quick action: support service");
                self.state
                    .transcript
                    .append("Support Service".into(), Direction::Outgoing);
                self.follow_bottom();
            }
            QuickAction::IssueTicket => {
                info!("quick action: issue a ticket");
                self.send_message("Issue a Ticket".into());
            }
        }
        if self.state.dismiss_buttons_on_use {
            self.state.quick_actions_visible = false;
        }
        self.effects.push(Effect::ScheduleGreeting);
    }

    /// Append the outgoing entry and hand the exchange to the worker. The
    /// worker cues the placeholder after the pacing delay, then fetches.
    fn send_message(&mut self, message: String) {
        let exchange = ExchangeId(self.next_exchange);
        self.next_exchange += 1;
        self.state
            .transcript
            .append(message.clone(), Direction::Outgoing);
        self.follow_bottom();
        self.effects.push(Effect::BeginExchange { exchange, message });
    }

    fn follow_bottom(&mut self) {
        self.state.follow = true;
    }

    fn scroll_by(&mut self, delta: isize) {
        if delta < 0 {
            self.state.follow = false;
            self.state.scroll = self.state.scroll.saturating_sub(delta.unsigned_abs());
        } else {
            self.state.scroll = self.state.scroll.saturating_add(delta as usize);
        }
    }
}
