//! Background exchange worker: pacing delay, placeholder cue, fetch, settlement.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::debug;

use crate::fetcher::{ReplyClient, ReplyOutcome};

/// Fixed pacing before the "Thinking..." placeholder appears (and before a
/// quick-action greeting lands). Not configurable.
pub const PACING_DELAY: Duration = Duration::from_millis(600);

/// Identifies one send's delay + fetch + settlement lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExchangeId(pub u64);

/// Side effects the controller asks the worker to run. Kept as data so the
/// controller stays synchronous and testable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    BeginExchange { exchange: ExchangeId, message: String },
    ScheduleGreeting,
}

/// Events the worker delivers back to the UI thread. For one exchange,
/// `ThinkingDue` always precedes `Settled` (both are sent from the same task
/// over the same channel).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExchangeEvent {
    ThinkingDue { exchange: ExchangeId },
    Settled { exchange: ExchangeId, outcome: ReplyOutcome },
    GreetingDue,
}

pub struct ExchangeWorker {
    handle: Handle,
    client: Arc<ReplyClient>,
    tx: Sender<ExchangeEvent>,
}

impl ExchangeWorker {
    pub fn new(handle: Handle, client: ReplyClient, tx: Sender<ExchangeEvent>) -> Self {
        Self {
            handle,
            client: Arc::new(client),
            tx,
        }
    }

    pub fn run(&self, effect: Effect) {
        match effect {
            Effect::BeginExchange { exchange, message } => self.begin(exchange, message),
            Effect::ScheduleGreeting => self.schedule_greeting(),
        }
    }

    /// One task per exchange: sleep, cue the placeholder, fetch, settle.
    /// Tasks are independent; nothing cancels them and nothing orders them
    /// against other exchanges. Send errors mean the UI is gone, so they are
    /// ignored.
    fn begin(&self, exchange: ExchangeId, message: String) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        debug!(?exchange, "exchange started");
        self.handle.spawn(async move {
            tokio::time::sleep(PACING_DELAY).await;
            if tx.send(ExchangeEvent::ThinkingDue { exchange }).is_err() {
                return;
            }
            let outcome = client.fetch(&message).await;
            let failed = outcome == ReplyOutcome::Failed;
            debug!(?exchange, failed, "exchange settled");
            let _ = tx.send(ExchangeEvent::Settled { exchange, outcome });
        });
    }

    fn schedule_greeting(&self) {
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            tokio::time::sleep(PACING_DELAY).await;
            let _ = tx.send(ExchangeEvent::GreetingDue);
        });
    }
}
