//! Executes controller commands on the tokio runtime.
//!
//! Spawned tasks report back as [`Event`]s over an unbounded channel; the UI
//! loop is the only place that feeds them into the reducer.

use crate::agent::Analyst;
use crate::controller::{reduce, Command, Event, State};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

pub struct Driver {
    analyst: Arc<dyn Analyst>,
    pacing: Duration,
    tx: UnboundedSender<Event>,
}

impl Driver {
    /// Create a driver and the receiving end of its event channel
    pub fn new(analyst: Arc<dyn Analyst>, pacing: Duration) -> (Self, UnboundedReceiver<Event>) {
        let (tx, rx) = unbounded_channel();
        (
            Self {
                analyst,
                pacing,
                tx,
            },
            rx,
        )
    }

    /// Run one command in the background
    pub fn dispatch(&self, command: Command) {
        match command {
            Command::Analyze { generation, handle } => {
                let analyst = Arc::clone(&self.analyst);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let outcome = analyst.analyze(&handle).await;
                    match &outcome {
                        Ok(_) => info!(generation, handle = %handle, "Analysis completed"),
                        Err(e) => warn!(generation, handle = %handle, error = %e, "Analysis failed"),
                    }
                    // Receiver is gone when the UI has already quit
                    let _ = tx.send(Event::Settled {
                        generation,
                        outcome,
                    });
                });
            }
            Command::SchedulePacing { generation } => {
                let tx = self.tx.clone();
                let delay = self.pacing;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(Event::PacingElapsed(generation));
                });
            }
        }
    }

    /// Reduce an event and dispatch whatever commands it produced
    pub fn apply(&self, state: State, event: Event) -> State {
        let (state, commands) = reduce(state, event);
        for command in commands {
            debug!(?command, "Dispatching command");
            self.dispatch(command);
        }
        state
    }
}
