//! Game notifications
//!
//! Observers subscribe to a channel and receive structured updates; the
//! engine never reaches into presentation state.

use crate::core::AttemptRow;
use serde::Serialize;
use std::sync::mpsc::{self, Receiver, Sender};

/// Something observable happened in a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new puzzle started; previous state is gone
    Reset { seed: String },
    /// A guess was accepted and scored
    AttemptMade { index: usize, row: AttemptRow },
    /// The game reached its terminal state
    Ended { success: bool },
}

/// Fan-out list of event channels
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    senders: Vec<Sender<GameEvent>>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    /// Deliver `event` to every live subscriber, dropping disconnected ones
    pub(crate) fn emit(&mut self, event: &GameEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}
