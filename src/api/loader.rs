//! Background fetches feeding the UI loop.
//!
//! The UI thread never awaits: `spawn` hands the request to the tokio
//! runtime and the outcome comes back through a channel that the event loop
//! drains on every tick.
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use super::{UserRecord, UsersClient};
use crate::error::LoadError;
use crate::store::LoadTicket;

/// Result of one fetch, tagged with the ticket it was started under.
#[derive(Debug)]
pub struct LoadOutcome {
    pub ticket: LoadTicket,
    pub result: Result<Vec<UserRecord>, LoadError>,
}

pub struct Loader {
    client: UsersClient,
    runtime: Handle,
    tx: UnboundedSender<LoadOutcome>,
    rx: UnboundedReceiver<LoadOutcome>,
}

impl Loader {
    pub fn new(client: UsersClient, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client,
            runtime,
            tx,
            rx,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    /// Start a fetch on the runtime. Concurrent fetches are allowed.
    pub fn spawn(&self, ticket: LoadTicket) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        debug!(ticket = ticket.0, "spawning users fetch");
        self.runtime.spawn(async move {
            let result = client.fetch_users().await;
            // Receiver only goes away on shutdown.
            let _ = tx.send(LoadOutcome { ticket, result });
        });
    }

    /// Next finished fetch, if any, without blocking.
    pub fn try_next(&mut self) -> Option<LoadOutcome> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next finished fetch.
    pub async fn next(&mut self) -> Option<LoadOutcome> {
        self.rx.recv().await
    }
}
