use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use super::workers::{spawn_catalog_worker, spawn_search_worker};
use crate::logic::Requester;
use crate::sources::CatalogGateway;
use crate::state::CatalogResponse;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Terminal events flow from the input thread to the main loop; catalog requests
///   flow out through `requester` and come back on `response_rx`.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub requester: Requester,
    pub response_rx: mpsc::UnboundedReceiver<CatalogResponse>,
}

impl Channels {
    /// What: Create all channels and spawn both catalog workers.
    ///
    /// Inputs:
    /// - `gateway`: Catalog backend shared by the workers
    ///
    /// Output:
    /// - Ready-to-use channel set.
    ///
    /// Details:
    /// - Must be called within a Tokio runtime.
    pub fn new<G: CatalogGateway + 'static>(gateway: Arc<G>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (catalog_tx, catalog_rx) = mpsc::unbounded_channel();
        let (search_tx, search_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        spawn_catalog_worker(Arc::clone(&gateway), catalog_rx, response_tx.clone());
        spawn_search_worker(gateway, search_rx, response_tx);
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            requester: Requester {
                catalog_tx,
                search_tx,
            },
            response_rx,
        }
    }
}
