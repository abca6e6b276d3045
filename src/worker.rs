// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The request/reply boundary: run the engine off the caller's thread.
//!
//! [`SearchWorker::spawn`] moves a catalog onto a dedicated thread and hands
//! back a handle; [`SearchClient`]s submit [`SearchRequest`]s over a channel.
//! Every request carries its own private reply sender, and the worker sends
//! exactly one reply on it, never reusing the channel.
//!
//! The worker processes one request at a time, to completion; there is no
//! cancellation. Replies are delivered per request with **no ordering
//! guarantee relative to request issuance** across clients; a caller that
//! needs "latest wins" must discard stale replies itself.
//!
//! If a caller drops its reply receiver before the response lands, the send
//! fails; the worker logs the abandoned request and moves on. The worker loop
//! ends once every client (and the worker handle) has been dropped.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::engine::Engine;
use crate::types::{Query, SearchResponse};

/// Errors crossing the worker boundary.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("failed to spawn search worker thread")]
    Spawn(#[source] io::Error),
    #[error("search worker is no longer accepting requests")]
    Disconnected,
    #[error("search worker dropped the reply channel without responding")]
    NoReply,
}

/// One query plus the private channel its reply must be sent on.
pub struct SearchRequest {
    pub query: Query,
    pub reply: Sender<SearchResponse>,
}

/// Handle to the worker thread. Create clients with [`SearchWorker::client`],
/// shut down with [`SearchWorker::shutdown`].
pub struct SearchWorker {
    requests: Sender<SearchRequest>,
    handle: JoinHandle<()>,
}

impl SearchWorker {
    /// Move the catalog onto a new worker thread and start serving requests.
    pub fn spawn(catalog: Catalog) -> Result<SearchWorker, WorkerError> {
        let (requests, inbox) = mpsc::channel::<SearchRequest>();
        let handle = thread::Builder::new()
            .name("coursepick-search".to_string())
            .spawn(move || {
                let engine = Engine::new(catalog);
                serve(&engine, &inbox);
            })
            .map_err(WorkerError::Spawn)?;
        Ok(SearchWorker { requests, handle })
    }

    /// A new client for this worker. Clients are cheap to clone and can live
    /// on any thread.
    pub fn client(&self) -> SearchClient {
        SearchClient {
            requests: self.requests.clone(),
        }
    }

    /// Stop accepting requests and wait for the worker to drain.
    ///
    /// Any live client keeps the worker running; drop clients first or this
    /// blocks until they are gone.
    pub fn shutdown(self) {
        let SearchWorker { requests, handle } = self;
        drop(requests);
        if handle.join().is_err() {
            warn!("search worker panicked before shutdown");
        }
    }
}

/// Submits queries to a [`SearchWorker`].
#[derive(Clone)]
pub struct SearchClient {
    requests: Sender<SearchRequest>,
}

impl SearchClient {
    /// Send one request carrying its own reply channel. The reply arrives on
    /// `request.reply`'s receiver; this call never blocks on the engine.
    pub fn submit(&self, request: SearchRequest) -> Result<(), WorkerError> {
        self.requests
            .send(request)
            .map_err(|_| WorkerError::Disconnected)
    }

    /// Submit a query and block for its reply.
    pub fn search(&self, query: Query) -> Result<SearchResponse, WorkerError> {
        let (reply, response) = mpsc::channel();
        self.submit(SearchRequest { query, reply })?;
        response.recv().map_err(|_| WorkerError::NoReply)
    }
}

fn serve(engine: &Engine, inbox: &Receiver<SearchRequest>) {
    while let Ok(request) = inbox.recv() {
        let response = engine.execute(&request.query);
        if request.reply.send(response).is_err() {
            warn!("reply channel dropped before the response was sent; request abandoned");
        }
    }
    debug!("search worker draining complete");
}
