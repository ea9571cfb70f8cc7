//! Application state

use chrono::{DateTime, Utc};
use clipmark_core::{Conversion, InteractiveView, SectionState, Status};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Status line and latest result, overwritten by each run
    pub session: Arc<RwLock<Session>>,

    /// Ticket of the most recently started upload
    generation: Arc<AtomicU64>,

    /// Channel for SSE events
    pub event_tx: broadcast::Sender<ServerEvent>,
}

/// What the page currently shows
#[derive(Debug)]
pub struct Session {
    pub status: Status,

    /// Last successful run. Kept when a later run fails.
    pub run: Option<RunResult>,
}

/// A committed pipeline run
#[derive(Debug)]
pub struct RunResult {
    pub id: Uuid,
    pub file_name: String,
    pub conversion: Conversion,
    pub view: InteractiveView,
    pub completed_at: DateTime<Utc>,
}

/// Server-sent events
#[derive(Debug, Clone)]
pub enum ServerEvent {
    /// The status line changed
    StatusChanged { status: String },

    /// A section of the interactive view was toggled
    SectionToggled { index: usize, state: SectionState },
}

impl Default for Session {
    fn default() -> Self {
        Self {
            status: Status::NoFileSelected,
            run: None,
        }
    }
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(100);
        Self {
            session: Arc::new(RwLock::new(Session::default())),
            generation: Arc::new(AtomicU64::new(0)),
            event_tx,
        }
    }

    /// Start a run and take its ticket. Any run started earlier becomes stale.
    pub fn begin_run(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether no newer run has started since `ticket` was taken
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Update the status line outside of any run
    pub async fn set_status(&self, status: Status) {
        self.session.write().await.status = status.clone();
        self.broadcast_status(&status);
    }

    /// Update the status line on behalf of a run. Ignored if the run is stale.
    pub async fn update_status(&self, ticket: u64, status: Status) -> bool {
        let mut session = self.session.write().await;
        if !self.is_current(ticket) {
            tracing::warn!(ticket, status = %status, "dropping status of stale run");
            return false;
        }
        session.status = status.clone();
        drop(session);
        self.broadcast_status(&status);
        true
    }

    /// Replace the displayed result with a finished run.
    ///
    /// Returns `None` without touching the session if a newer run started
    /// while this one was reading.
    pub async fn commit(
        &self,
        ticket: u64,
        file_name: String,
        conversion: Conversion,
    ) -> Option<Uuid> {
        let mut session = self.session.write().await;
        if !self.is_current(ticket) {
            tracing::warn!(ticket, file = %file_name, "discarding result of stale run");
            return None;
        }

        let status = conversion.status();
        let id = Uuid::new_v4();
        session.run = Some(RunResult {
            id,
            file_name,
            view: conversion.view(),
            conversion,
            completed_at: Utc::now(),
        });
        session.status = status.clone();
        drop(session);

        self.broadcast_status(&status);
        Some(id)
    }

    /// Subscribe to server events
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.event_tx.subscribe()
    }

    /// Broadcast an event
    pub fn broadcast(&self, event: ServerEvent) {
        // Ignore errors (no subscribers)
        let _ = self.event_tx.send(event);
    }

    fn broadcast_status(&self, status: &Status) {
        self.broadcast(ServerEvent::StatusChanged {
            status: status.to_string(),
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipmark_core::convert_str;

    const SAMPLE: &str = "Book (A)\n- Location 1-2\nText\n==========\n";

    #[tokio::test]
    async fn test_commit_replaces_run() {
        let state = AppState::new();
        let ticket = state.begin_run();

        let id = state
            .commit(ticket, "a.txt".to_string(), convert_str(SAMPLE))
            .await;

        assert!(id.is_some());
        let session = state.session.read().await;
        assert_eq!(session.status, Status::Complete { highlights: 1 });
        assert_eq!(session.run.as_ref().unwrap().file_name, "a.txt");
    }

    #[tokio::test]
    async fn test_stale_run_is_discarded() {
        let state = AppState::new();
        let first = state.begin_run();
        let second = state.begin_run();

        // The newer upload finishes first
        assert!(state
            .commit(second, "new.txt".to_string(), convert_str(SAMPLE))
            .await
            .is_some());
        // The older one completes late and must not overwrite it
        assert!(state
            .commit(first, "old.txt".to_string(), convert_str(""))
            .await
            .is_none());
        assert!(!state.update_status(first, Status::ReadFailed).await);

        let session = state.session.read().await;
        assert_eq!(session.run.as_ref().unwrap().file_name, "new.txt");
        assert_eq!(session.status, Status::Complete { highlights: 1 });
    }

    #[tokio::test]
    async fn test_status_is_broadcast() {
        let state = AppState::new();
        let mut rx = state.subscribe();

        state.set_status(Status::NoFileSelected).await;

        match rx.recv().await.unwrap() {
            ServerEvent::StatusChanged { status } => assert_eq!(status, "No file selected."),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_run_keeps_previous_result() {
        let state = AppState::new();
        let ticket = state.begin_run();
        state
            .commit(ticket, "a.txt".to_string(), convert_str(SAMPLE))
            .await;

        let ticket = state.begin_run();
        state
            .update_status(
                ticket,
                Status::ParseFailed {
                    message: "bad input".to_string(),
                },
            )
            .await;

        let session = state.session.read().await;
        assert!(session.status.is_error());
        assert!(session.run.is_some());
    }
}
