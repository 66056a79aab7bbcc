//! Shared fakes for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::favorites::{FavoriteError, PaperId, ToggleResponse, ToggleTransport};
use crate::ui::Notifier;

/// Records every alert and diagnostic it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: Mutex<Vec<String>>,
    pub diagnostics: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn diagnostics(&self) -> Vec<String> {
        self.diagnostics.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_owned());
    }

    fn diagnostic(&self, err: &FavoriteError) {
        self.diagnostics.lock().unwrap().push(err.to_string());
    }
}

/// Replays canned results in order and records the ids it was called with.
#[derive(Default)]
pub struct ScriptedTransport {
    results: Mutex<VecDeque<Result<ToggleResponse, FavoriteError>>>,
    pub calls: Mutex<Vec<PaperId>>,
    /// When set, each call parks until `release` is notified.
    pub gate: Option<Notify>,
    pub started: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(results: Vec<Result<ToggleResponse, FavoriteError>>) -> Self {
        Self { results: Mutex::new(results.into()), ..Self::default() }
    }

    pub fn gated(results: Vec<Result<ToggleResponse, FavoriteError>>) -> Self {
        Self { gate: Some(Notify::new()), ..Self::new(results) }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_waiters();
        }
    }

    pub fn calls(&self) -> Vec<PaperId> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ToggleTransport for ScriptedTransport {
    async fn toggle(&self, paper_id: &PaperId) -> Result<ToggleResponse, FavoriteError> {
        self.calls.lock().unwrap().push(paper_id.clone());
        if let Some(gate) = &self.gate {
            let released = gate.notified();
            self.started.fetch_add(1, Ordering::SeqCst);
            released.await;
        }
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FavoriteError::Transport("no scripted result".into())))
    }
}

/// Gives call `i` the `i`-th result, but only once `release(i)` is called,
/// so tests choose the order in which responses resolve.
pub struct OrderedTransport {
    results: Mutex<Vec<Option<Result<ToggleResponse, FavoriteError>>>>,
    gates: Vec<Notify>,
    next: AtomicUsize,
    pub started: AtomicUsize,
}

impl OrderedTransport {
    pub fn new(results: Vec<Result<ToggleResponse, FavoriteError>>) -> Self {
        let gates = results.iter().map(|_| Notify::new()).collect();
        Self {
            results: Mutex::new(results.into_iter().map(Some).collect()),
            gates,
            next: AtomicUsize::new(0),
            started: AtomicUsize::new(0),
        }
    }

    pub fn release(&self, call: usize) {
        self.gates[call].notify_one();
    }
}

#[async_trait]
impl ToggleTransport for OrderedTransport {
    async fn toggle(&self, _paper_id: &PaperId) -> Result<ToggleResponse, FavoriteError> {
        let call = self.next.fetch_add(1, Ordering::SeqCst);
        let Some(gate) = self.gates.get(call) else {
            return Err(FavoriteError::Transport("no scripted result".into()));
        };
        self.started.fetch_add(1, Ordering::SeqCst);
        gate.notified().await;
        self.results.lock().unwrap()[call]
            .take()
            .unwrap_or_else(|| Err(FavoriteError::Transport("result already taken".into())))
    }
}

pub fn active(is_active: bool) -> Result<ToggleResponse, FavoriteError> {
    Ok(ToggleResponse { is_active, success: Some(true) })
}
