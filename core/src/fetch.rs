//! Background fetch execution and result handoff.
//!
//! # Design
//! The core never performs network I/O; the `Transport` trait is the seam
//! where a real HTTP client plugs in. Each fetch call spawns one worker
//! thread that runs build → execute → parse and sends the classified
//! result over a channel. The returned `FetchHandle` lets the caller decide
//! which execution context observes completion: a UI-affine thread calls
//! `poll` between frames, a test or batch caller blocks on `wait`.
//!
//! A fetch walks `Loading → {Success, Failed}` and stays there; a fresh
//! call produces a fresh handle back in `Loading`. There is no retry, no
//! deduplication, and no cancellation of an in-flight request — dropping
//! the handle merely discards the result when it arrives.

use std::sync::mpsc;
use std::thread;

use tracing::{debug, warn};

use crate::client::EmployeeClient;
use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse, TransportError};
use crate::types::Employee;

/// Executes one HTTP GET round-trip on behalf of the core.
///
/// Implementations must return non-2xx responses as `Ok` — outcome
/// classification belongs to the parse step, which reads the body rather
/// than the status code.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Observable state of one fetch.
///
/// `Idle` is what a caller holds before its first fetch; a handle is born
/// in `Loading`. `Success` and `Failed` are terminal — no transition back
/// to `Idle` happens on its own.
#[derive(Debug)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Failed(FetchError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

/// Caller-side handle to one in-flight fetch.
pub struct FetchHandle<T> {
    rx: mpsc::Receiver<Result<T, FetchError>>,
    state: FetchState<T>,
}

impl<T> FetchHandle<T> {
    /// Current state without checking for delivery.
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Take delivery if the worker has finished; never blocks.
    ///
    /// Once a terminal state is reached it is returned unchanged on every
    /// subsequent call.
    pub fn poll(&mut self) -> &FetchState<T> {
        if let FetchState::Loading = self.state {
            match self.rx.try_recv() {
                Ok(Ok(value)) => self.state = FetchState::Success(value),
                Ok(Err(err)) => self.state = FetchState::Failed(err),
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.state = FetchState::Failed(worker_lost())
                }
            }
        }
        &self.state
    }

    /// Block until the worker delivers, consuming the handle.
    pub fn wait(mut self) -> Result<T, FetchError> {
        match std::mem::take(&mut self.state) {
            FetchState::Success(value) => Ok(value),
            FetchState::Failed(err) => Err(err),
            FetchState::Idle | FetchState::Loading => {
                self.rx.recv().unwrap_or_else(|_| Err(worker_lost()))
            }
        }
    }
}

/// The worker hung up without sending a result (it panicked or was torn
/// down mid-request). Surfaces as a transport failure rather than a hang.
fn worker_lost() -> FetchError {
    FetchError::Transport {
        message: "fetch worker exited before delivering a result".to_string(),
        body: None,
    }
}

/// Fetch the employee list on a background worker.
pub fn fetch_list_employees<C>(client: EmployeeClient, transport: C) -> FetchHandle<Vec<Employee>>
where
    C: Transport + Send + 'static,
{
    spawn(move || {
        let request = client.build_list_employees()?;
        debug!(url = %request.url, "requesting employee list");
        let response = transport.execute(&request)?;
        debug!(status = response.status, "employee list response received");
        client.parse_list_employees(response)
    })
}

/// Fetch one employee's details on a background worker.
pub fn fetch_employee_details<C>(
    client: EmployeeClient,
    transport: C,
    id: u64,
) -> FetchHandle<Employee>
where
    C: Transport + Send + 'static,
{
    spawn(move || {
        let request = client.build_employee_details(id)?;
        debug!(url = %request.url, id, "requesting employee details");
        let response = transport.execute(&request)?;
        debug!(status = response.status, id, "employee details response received");
        client.parse_employee_details(response)
    })
}

fn spawn<T, F>(op: F) -> FetchHandle<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, FetchError> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = op();
        if let Err(err) = &result {
            warn!(error = %err, "fetch failed");
        }
        // The receiver may already be gone; the result is simply dropped.
        let _ = tx.send(result);
    });
    FetchHandle {
        rx,
        state: FetchState::Loading,
    }
}
