//! Background worker executing translation requests.
//!
//! The worker owns a [`TranslationApi`] and runs on its own thread so that
//! network round trips never block the event thread. Requests and responses
//! travel over `crossbeam-channel` queues; responses re-enter the application
//! as [`Event::WorkerResponse`](crate::app::Event::WorkerResponse).
//!
//! ```text
//!  event thread                         worker thread
//!  ────────────                         ─────────────
//!  Action::PostToWorker ──requests──▶  TranslationWorker::handle
//!  Event::WorkerResponse ◀─responses──  WorkerResponse
//! ```

use crate::domain::error::{AyahError, Result};
use crate::translation::TranslationApi;
use crate::worker::{WorkerMessage, WorkerResponse};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

/// Stateless request executor around a translation API.
#[derive(Debug)]
pub struct TranslationWorker<A> {
    api: A,
}

impl<A: TranslationApi> TranslationWorker<A> {
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Helper for handling API results with consistent logging.
    fn handle_api_result<T, F>(message: &WorkerMessage, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        let operation = message.operation();
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "worker operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "worker operation failed");
                let ticket = match message {
                    WorkerMessage::FetchTranslation { ticket } => Some(ticket.clone()),
                    WorkerMessage::ListTranslators => None,
                };
                WorkerResponse::Error {
                    operation: operation.to_string(),
                    message: e.user_message(),
                    ticket,
                }
            }
        }
    }

    /// Executes one request and produces its response.
    pub fn handle(&self, message: &WorkerMessage) -> WorkerResponse {
        let _span = tracing::debug_span!("worker_handle", operation = message.operation()).entered();

        match message {
            WorkerMessage::ListTranslators => {
                Self::handle_api_result(message, self.api.list_translators(), |translators| {
                    WorkerResponse::TranslatorsLoaded { translators }
                })
            }
            WorkerMessage::FetchTranslation { ticket } => Self::handle_api_result(
                message,
                self.api.fetch_translation(ticket.chapter_id, &ticket.translator_id),
                |verses| WorkerResponse::TranslationLoaded {
                    ticket: ticket.clone(),
                    verses,
                },
            ),
        }
    }
}

/// Owning handle to a running worker thread.
///
/// Dropping the handle closes the request queue and joins the thread.
#[derive(Debug)]
pub struct WorkerHandle {
    requests: Option<Sender<WorkerMessage>>,
    responses: Receiver<WorkerResponse>,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Spawns a worker thread serving requests with `api`.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn<A: TranslationApi + 'static>(api: A) -> Result<Self> {
        let (request_tx, request_rx) = crossbeam_channel::unbounded::<WorkerMessage>();
        let (response_tx, response_rx) = crossbeam_channel::unbounded::<WorkerResponse>();

        let thread = std::thread::Builder::new()
            .name("ayah-worker".to_string())
            .spawn(move || {
                let worker = TranslationWorker::new(api);
                tracing::debug!("worker thread started");
                for message in &request_rx {
                    let response = worker.handle(&message);
                    if response_tx.send(response).is_err() {
                        tracing::debug!("response receiver dropped, stopping worker");
                        break;
                    }
                }
                tracing::debug!("worker thread exiting");
            })?;

        Ok(Self {
            requests: Some(request_tx),
            responses: response_rx,
            thread: Some(thread),
        })
    }

    /// Queues a request for the worker.
    ///
    /// # Errors
    ///
    /// Returns [`AyahError::Worker`] if the worker thread has exited.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        tracing::debug!(operation = message.operation(), "posting message to worker");
        self.requests
            .as_ref()
            .ok_or_else(|| AyahError::Worker("worker is shut down".to_string()))?
            .send(message)
            .map_err(|e| AyahError::Worker(format!("failed to post message: {e}")))
    }

    /// Waits up to `timeout` for the next response.
    ///
    /// # Errors
    ///
    /// Returns [`AyahError::Worker`] on timeout or if the worker exited.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<WorkerResponse> {
        self.responses.recv_timeout(timeout).map_err(|e| match e {
            RecvTimeoutError::Timeout => AyahError::Worker("timed out waiting for worker".to_string()),
            RecvTimeoutError::Disconnected => AyahError::Worker("worker disconnected".to_string()),
        })
    }

    /// Returns a response if one is already waiting.
    #[must_use]
    pub fn try_recv(&self) -> Option<WorkerResponse> {
        self.responses.try_recv().ok()
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        drop(self.requests.take());
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("worker thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TranslatedVerse, Translator};
    use crate::worker::FetchTicket;

    struct FixedApi;

    impl TranslationApi for FixedApi {
        fn list_translators(&self) -> Result<Vec<Translator>> {
            Ok(vec![Translator {
                identifier: "fa.makarem".to_string(),
                language: "fa".to_string(),
                name: "مکارم شیرازی".to_string(),
                english_name: "Makarem Shirazi".to_string(),
            }])
        }

        fn fetch_translation(&self, chapter_id: u32, _translator_id: &str) -> Result<Vec<TranslatedVerse>> {
            if chapter_id == 0 {
                return Err(AyahError::Api {
                    code: 404,
                    status: "Not Found".to_string(),
                });
            }
            Ok(vec![TranslatedVerse {
                number: 1,
                text: "ترجمه".to_string(),
            }])
        }
    }

    fn ticket(chapter_id: u32) -> FetchTicket {
        FetchTicket {
            generation: 1,
            chapter_id,
            translator_id: "fa.makarem".to_string(),
        }
    }

    #[test]
    fn success_echoes_ticket() {
        let worker = TranslationWorker::new(FixedApi);
        let response = worker.handle(&WorkerMessage::fetch_translation(ticket(1)));

        match response {
            WorkerResponse::TranslationLoaded { ticket: echoed, verses } => {
                assert_eq!(echoed, ticket(1));
                assert_eq!(verses.len(), 1);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn failure_becomes_error_response() {
        let worker = TranslationWorker::new(FixedApi);
        let response = worker.handle(&WorkerMessage::fetch_translation(ticket(0)));

        assert!(matches!(
            response,
            WorkerResponse::Error { ticket: Some(_), ref operation, .. } if operation == "fetch translation"
        ));
    }

    #[test]
    fn threaded_handle_serves_requests() {
        let handle = WorkerHandle::spawn(FixedApi).unwrap();
        handle.post(WorkerMessage::list_translators()).unwrap();

        let response = handle.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(response, WorkerResponse::TranslatorsLoaded { ref translators } if translators.len() == 1));
        assert!(handle.try_recv().is_none());
    }
}
