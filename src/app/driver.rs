//! Event loop glue between [`AppState`], the background worker and an audio
//! sink.
//!
//! The driver feeds events through [`handle_event`], forwards
//! `PostToWorker` actions to the [`WorkerHandle`] and queues audio actions
//! for the front end to perform. Worker responses re-enter as
//! [`Event::WorkerResponse`] when the front end calls [`Driver::settle`].

use super::{handle_event, Action, AppState, Event};
use crate::domain::error::Result;
use crate::worker::WorkerHandle;
use std::collections::VecDeque;
use std::time::Duration;

/// Owns the application state and its side-effect channels.
#[derive(Debug)]
pub struct Driver {
    state: AppState,
    worker: Option<WorkerHandle>,
    pending: usize,
    audio: VecDeque<Action>,
}

impl Driver {
    /// Creates a driver. Without a worker, network requests are dropped.
    #[must_use]
    pub const fn new(state: AppState, worker: Option<WorkerHandle>) -> Self {
        Self {
            state,
            worker,
            pending: 0,
            audio: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Requests posted to the worker whose responses have not arrived yet.
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.pending
    }

    /// Handles one event and executes the resulting actions.
    ///
    /// Returns whether the view needs re-rendering.
    ///
    /// # Errors
    ///
    /// Fails if the worker thread has exited.
    pub fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (render, actions) = handle_event(&mut self.state, event)?;

        for action in actions {
            match action {
                Action::PostToWorker(message) => match &self.worker {
                    Some(worker) => {
                        worker.post(message)?;
                        self.pending += 1;
                    }
                    None => {
                        tracing::debug!(operation = message.operation(), "no worker, dropping request");
                    }
                },
                audio @ (Action::PlayAudio { .. } | Action::StopAudio) => self.audio.push_back(audio),
            }
        }

        Ok(render)
    }

    /// Waits for every outstanding worker response and feeds it back in,
    /// including responses to requests those responses trigger.
    ///
    /// # Errors
    ///
    /// Fails if a response does not arrive within `timeout`, or the worker
    /// exited.
    pub fn settle(&mut self, timeout: Duration) -> Result<()> {
        while self.receive_one(timeout)? {}
        Ok(())
    }

    /// Feeds back the next worker response, if any is outstanding.
    ///
    /// Returns `false` when nothing was pending.
    ///
    /// # Errors
    ///
    /// Fails if the response does not arrive within `timeout`, or the worker
    /// exited.
    pub fn receive_one(&mut self, timeout: Duration) -> Result<bool> {
        if self.pending == 0 {
            return Ok(false);
        }
        let Some(worker) = &self.worker else {
            self.pending = 0;
            return Ok(false);
        };

        let response = worker.recv_timeout(timeout)?;
        self.pending -= 1;
        self.dispatch(&Event::WorkerResponse(response))?;
        Ok(true)
    }

    /// Removes and returns the next queued audio action.
    pub fn next_audio(&mut self) -> Option<Action> {
        self.audio.pop_front()
    }
}
