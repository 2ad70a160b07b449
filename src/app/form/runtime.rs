//! Async glue between the form and the generation service
//!
//! The form stays on one task. Each accepted submit is sent from a spawned
//! task that reports back over a channel, so the owner keeps handling input
//! while the request is outstanding. If the runtime is dropped first, the
//! report is discarded and the form is never touched again.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::app::client::GenerationService;
use crate::app::form::{PendingRequest, ReadmeForm, RequestId, Resolution};
use crate::errors::{SubmitError, TransportResult};

/// Outcome of one outbound call
#[derive(Debug)]
pub struct Completion {
    pub id: RequestId,
    pub outcome: TransportResult<String>,
}

/// A [`ReadmeForm`] wired to a [`GenerationService`]
pub struct FormRuntime<S> {
    form: ReadmeForm,
    service: Arc<S>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<S> FormRuntime<S>
where
    S: GenerationService + 'static,
{
    pub fn new(service: Arc<S>) -> Self {
        Self::with_form(ReadmeForm::new(), service)
    }

    pub fn with_form(form: ReadmeForm, service: Arc<S>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            form,
            service,
            completions_tx,
            completions_rx,
        }
    }

    pub fn form(&self) -> &ReadmeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReadmeForm {
        &mut self.form
    }

    /// Submit through the eligibility gate and send the request
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` if the gate is closed; no call is made.
    pub fn submit(&mut self) -> Result<RequestId, SubmitError> {
        let pending = self.form.submit()?;
        let id = pending.id;
        self.dispatch(pending);
        Ok(id)
    }

    /// Send an already accepted request on a background task
    pub fn dispatch(&self, pending: PendingRequest) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let completions_tx = self.completions_tx.clone();

        tokio::spawn(async move {
            let PendingRequest { id, request } = pending;
            let outcome = service.generate(&request).await;
            if completions_tx.send(Completion { id, outcome }).is_err() {
                debug!("Form closed before request {} resolved; dropping result", id);
            }
        })
    }

    /// Wait for the next outbound call to finish
    ///
    /// Pends forever when nothing is outstanding, which makes it suitable as
    /// a `tokio::select!` branch.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completions_rx.recv().await
    }

    /// Apply a completion to the form
    pub fn apply(&mut self, completion: Completion) -> Resolution {
        self.form.resolve(completion.id, completion.outcome)
    }

    /// Wait for the next completion and apply it
    pub async fn next_resolution(&mut self) -> Option<Resolution> {
        let completion = self.next_completion().await?;
        Some(self.apply(completion))
    }

    /// Submit and wait until that request has been resolved
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` if the gate is closed.
    pub async fn submit_and_wait(&mut self) -> Result<Resolution, SubmitError> {
        let id = self.submit()?;
        loop {
            let Some(completion) = self.next_completion().await else {
                // The runtime owns a sender, so the channel cannot close
                return Ok(Resolution::Stale);
            };
            let completed = completion.id;
            let resolution = self.apply(completion);
            if completed == id {
                return Ok(resolution);
            }
        }
    }

    /// Tear down the runtime, returning the form
    pub fn into_form(self) -> ReadmeForm {
        self.form
    }
}
