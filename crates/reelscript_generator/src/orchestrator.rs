//! Request lifecycle state machine.
//!
//! ```text
//! Idle ──begin──▶ Loading ──complete(Ok)──▶ Success
//!   ▲                │    ──complete(Err)─▶ Failed
//!   └────cancel──────┘
//! ```
//!
//! Any state may `begin` again except `Loading`, which rejects a second
//! submission until the first completes or is cancelled.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reelscript_core::{GeneratedScript, RequestState, ScriptInputs, parse_sections};
use reelscript_error::{
    OrchestratorError, OrchestratorErrorKind, ReelscriptError, ReelscriptResult, UpstreamError,
    UpstreamErrorKind,
};
use reelscript_interface::TextGenerator;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::ScriptGenerator;

/// Message shown to users when a request fails, whatever the cause.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "حدث خطأ غير متوقع. تأكد من إعدادات المفتاح أو حاول مرة أخرى.";

/// Identifies one submission, so late results of superseded requests can be
/// told apart from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("request-{}", _0)]
pub struct RequestId(u64);

#[derive(Debug)]
struct InFlight {
    id: RequestId,
    token: CancellationToken,
}

/// Owns the request state for one form.
///
/// Mutation goes through `&mut self`, so a single orchestrator is never
/// driven from two places at once. Dropping it cancels any request still in
/// flight.
pub struct Orchestrator<D: TextGenerator> {
    generator: Arc<ScriptGenerator<D>>,
    state: RequestState,
    in_flight: Option<InFlight>,
    next_id: u64,
    root: CancellationToken,
    timeout: Option<Duration>,
}

impl<D: TextGenerator> std::fmt::Debug for Orchestrator<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("state", &self.state)
            .field("in_flight", &self.in_flight)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl<D: TextGenerator> Orchestrator<D> {
    /// Create an idle orchestrator with no request timeout.
    pub fn new(generator: ScriptGenerator<D>) -> Self {
        Self {
            generator: Arc::new(generator),
            state: RequestState::Idle,
            in_flight: None,
            next_id: 0,
            root: CancellationToken::new(),
            timeout: None,
        }
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Current request state.
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// The generator used for submissions.
    pub fn generator(&self) -> &ScriptGenerator<D> {
        &self.generator
    }

    /// True while a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a request.
    ///
    /// On success the state is `Loading` and the returned [`Submission`] must
    /// be run and its result passed to [`complete`](Self::complete).
    ///
    /// # Errors
    ///
    /// Rejects the submission, leaving the state untouched, when a request
    /// is already in flight or the inputs fail validation.
    #[instrument(skip_all, fields(area = %inputs.area()))]
    pub fn begin(&mut self, inputs: ScriptInputs) -> ReelscriptResult<Submission<D>> {
        if let Some(current) = &self.in_flight {
            warn!(current = %current.id, "Rejecting submission while a request is in flight");
            return Err(OrchestratorError::new(OrchestratorErrorKind::RequestInFlight).into());
        }

        if let Err(e) = inputs.validate() {
            debug!(error = %e, "Rejecting invalid inputs");
            return Err(e.into());
        }

        self.next_id += 1;
        let id = RequestId(self.next_id);
        let token = self.root.child_token();

        self.in_flight = Some(InFlight {
            id,
            token: token.clone(),
        });
        self.state = RequestState::Loading;
        info!(%id, "Script request started");

        Ok(Submission {
            id,
            inputs,
            generator: Arc::clone(&self.generator),
            token,
            timeout: self.timeout,
        })
    }

    /// Apply the result of a submission.
    ///
    /// Returns `false` and changes nothing when `id` is not the request in
    /// flight (it was cancelled or superseded).
    pub fn complete(&mut self, id: RequestId, result: ReelscriptResult<String>) -> bool {
        match &self.in_flight {
            Some(current) if current.id == id => {}
            _ => {
                debug!(%id, "Ignoring result of a request that is no longer current");
                return false;
            }
        }
        self.in_flight = None;

        match result {
            Ok(text) => self.on_success(id, text),
            Err(err) if is_cancellation(&err) => {
                info!(%id, "Script request cancelled");
                self.state = RequestState::Idle;
            }
            Err(err) => self.on_failure(id, err),
        }
        true
    }

    /// Cancel the request in flight, returning to `Idle`.
    ///
    /// Returns `false` when nothing was in flight.
    pub fn cancel(&mut self) -> bool {
        match self.in_flight.take() {
            Some(current) => {
                current.token.cancel();
                self.state = RequestState::Idle;
                info!(id = %current.id, "Script request cancelled");
                true
            }
            None => false,
        }
    }

    /// Run a whole request cycle and return the resulting state.
    ///
    /// # Errors
    ///
    /// Same rejections as [`begin`](Self::begin). Upstream failures are not
    /// errors here; they land in [`RequestState::Failed`].
    pub async fn submit(&mut self, inputs: ScriptInputs) -> ReelscriptResult<&RequestState> {
        let submission = self.begin(inputs)?;
        let (id, result) = submission.run().await;
        self.complete(id, result);
        Ok(&self.state)
    }

    fn on_success(&mut self, id: RequestId, text: String) {
        let sections = parse_sections(&text);
        info!(%id, sections = sections.len(), "Script request succeeded");
        self.state = RequestState::Success {
            script: GeneratedScript::from(text),
            sections,
        };
    }

    fn on_failure(&mut self, id: RequestId, err: ReelscriptError) {
        error!(%id, error = %err, "Script request failed");
        self.state = RequestState::Failed(GENERIC_FAILURE_MESSAGE.to_string());
    }
}

impl<D: TextGenerator> Drop for Orchestrator<D> {
    fn drop(&mut self) {
        self.root.cancel();
    }
}

fn is_cancellation(err: &ReelscriptError) -> bool {
    err.upstream()
        .is_some_and(|e| e.kind == UpstreamErrorKind::Cancelled)
}

/// One accepted request, ready to run.
///
/// Owns everything it needs, so it can be moved onto a spawned task.
pub struct Submission<D: TextGenerator> {
    id: RequestId,
    inputs: ScriptInputs,
    generator: Arc<ScriptGenerator<D>>,
    token: CancellationToken,
    timeout: Option<Duration>,
}

impl<D: TextGenerator> std::fmt::Debug for Submission<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submission")
            .field("id", &self.id)
            .field("inputs", &self.inputs)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl<D: TextGenerator> Submission<D> {
    /// Identifier to pass back to [`Orchestrator::complete`].
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// The validated inputs.
    pub fn inputs(&self) -> &ScriptInputs {
        &self.inputs
    }

    /// Call the generator, stopping early on cancellation or timeout.
    pub async fn run(self) -> (RequestId, ReelscriptResult<String>) {
        let generation = self.generator.generate_script(&self.inputs);

        let result = tokio::select! {
            _ = self.token.cancelled() => {
                Err(UpstreamError::new(UpstreamErrorKind::Cancelled).into())
            }
            result = bounded(self.timeout, generation) => result,
        };

        (self.id, result)
    }
}

async fn bounded<F>(timeout: Option<Duration>, generation: F) -> ReelscriptResult<String>
where
    F: Future<Output = ReelscriptResult<String>>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, generation)
            .await
            .unwrap_or_else(|_| {
                Err(UpstreamError::new(UpstreamErrorKind::Timeout(limit.as_secs())).into())
            }),
        None => generation.await,
    }
}
