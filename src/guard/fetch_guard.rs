//! The guard: one button, one field, one request at a time.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::GuardConfig;
use crate::error::{GuardError, TransportError};
use crate::guard::interaction::Interaction;
use crate::guard::lock::InteractionLock;
use crate::guard::state::{GuardState, Outcome};
use crate::transport::{FetchFuture, FetchResponse, Fetcher};
use crate::ui::{Control, Notifier, OutputField};

/// Which side of the race finished first.
enum Race {
    Completed(Result<FetchResponse, TransportError>),
    Expired,
}

/// Runs guarded fetches for a single output field and control.
pub struct FetchGuard {
    fetcher: Arc<dyn Fetcher>,
    output: Arc<dyn OutputField>,
    notifier: Arc<dyn Notifier>,
    lock: Arc<InteractionLock>,
    config: GuardConfig,
}

impl FetchGuard {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        output: Arc<dyn OutputField>,
        control: Arc<dyn Control>,
        notifier: Arc<dyn Notifier>,
        config: GuardConfig,
    ) -> Self {
        Self {
            fetcher,
            output,
            notifier,
            lock: Arc::new(InteractionLock::new(control)),
            config,
        }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// True while an interaction holds the control disabled.
    pub fn is_busy(&self) -> bool {
        self.lock.is_held()
    }

    /// Disable the control, arm the deadline and issue a GET against `address`.
    ///
    /// Returns immediately. The handle may be dropped; the interaction still
    /// runs to completion and restores the control. Outside a tokio runtime
    /// this fails with `GuardError::NoRuntime` and leaves the control alone.
    pub fn run(&self, address: &str) -> Result<FetchHandle, GuardError> {
        let runtime = Handle::try_current().map_err(|_| GuardError::NoRuntime)?;

        let interaction = Arc::new(Interaction::new(
            address,
            self.lock.clone(),
            self.output.clone(),
            self.notifier.clone(),
            self.config.notification.timeout_message.clone(),
            self.config.observability.metrics_enabled,
        ));
        interaction.start()?;

        let deadline = self.config.deadline();
        let request = self.fetcher.fetch(address);
        let span = tracing::info_span!(
            "fetch",
            interaction_id = %interaction.id(),
            address = %address,
            deadline_ms = deadline.as_millis() as u64,
        );

        let owner = ResolveOnDrop(interaction.clone());
        let task = runtime.spawn(drive(owner, request, deadline).instrument(span));
        Ok(FetchHandle { interaction, task })
    }
}

impl fmt::Debug for FetchGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchGuard")
            .field("lock", &self.lock)
            .field("deadline", &self.config.deadline())
            .finish()
    }
}

/// Owns the driver's reference to the interaction.
///
/// Moved into the driver future as an argument, so it is dropped with the task
/// even if the task is never polled (runtime shutdown, abort).
struct ResolveOnDrop(Arc<Interaction>);

impl Drop for ResolveOnDrop {
    fn drop(&mut self) {
        if self.0.state() == GuardState::Pending {
            self.0.abandon();
        }
    }
}

/// Race the request against the deadline and resolve the interaction once.
async fn drive(owner: ResolveOnDrop, request: FetchFuture, deadline: Duration) {
    let interaction = &owner.0;
    let race = tokio::select! {
        biased;
        result = request => Race::Completed(result),
        _ = tokio::time::sleep(deadline) => Race::Expired,
    };
    // Both futures are dropped here: the losing request is aborted, the losing timer cancelled.

    match race {
        Race::Completed(result) => interaction.complete(result),
        Race::Expired => interaction.expire(),
    };
}

/// Handle to a running interaction.
#[derive(Debug)]
pub struct FetchHandle {
    interaction: Arc<Interaction>,
    task: JoinHandle<()>,
}

impl FetchHandle {
    pub fn id(&self) -> Uuid {
        self.interaction.id()
    }

    pub fn interaction(&self) -> &Arc<Interaction> {
        &self.interaction
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the interaction to resolve.
    pub async fn wait(self) -> Result<Outcome, GuardError> {
        self.task.await?;
        self.interaction.outcome().ok_or(GuardError::Unresolved)
    }
}
