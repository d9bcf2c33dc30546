use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, instrument};

use super::controller::GameController;
use super::errors::GameError;

/// Shortest period the loop accepts; a zero period would make the interval panic
const MIN_PERIOD: Duration = Duration::from_millis(1);

struct RunningSchedule {
    generation: u64,
    cancel: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

/// Auto-mode flag and the task driving it. Lives inside the controller's
/// locked state, so enable/disable and every tick are serialized with round
/// mutations.
#[derive(Default)]
pub(crate) struct RoundScheduler {
    running: Option<RunningSchedule>,
    next_generation: u64,
}

impl RoundScheduler {
    pub(crate) fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Whether a tick from the loop tagged `generation` may still start rounds
    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.running
            .as_ref()
            .is_some_and(|running| running.generation == generation)
    }

    /// Idle -> Running. The first scheduled round is due one period from now;
    /// the caller starts the immediate round itself.
    pub(crate) fn enable(
        &mut self,
        controller: GameController,
        period: Duration,
    ) -> Result<u64, GameError> {
        if self.is_running() {
            return Err(GameError::AutoModeAlreadyEnabled);
        }

        let generation = self.next_generation;
        self.next_generation += 1;

        let (cancel, cancelled) = oneshot::channel();
        let task = tokio::spawn(run_round_loop(controller, generation, period, cancelled));

        self.running = Some(RunningSchedule {
            generation,
            cancel,
            task,
        });

        Ok(generation)
    }

    /// Running -> Idle. Any tick that has not yet taken the state lock will
    /// find the generation gone and do nothing.
    pub(crate) fn disable(&mut self) -> Result<u64, GameError> {
        let running = self.running.take().ok_or(GameError::AutoModeNotEnabled)?;

        // The loop may already be waiting for the lock; the generation check
        // covers that case
        let _ = running.cancel.send(());
        debug!(
            generation = running.generation,
            finished = running.task.is_finished(),
            "Round loop cancelled"
        );

        Ok(running.generation)
    }
}

#[instrument(skip(controller, cancelled))]
async fn run_round_loop(
    controller: GameController,
    generation: u64,
    period: Duration,
    mut cancelled: oneshot::Receiver<()>,
) {
    let period = period.max(MIN_PERIOD);
    info!(period_secs = period.as_secs(), "Starting auto round loop");

    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = &mut cancelled => {
                info!("Auto round loop cancelled");
                break;
            }

            _ = ticker.tick() => {
                if !controller.start_scheduled_round(generation).await {
                    info!("Auto round loop is stale, stopping");
                    break;
                }
            }
        }
    }
}
