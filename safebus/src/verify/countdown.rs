//! Resend countdown for the OTP screen.
//!
//! An explicit counter decremented by a repeating tick, instead of shared
//! timer state. [`ResendCountdown`] is the pure state; [`CountdownHandle`]
//! drives it from a single owned interval task and stops it on drop.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Default resend lockout, matching the verification screen.
pub const RESEND_SECONDS: u32 = 30;

/// Countdown state: seconds remaining until resending is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResendCountdown {
    remaining: u32,
}

impl ResendCountdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    /// One tick; saturates at zero. Returns the seconds now remaining.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the lockout has elapsed.
    pub fn can_resend(&self) -> bool {
        self.remaining == 0
    }

    /// Restarts the lockout after a resend.
    pub fn reset(&mut self, seconds: u32) {
        self.remaining = seconds;
    }
}

impl Default for ResendCountdown {
    fn default() -> Self {
        Self::new(RESEND_SECONDS)
    }
}

/// Owned driver for a countdown.
///
/// Publishes the remaining seconds over a watch channel once per period
/// and finishes at zero. Dropping the handle aborts the task, which is
/// how a dismissed screen tears its countdown down.
pub struct CountdownHandle {
    task: JoinHandle<()>,
    remaining: watch::Receiver<u32>,
}

impl CountdownHandle {
    /// Spawns a countdown from `seconds`, ticking once per `period`.
    pub fn spawn(seconds: u32, period: Duration) -> Self {
        let (tx, rx) = watch::channel(seconds);

        let task = tokio::spawn(async move {
            let mut state = ResendCountdown::new(seconds);
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // first tick is immediate, skip it

            while !state.can_resend() {
                interval.tick().await;
                let remaining = state.tick();
                if tx.send(remaining).is_err() {
                    break; // nobody is watching any more
                }
            }
        });

        Self {
            task,
            remaining: rx,
        }
    }

    /// Receiver for the published seconds-remaining values.
    pub fn remaining(&self) -> watch::Receiver<u32> {
        self.remaining.clone()
    }

    /// True once the countdown reached zero or was torn down.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
