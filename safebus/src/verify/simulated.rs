//! Simulated verifier for development and tests.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{VerificationError, VerificationRequest, Verifier};

/// Verifier that resolves locally after a fixed latency.
///
/// Mirrors the app's verification screens, which resolve after a short
/// delay with no backend involved. The verdict can be scripted so
/// callers can exercise every rejection path.
#[derive(Debug, Clone)]
pub struct SimulatedVerifier {
    latency: Duration,
    outcome: Result<(), VerificationError>,
}

impl SimulatedVerifier {
    /// Always-approve verifier with the given latency.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            outcome: Ok(()),
        }
    }

    /// Immediate always-approve verifier, for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Scripts the verdict every submission will receive.
    pub fn with_outcome(mut self, outcome: Result<(), VerificationError>) -> Self {
        self.outcome = outcome;
        self
    }
}

#[async_trait]
impl Verifier for SimulatedVerifier {
    async fn verify(&self, request: VerificationRequest) -> Result<(), VerificationError> {
        tokio::time::sleep(self.latency).await;
        debug!(kind = request.kind(), ok = self.outcome.is_ok(), "verification resolved");
        self.outcome
    }
}
