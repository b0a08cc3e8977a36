//! Identity-verification boundary.
//!
//! The one seam a backend integration would replace: submitting a phone
//! OTP, ID document photos, or a face capture, and hearing back a verdict
//! after some latency. The engine ships only a simulated implementation;
//! the trait keeps tests deterministic.

mod countdown;
mod simulated;

pub use countdown::{CountdownHandle, RESEND_SECONDS, ResendCountdown};
pub use simulated::SimulatedVerifier;

use async_trait::async_trait;

/// A verification submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationRequest {
    /// SMS one-time code entered for a phone number.
    SmsCode { phone: String, code: String },

    /// Front and back photos of an ID document.
    IdDocument { front: Vec<u8>, back: Vec<u8> },

    /// A single face capture.
    FaceCapture { image: Vec<u8> },
}

impl VerificationRequest {
    /// Short label for logging; image payloads never reach the logs.
    pub fn kind(&self) -> &'static str {
        match self {
            VerificationRequest::SmsCode { .. } => "sms_code",
            VerificationRequest::IdDocument { .. } => "id_document",
            VerificationRequest::FaceCapture { .. } => "face_capture",
        }
    }
}

/// Why a verification submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    /// The submitted code does not match
    #[error("the code is incorrect")]
    InvalidCode,

    /// The code is no longer usable; a new one must be requested
    #[error("the code has expired")]
    ExpiredCode,

    /// The document photos could not be read
    #[error("the document could not be read")]
    UnreadableDocument,

    /// The capture contains no recognizable face
    #[error("no face was detected in the capture")]
    NoFaceDetected,

    /// The verification backend did not answer in time
    #[error("verification timed out")]
    Timeout,
}

/// A verification capability.
///
/// Implementations resolve a single submission to a verdict; retries and
/// resend pacing are the caller's concern (see [`ResendCountdown`]).
#[async_trait]
pub trait Verifier {
    /// Submits one verification request and awaits the verdict.
    async fn verify(&self, request: VerificationRequest) -> Result<(), VerificationError>;
}
