use crate::{Error, report::ComplianceReport};
use thiserror::Error as ThisError;

pub type ValidationOutcome = std::result::Result<ComplianceReport, ValidationFailure>;

/// Why a validation produced no report. Shown to the user, never raised past the caller.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum ValidationFailure {
    #[error("❌ {detail}")]
    InvalidUpload { detail: String },

    #[error("⚠️ Error: {detail}")]
    Service { detail: String },

    #[error("❌ Invalid JSON! Model response could not be parsed.")]
    UnparseableReply { raw_reply: String },
}

impl ValidationFailure {
    pub fn unparseable(raw_reply: impl Into<String>) -> Self {
        Self::UnparseableReply {
            raw_reply: raw_reply.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUpload { .. } => "invalid_upload",
            Self::Service { .. } => "service",
            Self::UnparseableReply { .. } => "unparseable_reply",
        }
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<Error> for ValidationFailure {
    fn from(error: Error) -> Self {
        match error {
            Error::Upload(detail) => Self::InvalidUpload { detail },
            other => Self::Service {
                detail: other.to_string(),
            },
        }
    }
}
