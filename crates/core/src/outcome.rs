//! Mutation outcome envelope.

use serde::{Deserialize, Serialize};

/// Result of a mutating store operation, serialized at the boundary as
/// `{"flag": bool, "message": string}`.
///
/// `flag: false` means a business-rule rejection (duplicate name, unknown
/// id); the message is specific and includes the product name. Infrastructure
/// faults never appear here — they travel as [`RepoError`](crate::RepoError).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub flag: bool,
    pub message: String,
}

impl Outcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            flag: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            flag: false,
            message: message.into(),
        }
    }
}
