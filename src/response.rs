//! Small response bodies shared by handlers.

use serde::Serialize;

/// `{"message": "..."}` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        MessageBody {
            message: message.into(),
        }
    }
}
