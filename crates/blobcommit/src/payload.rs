//! Payloads carried in blobs.

use serde::{Deserialize, Serialize};

/// Command appended to a shared playback queue.
///
/// Externally tagged, so `AddToQueue` serializes as
/// `{"AddToQueue":{"url":"..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueCommand {
    AddToQueue { url: String },
}

impl QueueCommand {
    pub fn add_to_queue(url: impl Into<String>) -> Self {
        QueueCommand::AddToQueue { url: url.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_to_queue_json_shape() {
        let cmd = QueueCommand::add_to_queue("https://youtu.be/abc12345678");
        assert_eq!(
            serde_json::to_string(&cmd).unwrap(),
            r#"{"AddToQueue":{"url":"https://youtu.be/abc12345678"}}"#
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let cmd = QueueCommand::add_to_queue("https://example.com/v");
        let json = serde_json::to_vec(&cmd).unwrap();
        assert_eq!(serde_json::from_slice::<QueueCommand>(&json).unwrap(), cmd);
    }
}
