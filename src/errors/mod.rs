use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything that can go wrong while talking to the bracket service
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Failed to fetch from: {url}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The service answered with something other than 200 OK
    #[error("API returned status {status} for {url}{}", join_messages(.messages))]
    HttpStatus {
        url: String,
        status: u16,
        messages: Vec<String>,
    },

    /// 200 OK, but the body carries an `errors` payload
    #[error("Service reported an error: {}", .messages.join("; "))]
    ServiceReported { messages: Vec<String> },

    #[error("Failed to parse {context}: {reason}")]
    MalformedResponse { context: String, reason: String },

    #[error("Unknown {kind} value: {token:?}")]
    UnknownEnumValue { kind: &'static str, token: String },
}

impl ClientError {
    pub fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            context: context.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_token(kind: &'static str, token: &str) -> Self {
        Self::UnknownEnumValue {
            kind,
            token: token.to_string(),
        }
    }

    /// Non-200 status or network failure
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::HttpStatus { .. })
    }

    /// Messages the service attached to the failure, if any
    pub fn service_messages(&self) -> &[String] {
        match self {
            Self::HttpStatus { messages, .. } | Self::ServiceReported { messages } => messages,
            _ => &[],
        }
    }

    /// Re-label a malformed value with the field it was read from
    pub(crate) fn in_field(self, entity: &str, key: &str) -> Self {
        match self {
            Self::MalformedResponse { reason, .. } => Self::MalformedResponse {
                context: field_context(entity, key),
                reason,
            },
            other => other,
        }
    }
}

/// Context label for a field of an entity
pub fn field_context(entity: &str, key: &str) -> String {
    format!("{}.{}", entity, key)
}

fn join_messages(messages: &[String]) -> String {
    if messages.is_empty() {
        String::new()
    } else {
        format!(": {}", messages.join("; "))
    }
}
