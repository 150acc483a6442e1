use serde_json::Value;

use super::Node;
use crate::errors::ClientError;

/// Parse a JSON response body into a node tree
pub fn parse(body: &str) -> Result<Node, ClientError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ClientError::malformed("JSON response", e.to_string()))?;
    Ok(from_value(value))
}

pub fn from_value(value: Value) -> Node {
    match value {
        Value::Null => Node::Null,
        Value::Bool(flag) => Node::Scalar(flag.to_string()),
        Value::Number(number) => Node::Scalar(number.to_string()),
        Value::String(text) => Node::Scalar(text),
        Value::Array(items) => Node::List(items.into_iter().map(from_value).collect()),
        Value::Object(entries) => Node::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, from_value(value)))
                .collect(),
        ),
    }
}
