use chrono::{DateTime, FixedOffset};

use super::Node;
use crate::errors::{ClientError, field_context};

/// A value that can be read out of a scalar node
pub trait FromScalar: Sized {
    fn from_scalar(raw: &str) -> Result<Self, ClientError>;
}

impl FromScalar for String {
    fn from_scalar(raw: &str) -> Result<Self, ClientError> {
        Ok(raw.to_string())
    }
}

impl FromScalar for i64 {
    fn from_scalar(raw: &str) -> Result<Self, ClientError> {
        raw.trim()
            .parse()
            .map_err(|_| ClientError::malformed("value", format!("expected an integer, found {raw:?}")))
    }
}

impl FromScalar for f64 {
    fn from_scalar(raw: &str) -> Result<Self, ClientError> {
        raw.trim()
            .parse()
            .map_err(|_| ClientError::malformed("value", format!("expected a decimal, found {raw:?}")))
    }
}

impl FromScalar for bool {
    fn from_scalar(raw: &str) -> Result<Self, ClientError> {
        match raw.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ClientError::malformed("value", format!("expected a boolean, found {raw:?}"))),
        }
    }
}

impl FromScalar for DateTime<FixedOffset> {
    fn from_scalar(raw: &str) -> Result<Self, ClientError> {
        DateTime::parse_from_rfc3339(raw.trim())
            .map_err(|e| ClientError::malformed("value", format!("expected a timestamp, found {raw:?} ({e})")))
    }
}

/// Field reader over one entity's map node.
///
/// Every entity parser pulls its fields through here so the "missing means
/// unset" rule lives in exactly one place.
pub struct Fields<'a> {
    entity: &'static str,
    node: &'a Node,
}

impl<'a> Fields<'a> {
    pub fn new(entity: &'static str, node: &'a Node) -> Result<Self, ClientError> {
        match node {
            Node::Map(_) => Ok(Self { entity, node }),
            _ => Err(ClientError::malformed(entity, "expected an object")),
        }
    }

    /// Read a field, treating null, empty and absent values as `None`
    pub fn optional<T: FromScalar>(&self, key: &str) -> Result<Option<T>, ClientError> {
        let Some(value) = self.present(key) else {
            return Ok(None);
        };

        let raw = value.as_scalar().ok_or_else(|| {
            ClientError::malformed(field_context(self.entity, key), "expected a scalar value")
        })?;

        T::from_scalar(raw)
            .map(Some)
            .map_err(|e| e.in_field(self.entity, key))
    }

    pub fn required<T: FromScalar>(&self, key: &str) -> Result<T, ClientError> {
        self.optional(key)?.ok_or_else(|| {
            ClientError::malformed(field_context(self.entity, key), "required field is missing")
        })
    }

    /// Like `optional`, but falls back to the type's default when unset
    pub fn or_default<T: FromScalar + Default>(&self, key: &str) -> Result<T, ClientError> {
        Ok(self.optional(key)?.unwrap_or_default())
    }

    /// Parse an embedded collection; an unset collection is an empty one
    pub fn list<T>(
        &self,
        key: &str,
        parse: impl Fn(&Node) -> Result<T, ClientError>,
    ) -> Result<Vec<T>, ClientError> {
        let Some(value) = self.present(key) else {
            return Ok(Vec::new());
        };

        let items = value.as_list().ok_or_else(|| {
            ClientError::malformed(field_context(self.entity, key), "expected a list")
        })?;

        items.iter().map(parse).collect()
    }

    fn present(&self, key: &str) -> Option<&'a Node> {
        self.node.get(key).filter(|value| !value.is_unset())
    }
}
