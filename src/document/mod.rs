mod fields;
pub mod json;
mod node;
pub mod xml;

use std::fmt;
use std::str::FromStr;

pub use fields::{Fields, FromScalar};
pub use node::Node;

use crate::errors::ClientError;

/// Payload format requested from the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Xml,
}

impl Format {
    /// Path extension selecting the format
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Xml => "application/xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            _ => Err(ClientError::unknown_token("format", s)),
        }
    }
}

/// Parse a response body in the given format
pub fn parse(body: &str, format: Format) -> Result<Node, ClientError> {
    match format {
        Format::Json => json::parse(body),
        Format::Xml => xml::parse(body),
    }
}

/// Error messages carried by an `errors` key, if the document has one
pub fn service_errors(root: &Node) -> Option<Vec<String>> {
    let errors = root.get("errors").filter(|errors| !errors.is_unset())?;
    let messages = errors.scalars();

    if messages.is_empty() {
        Some(vec!["unspecified error".to_string()])
    } else {
        Some(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_errors_in_both_formats() {
        let from_json = parse(r#"{"errors": ["tournament not found"]}"#, Format::Json).unwrap();
        let from_xml = parse("<errors><error>tournament not found</error></errors>", Format::Xml).unwrap();

        let expected = Some(vec!["tournament not found".to_string()]);
        assert_eq!(service_errors(&from_json), expected);
        assert_eq!(service_errors(&from_xml), expected);
    }

    #[test]
    fn test_no_errors_on_regular_documents() {
        let single = parse(r#"{"tournament": {"id": 1}}"#, Format::Json).unwrap();
        let listing = parse(r#"[{"tournament": {"id": 1}}]"#, Format::Json).unwrap();
        let empty = parse(r#"{"errors": []}"#, Format::Json).unwrap();

        assert_eq!(service_errors(&single), None);
        assert_eq!(service_errors(&listing), None);
        assert_eq!(service_errors(&empty), None);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("XML".parse::<Format>().unwrap(), Format::Xml);
        assert_eq!(Format::Json.extension(), "json");
        assert!("yaml".parse::<Format>().is_err());
    }
}
