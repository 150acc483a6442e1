use std::collections::BTreeMap;

use xml::attribute::OwnedAttribute;
use xml::reader::{EventReader, XmlEvent};

use super::Node;
use crate::errors::ClientError;

/// Element being assembled while its end tag has not been seen yet
struct Frame {
    name: String,
    is_array: bool,
    is_nil: bool,
    children: Vec<(String, Node)>,
    text: String,
}

impl Frame {
    fn open(local_name: &str, attributes: &[OwnedAttribute]) -> Self {
        Self {
            name: snake_case(local_name),
            is_array: has_attribute(attributes, "type", "array"),
            is_nil: has_attribute(attributes, "nil", "true"),
            children: Vec::new(),
            text: String::new(),
        }
    }

    fn close(self) -> (String, bool, Node) {
        let node = if self.is_array {
            Node::List(self.children.into_iter().map(wrap_item).collect())
        } else if !self.children.is_empty() {
            group_children(self.children)
        } else if self.is_nil && self.text.trim().is_empty() {
            Node::Null
        } else {
            Node::Scalar(self.text)
        };
        (self.name, self.is_array, node)
    }
}

/// Parse an XML response body into a node tree.
///
/// Element names are converted from kebab-case to the snake_case keys JSON
/// uses, and `type="array"` containers become lists of single-key wrappers,
/// which is the shape JSON list payloads have.
pub fn parse(body: &str) -> Result<Node, ClientError> {
    let reader = EventReader::from_str(body);
    let mut stack: Vec<Frame> = Vec::new();

    for event in reader {
        let event = event.map_err(|e| ClientError::malformed("XML response", e.to_string()))?;
        match event {
            XmlEvent::StartElement { name, attributes, .. } => {
                stack.push(Frame::open(&name.local_name, &attributes));
            }
            // Whitespace-only text is still a value; indentation around
            // child elements is dropped when the frame closes
            XmlEvent::Characters(text) | XmlEvent::CData(text) | XmlEvent::Whitespace(text) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&text);
                }
            }
            XmlEvent::EndElement { .. } => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| ClientError::malformed("XML response", "unbalanced end tag"))?;
                let (name, is_array, node) = frame.close();

                match stack.last_mut() {
                    Some(parent) => parent.children.push((name, node)),
                    None => return Ok(root_node(name, is_array, node)),
                }
            }
            _ => {}
        }
    }

    Err(ClientError::malformed("XML response", "document has no root element"))
}

fn root_node(name: String, is_array: bool, node: Node) -> Node {
    if is_array {
        node
    } else {
        Node::Map(BTreeMap::from([(name, node)]))
    }
}

fn wrap_item((name, node): (String, Node)) -> Node {
    Node::Map(BTreeMap::from([(name, node)]))
}

// Repeated element names outside a typed array collapse into a list
fn group_children(children: Vec<(String, Node)>) -> Node {
    let mut entries: BTreeMap<String, Node> = BTreeMap::new();

    for (name, node) in children {
        match entries.remove(&name) {
            None => {
                entries.insert(name, node);
            }
            Some(Node::List(mut items)) => {
                items.push(node);
                entries.insert(name, Node::List(items));
            }
            Some(existing) => {
                entries.insert(name, Node::List(vec![existing, node]));
            }
        }
    }

    Node::Map(entries)
}

fn has_attribute(attributes: &[OwnedAttribute], key: &str, value: &str) -> bool {
    attributes
        .iter()
        .any(|attr| attr.name.local_name == key && attr.value == value)
}

fn snake_case(name: &str) -> String {
    name.replace('-', "_")
}
