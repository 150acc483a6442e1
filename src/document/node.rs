use std::collections::BTreeMap;

/// Format-neutral view of a response document.
///
/// Both the JSON and the XML adapter produce this tree, so entity parsers
/// never see which wire format the data came from. Scalars keep their text
/// form; coercion to numbers, booleans and timestamps happens in `Fields`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Scalar(String),
    List(Vec<Node>),
    Map(BTreeMap<String, Node>),
}

impl Node {
    pub fn scalar(text: impl Into<String>) -> Self {
        Node::Scalar(text.into())
    }

    /// Look up a key on a map node
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(entries) => entries.get(key),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// Null, empty string, empty list and empty map all count as "not there"
    pub fn is_unset(&self) -> bool {
        match self {
            Node::Null => true,
            Node::Scalar(text) => text.is_empty(),
            Node::List(items) => items.is_empty(),
            Node::Map(entries) => entries.is_empty(),
        }
    }

    /// Strip a `{"<name>": {...}}` envelope, or return the node itself when
    /// it is not wrapped.
    ///
    /// A map counts as an envelope when `name` is its only key, so a bare
    /// entity whose single field is called `name` is unwrapped as well.
    /// Service entities always carry an `id` next to their other fields.
    pub fn unwrap_entity(&self, name: &str) -> &Node {
        match self {
            Node::Map(entries) if entries.len() == 1 => entries.get(name).unwrap_or(self),
            _ => self,
        }
    }

    /// Every scalar below this node, depth first
    pub fn scalars(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_scalars(&mut out);
        out
    }

    fn collect_scalars(&self, out: &mut Vec<String>) {
        match self {
            Node::Null => {}
            Node::Scalar(text) => {
                if !text.is_empty() {
                    out.push(text.clone());
                }
            }
            Node::List(items) => items.iter().for_each(|item| item.collect_scalars(out)),
            Node::Map(entries) => entries.values().for_each(|value| value.collect_scalars(out)),
        }
    }
}
