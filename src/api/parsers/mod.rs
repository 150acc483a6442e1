mod attachment;
mod matches;
mod participant;
mod tournament;

pub use attachment::{parse_attachment, parse_attachments};
pub use matches::{parse_match, parse_matches};
pub use participant::{parse_participant, parse_participants};
pub use tournament::{parse_tournament, parse_tournaments};

use crate::document::Node;
use crate::errors::ClientError;

/// Parse a listing document: a list of (possibly wrapped) entities
fn parse_list<T>(
    root: &Node,
    entity: &str,
    parse: impl Fn(&Node) -> Result<T, ClientError>,
) -> Result<Vec<T>, ClientError> {
    if root.is_unset() {
        return Ok(Vec::new());
    }

    let items = root
        .as_list()
        .ok_or_else(|| ClientError::malformed(format!("{} list", entity), "expected a list"))?;

    items.iter().map(parse).collect()
}
