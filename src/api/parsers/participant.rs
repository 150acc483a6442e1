use super::matches::parse_match;
use crate::document::{Fields, Node};
use crate::domain::models::Participant;
use crate::errors::ClientError;

const ENTITY: &str = "participant";

/// Parse a participant, wrapped in `participant` or bare
pub fn parse_participant(raw: &Node) -> Result<Participant, ClientError> {
    let fields = Fields::new(ENTITY, raw.unwrap_entity(ENTITY))?;

    Ok(Participant {
        id: fields.required("id")?,
        tournament_id: fields.required("tournament_id")?,
        name: fields.required("name")?,
        seed: fields.required("seed")?,
        final_rank: fields.optional("final_rank")?,
        challonge_username: fields.optional("challonge_username")?,
        misc: fields.optional("misc")?,
        active: fields.optional("active")?,
        checked_in: fields.optional("checked_in")?,
        created_at: fields.optional("created_at")?,
        updated_at: fields.optional("updated_at")?,
        matches: fields.list("matches", parse_match)?,
    })
}

pub fn parse_participants(raw: &Node) -> Result<Vec<Participant>, ClientError> {
    super::parse_list(raw, ENTITY, parse_participant)
}
