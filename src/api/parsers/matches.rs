use super::attachment::parse_attachment;
use crate::document::{Fields, Node};
use crate::domain::models::Match;
use crate::errors::ClientError;

const ENTITY: &str = "match";

/// Parse a match, wrapped in `match` or bare
pub fn parse_match(raw: &Node) -> Result<Match, ClientError> {
    let fields = Fields::new(ENTITY, raw.unwrap_entity(ENTITY))?;

    Ok(Match {
        id: fields.required("id")?,
        tournament_id: fields.required("tournament_id")?,
        state: fields.required("state")?,
        round: fields.required("round")?,
        identifier: fields.optional("identifier")?,
        player1_id: fields.optional("player1_id")?,
        player2_id: fields.optional("player2_id")?,
        player1_prereq_match_id: fields.optional("player1_prereq_match_id")?,
        player2_prereq_match_id: fields.optional("player2_prereq_match_id")?,
        player1_is_prereq_match_loser: fields.optional("player1_is_prereq_match_loser")?,
        player2_is_prereq_match_loser: fields.optional("player2_is_prereq_match_loser")?,
        winner_id: fields.optional("winner_id")?,
        loser_id: fields.optional("loser_id")?,
        scores_csv: fields.optional("scores_csv")?,
        has_attachment: fields.optional("has_attachment")?,
        attachment_count: fields.optional("attachment_count")?,
        created_at: fields.optional("created_at")?,
        updated_at: fields.optional("updated_at")?,
        started_at: fields.optional("started_at")?,
        completed_at: fields.optional("completed_at")?,
        attachments: fields.list("attachments", parse_attachment)?,
    })
}

pub fn parse_matches(raw: &Node) -> Result<Vec<Match>, ClientError> {
    super::parse_list(raw, ENTITY, parse_match)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Format, parse};
    use crate::domain::enums::MatchState;

    #[test]
    fn test_complete_match_has_winner_and_loser() {
        let raw = parse(
            r#"{"match": {
                "id": 5001, "tournament_id": 1482738, "state": "complete",
                "player1_id": 11, "player2_id": 12, "winner_id": 11, "loser_id": 12,
                "round": 1, "identifier": "A", "scores_csv": "2-1,0-2,3-1",
                "player1_prereq_match_id": null, "player2_prereq_match_id": null
            }}"#,
            Format::Json,
        )
        .unwrap();

        let parsed = parse_match(&raw).unwrap();
        assert!(parsed.is_complete());
        assert_eq!(parsed.winner_id, Some(11));
        assert_eq!(parsed.loser_id, Some(12));
        assert_ne!(parsed.winner_id, parsed.loser_id);
        assert_eq!(parsed.scores_csv.as_deref(), Some("2-1,0-2,3-1"));
        assert!(parsed.attachments.is_empty());
    }

    #[test]
    fn test_open_match_has_no_result() {
        let raw = parse(
            r#"{"match": {
                "id": 5002, "tournament_id": 1482738, "state": "open",
                "player1_id": 13, "player2_id": 14, "winner_id": null, "loser_id": null,
                "round": -1, "scores_csv": ""
            }}"#,
            Format::Json,
        )
        .unwrap();

        let parsed = parse_match(&raw).unwrap();
        assert_eq!(parsed.state, MatchState::Open);
        assert_eq!(parsed.winner_id, None);
        assert_eq!(parsed.loser_id, None);
        assert_eq!(parsed.scores_csv, None);
        assert!(parsed.is_losers_bracket());
    }

    #[test]
    fn test_placeholder_match_without_players() {
        let raw = parse(
            r#"{"match": {"id": 5003, "tournament_id": 1, "state": "pending", "round": 2,
                "player1_id": null, "player2_id": null,
                "player1_prereq_match_id": 5001, "player2_prereq_match_id": 5002,
                "player2_is_prereq_match_loser": true}}"#,
            Format::Json,
        )
        .unwrap();

        let parsed = parse_match(&raw).unwrap();
        assert_eq!(parsed.player1_id, None);
        assert_eq!(parsed.player2_prereq_match_id, Some(5002));
        assert_eq!(parsed.player2_is_prereq_match_loser, Some(true));
        assert!(!parsed.involves(13));
    }

    #[test]
    fn test_embedded_attachments() {
        let raw = parse(
            r#"{"match": {"id": 5001, "tournament_id": 1, "state": "complete", "round": 1,
                "winner_id": 11, "loser_id": 12,
                "attachments": [{"match_attachment": {"id": 1, "match_id": 5001, "description": "VOD"}}]}}"#,
            Format::Json,
        )
        .unwrap();

        let parsed = parse_match(&raw).unwrap();
        assert_eq!(parsed.attachments.len(), 1);
        assert_eq!(parsed.attachments[0].match_id, 5001);
    }

    #[test]
    fn test_unknown_state_fails_loudly() {
        let raw = parse(
            r#"{"match": {"id": 1, "tournament_id": 1, "state": "paused", "round": 1}}"#,
            Format::Json,
        )
        .unwrap();

        assert!(matches!(
            parse_match(&raw).unwrap_err(),
            ClientError::UnknownEnumValue { kind: "match state", .. }
        ));
    }
}
