use super::matches::parse_match;
use super::participant::parse_participant;
use crate::document::{Fields, Node};
use crate::domain::models::{RoundRobinPoints, SwissPoints, Tournament, TournamentFlags};
use crate::errors::ClientError;

const ENTITY: &str = "tournament";

/// Parse tournament from raw API response
pub fn parse_tournament(raw: &Node) -> Result<Tournament, ClientError> {
    let fields = Fields::new(ENTITY, raw.unwrap_entity(ENTITY))?;

    Ok(Tournament {
        id: fields.required("id")?,
        name: fields.required("name")?,
        url: fields.required("url")?,
        subdomain: fields.optional("subdomain")?,
        description: fields.optional("description")?,
        tournament_type: fields.required("tournament_type")?,
        state: fields.required("state")?,
        ranked_by: fields.optional("ranked_by")?,
        grand_finals_modifier: fields.or_default("grand_finals_modifier")?,
        swiss_points: parse_swiss_points(&fields)?,
        round_robin_points: parse_round_robin_points(&fields)?,
        swiss_rounds: fields.optional("swiss_rounds")?,
        signup_cap: fields.optional("signup_cap")?,
        participants_count: fields.optional("participants_count")?,
        progress_meter: fields.optional("progress_meter")?,
        game_id: fields.optional("game_id")?,
        game_name: fields.optional("game_name")?,
        full_challonge_url: fields.optional("full_challonge_url")?,
        live_image_url: fields.optional("live_image_url")?,
        flags: parse_flags(&fields)?,
        created_at: fields.required("created_at")?,
        updated_at: fields.required("updated_at")?,
        started_at: fields.optional("started_at")?,
        completed_at: fields.optional("completed_at")?,
        start_at: fields.optional("start_at")?,
        matches: fields.list("matches", parse_match)?,
        participants: fields.list("participants", parse_participant)?,
    })
}

/// Parse a tournament listing
pub fn parse_tournaments(raw: &Node) -> Result<Vec<Tournament>, ClientError> {
    super::parse_list(raw, ENTITY, parse_tournament)
}

// --- Helper Methods ---

fn parse_swiss_points(fields: &Fields) -> Result<SwissPoints, ClientError> {
    Ok(SwissPoints {
        match_win: fields.optional("pts_for_match_win")?,
        match_tie: fields.optional("pts_for_match_tie")?,
        game_win: fields.optional("pts_for_game_win")?,
        game_tie: fields.optional("pts_for_game_tie")?,
        bye: fields.optional("pts_for_bye")?,
    })
}

fn parse_round_robin_points(fields: &Fields) -> Result<RoundRobinPoints, ClientError> {
    Ok(RoundRobinPoints {
        match_win: fields.optional("rr_pts_for_match_win")?,
        match_tie: fields.optional("rr_pts_for_match_tie")?,
        game_win: fields.optional("rr_pts_for_game_win")?,
        game_tie: fields.optional("rr_pts_for_game_tie")?,
    })
}

fn parse_flags(fields: &Fields) -> Result<TournamentFlags, ClientError> {
    Ok(TournamentFlags {
        open_signup: fields.optional("open_signup")?,
        hold_third_place_match: fields.optional("hold_third_place_match")?,
        accept_attachments: fields.optional("accept_attachments")?,
        hide_forum: fields.optional("hide_forum")?,
        show_rounds: fields.optional("show_rounds")?,
        private: fields.optional("private")?,
        notify_users_when_matches_open: fields.optional("notify_users_when_matches_open")?,
        notify_users_when_the_tournament_ends: fields.optional("notify_users_when_the_tournament_ends")?,
        sequential_pairings: fields.optional("sequential_pairings")?,
    })
}
