use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::enums::{GrandFinalsModifier, MatchState, RankSystem, TournamentState, TournamentType};

pub type Timestamp = DateTime<FixedOffset>;

/// Tournament (bracket) as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    /// Url slug, unique within the subdomain
    pub url: String,
    pub subdomain: Option<String>,
    pub description: Option<String>,
    pub tournament_type: TournamentType,
    pub state: TournamentState,
    pub ranked_by: Option<RankSystem>,
    pub grand_finals_modifier: GrandFinalsModifier,
    pub swiss_points: SwissPoints,
    pub round_robin_points: RoundRobinPoints,
    pub swiss_rounds: Option<i64>,
    pub signup_cap: Option<i64>,
    pub participants_count: Option<i64>,
    pub progress_meter: Option<i64>,
    pub game_id: Option<i64>,
    pub game_name: Option<String>,
    pub full_challonge_url: Option<String>,
    pub live_image_url: Option<String>,
    pub flags: TournamentFlags,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    /// Planned start time
    pub start_at: Option<Timestamp>,
    pub matches: Vec<Match>,
    pub participants: Vec<Participant>,
}

impl Tournament {
    pub fn is_complete(&self) -> bool {
        self.state == TournamentState::Complete
    }

    pub fn participant(&self, id: i64) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Matches of the losers bracket (negative rounds)
    pub fn losers_bracket_matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| m.is_losers_bracket())
    }
}

/// Scoring weights used by Swiss brackets
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SwissPoints {
    pub match_win: Option<f64>,
    pub match_tie: Option<f64>,
    pub game_win: Option<f64>,
    pub game_tie: Option<f64>,
    pub bye: Option<f64>,
}

/// Scoring weights used by round robin brackets
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoundRobinPoints {
    pub match_win: Option<f64>,
    pub match_tie: Option<f64>,
    pub game_win: Option<f64>,
    pub game_tie: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TournamentFlags {
    pub open_signup: Option<bool>,
    pub hold_third_place_match: Option<bool>,
    pub accept_attachments: Option<bool>,
    pub hide_forum: Option<bool>,
    pub show_rounds: Option<bool>,
    pub private: Option<bool>,
    pub notify_users_when_matches_open: Option<bool>,
    pub notify_users_when_the_tournament_ends: Option<bool>,
    pub sequential_pairings: Option<bool>,
}

/// Participant entry of a tournament
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participant {
    pub id: i64,
    pub tournament_id: i64,
    pub name: String,
    pub seed: i64,
    /// Only set once the tournament is complete
    pub final_rank: Option<i64>,
    pub challonge_username: Option<String>,
    pub misc: Option<String>,
    pub active: Option<bool>,
    pub checked_in: Option<bool>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub matches: Vec<Match>,
}

/// Match between two participants
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: i64,
    pub tournament_id: i64,
    pub state: MatchState,
    /// Negative rounds belong to the losers bracket
    pub round: i64,
    pub identifier: Option<String>,
    pub player1_id: Option<i64>,
    pub player2_id: Option<i64>,
    pub player1_prereq_match_id: Option<i64>,
    pub player2_prereq_match_id: Option<i64>,
    pub player1_is_prereq_match_loser: Option<bool>,
    pub player2_is_prereq_match_loser: Option<bool>,
    pub winner_id: Option<i64>,
    pub loser_id: Option<i64>,
    /// Comma separated set scores, e.g. "2-1,0-2,3-1"
    pub scores_csv: Option<String>,
    pub has_attachment: Option<bool>,
    pub attachment_count: Option<i64>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub attachments: Vec<Attachment>,
}

impl Match {
    pub fn is_complete(&self) -> bool {
        self.state == MatchState::Complete
    }

    pub fn is_losers_bracket(&self) -> bool {
        self.round < 0
    }

    pub fn involves(&self, participant_id: i64) -> bool {
        self.player1_id == Some(participant_id) || self.player2_id == Some(participant_id)
    }
}

/// File, link or note attached to a match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub id: i64,
    pub match_id: i64,
    pub user_id: Option<i64>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub original_file_name: Option<String>,
    pub asset_file_name: Option<String>,
    pub asset_content_type: Option<String>,
    pub asset_file_size: Option<i64>,
    pub asset_url: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}
