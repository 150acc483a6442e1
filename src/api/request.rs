use chrono::{Local, NaiveDate};

use crate::document::Format;
use crate::domain::enums::{MatchStateFilter, TournamentStateFilter, TournamentType, WireToken};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// How a tournament is addressed in a resource path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TournamentRef {
    Id(i64),
    /// Url slug, optionally owned by an organization subdomain
    Url { url: String, subdomain: Option<String> },
}

impl TournamentRef {
    pub fn id(id: i64) -> Self {
        TournamentRef::Id(id)
    }

    pub fn url(url: impl Into<String>) -> Self {
        TournamentRef::Url {
            url: url.into(),
            subdomain: None,
        }
    }

    pub fn subdomain_url(subdomain: impl Into<String>, url: impl Into<String>) -> Self {
        TournamentRef::Url {
            url: url.into(),
            subdomain: Some(subdomain.into()),
        }
    }

    /// Numeric ids stay ids, anything else is treated as a url slug
    pub fn parse(raw: &str, subdomain: Option<String>) -> Self {
        match raw.parse::<i64>() {
            Ok(id) if subdomain.is_none() => TournamentRef::Id(id),
            _ => TournamentRef::Url {
                url: raw.to_string(),
                subdomain,
            },
        }
    }

    /// Path segment: `{id}`, `{url}` or `{subdomain}-{url}`
    pub fn path_segment(&self) -> String {
        match self {
            TournamentRef::Id(id) => id.to_string(),
            TournamentRef::Url { url, subdomain } => match non_blank(subdomain.as_deref()) {
                Some(subdomain) => format!("{}-{}", subdomain, url),
                None => url.clone(),
            },
        }
    }
}

/// Embedded collections to request along with a tournament
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TournamentIncludes {
    pub participants: bool,
    pub matches: bool,
}

impl TournamentIncludes {
    pub fn all() -> Self {
        Self {
            participants: true,
            matches: true,
        }
    }
}

/// Filters for the tournament listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentFilter {
    pub state: TournamentStateFilter,
    /// `None` lists every bracket type
    pub tournament_type: Option<TournamentType>,
    pub created_after: Option<NaiveDate>,
    /// Defaults to the current date when unset
    pub created_before: Option<NaiveDate>,
    pub subdomain: Option<String>,
}

/// Filters for the match listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub state: MatchStateFilter,
    /// Only matches this participant plays in; negative values are ignored
    pub participant_id: Option<i64>,
}

/// Every read operation the service offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    GetTournament {
        tournament: TournamentRef,
        includes: TournamentIncludes,
    },
    ListTournaments(TournamentFilter),
    GetParticipant {
        tournament: TournamentRef,
        participant_id: i64,
        include_matches: bool,
    },
    ListParticipants {
        tournament: TournamentRef,
    },
    GetMatch {
        tournament: TournamentRef,
        match_id: i64,
        include_attachments: bool,
    },
    ListMatches {
        tournament: TournamentRef,
        filter: MatchFilter,
    },
    GetAttachment {
        tournament: TournamentRef,
        match_id: i64,
        attachment_id: i64,
    },
    ListAttachments {
        tournament: TournamentRef,
        match_id: i64,
    },
}

/// Resource path and query of a GET request, relative to the API base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub format: Format,
}

impl ApiRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Full URL with a percent-encoded query string
    pub fn to_url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        if self.query.is_empty() {
            return format!("{}/{}", base, self.path);
        }

        let query = self
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/{}?{}", base, self.path, query)
    }
}

/// Build the request for an operation, using today's date for defaults
pub fn build_request(operation: &Operation, format: Format) -> ApiRequest {
    build_request_on(operation, format, Local::now().date_naive())
}

/// Build the request for an operation with an explicit "today"
pub fn build_request_on(operation: &Operation, format: Format, today: NaiveDate) -> ApiRequest {
    let (resource, query) = match operation {
        Operation::GetTournament { tournament, includes } => (
            tournament_path(tournament),
            vec![
                flag("include_participants", includes.participants),
                flag("include_matches", includes.matches),
            ],
        ),
        Operation::ListTournaments(filter) => ("tournaments".to_string(), tournament_list_query(filter, today)),
        Operation::GetParticipant {
            tournament,
            participant_id,
            include_matches,
        } => (
            format!("{}/participants/{}", tournament_path(tournament), participant_id),
            vec![flag("include_matches", *include_matches)],
        ),
        Operation::ListParticipants { tournament } => {
            (format!("{}/participants", tournament_path(tournament)), Vec::new())
        }
        Operation::GetMatch {
            tournament,
            match_id,
            include_attachments,
        } => (
            format!("{}/matches/{}", tournament_path(tournament), match_id),
            vec![flag("include_attachments", *include_attachments)],
        ),
        Operation::ListMatches { tournament, filter } => (
            format!("{}/matches", tournament_path(tournament)),
            match_list_query(filter),
        ),
        Operation::GetAttachment {
            tournament,
            match_id,
            attachment_id,
        } => (
            format!(
                "{}/matches/{}/attachments/{}",
                tournament_path(tournament),
                match_id,
                attachment_id
            ),
            Vec::new(),
        ),
        Operation::ListAttachments { tournament, match_id } => (
            format!("{}/matches/{}/attachments", tournament_path(tournament), match_id),
            Vec::new(),
        ),
    };

    ApiRequest {
        path: format!("{}.{}", resource, format.extension()),
        query,
        format,
    }
}

// --- Helper Methods ---

fn tournament_path(tournament: &TournamentRef) -> String {
    format!("tournaments/{}", tournament.path_segment())
}

fn tournament_list_query(filter: &TournamentFilter, today: NaiveDate) -> Vec<(String, String)> {
    let mut query = vec![param("state", filter.state.as_wire())];

    if let Some(tournament_type) = filter.tournament_type {
        query.push(param("type", tournament_type.as_wire()));
    }
    if let Some(after) = filter.created_after {
        query.push(param("created_after", after.format(DATE_FORMAT)));
    }

    let before = filter.created_before.unwrap_or(today);
    query.push(param("created_before", before.format(DATE_FORMAT)));

    if let Some(subdomain) = non_blank(filter.subdomain.as_deref()) {
        query.push(param("subdomain", subdomain));
    }

    query
}

fn match_list_query(filter: &MatchFilter) -> Vec<(String, String)> {
    let mut query = vec![param("state", filter.state.as_wire())];

    if let Some(participant_id) = filter.participant_id.filter(|id| *id >= 0) {
        query.push(param("participant_id", participant_id));
    }

    query
}

fn flag(name: &str, value: bool) -> (String, String) {
    param(name, if value { "1" } else { "0" })
}

fn param(name: &str, value: impl ToString) -> (String, String) {
    (name.to_string(), value.to_string())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
