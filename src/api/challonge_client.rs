use log::{info, warn};

use crate::api::parsers;
use crate::api::request::{
    ApiRequest, MatchFilter, Operation, TournamentFilter, TournamentIncludes, TournamentRef, build_request,
};
use crate::config::{ClientSettings, Credentials};
use crate::document::{self, Format, Node};
use crate::domain::models::{Attachment, Match, Participant, Tournament};
use crate::errors::ClientError;
use crate::http::{HttpTransport, RawResponse, Transport};

/// Read-only client for the Challonge v1 API.
///
/// Holds only immutable state, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct ChallongeClient<T = HttpTransport> {
    credentials: Credentials,
    transport: T,
    format: Format,
}

impl ChallongeClient<HttpTransport> {
    /// Create a client with default settings
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_settings(Credentials::new(username, api_key), &ClientSettings::default())
    }

    pub fn with_settings(credentials: Credentials, settings: &ClientSettings) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(settings)?;
        Ok(Self::with_transport(credentials, transport).with_format(settings.format))
    }
}

impl<T: Transport> ChallongeClient<T> {
    pub fn with_transport(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            transport,
            format: Format::default(),
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // --- Tournaments ---

    /// Fetch a single tournament, optionally with its participants and matches
    pub async fn get_tournament(
        &self,
        tournament: &TournamentRef,
        includes: TournamentIncludes,
    ) -> Result<Tournament, ClientError> {
        let root = self
            .fetch(Operation::GetTournament {
                tournament: tournament.clone(),
                includes,
            })
            .await?;
        parsers::parse_tournament(&root)
    }

    /// List tournaments matching the filter
    pub async fn list_tournaments(&self, filter: &TournamentFilter) -> Result<Vec<Tournament>, ClientError> {
        let root = self.fetch(Operation::ListTournaments(filter.clone())).await?;
        let tournaments = parsers::parse_tournaments(&root)?;
        info!("Fetched {} tournaments", tournaments.len());
        Ok(tournaments)
    }

    // --- Participants ---

    pub async fn get_participant(
        &self,
        tournament: &TournamentRef,
        participant_id: i64,
        include_matches: bool,
    ) -> Result<Participant, ClientError> {
        let root = self
            .fetch(Operation::GetParticipant {
                tournament: tournament.clone(),
                participant_id,
                include_matches,
            })
            .await?;
        parsers::parse_participant(&root)
    }

    pub async fn list_participants(&self, tournament: &TournamentRef) -> Result<Vec<Participant>, ClientError> {
        let root = self
            .fetch(Operation::ListParticipants {
                tournament: tournament.clone(),
            })
            .await?;
        parsers::parse_participants(&root)
    }

    // --- Matches ---

    pub async fn get_match(
        &self,
        tournament: &TournamentRef,
        match_id: i64,
        include_attachments: bool,
    ) -> Result<Match, ClientError> {
        let root = self
            .fetch(Operation::GetMatch {
                tournament: tournament.clone(),
                match_id,
                include_attachments,
            })
            .await?;
        parsers::parse_match(&root)
    }

    pub async fn list_matches(&self, tournament: &TournamentRef, filter: &MatchFilter) -> Result<Vec<Match>, ClientError> {
        let root = self
            .fetch(Operation::ListMatches {
                tournament: tournament.clone(),
                filter: filter.clone(),
            })
            .await?;
        parsers::parse_matches(&root)
    }

    // --- Attachments ---

    pub async fn get_attachment(
        &self,
        tournament: &TournamentRef,
        match_id: i64,
        attachment_id: i64,
    ) -> Result<Attachment, ClientError> {
        let root = self
            .fetch(Operation::GetAttachment {
                tournament: tournament.clone(),
                match_id,
                attachment_id,
            })
            .await?;
        parsers::parse_attachment(&root)
    }

    pub async fn list_attachments(&self, tournament: &TournamentRef, match_id: i64) -> Result<Vec<Attachment>, ClientError> {
        let root = self
            .fetch(Operation::ListAttachments {
                tournament: tournament.clone(),
                match_id,
            })
            .await?;
        parsers::parse_attachments(&root)
    }

    // --- Helper Methods ---

    /// Send the request and return the body as a node tree, or the failure
    async fn fetch(&self, operation: Operation) -> Result<Node, ClientError> {
        let request = build_request(&operation, self.format);
        info!("Fetching {}", request.path);

        let response = self.transport.get(&request, &self.credentials).await?;

        if !response.is_success() {
            return Err(self.status_error(&request, response));
        }

        let root = document::parse(&response.body, self.format)?;

        if let Some(messages) = document::service_errors(&root) {
            warn!("Service reported errors for {}: {}", request.path, messages.join("; "));
            return Err(ClientError::ServiceReported { messages });
        }

        Ok(root)
    }

    fn status_error(&self, request: &ApiRequest, response: RawResponse) -> ClientError {
        let url = request.to_url(self.transport.base_url());
        warn!("Failed to fetch {}: status {}", url, response.status);

        // Error bodies are informative only; an unparsable one is not a second failure
        let messages = document::parse(&response.body, self.format)
            .ok()
            .and_then(|root| document::service_errors(&root))
            .unwrap_or_default();

        ClientError::HttpStatus {
            url,
            status: response.status,
            messages,
        }
    }
}
