use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::api::{ChallongeClient, MatchFilter, TournamentFilter, TournamentIncludes};
use crate::cli::Command;
use crate::http::Transport;

/// Runs one read command and prints the result as pretty JSON
pub struct QueryService<T> {
    client: ChallongeClient<T>,
}

impl<T: Transport> QueryService<T> {
    pub fn new(client: ChallongeClient<T>) -> Self {
        Self { client }
    }

    pub async fn run(&self, command: &Command) -> Result<()> {
        let output = self.render(command).await?;
        println!("{}", output);
        Ok(())
    }

    /// Execute the command and return its JSON rendering
    pub async fn render(&self, command: &Command) -> Result<String> {
        info!("Running {:?} as {}", command, self.client.username());

        match command {
            Command::Tournament {
                target,
                participants,
                matches,
            } => {
                let includes = TournamentIncludes {
                    participants: *participants,
                    matches: *matches,
                };
                let tournament = self
                    .client
                    .get_tournament(&target.to_ref(), includes)
                    .await
                    .with_context(|| format!("Failed to fetch tournament {}", target.tournament))?;
                to_json(&tournament)
            }
            Command::Tournaments {
                subdomain,
                state,
                tournament_type,
                created_after,
                created_before,
            } => {
                let filter = TournamentFilter {
                    state: *state,
                    tournament_type: *tournament_type,
                    created_after: *created_after,
                    created_before: *created_before,
                    subdomain: subdomain.clone(),
                };
                let tournaments = self
                    .client
                    .list_tournaments(&filter)
                    .await
                    .context("Failed to list tournaments")?;
                to_json(&tournaments)
            }
            Command::Participant {
                target,
                participant_id,
                matches,
            } => {
                let participant = self
                    .client
                    .get_participant(&target.to_ref(), *participant_id, *matches)
                    .await
                    .with_context(|| format!("Failed to fetch participant {}", participant_id))?;
                to_json(&participant)
            }
            Command::Participants { target } => {
                let participants = self
                    .client
                    .list_participants(&target.to_ref())
                    .await
                    .with_context(|| format!("Failed to list participants of {}", target.tournament))?;
                to_json(&participants)
            }
            Command::Match {
                target,
                match_id,
                attachments,
            } => {
                let found = self
                    .client
                    .get_match(&target.to_ref(), *match_id, *attachments)
                    .await
                    .with_context(|| format!("Failed to fetch match {}", match_id))?;
                to_json(&found)
            }
            Command::Matches {
                target,
                state,
                participant,
            } => {
                let filter = MatchFilter {
                    state: *state,
                    participant_id: *participant,
                };
                let matches = self
                    .client
                    .list_matches(&target.to_ref(), &filter)
                    .await
                    .with_context(|| format!("Failed to list matches of {}", target.tournament))?;
                to_json(&matches)
            }
            Command::Attachment {
                target,
                match_id,
                attachment_id,
            } => {
                let attachment = self
                    .client
                    .get_attachment(&target.to_ref(), *match_id, *attachment_id)
                    .await
                    .with_context(|| format!("Failed to fetch attachment {}", attachment_id))?;
                to_json(&attachment)
            }
            Command::Attachments { target, match_id } => {
                let attachments = self
                    .client
                    .list_attachments(&target.to_ref(), *match_id)
                    .await
                    .with_context(|| format!("Failed to list attachments of match {}", match_id))?;
                to_json(&attachments)
            }
            Command::Completions { .. } => anyhow::bail!("completions do not query the API"),
        }
    }
}

fn to_json<S: Serialize>(value: &S) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize result")
}
