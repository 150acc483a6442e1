use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::api::TournamentRef;
use crate::document::Format;
use crate::domain::enums::{MatchStateFilter, TournamentStateFilter, TournamentType};

#[derive(Parser, Debug)]
#[command(author, version, about = "Read-only client for the Challonge bracket API")]
pub struct Cli {
    /// Challonge account name
    #[arg(short, long, env = "CHALLONGE_USERNAME", global = true)]
    pub username: Option<String>,

    /// Developer API key
    #[arg(short = 'k', long, env = "CHALLONGE_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Payload format requested from the service
    #[arg(short, long, default_value_t = Format::Json, global = true)]
    pub format: Format,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

/// Tournament addressed by id or url slug
#[derive(Args, Debug, Clone, PartialEq)]
pub struct TournamentArgs {
    /// Tournament id or url slug
    pub tournament: String,

    /// Organization subdomain owning the url slug
    #[arg(short, long)]
    pub subdomain: Option<String>,

    /// Treat the tournament as a url slug even when it is all digits
    #[arg(long = "url")]
    pub as_url: bool,
}

impl TournamentArgs {
    pub fn to_ref(&self) -> TournamentRef {
        if self.as_url {
            return TournamentRef::Url {
                url: self.tournament.clone(),
                subdomain: self.subdomain.clone(),
            };
        }
        TournamentRef::parse(&self.tournament, self.subdomain.clone())
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show a single tournament
    Tournament {
        #[command(flatten)]
        target: TournamentArgs,
        /// Include participants
        #[arg(long)]
        participants: bool,
        /// Include matches
        #[arg(long)]
        matches: bool,
    },
    /// List tournaments
    Tournaments {
        /// Organization subdomain
        #[arg(short, long)]
        subdomain: Option<String>,
        /// all, pending, in_progress or ended
        #[arg(long, default_value_t = TournamentStateFilter::All)]
        state: TournamentStateFilter,
        /// single_elimination, double_elimination, round_robin or swiss (default: all)
        #[arg(long = "type")]
        tournament_type: Option<TournamentType>,
        /// Earliest creation date (YYYY-MM-DD)
        #[arg(long)]
        created_after: Option<NaiveDate>,
        /// Latest creation date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        created_before: Option<NaiveDate>,
    },
    /// Show a single participant
    Participant {
        #[command(flatten)]
        target: TournamentArgs,
        participant_id: i64,
        /// Include the participant's matches
        #[arg(long)]
        matches: bool,
    },
    /// List the participants of a tournament
    Participants {
        #[command(flatten)]
        target: TournamentArgs,
    },
    /// Show a single match
    Match {
        #[command(flatten)]
        target: TournamentArgs,
        match_id: i64,
        /// Include match attachments
        #[arg(long)]
        attachments: bool,
    },
    /// List the matches of a tournament
    Matches {
        #[command(flatten)]
        target: TournamentArgs,
        /// all, pending, open or complete
        #[arg(long, default_value_t = MatchStateFilter::All)]
        state: MatchStateFilter,
        /// Only matches of this participant
        #[arg(long)]
        participant: Option<i64>,
    },
    /// Show a single match attachment
    Attachment {
        #[command(flatten)]
        target: TournamentArgs,
        match_id: i64,
        attachment_id: i64,
    },
    /// List the attachments of a match
    Attachments {
        #[command(flatten)]
        target: TournamentArgs,
        match_id: i64,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tournament_command() {
        let cli = Cli::try_parse_from([
            "bracket_api",
            "--username",
            "organizer",
            "--api-key",
            "key",
            "tournament",
            "cup",
            "--subdomain",
            "acme",
            "--matches",
        ])
        .unwrap();

        assert_eq!(cli.username.as_deref(), Some("organizer"));
        match cli.command {
            Command::Tournament {
                target,
                participants,
                matches,
            } => {
                assert_eq!(target.to_ref(), TournamentRef::subdomain_url("acme", "cup"));
                assert!(!participants);
                assert!(matches);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "bracket_api",
            "--format",
            "xml",
            "tournaments",
            "--state",
            "in_progress",
            "--type",
            "swiss",
            "--created-after",
            "2024-01-01",
        ])
        .unwrap();

        assert_eq!(cli.format, Format::Xml);
        assert_eq!(
            cli.command,
            Command::Tournaments {
                subdomain: None,
                state: TournamentStateFilter::InProgress,
                tournament_type: Some(TournamentType::Swiss),
                created_after: NaiveDate::from_ymd_opt(2024, 1, 1),
                created_before: None,
            }
        );
    }

    #[test]
    fn test_numeric_slug_with_url_flag() {
        let by_id = Cli::try_parse_from(["bracket_api", "participants", "2024"]).unwrap();
        let by_slug = Cli::try_parse_from(["bracket_api", "participants", "2024", "--url"]).unwrap();

        let resolve = |cli: Cli| match cli.command {
            Command::Participants { target } => target.to_ref(),
            other => panic!("unexpected command: {other:?}"),
        };

        assert_eq!(resolve(by_id), TournamentRef::id(2024));
        assert_eq!(resolve(by_slug), TournamentRef::url("2024"));
    }

    #[test]
    fn test_rejects_unknown_state() {
        assert!(Cli::try_parse_from(["bracket_api", "matches", "1", "--state", "paused"]).is_err());
    }
}
