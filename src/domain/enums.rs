use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::document::FromScalar;
use crate::errors::ClientError;

/// Mapping between a typed enum and the string token the service uses for it
pub trait WireToken: Sized {
    /// Human readable name used in `UnknownEnumValue` errors
    const KIND: &'static str;

    fn as_wire(&self) -> &'static str;

    fn from_wire(token: &str) -> Result<Self, ClientError>;
}

/// Tournament bracket format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TournamentType {
    SingleElimination,
    DoubleElimination,
    RoundRobin,
    Swiss,
}

impl TournamentType {
    pub const ALL: [Self; 4] = [
        Self::SingleElimination,
        Self::DoubleElimination,
        Self::RoundRobin,
        Self::Swiss,
    ];
}

impl WireToken for TournamentType {
    const KIND: &'static str = "tournament type";

    fn as_wire(&self) -> &'static str {
        match self {
            TournamentType::SingleElimination => "single_elimination",
            TournamentType::DoubleElimination => "double_elimination",
            TournamentType::RoundRobin => "round_robin",
            TournamentType::Swiss => "swiss",
        }
    }

    // Responses spell the type with spaces, requests with underscores
    fn from_wire(token: &str) -> Result<Self, ClientError> {
        match token {
            "single_elimination" | "single elimination" => Ok(TournamentType::SingleElimination),
            "double_elimination" | "double elimination" => Ok(TournamentType::DoubleElimination),
            "round_robin" | "round robin" => Ok(TournamentType::RoundRobin),
            "swiss" => Ok(TournamentType::Swiss),
            other => Err(ClientError::unknown_token(Self::KIND, other)),
        }
    }
}

/// Tournament lifecycle state as reported in responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TournamentState {
    Pending,
    Underway,
    AwaitingReview,
    Complete,
}

impl TournamentState {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Underway,
        Self::AwaitingReview,
        Self::Complete,
    ];
}

impl WireToken for TournamentState {
    const KIND: &'static str = "tournament state";

    fn as_wire(&self) -> &'static str {
        match self {
            TournamentState::Pending => "pending",
            TournamentState::Underway => "underway",
            TournamentState::AwaitingReview => "awaiting_review",
            TournamentState::Complete => "complete",
        }
    }

    fn from_wire(token: &str) -> Result<Self, ClientError> {
        match token {
            "pending" => Ok(TournamentState::Pending),
            "underway" => Ok(TournamentState::Underway),
            "awaiting_review" => Ok(TournamentState::AwaitingReview),
            "complete" => Ok(TournamentState::Complete),
            other => Err(ClientError::unknown_token(Self::KIND, other)),
        }
    }
}

/// Tournament state filter accepted by the listing endpoint.
///
/// The listing vocabulary differs from the one responses use, so it is a
/// separate type rather than an `Option<TournamentState>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TournamentStateFilter {
    #[default]
    All,
    Pending,
    InProgress,
    Ended,
}

impl TournamentStateFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Pending, Self::InProgress, Self::Ended];
}

impl WireToken for TournamentStateFilter {
    const KIND: &'static str = "tournament state filter";

    fn as_wire(&self) -> &'static str {
        match self {
            TournamentStateFilter::All => "all",
            TournamentStateFilter::Pending => "pending",
            TournamentStateFilter::InProgress => "in_progress",
            TournamentStateFilter::Ended => "ended",
        }
    }

    fn from_wire(token: &str) -> Result<Self, ClientError> {
        match token {
            "all" => Ok(TournamentStateFilter::All),
            "pending" => Ok(TournamentStateFilter::Pending),
            "in_progress" => Ok(TournamentStateFilter::InProgress),
            "ended" => Ok(TournamentStateFilter::Ended),
            other => Err(ClientError::unknown_token(Self::KIND, other)),
        }
    }
}

/// Match state as reported in responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchState {
    Pending,
    Open,
    Complete,
}

impl MatchState {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Open, Self::Complete];
}

impl WireToken for MatchState {
    const KIND: &'static str = "match state";

    fn as_wire(&self) -> &'static str {
        match self {
            MatchState::Pending => "pending",
            MatchState::Open => "open",
            MatchState::Complete => "complete",
        }
    }

    fn from_wire(token: &str) -> Result<Self, ClientError> {
        match token {
            "pending" => Ok(MatchState::Pending),
            "open" => Ok(MatchState::Open),
            "complete" => Ok(MatchState::Complete),
            other => Err(ClientError::unknown_token(Self::KIND, other)),
        }
    }
}

/// Match state filter for the match listing; `all` only exists here
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchStateFilter {
    #[default]
    All,
    Pending,
    Open,
    Complete,
}

impl MatchStateFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Pending, Self::Open, Self::Complete];
}

impl WireToken for MatchStateFilter {
    const KIND: &'static str = "match state filter";

    fn as_wire(&self) -> &'static str {
        match self {
            MatchStateFilter::All => "all",
            MatchStateFilter::Pending => "pending",
            MatchStateFilter::Open => "open",
            MatchStateFilter::Complete => "complete",
        }
    }

    fn from_wire(token: &str) -> Result<Self, ClientError> {
        match token {
            "all" => Ok(MatchStateFilter::All),
            "pending" => Ok(MatchStateFilter::Pending),
            "open" => Ok(MatchStateFilter::Open),
            "complete" => Ok(MatchStateFilter::Complete),
            other => Err(ClientError::unknown_token(Self::KIND, other)),
        }
    }
}

/// Ranking criterion for Swiss and round robin brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankSystem {
    MatchWins,
    GameWins,
    GameWinPercentage,
    PointsScored,
    PointsDifference,
    Custom,
}

impl RankSystem {
    pub const ALL: [Self; 6] = [
        Self::MatchWins,
        Self::GameWins,
        Self::GameWinPercentage,
        Self::PointsScored,
        Self::PointsDifference,
        Self::Custom,
    ];
}

impl WireToken for RankSystem {
    const KIND: &'static str = "rank system";

    fn as_wire(&self) -> &'static str {
        match self {
            RankSystem::MatchWins => "match wins",
            RankSystem::GameWins => "game wins",
            RankSystem::GameWinPercentage => "game win percentage",
            RankSystem::PointsScored => "points scored",
            RankSystem::PointsDifference => "points difference",
            RankSystem::Custom => "custom",
        }
    }

    fn from_wire(token: &str) -> Result<Self, ClientError> {
        match token {
            "match wins" => Ok(RankSystem::MatchWins),
            "game wins" => Ok(RankSystem::GameWins),
            "game win percentage" => Ok(RankSystem::GameWinPercentage),
            "points scored" => Ok(RankSystem::PointsScored),
            "points difference" => Ok(RankSystem::PointsDifference),
            "custom" => Ok(RankSystem::Custom),
            other => Err(ClientError::unknown_token(Self::KIND, other)),
        }
    }
}

/// How the grand final of a double elimination bracket is played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrandFinalsModifier {
    /// Winners-bracket finalist must be beaten twice (service default)
    #[default]
    TwoSets,
    OneSet,
    /// No grand final at all
    Skip,
}

impl GrandFinalsModifier {
    pub const ALL: [Self; 3] = [Self::TwoSets, Self::OneSet, Self::Skip];
}

impl WireToken for GrandFinalsModifier {
    const KIND: &'static str = "grand finals modifier";

    fn as_wire(&self) -> &'static str {
        match self {
            GrandFinalsModifier::TwoSets => "",
            GrandFinalsModifier::OneSet => "single match",
            GrandFinalsModifier::Skip => "skip",
        }
    }

    fn from_wire(token: &str) -> Result<Self, ClientError> {
        match token {
            "" => Ok(GrandFinalsModifier::TwoSets),
            "single match" => Ok(GrandFinalsModifier::OneSet),
            "skip" => Ok(GrandFinalsModifier::Skip),
            other => Err(ClientError::unknown_token(Self::KIND, other)),
        }
    }
}

macro_rules! wire_token_traits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_wire())
                }
            }

            impl FromStr for $ty {
                type Err = ClientError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty>::from_wire(s)
                }
            }

            impl FromScalar for $ty {
                fn from_scalar(raw: &str) -> Result<Self, ClientError> {
                    <$ty>::from_wire(raw)
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_wire())
                }
            }
        )*
    };
}

wire_token_traits!(
    TournamentType,
    TournamentState,
    TournamentStateFilter,
    MatchState,
    MatchStateFilter,
    RankSystem,
    GrandFinalsModifier,
);
