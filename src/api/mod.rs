pub mod challonge_client;
pub mod parsers;
pub mod request;

pub use challonge_client::ChallongeClient;
pub use request::{
    ApiRequest, MatchFilter, Operation, TournamentFilter, TournamentIncludes, TournamentRef, build_request,
    build_request_on,
};
