use bracket_api::api::parsers::{parse_tournament, parse_tournaments};
use bracket_api::document::{Format, parse};
use bracket_api::domain::{GrandFinalsModifier, MatchState, RankSystem, Tournament, TournamentState, TournamentType};

const TOURNAMENT_JSON: &str = include_str!("fixtures/tournament.json");
const TOURNAMENT_XML: &str = include_str!("fixtures/tournament.xml");

fn load(body: &str, format: Format) -> Tournament {
    let root = parse(body, format).unwrap();
    parse_tournament(&root).unwrap()
}

#[test]
fn test_json_and_xml_payloads_decode_to_the_same_tournament() {
    let from_json = load(TOURNAMENT_JSON, Format::Json);
    let from_xml = load(TOURNAMENT_XML, Format::Xml);

    assert_eq!(from_json, from_xml);
}

#[test]
fn test_underway_tournament_fields() {
    let tournament = load(TOURNAMENT_JSON, Format::Json);

    assert_eq!(tournament.id, 1482738);
    assert_eq!(tournament.url, "friday8ball");
    assert_eq!(tournament.subdomain.as_deref(), Some("acme"));
    assert_eq!(tournament.tournament_type, TournamentType::DoubleElimination);
    assert_eq!(tournament.state, TournamentState::Underway);
    assert_eq!(tournament.ranked_by, Some(RankSystem::MatchWins));
    assert_eq!(tournament.grand_finals_modifier, GrandFinalsModifier::OneSet);
    assert_eq!(tournament.swiss_points.match_tie, Some(0.5));
    assert_eq!(tournament.round_robin_points.match_win, Some(1.0));
    assert_eq!(tournament.flags.accept_attachments, Some(true));
    assert_eq!(tournament.flags.private, Some(false));
    assert!(tournament.started_at.is_some());
    assert_eq!(tournament.completed_at, None);
    assert_eq!(tournament.start_at, None);
    assert!(!tournament.is_complete());
}

#[test]
fn test_participants_have_no_final_rank_while_underway() {
    let tournament = load(TOURNAMENT_XML, Format::Xml);

    assert_eq!(tournament.participants.len(), 3);
    assert!(tournament.participants.iter().all(|p| p.final_rank.is_none()));

    let bob = tournament.participant(12).unwrap();
    assert_eq!(bob.name, "Bob");
    assert_eq!(bob.seed, 2);
    assert_eq!(bob.misc.as_deref(), Some("left-handed"));
    assert_eq!(bob.challonge_username, None);
}

#[test]
fn test_match_states_carry_consistent_results() {
    let tournament = load(TOURNAMENT_JSON, Format::Json);
    assert_eq!(tournament.matches.len(), 3);

    for m in &tournament.matches {
        if m.is_complete() {
            assert!(m.winner_id.is_some());
            assert!(m.loser_id.is_some());
            assert!(m.completed_at.is_some());
            assert_ne!(m.winner_id, m.loser_id);
            let winner = m.winner_id.unwrap();
            assert!(m.involves(winner));
        } else {
            assert_eq!(m.winner_id, None);
            assert_eq!(m.loser_id, None);
            assert_eq!(m.completed_at, None);
        }
    }

    let finished = &tournament.matches[0];
    assert_eq!(finished.state, MatchState::Complete);
    assert_eq!(finished.scores_csv.as_deref(), Some("2-1,0-2,3-1"));
    assert_eq!(finished.attachment_count, Some(1));

    let open = &tournament.matches[1];
    assert_eq!(open.state, MatchState::Open);
    assert_eq!(open.scores_csv, None);
    assert_eq!(open.player1_prereq_match_id, Some(5001));
}

#[test]
fn test_losers_bracket_matches_use_negative_rounds() {
    let tournament = load(TOURNAMENT_XML, Format::Xml);

    let losers: Vec<i64> = tournament.losers_bracket_matches().map(|m| m.id).collect();
    assert_eq!(losers, vec![5003]);

    let pending = tournament.matches.iter().find(|m| m.id == 5003).unwrap();
    assert_eq!(pending.state, MatchState::Pending);
    assert_eq!(pending.player2_id, None);
    assert_eq!(pending.player1_is_prereq_match_loser, Some(true));
}

#[test]
fn test_listing_payloads_in_both_formats() {
    let json = r#"[
        {"tournament": {"id": 1, "name": "Cup", "url": "cup", "tournament_type": "swiss",
                        "state": "pending", "created_at": "2024-03-01T10:00:00+01:00",
                        "updated_at": "2024-03-01T10:00:00+01:00"}},
        {"tournament": {"id": 2, "name": "League", "url": "league", "tournament_type": "round robin",
                        "state": "complete", "created_at": "2024-02-01T10:00:00+01:00",
                        "updated_at": "2024-02-20T10:00:00+01:00",
                        "completed_at": "2024-02-20T10:00:00+01:00"}}
    ]"#;
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <tournaments type="array">
          <tournament>
            <id type="integer">1</id>
            <name>Cup</name>
            <url>cup</url>
            <tournament-type>swiss</tournament-type>
            <state>pending</state>
            <created-at type="datetime">2024-03-01T10:00:00+01:00</created-at>
            <updated-at type="datetime">2024-03-01T10:00:00+01:00</updated-at>
          </tournament>
          <tournament>
            <id type="integer">2</id>
            <name>League</name>
            <url>league</url>
            <tournament-type>round robin</tournament-type>
            <state>complete</state>
            <created-at type="datetime">2024-02-01T10:00:00+01:00</created-at>
            <updated-at type="datetime">2024-02-20T10:00:00+01:00</updated-at>
            <completed-at type="datetime">2024-02-20T10:00:00+01:00</completed-at>
          </tournament>
        </tournaments>"#;

    let from_json = parse_tournaments(&parse(json, Format::Json).unwrap()).unwrap();
    let from_xml = parse_tournaments(&parse(xml, Format::Xml).unwrap()).unwrap();

    assert_eq!(from_json, from_xml);
    assert_eq!(from_json.len(), 2);
    assert_eq!(from_json[1].tournament_type, TournamentType::RoundRobin);
    assert!(from_json[1].is_complete());
    assert_eq!(from_json[0].grand_finals_modifier, GrandFinalsModifier::TwoSets);
    assert!(from_json[0].participants.is_empty());
}
