use crate::dto::{LeaderboardEntryDto, LeaderboardEntryWithPlayerDto, PlayerDto};
use crate::{leaderboard_entry, player};

fn payload(first: &str, last: &str, email: &str) -> PlayerDto {
    PlayerDto {
        id: 0,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
    }
}

#[test]
fn valid_payload_passes() {
    assert!(payload("Joe", "Bloggs", "joe.bloggs@email.co.uk").validate().is_ok());
}

#[test]
fn empty_names_are_rejected() {
    assert!(payload("", "Bloggs", "joe@email.co.uk").validate().is_err());
    assert!(payload("Joe", "", "joe@email.co.uk").validate().is_err());
}

#[test]
fn malformed_emails_are_rejected() {
    for email in [
        "",
        "joe",
        "joe@",
        "@email.co.uk",
        "joe@email",
        "joe@email.",
        "joe@.uk",
        "joe bloggs@email.co.uk",
        "joe@email .co.uk",
        "joe@email.co .uk",
        "joe@@email.co.uk",
        "joe@em@il.co.uk",
    ] {
        assert!(payload("Joe", "Bloggs", email).validate().is_err(), "{email}");
    }
}

#[test]
fn dotted_local_and_subdomains_are_accepted() {
    for email in ["joe.bloggs@email.co.uk", "j@e.io", "a.b.c@d.e.f"] {
        assert!(payload("Joe", "Bloggs", email).validate().is_ok(), "{email}");
    }
}

#[test]
fn player_record_round_trips_camel_case() {
    let dto = PlayerDto::from(player::Model {
        id: 3,
        first_name: "Jonathan".into(),
        last_name: "Rhodes".into(),
        email: "jonathan.rhodes@email.co.uk".into(),
    });
    let json = serde_json::to_value(&dto).unwrap();
    assert_eq!(json["firstName"], "Jonathan");
    assert_eq!(json["lastName"], "Rhodes");
    assert_eq!(json["email"], "jonathan.rhodes@email.co.uk");

    // id is optional on the way in (create payloads omit it)
    let parsed: PlayerDto =
        serde_json::from_str(r#"{"firstName":"Joe","lastName":"Bloggs","email":"joe@e.io"}"#)
            .unwrap();
    assert_eq!(parsed.id, 0);
}

#[test]
fn entry_record_keeps_owner_fields() {
    let entry = leaderboard_entry::Model {
        id: 7,
        player_id: 7,
        games_played: 7,
        total_score: 700,
    };
    let dto = LeaderboardEntryDto::from(entry.clone());
    assert_eq!(dto.player_id, 7);

    let joined = LeaderboardEntryWithPlayerDto::new(
        entry,
        player::Model {
            id: 7,
            first_name: "David".into(),
            last_name: "Jones".into(),
            email: "david.jones@email.co.uk".into(),
        },
    );
    let json = serde_json::to_value(&joined).unwrap();
    assert_eq!(json["playerId"], 7);
    assert_eq!(json["firstName"], "David");
    assert_eq!(json["gamesPlayed"], 7);
    assert_eq!(json["totalScore"], 700);
}
