//! Config and snapshot files read from disk.

use std::io::Write;

use showfinder::domain::{EventId, EventRecord};
use showfinder::gateway::{EventRepository, RefreshOutcome, SnapshotLedger};
use showfinder::{initialize, Config, ShowfinderError};

#[test]
fn config_file_drives_initialization() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
snapshot = "~/ledger.json"
theme = "catppuccin-latte"
categories = ["Movie", "Opera"]
initial_category = "Opera"
initial_reveal = 4
reveal_step = 3
trending_size = 3
"#
    )
    .unwrap();

    let config = Config::from_toml_file(file.path()).unwrap();
    let state = initialize(&config);

    assert_eq!(config.snapshot.as_deref(), Some("~/ledger.json"));
    assert_eq!(state.theme.name, "catppuccin-latte");
    assert_eq!(state.categories, vec!["Movie", "Opera"]);
    assert!(state.selected_categories.contains("Opera"));
    assert_eq!(state.reveal.count(), 4);
    assert_eq!(state.reveal.step(), 3);
    assert_eq!(state.trending_size, 3);
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ShowfinderError::Config(_)));
}

#[tokio::test]
async fn snapshot_file_round_trips_through_repository() {
    let records: Vec<EventRecord> = (1..=3_u64)
        .map(|i| EventRecord {
            id: EventId::from(i),
            creator: "0xabc".to_string(),
            ticket_price: 1,
            metadata_uri: format!("https://tix.example/m?title=Gig{i}&eventType=Concert"),
            max_tickets: 10,
            tickets_sold: 10,
        })
        .collect();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, SnapshotLedger::to_json(&records).unwrap()).unwrap();

    let repository = EventRepository::new(SnapshotLedger::open(&path).unwrap());
    let outcome = repository.refresh().await.unwrap();

    let RefreshOutcome::Loaded(events) = outcome else {
        panic!("expected a loaded collection");
    };
    assert_eq!(&events[..], &records[..]);
    assert!(events.iter().all(EventRecord::is_sold_out));
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"{"version":1,"events":[
        {"id":1,"creator":"a","ticket_price":"0","metadata_uri":"","max_tickets":1,"tickets_sold":0},
        {"id":1,"creator":"b","ticket_price":"0","metadata_uri":"","max_tickets":1,"tickets_sold":0}
    ]}"#;

    let err = SnapshotLedger::parse(json).unwrap_err();
    assert!(matches!(err, ShowfinderError::Snapshot(_)));
}
