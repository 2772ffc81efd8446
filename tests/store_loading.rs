use std::fs;
use std::io::{self, Read};

use seat_core::record::{GenderPolicy, InstituteType, Quota, SeatCategory, StateId};
use seat_core::store::{self, LoadError};
use seat_core::types::DatasetVersion;
use tempfile::tempdir;

const HEADER: &str =
    "Institute,Academic-Program-Name,Institute-Type,Quota,State-Id,Seat-Type,Gender,Opening-Rank,Closing-Rank\n";

fn csv(rows: &[&str]) -> String {
    let mut out = HEADER.to_string();
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

#[test]
fn loads_typed_records_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("seats.csv");
    let content = csv(&[
        "NIT Alpha,Computer Science,NIT,HS,7,OBC-NCL (PwD),Female-only (including Supernumerary),120,480",
        "IIT Delta,Electrical,IIT,AI,,OPEN,Gender-Neutral,1000,5000",
    ]);
    fs::write(&path, &content).unwrap();

    let store = store::load(&path).unwrap();

    assert_eq!(store.len(), 2);
    let first = &store.all()[0];
    assert_eq!(first.institute, "NIT Alpha");
    assert_eq!(first.program, "Computer Science");
    assert_eq!(first.institute_type, InstituteType::StandardTier);
    assert_eq!(first.quota, Quota::HomeState(StateId::new(7)));
    assert_eq!(first.seat_category, SeatCategory::ObcNclPwd);
    assert_eq!(first.gender_policy, GenderPolicy::FemaleOnly);
    assert_eq!((first.opening_rank, first.closing_rank), (120, 480));

    let second = &store.all()[1];
    assert_eq!(second.institute_type, InstituteType::AdvancedTier);
    assert_eq!(second.quota, Quota::AllIndia);

    let manifest = store.manifest();
    assert_eq!(manifest.record_count, 2);
    assert_eq!(manifest.source, path.display().to_string());
    assert_eq!(manifest.dataset_version, DatasetVersion::from_content(content.as_bytes()));
    assert!(manifest.dataset_version.as_str().starts_with("sha256:"));
}

#[test]
fn fields_are_trimmed_and_types_case_insensitive() {
    let content = csv(&[" NIT Alpha , CSE , nit+ , ai ,  , OPEN , Gender-Neutral , 10 , 20 "]);
    let store = store::from_bytes("inline", content.as_bytes()).unwrap();

    let r = &store.all()[0];
    assert_eq!(r.institute, "NIT Alpha");
    assert_eq!(r.institute_type, InstituteType::StandardTier);
    assert_eq!(r.quota, Quota::AllIndia);
    assert_eq!(r.closing_rank, 20);
}

#[test]
fn inverted_ranks_are_tolerated() {
    let content = csv(&["NIT Iota,CIV,NIT,AI,,OPEN,Gender-Neutral,70000,49000"]);
    let store = store::from_bytes("inline", content.as_bytes()).unwrap();

    assert!(store.all()[0].is_inverted());
    assert_eq!(store.stats().inverted_ranks, 1);
}

#[test]
fn header_only_source_loads_empty_store() {
    let store = store::from_bytes("inline", HEADER.as_bytes()).unwrap();
    assert!(store.is_empty());
}

#[test]
fn empty_source_is_rejected() {
    let err = store::from_bytes("inline", b"").unwrap_err();
    assert!(matches!(err, LoadError::MissingHeader));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = store::load(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

struct BrokenPipe;

impl Read for BrokenPipe {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "upstream closed"))
    }
}

#[test]
fn reader_failure_reports_the_label() {
    let err = store::from_reader("seats feed", BrokenPipe).unwrap_err();
    match &err {
        LoadError::Read { label, source } => {
            assert_eq!(label, "seats feed");
            assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
        }
        other => panic!("expected read error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "IO error reading seats feed: upstream closed");
}

#[test]
fn unknown_seat_type_fails_with_row_position() {
    let content = csv(&["NIT Alpha,CSE,NIT,AI,,GENERAL,Gender-Neutral,10,20"]);
    let err = store::from_bytes("inline", content.as_bytes()).unwrap_err();

    match err {
        LoadError::Malformed { line, source } => {
            assert_eq!(line, 2);
            assert!(source.to_string().contains("GENERAL"), "{source}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_rows_are_rejected() {
    let bad_rows = [
        // non-numeric rank
        "NIT Alpha,CSE,NIT,AI,,OPEN,Gender-Neutral,ten,20",
        // zero rank
        "NIT Alpha,CSE,NIT,AI,,OPEN,Gender-Neutral,0,20",
        // home-state quota without a state
        "NIT Alpha,CSE,NIT,HS,,OPEN,Gender-Neutral,10,20",
        // unsupported quota
        "NIT Alpha,CSE,NIT,OS,,OPEN,Gender-Neutral,10,20",
        // unknown institute type
        "NIT Alpha,CSE,UNIV,AI,,OPEN,Gender-Neutral,10,20",
        // unknown gender policy
        "NIT Alpha,CSE,NIT,AI,,OPEN,Male-only,10,20",
        // missing columns
        "NIT Alpha,CSE,NIT,AI",
    ];

    for row in bad_rows {
        let content = csv(&[row]);
        let err = store::from_bytes("inline", content.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }), "row {row:?} gave {err:?}");
    }
}

#[test]
fn load_is_all_or_nothing() {
    let content = csv(&[
        "NIT Alpha,CSE,NIT,AI,,OPEN,Gender-Neutral,10,20",
        "NIT Alpha,ECE,NIT,AI,,OPEN,Gender-Neutral,10,twenty",
        "NIT Alpha,ME,NIT,AI,,OPEN,Gender-Neutral,10,20",
    ]);

    let err = store::from_bytes("inline", content.as_bytes()).unwrap_err();
    match err {
        LoadError::Malformed { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn identical_content_has_identical_version() {
    let content = csv(&["NIT Alpha,CSE,NIT,AI,,OPEN,Gender-Neutral,10,20"]);
    let a = store::from_bytes("a.csv", content.as_bytes()).unwrap();
    let b = store::from_reader("b.csv", content.as_bytes()).unwrap();
    let c = store::from_bytes("c.csv", content.replace("20", "21").as_bytes()).unwrap();

    assert_eq!(a.dataset_version(), b.dataset_version());
    assert_ne!(a.dataset_version(), c.dataset_version());
}

#[test]
fn stats_summarize_the_snapshot() {
    let content = csv(&[
        "IIT Delta,EE,IIT,AI,,OPEN,Gender-Neutral,1000,5000",
        "NIT Alpha,CSE,NIT,AI,,OPEN,Gender-Neutral,10,20",
        "NIT Beta,CSE,NIT,HS,7,SC,Gender-Neutral,10,20",
        "NIT Beta,ME,NIT,HS,7,SC,Female-only (including Supernumerary),10,20",
    ]);
    let stats = store::from_bytes("inline", content.as_bytes()).unwrap().stats();

    assert_eq!(stats.records, 4);
    assert_eq!(stats.advanced_tier, 1);
    assert_eq!(stats.standard_tier, 3);
    assert_eq!(stats.all_india, 2);
    assert_eq!(stats.home_state, 2);
    assert_eq!(stats.by_category.get("OPEN"), Some(&2));
    assert_eq!(stats.by_category.get("SC"), Some(&2));
    assert_eq!(stats.inverted_ranks, 0);
}
