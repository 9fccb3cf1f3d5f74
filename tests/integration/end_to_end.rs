// tests/integration/end_to_end.rs
use verify_output::{config::Config, run};
use verify_output_domain::{DirectoryListing, Resolution, VerificationReport};

use crate::common::{ARTIFACTS, OutputWorkspace};

fn verify(ws: &OutputWorkspace) -> (VerificationReport, String) {
    let config = Config { base_dir: ws.output(), ..Config::default() };
    let mut buf = Vec::new();
    let report = run(&config, &mut buf).expect("run succeeds");
    (report, String::from_utf8(buf).expect("utf-8 output"))
}

#[test]
fn every_pattern_found_exits_zero() {
    let ws = OutputWorkspace::complete();
    let (report, text) = verify(&ws);

    assert_eq!(report.miss_count(), 0);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(text.matches("✅ ").count(), 5);
    assert!(!text.contains("Contents of"));
}

#[test]
fn each_missing_pattern_is_counted() {
    for (index, name) in ARTIFACTS.iter().enumerate() {
        let ws = OutputWorkspace::complete();
        ws.remove(name);
        let (report, _) = verify(&ws);

        assert_eq!(report.miss_count(), 1, "removing {name}");
        assert_eq!(report.exit_code(), 1);
        assert!(!report.outcomes[index].is_found());
    }
}

#[test]
fn miss_count_matches_unmatched_patterns() {
    let ws = OutputWorkspace::new();
    ws.write(ARTIFACTS[0], "[]");
    ws.write(ARTIFACTS[3], "[]");
    let (report, text) = verify(&ws);

    assert_eq!(report.miss_count(), 2);
    assert!(text.contains("2 of 4 expected files missing"));
}

#[test]
fn latest_file_by_mtime_is_reported() {
    let ws = OutputWorkspace::complete();
    ws.write_at("01events_20240301.json", "[]", 1_700_000_300);
    ws.write_at("01events_20240401.json", "[]", 1_700_000_100);
    let newest = ws.write_at("01events_20240101.json", "[]", 1_700_000_900);

    let (report, text) = verify(&ws);
    let Resolution::Found(found) = &report.outcomes[0].resolution else {
        panic!("events pattern unresolved");
    };
    assert_eq!(found.path, newest);
    assert!(text.contains(&newest.display().to_string()));
}

#[test]
fn nested_and_misnamed_files_do_not_count() {
    let ws = OutputWorkspace::new();
    ws.write("archive/01events_20240101.json", "[]");
    ws.write("01events.json", "[]");
    ws.write("participantes_procesado.csv", "a\n");
    let (report, text) = verify(&ws);

    assert_eq!(report.miss_count(), 4);
    assert!(text.contains(".csv files in"));
    assert!(text.contains("participantes_procesado.csv"));
}

#[test]
fn missing_directory_completes_with_four_misses() {
    let ws = OutputWorkspace::bare();
    let (report, text) = verify(&ws);

    assert_eq!(report.miss_count(), 4);
    assert_eq!(report.exit_code(), 1);
    assert!(matches!(report.listing, DirectoryListing::Unavailable { .. }));
    assert!(text.contains("directory could not be listed"));
}

#[test]
fn repeated_runs_are_identical() {
    let ws = OutputWorkspace::complete();
    ws.remove(ARTIFACTS[1]);

    let (first, first_text) = verify(&ws);
    let (second, second_text) = verify(&ws);
    assert_eq!(first, second);
    assert_eq!(first_text, second_text);
}

#[test]
fn inspection_is_read_only() {
    let ws = OutputWorkspace::complete();
    let before = std::fs::read_dir(ws.output()).unwrap().count();
    verify(&ws);
    let after = std::fs::read_dir(ws.output()).unwrap().count();
    assert_eq!(before, after);
}
