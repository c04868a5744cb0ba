use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn officedir() -> Command {
    Command::cargo_bin("officedir").expect("cli binary")
}

#[test]
fn seed_then_validate_round_trips() {
    let root = tempdir().expect("tempdir");

    officedir()
        .args(["data", "seed", "--root"])
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("written"));

    officedir()
        .args(["data", "validate", "--root"])
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("buildings: 6 records"))
        .stdout(predicate::str::contains("submarkets: 6 records"));
}

#[test]
fn validate_reports_malformed_collections_with_exit_code() {
    let root = tempdir().expect("tempdir");
    std::fs::write(root.path().join("buildings.json"), "{ not json").expect("write garbage");

    officedir()
        .args(["data", "validate", "--root"])
        .arg(root.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("validation failure"));
}

#[test]
fn validate_rejects_bad_records_not_just_bad_json() {
    let root = tempdir().expect("tempdir");
    std::fs::write(
        root.path().join("submarkets.json"),
        r#"[{"id": "Bad Slug!", "name": "Broken", "lat": 51.0, "lng": -114.0}]"#,
    )
    .expect("write record");

    officedir()
        .args(["data", "validate", "--root"])
        .arg(root.path())
        .assert()
        .code(3);
}

#[test]
fn list_shows_record_ids() {
    let root = tempdir().expect("tempdir");
    officedir()
        .args(["data", "seed", "--root"])
        .arg(root.path())
        .assert()
        .success();

    officedir()
        .args(["data", "list", "--collection", "coworking", "--root"])
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("coworking: 4 records"))
        .stdout(predicate::str::contains("work-nicer-stephen-ave"));
}

#[test]
fn estimate_prices_from_count_pairs() {
    officedir()
        .args(["estimate", "--counts", "partnerOffice=29,standardCubicle=3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rentable area 10000 ft2"))
        .stdout(predicate::str::contains("Class A ($50/RSF): $500000/yr ($41667/mo)"));
}

#[test]
fn estimate_rejects_unknown_kinds() {
    officedir()
        .args(["estimate", "--counts", "penthouseSuite=1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown space kind"));
}

#[test]
fn estimate_json_output_is_machine_readable() {
    let output = officedir()
        .args(["--json", "estimate", "--counts", "ceoOffice=2"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["estimate"]["subtotal"], 600);
}

#[test]
fn markers_come_from_the_requested_collection() {
    let root = tempdir().expect("tempdir");
    officedir()
        .args(["data", "seed", "--root"])
        .arg(root.path())
        .assert()
        .success();

    officedir()
        .args(["markers", "--source", "companies", "--root"])
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Prairie Analytics Ltd."))
        .stdout(predicate::str::contains("companies: 3 markers"));

    officedir()
        .args(["markers", "--source", "unknown", "--root"])
        .arg(root.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown marker source"));
}
