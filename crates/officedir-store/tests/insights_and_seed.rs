// SPDX-License-Identifier: Apache-2.0

use officedir_store::{seed_data_root, DirectoryStore};
use std::fs;
use tempfile::tempdir;

#[test]
fn insights_list_newest_first() {
    let root = tempdir().expect("tempdir");
    let dir = root.path().join("insights");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(
        dir.join("older.md"),
        "---\ntitle: \"Older\"\ndate: \"2023-01-01\"\n---\nOld body.\n",
    )
    .expect("write older");
    fs::write(
        dir.join("newer.md"),
        "---\ntitle: \"Newer\"\ndate: \"2024-01-01\"\n---\nNew body.\n",
    )
    .expect("write newer");
    fs::write(dir.join("notes.txt"), "not an insight").expect("write stray file");

    let store = DirectoryStore::new(root.path());
    let library = store.insights();

    assert_eq!(library.slugs(), vec!["newer".to_string(), "older".to_string()]);
    let all = library.all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "Newer");
    assert_eq!(all[1].title, "Older");
}

#[test]
fn insight_load_misses_return_none() {
    let root = tempdir().expect("tempdir");
    let store = DirectoryStore::new(root.path());
    assert!(store.insights().load("nope").is_none());
    assert!(store.insights().slugs().is_empty());
}

#[test]
fn seed_writes_fixtures_once_and_respects_existing_files() {
    let root = tempdir().expect("tempdir");

    let first = seed_data_root(root.path(), false).expect("seed");
    assert!(first.written.contains(&"buildings.json".to_string()));
    assert!(first.skipped.is_empty());

    let store = DirectoryStore::new(root.path());
    assert!(!store.buildings().is_empty());
    assert!(!store.submarkets().is_empty());
    assert!(!store.references().is_empty());
    assert!(!store.insights().all().is_empty());

    // Second run without force skips everything.
    let second = seed_data_root(root.path(), false).expect("reseed");
    assert!(second.written.is_empty());
    assert_eq!(second.skipped.len(), first.written.len());

    // A locally edited file survives a non-forced reseed.
    fs::write(root.path().join("buildings.json"), "[]").expect("blank out");
    let third = seed_data_root(root.path(), false).expect("reseed");
    assert!(third.written.is_empty());
    assert!(store.buildings().is_empty());

    // Force restores the fixture.
    let forced = seed_data_root(root.path(), true).expect("forced seed");
    assert!(forced.written.contains(&"buildings.json".to_string()));
    assert!(!store.buildings().is_empty());
}

#[test]
fn seeded_submarkets_group_seeded_buildings() {
    let root = tempdir().expect("tempdir");
    seed_data_root(root.path(), false).expect("seed");
    let store = DirectoryStore::new(root.path());

    let core = store.submarket("downtown-core").expect("downtown core");
    let grouped = store.buildings_in_submarket(&core);
    assert!(!grouped.is_empty());
    assert!(grouped
        .iter()
        .all(|b| b.submarket.as_deref() == Some("Downtown Core")));

    // Kensington has coworking but no building filter.
    let kensington = store.submarket("kensington").expect("kensington");
    assert!(store.buildings_in_submarket(&kensington).is_empty());
    assert!(!store.coworking_in_submarket(&kensington).is_empty());
}
