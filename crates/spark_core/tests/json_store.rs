use chrono::NaiveDate;
use spark_core::{Creator, CreatorStore, JsonFileStore, StoreError};
use std::fs;
use tempfile::TempDir;

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("test dates are ISO")
}

fn today() -> NaiveDate {
    date("2026-02-15")
}

#[test]
fn load_missing_file_writes_seed_dataset() {
    let temp_dir = TempDir::new().expect("temp dir should be created");
    let path = temp_dir.path().join("creators.json");
    let store = JsonFileStore::new(&path);

    let creators = store.load(today()).expect("load should succeed");

    assert!(path.exists());
    let handles: Vec<&str> = creators.iter().map(|c| c.handle.as_str()).collect();
    assert_eq!(
        handles,
        vec!["@fjordsketch", "@auroraaudio", "@northernknots"]
    );
    assert_eq!(creators[1].heat, 0.92);
    assert_eq!(creators[1].last_boosted, date("2026-01-29"));
    assert_eq!(creators[2].platform, "X");
}

#[test]
fn seed_is_only_written_once() {
    let temp_dir = TempDir::new().expect("temp dir should be created");
    let path = temp_dir.path().join("creators.json");
    fs::write(&path, "[]").expect("fixture should be written");

    let store = JsonFileStore::new(&path);
    assert!(store.load(today()).expect("load should succeed").is_empty());
    assert_eq!(fs::read_to_string(&path).expect("file should be readable"), "[]");
}

#[test]
fn save_then_load_round_trips_with_heat_rounded() {
    let temp_dir = TempDir::new().expect("temp dir should be created");
    let store = JsonFileStore::new(temp_dir.path().join("creators.json"));
    let original = vec![
        Creator {
            handle: "@kilnlight".to_string(),
            platform: "TikTok".to_string(),
            category: "ceramics".to_string(),
            note: "Glaze tests every Friday.".to_string(),
            heat: 0.6666,
            last_seen: date("2026-02-10"),
            last_boosted: date("2026-02-03"),
        },
        Creator {
            handle: "@Tidepool".to_string(),
            platform: "YouTube".to_string(),
            category: String::new(),
            note: String::new(),
            heat: 1.25,
            last_seen: date("2026-02-14"),
            last_boosted: date("2026-02-14"),
        },
    ];

    store.save(&original).expect("save should succeed");
    let loaded = store.load(today()).expect("load should succeed");

    assert_eq!(loaded.len(), original.len());
    for (before, after) in original.iter().zip(&loaded) {
        assert_eq!(after.handle, before.handle);
        assert_eq!(after.platform, before.platform);
        assert_eq!(after.category, before.category);
        assert_eq!(after.note, before.note);
        assert_eq!(after.last_seen, before.last_seen);
        assert_eq!(after.last_boosted, before.last_boosted);
        assert!((after.heat - before.heat).abs() <= 0.005);
    }
    assert_eq!(loaded[0].heat, 0.67);
}

#[test]
fn saved_file_uses_expected_wire_fields() {
    let temp_dir = TempDir::new().expect("temp dir should be created");
    let path = temp_dir.path().join("creators.json");
    let store = JsonFileStore::new(&path);
    store
        .save(&[Creator {
            handle: "@kilnlight".to_string(),
            platform: "TikTok".to_string(),
            category: "ceramics".to_string(),
            note: "Glaze tests.".to_string(),
            heat: 0.876,
            last_seen: date("2026-02-10"),
            last_boosted: date("2026-02-03"),
        }])
        .expect("save should succeed");

    let raw = fs::read_to_string(&path).expect("file should be readable");
    assert!(raw.starts_with("[\n  {\n    \"handle\""));
    let json: serde_json::Value = serde_json::from_str(&raw).expect("fixture should be valid JSON");
    assert_eq!(json[0]["handle"], "@kilnlight");
    assert_eq!(json[0]["heat"], 0.88);
    assert_eq!(json[0]["last_seen"], "2026-02-10");
    assert_eq!(json[0]["last_boosted"], "2026-02-03");
}

#[test]
fn malformed_date_fails_load() {
    let temp_dir = TempDir::new().expect("temp dir should be created");
    let path = temp_dir.path().join("creators.json");
    fs::write(
        &path,
        r#"[{"handle": "@a", "platform": "X", "last_seen": "2026-13-40"}]"#,
    )
    .expect("fixture should be written");

    let err = JsonFileStore::new(&path).load(today()).expect_err("load should fail");
    assert!(matches!(
        err,
        StoreError::InvalidDate {
            index: 0,
            field: "last_seen",
            ..
        }
    ));
}

#[test]
fn malformed_json_fails_load() {
    let temp_dir = TempDir::new().expect("temp dir should be created");
    let path = temp_dir.path().join("creators.json");
    fs::write(&path, r#"{"handle": "@a"}"#).expect("fixture should be written");

    let err = JsonFileStore::new(&path).load(today()).expect_err("load should fail");
    assert!(matches!(err, StoreError::Json { .. }));
    assert!(err.to_string().contains("creators.json"));
}
