//! Integration tests: manifest persistence through the public API.

use keycast_core::{manifest, Artifact, LogicalKey, Manifest};
use tempfile::TempDir;

#[test]
fn full_manifest_survives_save_and_load() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("keycast.yaml");

    let original = Manifest {
        version: 1,
        repo_dir: "configs".into(),
        branch: "release".to_owned(),
        redis_url: "redis://cache.internal:6380/2".to_owned(),
        artifacts: vec![
            Artifact {
                key: LogicalKey::from("svc:settings:yaml"),
                pattern: "settings/*.yaml".to_owned(),
            },
            Artifact {
                key: LogicalKey::from("svc:rules:txt"),
                pattern: "rules/*.txt".to_owned(),
            },
        ],
    };

    manifest::save(&path, &original).expect("save");
    let loaded = manifest::load(&path).expect("load");
    assert_eq!(loaded, original);
}

#[test]
fn hand_written_manifest_parses() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("keycast.yaml");
    std::fs::write(
        &path,
        "version: 1\n\
         repo_dir: .\n\
         branch: main\n\
         redis_url: redis://127.0.0.1/\n\
         artifacts:\n\
         - key: app:config:yaml\n\
         \x20 pattern: 'config/*.yaml'\n",
    )
    .expect("write");

    let loaded = manifest::load(&path).expect("load");
    assert_eq!(loaded.artifacts[0].key, LogicalKey::from("app:config:yaml"));
    assert_eq!(loaded.artifacts[0].pattern, "config/*.yaml");
}
