use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use vault_core::{FsVaultStore, IndexConfig, IndexSyncer};
use vault_fs::NormalizedPath;

fn config(output_root: &str) -> IndexConfig {
    IndexConfig {
        skip_rules: Vec::new(),
        output_root_name: output_root.to_string(),
        ..IndexConfig::default()
    }
}

/// Build `vault/A/{x.md, y.md, B/{z.md}}` on disk.
fn sample_vault() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("A/B")).unwrap();
    fs::write(dir.path().join("A/x.md"), "").unwrap();
    fs::write(dir.path().join("A/y.md"), "").unwrap();
    fs::write(dir.path().join("A/B/z.md"), "").unwrap();
    dir
}

#[test]
fn test_sync_on_disk() {
    let vault = sample_vault();
    let store = FsVaultStore::new();
    let config = config("OUT");
    let root = NormalizedPath::new(vault.path());
    let syncer = IndexSyncer::new(&store, &config, root.clone());

    let report = syncer.sync(&root.join("A")).unwrap();
    assert!(report.success);

    assert_eq!(
        fs::read_to_string(vault.path().join("OUT/A/A.md")).unwrap(),
        "# Summary\n\n\n## Folders\n- [[B]]\n\n## Notes\n- [[x]]\n- [[y]]\n"
    );
    assert_eq!(
        fs::read_to_string(vault.path().join("OUT/A/B/B.md")).unwrap(),
        "# Summary\n\n\n## Folders\n\n\n## Notes\n- [[z]]\n"
    );
}

#[test]
fn test_listing_is_sorted_by_name() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("A")).unwrap();
    // Created out of order on purpose
    fs::write(dir.path().join("A/c.md"), "").unwrap();
    fs::write(dir.path().join("A/a.md"), "").unwrap();
    fs::write(dir.path().join("A/b.md"), "").unwrap();

    let store = FsVaultStore::new();
    let config = config("OUT");
    let root = NormalizedPath::new(dir.path());
    let syncer = IndexSyncer::new(&store, &config, root.clone());
    syncer.sync(&root.join("A")).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("OUT/A/A.md")).unwrap(),
        "# Summary\n\n\n## Folders\n\n\n## Notes\n- [[a]]\n- [[b]]\n- [[c]]\n"
    );
}

#[test]
fn test_second_run_is_byte_identical_on_disk() {
    let vault = sample_vault();
    let store = FsVaultStore::new();
    let config = config("OUT");
    let root = NormalizedPath::new(vault.path());
    let syncer = IndexSyncer::new(&store, &config, root.clone());

    syncer.sync(&root.join("A")).unwrap();
    let first = fs::read(vault.path().join("OUT/A/A.md")).unwrap();

    let report = syncer.sync(&root.join("A")).unwrap();
    assert_eq!(report.written(), 0);
    assert_eq!(fs::read(vault.path().join("OUT/A/A.md")).unwrap(), first);
}

#[test]
fn test_preserved_prose_on_disk() {
    let vault = sample_vault();
    let store = FsVaultStore::new();
    let config = config("OUT");
    let root = NormalizedPath::new(vault.path());
    let syncer = IndexSyncer::new(&store, &config, root.clone());
    syncer.sync(&root.join("A")).unwrap();

    let index_path = vault.path().join("OUT/A/A.md");
    let edited = fs::read_to_string(&index_path)
        .unwrap()
        .replace("# Summary\n", "# Summary\nHand-written overview.\n");
    fs::write(&index_path, edited).unwrap();

    syncer.sync(&root.join("A")).unwrap();
    let content = fs::read_to_string(&index_path).unwrap();
    assert!(content.starts_with("# Summary\nHand-written overview.\n"));
    assert!(content.contains("- [[x]]\n- [[y]]\n"));
}

#[test]
fn test_mirrored_folders_do_not_touch_source_tree() {
    let vault = sample_vault();
    let store = FsVaultStore::new();
    let config = config("OUT");
    let root = NormalizedPath::new(vault.path());
    let syncer = IndexSyncer::new(&store, &config, root.clone());
    syncer.sync(&root.join("A")).unwrap();

    // The source folder still holds exactly its original children
    let mut names: Vec<_> = fs::read_dir(vault.path().join("A"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["B", "x.md", "y.md"]);
}
