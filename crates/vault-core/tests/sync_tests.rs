use pretty_assertions::assert_eq;
use vault_core::store::{ChildEntry, VaultStore};
use vault_core::{
    CheckStatus, Error, IndexConfig, IndexSyncer, MemoryVaultStore, SyncOptions,
};
use vault_fs::NormalizedPath;

fn config(output_root: &str, skip: &[&str]) -> IndexConfig {
    IndexConfig {
        skip_rules: skip.iter().map(|s| s.to_string()).collect(),
        output_root_name: output_root.to_string(),
        ..IndexConfig::default()
    }
}

/// The `root/A/{x.md, y.md, B/{z.md}}` tree used throughout.
fn sample_store() -> MemoryVaultStore {
    MemoryVaultStore::new()
        .with_folder("/A")
        .with_document("/A/x.md", "")
        .with_document("/A/y.md", "")
        .with_folder("/A/B")
        .with_document("/A/B/z.md", "")
}

#[test]
fn test_sync_generates_mirrored_tree() {
    let store = sample_store();
    let config = config("OUT", &[]);
    let syncer = IndexSyncer::new(&store, &config, store.root());

    let report = syncer.sync(&NormalizedPath::new("/A")).unwrap();
    assert!(report.success);

    assert_eq!(
        store.document("/OUT/A/A.md").unwrap(),
        "# Summary\n\n\n## Folders\n- [[B]]\n\n## Notes\n- [[x]]\n- [[y]]\n"
    );
    assert_eq!(
        store.document("/OUT/A/B/B.md").unwrap(),
        "# Summary\n\n\n## Folders\n\n\n## Notes\n- [[z]]\n"
    );
}

#[test]
fn test_sync_is_idempotent() {
    let store = sample_store();
    let config = config("OUT", &[]);
    let syncer = IndexSyncer::new(&store, &config, store.root());

    syncer.sync(&NormalizedPath::new("/A")).unwrap();
    let first = store.document("/OUT/A/A.md").unwrap();

    let second_run = syncer.sync(&NormalizedPath::new("/A")).unwrap();
    assert!(second_run.success);
    assert_eq!(second_run.written(), 0);
    assert_eq!(store.document("/OUT/A/A.md").unwrap(), first);
}

#[test]
fn test_skip_rule_erases_subtree_from_output() {
    let store = sample_store();
    let config = config("OUT", &["B"]);
    let syncer = IndexSyncer::new(&store, &config, store.root());

    syncer.sync(&NormalizedPath::new("/A")).unwrap();

    assert_eq!(
        store.document("/OUT/A/A.md").unwrap(),
        "# Summary\n\n\n## Folders\n\n\n## Notes\n- [[x]]\n- [[y]]\n"
    );
    // No trace of the skipped name anywhere in the mirrored tree
    assert!(
        store
            .paths()
            .iter()
            .filter(|p| p.starts_with("/OUT"))
            .all(|p| !p.contains('B'))
    );
}

#[test]
fn test_user_prose_survives_tree_changes() {
    let store = sample_store();
    let config = config("OUT", &[]);
    let syncer = IndexSyncer::new(&store, &config, store.root());
    syncer.sync(&NormalizedPath::new("/A")).unwrap();

    // The user writes into the summary region of the generated document
    let edited = store
        .document("/OUT/A/A.md")
        .unwrap()
        .replace("# Summary\n", "# Summary\nAlgebra is the study of symbols.\n");
    store
        .write_document(&NormalizedPath::new("/OUT/A/A.md"), &edited)
        .unwrap();

    // The tree changes shape and the index is regenerated
    let store = store.with_document("/A/w.md", "");
    let syncer = IndexSyncer::new(&store, &config, store.root());
    syncer.sync(&NormalizedPath::new("/A")).unwrap();

    assert_eq!(
        store.document("/OUT/A/A.md").unwrap(),
        "# Summary\nAlgebra is the study of symbols.\n\n## Folders\n- [[B]]\n\n## Notes\n- [[x]]\n- [[y]]\n- [[w]]\n"
    );
}

#[test]
fn test_nested_start_folder_writes_nothing() {
    let store = sample_store();
    let config = config("OUT", &[]);
    let syncer = IndexSyncer::new(&store, &config, store.root());

    let before = store.paths();
    let err = syncer.sync(&NormalizedPath::new("/A/B")).unwrap_err();
    assert!(matches!(err, Error::IneligibleRoot { .. }));
    assert_eq!(store.paths(), before);
}

#[test]
fn test_output_root_cannot_index_itself() {
    let store = sample_store().with_folder("/OUT");
    let config = config("OUT", &[]);
    let syncer = IndexSyncer::new(&store, &config, store.root());

    let err = syncer.sync(&NormalizedPath::new("/OUT")).unwrap_err();
    assert!(matches!(err, Error::IneligibleRoot { .. }));
}

#[test]
fn test_dry_run_touches_nothing() {
    let store = sample_store();
    let config = config("OUT", &[]);
    let syncer = IndexSyncer::new(&store, &config, store.root());

    let report = syncer
        .sync_with_options(&NormalizedPath::new("/A"), SyncOptions { dry_run: true })
        .unwrap();

    assert!(report.success);
    assert!(report.actions.iter().all(|a| a.starts_with("[dry-run]")));
    assert!(store.paths().iter().all(|p| !p.starts_with("/OUT")));
}

#[test]
fn test_check_reports_missing_then_healthy_then_stale() {
    let store = sample_store();
    let config = config("OUT", &[]);
    let syncer = IndexSyncer::new(&store, &config, store.root());
    let start = NormalizedPath::new("/A");

    let report = syncer.check(&start).unwrap();
    assert_eq!(report.status, CheckStatus::Missing);
    assert_eq!(report.missing.len(), 2);

    syncer.sync(&start).unwrap();
    let report = syncer.check(&start).unwrap();
    assert_eq!(report.status, CheckStatus::Healthy);

    let store = store.with_document("/A/new.md", "");
    let syncer = IndexSyncer::new(&store, &config, store.root());
    let report = syncer.check(&start).unwrap();
    assert_eq!(report.status, CheckStatus::Stale);
    assert_eq!(report.stale.len(), 1);
    assert_eq!(report.stale[0].document, "/OUT/A/A.md");
}

/// Store wrapper that fails document creation at one path.
struct FailOn<'a> {
    inner: &'a MemoryVaultStore,
    path: &'a str,
}

impl FailOn<'_> {
    fn denied(&self) -> vault_core::Error {
        vault_fs::Error::io(
            self.path,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
        .into()
    }
}

impl VaultStore for FailOn<'_> {
    fn list_children(&self, folder: &NormalizedPath) -> vault_core::Result<Vec<ChildEntry>> {
        self.inner.list_children(folder)
    }
    fn folder_exists(&self, path: &NormalizedPath) -> bool {
        self.inner.folder_exists(path)
    }
    fn create_folder(&self, path: &NormalizedPath) -> vault_core::Result<()> {
        self.inner.create_folder(path)
    }
    fn document_exists(&self, path: &NormalizedPath) -> bool {
        self.inner.document_exists(path)
    }
    fn read_document(&self, path: &NormalizedPath) -> vault_core::Result<String> {
        self.inner.read_document(path)
    }
    fn create_document(&self, path: &NormalizedPath, text: &str) -> vault_core::Result<()> {
        if path.as_str() == self.path {
            return Err(self.denied());
        }
        self.inner.create_document(path, text)
    }
    fn write_document(&self, path: &NormalizedPath, text: &str) -> vault_core::Result<()> {
        self.inner.write_document(path, text)
    }
}

#[test]
fn test_failed_node_is_reported_and_siblings_continue() {
    let inner = MemoryVaultStore::new()
        .with_folder("/A")
        .with_folder("/A/B")
        .with_document("/A/B/b.md", "")
        .with_folder("/A/C")
        .with_document("/A/C/c.md", "");
    let store = FailOn {
        inner: &inner,
        path: "/OUT/A/B/B.md",
    };
    let config = config("OUT", &[]);
    let syncer = IndexSyncer::new(&store, &config, NormalizedPath::new("/"));

    let report = syncer.sync(&NormalizedPath::new("/A")).unwrap();

    assert!(!report.success);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("/OUT/A/B"));
    // The sibling subtree was still indexed
    assert!(inner.document("/OUT/A/C/C.md").is_some());
}
