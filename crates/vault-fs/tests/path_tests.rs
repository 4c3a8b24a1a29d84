use vault_fs::NormalizedPath;

#[test]
fn test_forward_slashes_kept() {
    let path = NormalizedPath::new("notes/math/algebra");
    assert_eq!(path.as_str(), "notes/math/algebra");
}

#[test]
fn test_backslashes_normalized() {
    let path = NormalizedPath::new("notes\\math\\algebra");
    assert_eq!(path.as_str(), "notes/math/algebra");
}

#[test]
fn test_join_segment() {
    let base = NormalizedPath::new("_index/math");
    assert_eq!(base.join("algebra").as_str(), "_index/math/algebra");
}

#[test]
fn test_join_onto_empty_root() {
    let base = NormalizedPath::new("");
    assert_eq!(base.join("_index").as_str(), "_index");
}

#[test]
fn test_join_trailing_slash() {
    let base = NormalizedPath::new("notes/");
    assert_eq!(base.join("math").as_str(), "notes/math");
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("notes/math/algebra");
    assert_eq!(path.parent().unwrap().as_str(), "notes/math");
}

#[test]
fn test_parent_of_top_segment() {
    let path = NormalizedPath::new("notes");
    assert!(path.parent().is_none());
}

#[test]
fn test_parent_of_absolute_child() {
    let path = NormalizedPath::new("/notes");
    assert_eq!(path.parent().unwrap().as_str(), "/");
}

#[test]
fn test_file_name() {
    let path = NormalizedPath::new("notes/math/algebra.md");
    assert_eq!(path.file_name(), Some("algebra.md"));
}

#[test]
fn test_file_stem_strips_extension() {
    let path = NormalizedPath::new("notes/math/algebra.md");
    assert_eq!(path.file_stem(), Some("algebra"));
}

#[test]
fn test_file_stem_dotfile_kept_whole() {
    let path = NormalizedPath::new("notes/.hidden");
    assert_eq!(path.file_stem(), Some(".hidden"));
}

#[test]
fn test_extension() {
    let path = NormalizedPath::new("notes/algebra.md");
    assert_eq!(path.extension(), Some("md"));
}

#[test]
fn test_extension_none_for_folder_like_name() {
    let path = NormalizedPath::new("notes/algebra");
    assert_eq!(path.extension(), None);
}

#[test]
fn test_exists_false_for_missing() {
    let path = NormalizedPath::new("/nonexistent/vault/entry");
    assert!(!path.exists());
}

#[test]
fn test_display_matches_as_str() {
    let path = NormalizedPath::new("notes\\math");
    assert_eq!(format!("{}", path), "notes/math");
}
