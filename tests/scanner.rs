use pyclassgram::core::scanner::FileScanner;
use std::fs;
use std::path::Path;

fn touch<P: AsRef<Path>>(p: P) {
    fs::write(p, "# test").unwrap();
}

#[test]
fn scanner_keeps_python_files_sorted() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("b")).unwrap();
    fs::create_dir_all(root.join("a/nested")).unwrap();

    touch(root.join("b/zoo.py"));
    touch(root.join("a/nested/stubs.pyi"));
    touch(root.join("a/gui.pyw"));
    touch(root.join("a/lib.rs")); // ignored
    touch(root.join("b/readme.txt")); // ignored

    let files = FileScanner::new().scan(root).unwrap();
    let rel: Vec<String> = files
        .iter()
        .map(|f| {
            f.path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();

    assert_eq!(rel, vec!["a/gui.pyw", "a/nested/stubs.pyi", "b/zoo.py"]);
    assert_eq!(files[1].extension, "pyi");
}

#[test]
fn scanner_returns_single_file_as_is() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("script");
    touch(&file);

    let files = FileScanner::new().scan(&file).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, file);
}

#[test]
fn scanner_reports_missing_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = FileScanner::new()
        .scan(&dir.path().join("absent"))
        .unwrap_err();
    assert!(err.to_string().contains("cannot access"));
}
