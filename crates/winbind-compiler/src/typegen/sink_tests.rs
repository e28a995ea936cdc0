use std::fs;

use super::*;

fn files() -> Vec<SourceFile> {
    vec![
        SourceFile::new("POINT.go", "package PInvoke\n"),
        SourceFile::new("PInvoke.go", "package PInvoke\n\nfunc Beep() {}\n"),
    ]
}

#[test]
fn directory_sink_creates_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("out").join("pinvoke");
    let mut sink = DirectorySink::new(&root);

    sink.write_all(&files()).unwrap();

    assert_eq!(
        fs::read_to_string(root.join("POINT.go")).unwrap(),
        "package PInvoke\n"
    );
    assert!(
        fs::read_to_string(root.join("PInvoke.go"))
            .unwrap()
            .contains("func Beep")
    );
}

#[test]
fn directory_sink_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("POINT.go"), "stale").unwrap();
    let mut sink = DirectorySink::new(dir.path());

    sink.write_file(&files()[0]).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("POINT.go")).unwrap(),
        "package PInvoke\n"
    );
}

#[test]
fn directory_sink_reports_path_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let mut sink = DirectorySink::new(blocker.join("nested"));

    let err = sink.write_file(&files()[0]).unwrap_err();

    assert!(matches!(err, EmitError::Write { ref path, .. } if path.starts_with(&blocker)));
}

#[test]
fn memory_sink_keeps_order() {
    let mut sink = MemorySink::new();

    sink.write_all(&files()).unwrap();

    let paths: Vec<_> = sink
        .files()
        .iter()
        .map(|file| file.path.to_string_lossy().into_owned())
        .collect();
    assert_eq!(paths, ["POINT.go", "PInvoke.go"]);
    assert_eq!(sink.get("POINT.go"), Some("package PInvoke\n"));
    assert_eq!(sink.get("RECT.go"), None);
}
