use shothub_client::storage::archive::{extract_zip_bytes, extract_zip_file};
use shothub_client::storage::utils::{create_fresh_dir, write_text_file};
use std::io::Write;
use zip::write::FileOptions;

fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, contents) in entries {
        writer.start_file(*name, FileOptions::default()).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[test]
fn test_extract_zip_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = build_zip(&[
        ("A001C003.cdl", "<ColorDecisionList/>"),
        ("day2/B002C001.cdl", "<ColorDecisionList/>"),
    ]);

    let extracted = extract_zip_bytes(&bytes, dir.path()).unwrap();
    assert_eq!(extracted.len(), 2);
    assert!(dir.path().join("A001C003.cdl").is_file());
    assert!(dir.path().join("day2").join("B002C001.cdl").is_file());
}

#[test]
fn test_extract_zip_skips_escaping_entries() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("dest");
    let bytes = build_zip(&[("../evil.cdl", "x"), ("ok.cdl", "y")]);

    let extracted = extract_zip_bytes(&bytes, &dest).unwrap();
    assert_eq!(extracted, vec![dest.join("ok.cdl")]);
    assert!(!dir.path().join("evil.cdl").exists());
}

#[test]
fn test_extract_zip_file() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("grades.zip");
    std::fs::write(&archive, build_zip(&[("clip.cdl", "cdl")])).unwrap();

    let out = dir.path().join("out");
    extract_zip_file(&archive, &out).unwrap();
    assert_eq!(std::fs::read_to_string(out.join("clip.cdl")).unwrap(), "cdl");
}

#[test]
fn test_extract_invalid_archive() {
    let dir = tempfile::tempdir().unwrap();
    assert!(extract_zip_bytes(b"definitely not a zip", dir.path()).is_err());
}

#[test]
fn test_create_fresh_dir_refuses_existing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("export").join("folder");

    create_fresh_dir(&target).unwrap();
    assert!(target.is_dir());
    assert!(create_fresh_dir(&target).is_err());
}

#[test]
fn test_write_text_file_sanitizes_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_text_file(dir.path(), "A/001_id1.csv", "t;v\r\n").unwrap();
    assert_eq!(path, dir.path().join("A_001_id1.csv"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), "t;v\r\n");
}
