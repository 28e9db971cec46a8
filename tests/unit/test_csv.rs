use serde_json::{Value, json};
use shothub_client::model::responses::Asset;
use shothub_client::storage::csv::{write_csv, write_csv_file};

fn asset(value: Value) -> Asset {
    value.as_object().cloned().unwrap()
}

fn render(records: &[Asset], columns: &[&str]) -> String {
    let mut out = Vec::new();
    write_csv(&mut out, records, columns).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_one_line_per_record() {
    let records = vec![
        asset(json!({"id": "a1", "name": "A001C001", "durationInSecs": 12.5})),
        asset(json!({"id": "a2", "name": "A001C002", "durationInSecs": null})),
        asset(json!({"id": "a3"})),
    ];
    let columns = ["id", "name", "durationInSecs"];
    let output = render(&records, &columns);

    let lines: Vec<&str> = output.split_terminator("\r\n").collect();
    assert_eq!(lines.len(), 1 + records.len());
    assert_eq!(lines[0], r#""id";"name";"durationInSecs""#);
    assert_eq!(lines[1], r#""a1";"A001C001";"12.5""#);
    assert_eq!(lines[2], r#""a2";"A001C002";"""#);
    assert_eq!(lines[3], r#""a3";"";"""#);
    assert!(output.ends_with("\r\n"));
    assert!(!output.replace("\r\n", "").contains('\n'));
}

#[test]
fn test_booleans_and_numbers() {
    let records = vec![asset(json!({"tcDropFlag": false, "take": 3}))];
    assert_eq!(
        render(&records, &["tcDropFlag", "take"]),
        "\"tcDropFlag\";\"take\"\r\n\"false\";\"3\"\r\n"
    );
}

#[test]
fn test_write_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let records = vec![asset(json!({"id": "a1"}))];

    let written = write_csv_file(&path, &records, &["id", "name"]).unwrap();
    assert_eq!(written, 1);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "\"id\";\"name\"\r\n\"a1\";\"\"\r\n"
    );
}
