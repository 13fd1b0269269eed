use rule_engine::apply_rescale;
use shared::models::{FieldValue, Record};

fn record(json: &str) -> Record {
    serde_json::from_str(json).unwrap()
}

#[test]
fn case_row_from_finet_form_01_is_rescaled() {
    let mut row = record(r#"{"数量単位":"CS","入数":"10","仕切":"100","本部長":"200"}"#);
    apply_rescale(&mut row, Some("01"), Some("finet"));
    assert_eq!(row.get("仕切"), Some(&FieldValue::Float(1000.0)));
    assert_eq!(row.get("本部長"), Some(&FieldValue::Float(2000.0)));
    assert_eq!(row.get("入数"), Some(&FieldValue::Text("10".into())));
    assert_eq!(row.get("数量単位"), Some(&FieldValue::Text("CS".into())));
}

#[test]
fn other_upload_channel_leaves_row_unchanged() {
    let mut row = record(r#"{"数量単位":"CS","入数":"10","仕切":"100","本部長":"200"}"#);
    let before = row.clone();
    apply_rescale(&mut row, Some("01"), Some("mail"));
    assert_eq!(row, before);
}

#[test]
fn unit_mismatch_leaves_row_unchanged() {
    let mut row = record(r#"{"数量単位":"PC","入数":"10","仕切":"100"}"#);
    let before = row.clone();
    apply_rescale(&mut row, Some("01"), Some("finet"));
    assert_eq!(row, before);
}

#[test]
fn zero_pack_quantity_leaves_row_unchanged() {
    let mut row = record(r#"{"数量単位":"CS","入数":"0","仕切":"100"}"#);
    let before = row.clone();
    apply_rescale(&mut row, Some("01"), Some("finet"));
    assert_eq!(row, before);
}

#[test]
fn unparseable_target_is_skipped_independently() {
    let mut row = record(r#"{"数量単位":"CS","入数":"2","仕切":"abc","本部長":"50"}"#);
    apply_rescale(&mut row, Some("01"), Some("finet"));
    assert_eq!(row.get("仕切"), Some(&FieldValue::Text("abc".into())));
    assert_eq!(row.get("本部長"), Some(&FieldValue::Float(100.0)));
}

#[test]
fn untouched_fields_serialize_back_unchanged() {
    let json = r#"{"JANコード":"4901234567890","備考":null,"入数":24,"数量単位":" CS ","本部長":"1,000","仕切":"abc"}"#;
    let mut row = record(json);
    apply_rescale(&mut row, Some(" 01 "), Some("finet"));

    let out: serde_json::Value = serde_json::to_value(&row).unwrap();
    let original: serde_json::Value = serde_json::from_str(json).unwrap();
    for key in ["JANコード", "備考", "入数", "数量単位", "仕切"] {
        assert_eq!(out[key], original[key], "field {}", key);
    }
    assert_eq!(out["本部長"], serde_json::json!(24000.0));
}

#[test]
fn rows_keep_their_field_order() {
    let skipped = r#"{"品名":"x","入数":"2","数量単位":"PC"}"#;
    let mut row = record(skipped);
    apply_rescale(&mut row, Some("01"), Some("finet"));
    assert_eq!(serde_json::to_string(&row).unwrap(), skipped);

    let mut row = record(r#"{"本部長":"50","品名":"x","仕切":"abc","入数":"2","数量単位":"CS"}"#);
    apply_rescale(&mut row, Some("01"), Some("finet"));
    assert_eq!(
        serde_json::to_string(&row).unwrap(),
        r#"{"本部長":100.0,"品名":"x","仕切":"abc","入数":"2","数量単位":"CS"}"#
    );
}
