use pagesafe::geometry::limits;
use pagesafe::{PageOrder, Story, StoryError};
use serde_json::json;

fn doc_with_elements(elements: serde_json::Value) -> serde_json::Value {
    json!({"version": 1, "pages": [ {"id": "p1", "elements": elements} ]})
}

#[test]
fn loads_minimal_document_with_defaults() {
    let v = json!({
        "pages": [
            {"id": "p1", "elements": [
                {"id": "e1", "y": 600.0, "width": 100.0, "height": 100.0, "link": {"url": "https://example.com"}}
            ]},
            {"id": "p2"}
        ],
        "current": 9
    });
    let s = Story::from_json_value(v).expect("document loads");
    assert_eq!(s.page_ids(), vec!["p1", "p2"]);
    assert_eq!(s.current_page_index(), 1, "current clamps to last page");
    assert_eq!(s.geometry(), pagesafe::PageGeometry::default());
    let issues = s.link_zone_issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].element_id, "e1");
}

#[test]
fn camel_case_fields_and_missing_url() {
    let s = Story::from_json_str(r#"{
        "geometry": {"pageWidth": 1000, "pageHeight": 1000, "fullbleedRatio": 1},
        "pages": [{"id": "p", "elements": [
            {"id": "a", "x": 5, "y": 790, "width": 10, "height": 10, "rotationAngle": 0, "link": {}},
            {"id": "b", "y": 790, "width": 10, "height": 10, "rotationAngle": 360, "link": {"url": "x"}}
        ]}]
    }"#).unwrap();
    let issues = s.link_zone_issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].element_id, "b");
    assert_eq!(issues[0].limit, 800.0);
}

#[test]
fn written_document_reloads() {
    let mut s = Story::default();
    s.add_page("p1").unwrap();
    s.add_page("p2").unwrap();
    s.set_current_page("p2").unwrap();
    let text = s.to_json_string();
    let back = Story::from_json_str(&text).unwrap();
    assert_eq!(back.page_ids(), s.page_ids());
    assert_eq!(back.current_page_index(), 1);
    let v = s.to_json_value();
    assert_eq!(v["version"], json!(1));
    assert_eq!(v["geometry"]["fullbleedRatio"], json!(0.5625));
}

#[test]
fn rejects_unsupported_version() {
    let err = Story::from_json_value(json!({"version": 2, "pages": []})).unwrap_err();
    assert!(matches!(err, StoryError::UnsupportedVersion(2)));
}

#[test]
fn rejects_out_of_bounds_numbers() {
    let v = doc_with_elements(json!([{"id": "e", "y": 1.0e8, "width": 1.0, "height": 1.0}]));
    assert_eq!(Story::from_json_value(v).unwrap_err().code(), "invalid_element");
    let v = doc_with_elements(json!([{"id": "e", "y": 0.0, "width": -3.0, "height": 1.0}]));
    assert!(Story::from_json_value(v).is_err());
    let v = json!({"geometry": {"pageWidth": 412, "pageHeight": 732, "fullbleedRatio": 0}, "pages": []});
    assert_eq!(Story::from_json_value(v).unwrap_err().code(), "invalid_geometry");
}

#[test]
fn rejects_duplicates_and_oversized_documents() {
    let v = json!({"pages": [{"id": "a"}, {"id": "a"}]});
    assert!(matches!(Story::from_json_value(v), Err(StoryError::DuplicatePage(_))));
    let v = doc_with_elements(json!([
        {"id": "e", "y": 0.0, "width": 1.0, "height": 1.0},
        {"id": "e", "y": 5.0, "width": 1.0, "height": 1.0}
    ]));
    assert!(matches!(Story::from_json_value(v), Err(StoryError::DuplicateElement { .. })));

    let pages: Vec<_> = (0..=limits::MAX_PAGES).map(|i| json!({"id": format!("p{}", i)})).collect();
    let err = Story::from_json_value(json!({"pages": pages})).unwrap_err();
    assert_eq!(err.code(), "limit_exceeded");

    let long_url = "h".repeat(limits::MAX_URL_LEN + 1);
    let v = doc_with_elements(json!([{"id": "e", "y": 0.0, "width": 1.0, "height": 1.0, "link": {"url": long_url}}]));
    assert!(Story::from_json_value(v).is_err());
}

#[test]
fn malformed_json_maps_to_invalid_json() {
    let err = Story::from_json_str("{ not json").unwrap_err();
    assert_eq!(err.code(), "invalid_json");
    let err = Story::from_json_value(json!({"pages": [{"elements": []}]})).unwrap_err();
    assert_eq!(err.code(), "invalid_json", "page id is required");
}

#[test]
fn elements_without_id_are_rejected_as_invalid() {
    let one = doc_with_elements(json!([{"y": 0.0, "width": 1.0, "height": 1.0}]));
    let err = Story::from_json_value(one).unwrap_err();
    assert!(matches!(err, StoryError::InvalidElement { reason: "id required", .. }));

    let two = r#"{"pages":[{"id":"p","elements":[{"y":0,"width":1,"height":1},{"y":5,"width":1,"height":1}]}]}"#;
    let err = Story::from_json_str(two).unwrap_err();
    assert_eq!(err.code(), "invalid_element", "missing ids are not duplicates");

    let blank = doc_with_elements(json!([{"id": "", "y": 0.0, "width": 1.0, "height": 1.0}]));
    assert_eq!(Story::from_json_value(blank).unwrap_err().code(), "invalid_element");
}
