use crate::sources::guardian::guardian_dtos::GuardianSearchDto;

#[test]
fn guardian_search_dto_accepts_nullable_and_missing_fields() {
    let json = r#"
    {
      "response": {
        "status": "ok",
        "total": 2,
        "results": [
          {
            "webTitle": "Startup raises new round",
            "webUrl": "https://example.com/story",
            "webPublicationDate": "2026-02-21T08:00:00Z",
            "sectionName": null,
            "fields": {
              "headline": null,
              "trailText": "Details inside",
              "byline": "A. Reporter"
            }
          },
          {
            "webTitle": "Bare item",
            "webUrl": "https://example.com/bare"
          }
        ]
      }
    }
    "#;

    let parsed = serde_json::from_str::<GuardianSearchDto>(json).expect("valid search JSON");
    assert_eq!(parsed.response.status, "ok");
    assert_eq!(parsed.response.results.len(), 2);

    let first = &parsed.response.results[0];
    assert_eq!(first.section_name, "");
    assert_eq!(first.fields.as_ref().unwrap().headline, "");
    assert_eq!(first.fields.as_ref().unwrap().trail_text, "Details inside");

    let second = &parsed.response.results[1];
    assert!(second.fields.is_none());
    assert_eq!(second.web_publication_date, "");
}

#[test]
fn guardian_search_dto_accepts_empty_result_lists() {
    let json = r#"{ "response": { "status": "ok", "total": 0, "results": [] } }"#;
    let parsed = serde_json::from_str::<GuardianSearchDto>(json).expect("valid empty JSON");
    assert!(parsed.response.results.is_empty());
}
