use super::error_body_message;
use crate::sources::newsapi::newsapi_dtos::NewsApiResponseDto;

#[test]
fn newsapi_response_dto_accepts_nullable_and_missing_fields() {
    let json = r#"
    {
      "status": "ok",
      "totalResults": 1,
      "articles": [
        {
          "source": { "id": null, "name": "Example Wire" },
          "author": null,
          "title": "Private equity firm closes fund",
          "description": null,
          "url": "https://example.com/fund",
          "publishedAt": "2026-02-20T17:45:00Z"
        }
      ]
    }
    "#;

    let parsed = serde_json::from_str::<NewsApiResponseDto>(json).expect("valid response JSON");
    assert_eq!(parsed.total_results, 1);

    let article = &parsed.articles[0];
    assert_eq!(article.source.id, None);
    assert_eq!(article.source.name, "Example Wire");
    assert_eq!(article.author, "");
    assert_eq!(article.description, "");
}

#[test]
fn error_body_message_reads_the_api_error_envelope() {
    let body = r#"{ "status": "error", "code": "rateLimited", "message": "Too many requests." }"#;
    assert_eq!(
        error_body_message(body).as_deref(),
        Some("Too many requests.")
    );

    assert_eq!(error_body_message("not json"), None);
    assert_eq!(error_body_message(r#"{ "status": "error" }"#), None);
}
