use super::GuardianAdapter;
use crate::models::article::UNTITLED;
use crate::sources::guardian::guardian_dtos::{GuardianFieldsDto, GuardianItemDto};

fn build_item() -> GuardianItemDto {
    GuardianItemDto {
        web_title: "Web title".to_string(),
        web_url: "https://example.invalid/story".to_string(),
        web_publication_date: "2026-02-21T08:00:00Z".to_string(),
        section_name: "Business".to_string(),
        fields: Some(GuardianFieldsDto {
            headline: "Display headline".to_string(),
            trail_text: "Short summary".to_string(),
            byline: "A. Reporter".to_string(),
        }),
    }
}

#[test]
fn parse_timestamp_handles_invalid_values() {
    assert_eq!(
        GuardianAdapter::parse_timestamp(""),
        chrono::DateTime::UNIX_EPOCH
    );
    assert_eq!(
        GuardianAdapter::parse_timestamp("bad-date"),
        chrono::DateTime::UNIX_EPOCH
    );
}

#[test]
fn convert_item_prefers_the_display_headline() {
    let article = GuardianAdapter::convert_item(build_item());

    assert_eq!(article.title, "Display headline");
    assert_eq!(article.summary, "Short summary");
    assert_eq!(article.url, "https://example.invalid/story");
    assert_eq!(article.source_name, "The Guardian");
    assert_eq!(
        article.extra.get("byline").and_then(|v| v.as_str()),
        Some("A. Reporter")
    );
    assert_eq!(
        article.extra.get("section").and_then(|v| v.as_str()),
        Some("Business")
    );
}

#[test]
fn convert_item_falls_back_to_the_web_title() {
    let mut item = build_item();
    item.fields.as_mut().unwrap().headline = String::new();

    let article = GuardianAdapter::convert_item(item);
    assert_eq!(article.title, "Web title");
}

#[test]
fn convert_item_without_any_title_uses_the_placeholder() {
    let mut item = build_item();
    item.web_title = String::new();
    item.fields = None;

    let article = GuardianAdapter::convert_item(item);
    assert_eq!(article.title, UNTITLED);
    assert!(article.extra.get("byline").is_none());
}
