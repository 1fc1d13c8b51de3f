use super::RedditAdapter;
use crate::sources::reddit::reddit_client::RedditClient;
use crate::sources::reddit::reddit_dtos::RedditPostDto;
use chrono::{DateTime, TimeZone, Utc};

fn build_adapter(keywords: &[&str]) -> RedditAdapter {
    RedditAdapter::new(
        RedditClient::new(None).expect("reddit client"),
        15,
        keywords.iter().map(|k| k.to_string()).collect(),
    )
}

fn build_post() -> RedditPostDto {
    RedditPostDto {
        title: "Startup announces IPO plans".to_string(),
        selftext: "Discussion thread".to_string(),
        url: "https://example.invalid/external".to_string(),
        permalink: "/r/investing/comments/abc/ipo/".to_string(),
        author: "poster".to_string(),
        created_utc: 1_769_904_000.0,
        score: 99,
        num_comments: 7,
    }
}

#[test]
fn from_epoch_seconds_converts_and_falls_back() {
    assert_eq!(
        RedditAdapter::from_epoch_seconds(0.0),
        DateTime::UNIX_EPOCH
    );
    assert_eq!(
        RedditAdapter::from_epoch_seconds(f64::NAN),
        DateTime::UNIX_EPOCH
    );
    assert_eq!(
        RedditAdapter::from_epoch_seconds(1_769_904_000.0),
        Utc.timestamp_opt(1_769_904_000, 0).unwrap()
    );
}

#[test]
fn keyword_filter_is_case_insensitive_and_optional() {
    let filtered = build_adapter(&["ipo", "funding"]);
    assert!(filtered.matches_keywords("Startup announces IPO plans"));
    assert!(!filtered.matches_keywords("Weekend discussion thread"));

    let unfiltered = build_adapter(&[]);
    assert!(unfiltered.matches_keywords("Weekend discussion thread"));
}

#[test]
fn convert_post_maps_forum_fields() {
    let article = RedditAdapter::convert_post(build_post(), "investing");

    assert_eq!(article.title, "Startup announces IPO plans");
    assert_eq!(article.source_name, "r/investing");
    assert_eq!(article.url, "https://example.invalid/external");
    assert_eq!(
        article.published_at,
        Utc.timestamp_opt(1_769_904_000, 0).unwrap()
    );
    assert_eq!(article.extra.get("score").and_then(|v| v.as_i64()), Some(99));
    assert_eq!(
        article.extra.get("author").and_then(|v| v.as_str()),
        Some("poster")
    );
}

#[test]
fn convert_post_builds_a_permalink_url_for_self_posts() {
    let mut post = build_post();
    post.url = String::new();

    let article = RedditAdapter::convert_post(post, "investing");
    assert_eq!(
        article.url,
        "https://www.reddit.com/r/investing/comments/abc/ipo/"
    );
}
