use crate::sources::reddit::reddit_dtos::RedditListingDto;

#[test]
fn reddit_listing_dto_accepts_nullable_and_missing_fields() {
    let json = r#"
    {
      "data": {
        "children": [
          {
            "data": {
              "title": "Company raises a new funding round",
              "selftext": null,
              "url": "https://example.com/post",
              "permalink": "/r/investing/comments/abc/post/",
              "author": null,
              "created_utc": 1769904000.0,
              "score": 321,
              "num_comments": 12
            }
          },
          { "data": {} }
        ]
      }
    }
    "#;

    let parsed = serde_json::from_str::<RedditListingDto>(json).expect("valid listing JSON");
    assert_eq!(parsed.data.children.len(), 2);

    let first = &parsed.data.children[0].data;
    assert_eq!(first.selftext, "");
    assert_eq!(first.author, "");
    assert_eq!(first.score, 321);

    let second = &parsed.data.children[1].data;
    assert_eq!(second.title, "");
    assert_eq!(second.created_utc, 0.0);
}

#[test]
fn reddit_listing_dto_accepts_empty_listings() {
    let parsed = serde_json::from_str::<RedditListingDto>(r#"{ "data": { "children": [] } }"#)
        .expect("valid empty JSON");
    assert!(parsed.data.children.is_empty());
}
