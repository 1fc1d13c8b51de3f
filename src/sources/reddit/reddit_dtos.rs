use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedditListingDto {
    #[serde(default)]
    pub data: RedditListingDataDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedditListingDataDto {
    #[serde(default)]
    pub children: Vec<RedditChildDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedditChildDto {
    #[serde(default)]
    pub data: RedditPostDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedditPostDto {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub selftext: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub permalink: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub author: String,
    /// Epoch seconds; the API serves this as a float.
    #[serde(default)]
    pub created_utc: f64,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: i64,
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
