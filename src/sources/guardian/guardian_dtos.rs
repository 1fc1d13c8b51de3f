use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardianSearchDto {
    pub response: GuardianResponseDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuardianResponseDto {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub status: String,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub results: Vec<GuardianItemDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianItemDto {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub web_title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub web_url: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub web_publication_date: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub section_name: String,
    #[serde(default)]
    pub fields: Option<GuardianFieldsDto>,
}

/// Only present when the request asked for `show-fields`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianFieldsDto {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub headline: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub trail_text: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub byline: String,
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
