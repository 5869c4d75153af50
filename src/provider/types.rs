use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Results per provider search page.
pub const PAGE_SIZE: u64 = 10;

/// Sentinel the provider uses for "no poster".
pub const NO_POSTER: &str = "N/A";

/// One entry of a title search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(rename = "Poster", default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl SearchResultItem {
    /// Poster URL, or `None` when the provider has no image.
    pub fn poster_url(&self) -> Option<&str> {
        poster_url(self.poster.as_deref())
    }
}

/// Full record for a single title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: SearchResultItem,
    #[serde(rename = "Rated", default)]
    pub rated: Option<String>,
    #[serde(rename = "Released", default)]
    pub released: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    #[serde(rename = "Writer", default)]
    pub writer: Option<String>,
    #[serde(rename = "Actors", default)]
    pub cast: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Language", default)]
    pub language: Option<String>,
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    #[serde(rename = "Awards", default)]
    pub awards: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub rating: Option<String>,
    #[serde(rename = "imdbVotes", default)]
    pub votes: Option<String>,
}

impl MovieDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }

    pub fn poster_url(&self) -> Option<&str> {
        self.summary.poster_url()
    }
}

/// Payload of a successful search page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchPage {
    #[serde(rename = "Search", default)]
    pub items: Vec<SearchResultItem>,
    #[serde(rename = "totalResults", default, deserialize_with = "lenient_count")]
    pub total_results: u64,
}

impl SearchPage {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_results)
    }
}

/// Provider answer after the `Response` flag has been inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderReply<T> {
    /// `Response == "True"` and the payload decoded.
    Found(T),
    /// Provider declined the request; carries its `Error` message if any.
    Rejected(Option<String>),
}

/// Status fields shared by every provider response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}

/// Interpret a provider JSON body.
///
/// Decoding errors are only reported for bodies flagged as successful;
/// a rejected body never needs its payload.
pub fn decode_reply<T: DeserializeOwned>(
    body: serde_json::Value,
) -> Result<ProviderReply<T>, serde_json::Error> {
    let envelope: Envelope = serde_json::from_value(body.clone())?;
    if !envelope.is_success() {
        return Ok(ProviderReply::Rejected(envelope.error));
    }
    serde_json::from_value(body).map(ProviderReply::Found)
}

/// Number of pages for a result count, never less than one.
pub fn total_pages(total_results: u64) -> u32 {
    let pages = total_results.div_ceil(PAGE_SIZE).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

pub(crate) fn poster_url(poster: Option<&str>) -> Option<&str> {
    poster
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != NO_POSTER)
}

/// Accepts `"123"`, `123`, or garbage (which counts as zero).
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
