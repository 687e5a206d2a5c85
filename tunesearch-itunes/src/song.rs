use serde::{Deserialize, Serialize};

/// A song record as returned by the search endpoint with `entity=song`.
///
/// String fields the API is expected to always send default to empty rather
/// than failing the whole response when one record is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// The unique identifier of the track
    pub track_id: u64,
    /// The title of the track
    #[serde(default)]
    pub track_name: String,
    /// The name of the performing artist
    #[serde(default)]
    pub artist_name: String,
    /// A 100x100 artwork image URL
    #[serde(default, rename = "artworkUrl100")]
    pub artwork_url_100: String,
    /// The release date, as an ISO-8601 timestamp
    #[serde(default)]
    pub release_date: String,
    /// The primary genre of the track
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_genre_name: Option<String>,
    /// The name of the collection (album) the track belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    /// The duration of the track in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_time_millis: Option<u64>,
    /// The store page for the track
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_view_url: Option<String>,
}
