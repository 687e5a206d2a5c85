use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{OTHER_GENRE, derive_year, ti};

/// A song ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(pub u64);
impl std::fmt::Display for SongId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A song, as `tunesearch` cares about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// The song ID
    pub id: SongId,
    /// The song title
    pub title: String,
    /// The song artist
    pub artist: String,
    /// The artwork image URL
    pub artwork_url: String,
    /// The release date, as received
    pub release_date: String,
    /// The genre
    pub genre: Option<String>,
    /// The album name
    pub album: Option<String>,
    /// The duration
    pub duration: Option<Duration>,
    /// The store page
    pub store_url: Option<String>,
}
impl Song {
    /// The genre bucket this song is grouped under.
    pub fn genre_bucket(&self) -> &str {
        self.genre
            .as_deref()
            .filter(|g| !g.is_empty())
            .unwrap_or(OTHER_GENRE)
    }

    /// The release year, if the release date can be parsed.
    pub fn year(&self) -> Option<i32> {
        derive_year(&self.release_date)
    }
}
impl From<ti::Song> for Song {
    fn from(song: ti::Song) -> Self {
        Song {
            id: SongId(song.track_id),
            title: song.track_name,
            artist: song.artist_name,
            artwork_url: song.artwork_url_100,
            release_date: song.release_date,
            genre: song.primary_genre_name,
            album: song.collection_name,
            duration: song.track_time_millis.map(Duration::from_millis),
            store_url: song.track_view_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_song() {
        let wire = ti::Song {
            track_id: 7,
            track_name: "Around the World".to_string(),
            artist_name: "Daft Punk".to_string(),
            artwork_url_100: "https://example.com/100x100.jpg".to_string(),
            release_date: "1997-01-17T08:00:00Z".to_string(),
            primary_genre_name: Some("Electronic".to_string()),
            collection_name: Some("Homework".to_string()),
            track_time_millis: Some(429_000),
            track_view_url: None,
        };
        let song = Song::from(wire);
        assert_eq!(song.id, SongId(7));
        assert_eq!(song.genre_bucket(), "Electronic");
        assert_eq!(song.duration, Some(Duration::from_secs(429)));
        assert_eq!(song.year(), Some(1997));
    }

    #[test]
    fn test_genre_bucket_defaults_to_other() {
        let mut song = Song::from(ti::Song {
            track_id: 1,
            track_name: String::new(),
            artist_name: String::new(),
            artwork_url_100: String::new(),
            release_date: String::new(),
            primary_genre_name: None,
            collection_name: None,
            track_time_millis: None,
            track_view_url: None,
        });
        assert_eq!(song.genre_bucket(), "Other");

        song.genre = Some(String::new());
        assert_eq!(song.genre_bucket(), "Other");
    }
}
