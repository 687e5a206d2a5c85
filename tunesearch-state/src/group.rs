use std::collections::HashMap;

use smol_str::SmolStr;

use crate::Song;

/// The bucket for songs without a genre.
pub const OTHER_GENRE: &str = "Other";

/// A grouping of songs that share a genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreGroup {
    /// The heading of the group.
    pub genre: SmolStr,
    /// The songs in the group, in the order they were received.
    pub songs: Vec<Song>,
}

/// Partition `songs` by genre bucket.
///
/// Groups appear in the order their genre is first seen, and songs keep their
/// original relative order within a group. Songs without a genre land in
/// [`OTHER_GENRE`].
pub fn group(songs: &[Song]) -> Vec<GenreGroup> {
    let mut groups: Vec<GenreGroup> = vec![];
    let mut index_by_genre: HashMap<&str, usize> = HashMap::new();

    for song in songs {
        let genre = song.genre_bucket();
        let index = *index_by_genre.entry(genre).or_insert_with(|| {
            groups.push(GenreGroup {
                genre: SmolStr::new(genre),
                songs: vec![],
            });
            groups.len() - 1
        });
        groups[index].songs.push(song.clone());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SongId;

    fn song(id: u64, genre: Option<&str>) -> Song {
        Song {
            id: SongId(id),
            title: format!("Song {id}"),
            artist: "Artist".to_string(),
            artwork_url: String::new(),
            release_date: "2001-01-01T00:00:00Z".to_string(),
            genre: genre.map(str::to_string),
            album: None,
            duration: None,
            store_url: None,
        }
    }

    #[test]
    fn test_group_preserves_order() {
        let s1 = song(1, Some("Pop"));
        let s2 = song(2, Some("Pop"));
        let s3 = song(3, Some("Rock"));

        let groups = group(&[s1.clone(), s2.clone(), s3.clone()]);
        assert_eq!(
            groups,
            vec![
                GenreGroup {
                    genre: "Pop".into(),
                    songs: vec![s1, s2],
                },
                GenreGroup {
                    genre: "Rock".into(),
                    songs: vec![s3],
                },
            ]
        );
    }

    #[test]
    fn test_group_interleaved_genres() {
        let songs = [
            song(1, Some("Rock")),
            song(2, Some("Pop")),
            song(3, Some("Rock")),
            song(4, Some("Jazz")),
            song(5, Some("Pop")),
        ];
        let groups = group(&songs);

        let genres: Vec<&str> = groups.iter().map(|g| g.genre.as_str()).collect();
        assert_eq!(genres, ["Rock", "Pop", "Jazz"]);

        let rock: Vec<u64> = groups[0].songs.iter().map(|s| s.id.0).collect();
        assert_eq!(rock, [1, 3]);
        let pop: Vec<u64> = groups[1].songs.iter().map(|s| s.id.0).collect();
        assert_eq!(pop, [2, 5]);
    }

    #[test]
    fn test_group_missing_genre_is_other() {
        let groups = group(&[song(1, None), song(2, Some("Pop")), song(3, None)]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].genre, OTHER_GENRE);
        assert_eq!(groups[0].songs.len(), 2);
        assert_eq!(groups[1].genre, "Pop");
    }

    #[test]
    fn test_group_is_stable() {
        let songs = [song(1, Some("Pop")), song(2, None), song(3, Some("Pop"))];
        assert_eq!(group(&songs), group(&songs));
    }

    #[test]
    fn test_group_empty() {
        assert!(group(&[]).is_empty());
    }
}
