//! Representations of tunesearch's state: songs as the app cares about them,
//! their grouping by genre, and release year derivation.
//!
//! Kept free of I/O so that it can be tested in isolation.
#![deny(missing_docs)]

pub use tunesearch_itunes as ti;

mod song;
pub use song::{Song, SongId};

mod group;
pub use group::{GenreGroup, OTHER_GENRE, group};

mod year;
pub use year::{INVALID_YEAR, derive_year, year_label};
