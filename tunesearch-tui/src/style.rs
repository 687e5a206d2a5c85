//! Colours for the shell, configured once at startup.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// HSV color representation (hue 0-1, saturation 0-1, value 0-1).
pub type Hsv = [f32; 3];

/// Hashes a string and produces a pleasing colour from that hash. Used to give
/// each genre heading a stable colour across searches.
pub fn string_to_hsv(s: &str) -> Hsv {
    const DISTINCT_COLOURS: u64 = 36_000;

    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    s.hash(&mut hasher);
    let hash = hasher.finish();
    let hue = (hash % DISTINCT_COLOURS) as f32 / DISTINCT_COLOURS as f32;

    [hue, 0.65, 0.85]
}

macro_rules! style_fields {
    ($(($field:ident, $default:expr)),* $(,)?) => {
        /// Style configuration with HSV colors for various UI elements.
        #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
        #[serde(default)]
        pub struct Style {
            $(
                #[doc = concat!("HSV colour for ", stringify!($field))]
                pub $field: Hsv,
            )*
        }
        impl Default for Style {
            fn default() -> Self {
                Self {
                    $($field: $default,)*
                }
            }
        }
    }
}

style_fields![
    (background_hsv, [0.65, 0.40, 0.01]),
    (text_hsv, [0.0, 0.0, 1.0]),
    (accent_hsv, [0.55, 0.70, 1.0]),
    (muted_hsv, [0.0, 0.0, 0.5]),
    (artist_hsv, [0.58, 0.50, 0.85]),
    (year_hsv, [0.0, 0.0, 0.60]),
    (selected_hsv, [0.65, 0.45, 0.30]),
    (error_hsv, [0.0, 0.75, 0.95]),
];
