//! A barebones client for the iTunes Search API, routed through a CORS relay.
#![deny(missing_docs)]

mod client;
pub use client::*;

mod song;
pub use song::*;

mod search;
pub use search::*;

mod request;
pub use request::encode_uri_component;
