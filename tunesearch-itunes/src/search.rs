use crate::{Client, ClientResult, Song, encode_uri_component};

/// A request to the search endpoint.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// The search term, unencoded.
    pub term: String,
    /// The kind of record to return.
    pub entity: String,
}
impl SearchRequest {
    /// The entity used for song searches.
    pub const SONG_ENTITY: &str = "song";

    /// Create a song search for `term`.
    pub fn songs(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            entity: Self::SONG_ENTITY.to_string(),
        }
    }
}

/// A response from the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    /// The number of results the API claims to have returned.
    pub result_count: Option<u32>,
    /// The records found.
    pub results: Vec<Song>,
}

/// Search-related functionality.
impl Client {
    /// The URL the relay is asked to fetch for `request`.
    pub fn search_target(&self, request: &SearchRequest) -> String {
        format!(
            "{}?term={}&entity={}",
            self.search_url,
            encode_uri_component(&request.term),
            encode_uri_component(&request.entity)
        )
    }

    /// Search the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the body is not JSON, or the
    /// body has no `results` field.
    pub async fn search(&self, request: &SearchRequest) -> ClientResult<SearchResponse> {
        let bytes = self.request_raw(&self.search_target(request)).await?;
        Self::parse_search_response(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_target() {
        let client = Client::new(
            Client::DEFAULT_RELAY_HOST,
            Client::DEFAULT_SEARCH_URL,
            Client::DEFAULT_TIMEOUT,
        )
        .unwrap();
        let request = SearchRequest::songs("daft punk");
        let target = client.search_target(&request);
        assert_eq!(
            target,
            "https://itunes.apple.com/search?term=daft%20punk&entity=song"
        );
        assert_eq!(
            client.relay_url(&target),
            "https://corsproxy.io/?https%3A%2F%2Fitunes.apple.com%2Fsearch%3Fterm%3Ddaft%2520punk%26entity%3Dsong"
        );
    }
}
