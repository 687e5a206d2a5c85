use serde::{Deserialize, Serialize};

use crate::{Client, ClientError, ClientResult};

/// Making requests through the relay.
impl Client {
    /// Build the URL that asks the relay to fetch `target` on our behalf.
    pub fn relay_url(&self, target: &str) -> String {
        format!(
            "https://{}/?{}",
            self.relay_host,
            encode_uri_component(target)
        )
    }

    /// Fetch `target` through the relay, returning the raw body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or the relay answers
    /// with a non-success status.
    pub async fn request_raw(&self, target: &str) -> ClientResult<Vec<u8>> {
        let response = self
            .client
            .get(self.relay_url(target))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.bytes().await?.into())
    }

    /// Decode a search body. A body that parses but lacks `results` is a
    /// [`ClientError::MissingResults`].
    pub(crate) fn parse_search_response(bytes: &[u8]) -> ClientResult<crate::SearchResponse> {
        let response: RawSearchResponse = serde_json::from_slice(bytes)?;
        let results = response.results.ok_or(ClientError::MissingResults)?;
        Ok(crate::SearchResponse {
            result_count: response.result_count,
            results,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSearchResponse {
    result_count: Option<u32>,
    results: Option<Vec<crate::Song>>,
}

/// Percent-encode `s` the way `encodeURIComponent` does: everything outside
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` becomes `%XX` over its UTF-8 bytes.
pub fn encode_uri_component(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(s.len() + 8);
    for &b in s.as_bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(char::from(b)),
            _ => {
                out.push('%');
                out.push(char::from(HEX[(b >> 4) as usize]));
                out.push(char::from(HEX[(b & 0x0F) as usize]));
            }
        }
    }
    out
}
