/// Where a search is at. Exactly one of these holds at a time, so a search
/// can't be loading and failed at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// Nothing has been submitted yet.
    #[default]
    Idle,
    /// An empty term was submitted.
    Prompt,
    /// A request is in flight.
    Loading,
    /// The latest request returned at least one song.
    Ready,
    /// The latest request returned no songs.
    Empty,
    /// The latest request failed.
    Error(String),
}
impl SearchStatus {
    pub const PROMPT_MESSAGE: &str = "Please enter a search term.";
    pub const LOADING_MESSAGE: &str = "Searching...";
    pub const EMPTY_MESSAGE: &str = "No songs found.";
    pub const API_ERROR_MESSAGE: &str = "Unexpected response from the API.";
    pub const FAILED_MESSAGE: &str = "Failed to fetch songs. Please try again.";

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchStatus::Loading)
    }

    /// The line shown to the user for this status, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            SearchStatus::Idle | SearchStatus::Prompt => Some(Self::PROMPT_MESSAGE),
            SearchStatus::Loading => Some(Self::LOADING_MESSAGE),
            SearchStatus::Ready => None,
            SearchStatus::Empty => Some(Self::EMPTY_MESSAGE),
            SearchStatus::Error(message) => Some(message),
        }
    }
}
