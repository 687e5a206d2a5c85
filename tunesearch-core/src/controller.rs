use std::{
    future::Future,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tunesearch_state::{GenreGroup, Song, group};

use crate::{SearchStatus, ti};

/// Something that can answer a song search.
pub trait SearchBackend: Send + Sync + 'static {
    fn search(&self, term: &str) -> impl Future<Output = ti::ClientResult<Vec<ti::Song>>> + Send;
}
impl SearchBackend for ti::Client {
    fn search(&self, term: &str) -> impl Future<Output = ti::ClientResult<Vec<ti::Song>>> + Send {
        let request = ti::SearchRequest::songs(term);
        async move {
            ti::Client::search(self, &request)
                .await
                .map(|response| response.results)
        }
    }
}

/// Everything the UI needs to render the search view.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub status: SearchStatus,
    songs: Vec<Song>,
    groups: Vec<GenreGroup>,
    generation: u64,
}
impl SearchState {
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// The songs grouped by genre. Always derived from [`Self::songs`].
    pub fn groups(&self) -> &[GenreGroup] {
        &self.groups
    }

    /// The token of the most recent submit.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn set_songs(&mut self, songs: Vec<Song>) {
        self.groups = group(&songs);
        self.songs = songs;
    }
}

/// Owns the search state and applies search results to it.
///
/// Every submit takes a new generation; a response is applied only if no
/// submit has happened since it was issued.
pub struct SearchController<B> {
    backend: Arc<B>,
    state: Arc<RwLock<SearchState>>,
}
impl<B> Clone for SearchController<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            state: self.state.clone(),
        }
    }
}
impl<B: SearchBackend> SearchController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            state: Arc::new(RwLock::new(SearchState::default())),
        }
    }

    pub fn get_state(&self) -> Arc<RwLock<SearchState>> {
        self.state.clone()
    }

    pub fn snapshot(&self) -> SearchState {
        self.read_state().clone()
    }

    /// Run a whole search: [`Self::begin`] followed by [`Self::complete`].
    pub async fn submit(&self, term: &str) {
        if let Some(generation) = self.begin(term) {
            self.complete(term, generation).await;
        }
    }

    /// Record a submit and take its generation. Runs synchronously so the
    /// order of generations is the order of submits.
    ///
    /// Returns `None` for an empty term, which only sets the prompt.
    pub fn begin(&self, term: &str) -> Option<u64> {
        let term = term.trim();
        let mut state = self.write_state();
        state.query = term.to_string();
        state.generation += 1;
        if term.is_empty() {
            state.status = SearchStatus::Prompt;
            return None;
        }
        state.status = SearchStatus::Loading;
        state.set_songs(vec![]);
        Some(state.generation)
    }

    /// Fetch results for a submit started with [`Self::begin`] and apply them,
    /// unless a later submit has happened since.
    pub async fn complete(&self, term: &str, generation: u64) {
        let term = term.trim();
        tracing::info!(term, generation, "searching");
        let result = self.backend.search(term).await;

        let mut state = self.write_state();
        if state.generation != generation {
            tracing::debug!(
                term,
                generation,
                latest = state.generation,
                "dropping stale search response"
            );
            return;
        }

        match result {
            Ok(songs) => {
                let songs: Vec<Song> = songs.into_iter().map(Song::from).collect();
                tracing::info!(term, count = songs.len(), "search complete");
                state.status = if songs.is_empty() {
                    SearchStatus::Empty
                } else {
                    SearchStatus::Ready
                };
                state.set_songs(songs);
            }
            Err(ti::ClientError::MissingResults) => {
                tracing::warn!(term, "search response had no results field");
                state.status = SearchStatus::Error(SearchStatus::API_ERROR_MESSAGE.to_string());
            }
            Err(e) => {
                tracing::warn!(term, "search failed: {e}");
                state.status = SearchStatus::Error(SearchStatus::FAILED_MESSAGE.to_string());
            }
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SearchState> {
        self.state.read().unwrap()
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SearchState> {
        self.state.write().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use tokio::sync::oneshot;

    use super::*;

    fn wire_song(id: u64, genre: Option<&str>) -> ti::Song {
        ti::Song {
            track_id: id,
            track_name: format!("Song {id}"),
            artist_name: "Artist".to_string(),
            artwork_url_100: format!("https://example.com/{id}.jpg"),
            release_date: "1994-03-01T00:00:00Z".to_string(),
            primary_genre_name: genre.map(str::to_string),
            collection_name: None,
            track_time_millis: None,
            track_view_url: None,
        }
    }

    /// Answers every search with a fixed outcome, counting calls.
    struct FixedBackend {
        outcome: fn() -> ti::ClientResult<Vec<ti::Song>>,
        calls: AtomicUsize,
    }
    impl FixedBackend {
        fn new(outcome: fn() -> ti::ClientResult<Vec<ti::Song>>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }
    impl SearchBackend for FixedBackend {
        fn search(
            &self,
            _term: &str,
        ) -> impl Future<Output = ti::ClientResult<Vec<ti::Song>>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let outcome = (self.outcome)();
            async move { outcome }
        }
    }

    /// Holds each search open until the test releases it.
    #[derive(Default)]
    struct GatedBackend {
        gates: Mutex<HashMap<String, oneshot::Receiver<Vec<ti::Song>>>>,
    }
    impl GatedBackend {
        fn gate(&self, term: &str) -> oneshot::Sender<Vec<ti::Song>> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().insert(term.to_string(), rx);
            tx
        }
    }
    impl SearchBackend for GatedBackend {
        fn search(
            &self,
            term: &str,
        ) -> impl Future<Output = ti::ClientResult<Vec<ti::Song>>> + Send {
            let rx = self.gates.lock().unwrap().remove(term);
            async move {
                match rx {
                    Some(rx) => Ok(rx.await.unwrap_or_default()),
                    None => Err(ti::ClientError::MissingResults),
                }
            }
        }
    }

    fn transport_error() -> ti::ClientError {
        ti::ClientError::DeserializationError(
            serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        )
    }

    #[tokio::test]
    async fn test_submit_empty_prompts_without_request() {
        let controller = SearchController::new(FixedBackend::new(|| {
            Ok(vec![wire_song(1, Some("Pop"))])
        }));
        controller.submit("beatles").await;
        assert_eq!(controller.snapshot().songs().len(), 1);

        controller.submit("   ").await;
        let state = controller.snapshot();
        assert_eq!(state.status, SearchStatus::Prompt);
        assert!(!state.status.is_loading());
        assert_eq!(state.songs().len(), 1);
        assert_eq!(controller.backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_submit_empty_results() {
        let controller = SearchController::new(FixedBackend::new(|| Ok(vec![])));
        controller.submit("zzzzzz").await;
        let state = controller.snapshot();
        assert_eq!(state.status, SearchStatus::Empty);
        assert!(state.songs().is_empty());
        assert!(state.groups().is_empty());
    }

    #[tokio::test]
    async fn test_submit_groups_by_genre() {
        let controller = SearchController::new(FixedBackend::new(|| {
            Ok(vec![
                wire_song(1, Some("Pop")),
                wire_song(2, Some("Pop")),
                wire_song(3, Some("Rock")),
                wire_song(4, None),
            ])
        }));
        controller.submit("mix").await;
        let state = controller.snapshot();
        assert_eq!(state.status, SearchStatus::Ready);
        assert_eq!(state.query, "mix");

        let groups: Vec<(&str, Vec<u64>)> = state
            .groups()
            .iter()
            .map(|g| (g.genre.as_str(), g.songs.iter().map(|s| s.id.0).collect()))
            .collect();
        assert_eq!(
            groups,
            vec![("Pop", vec![1, 2]), ("Rock", vec![3]), ("Other", vec![4])]
        );
    }

    #[tokio::test]
    async fn test_submit_missing_results_is_api_error() {
        let controller =
            SearchController::new(FixedBackend::new(|| Err(ti::ClientError::MissingResults)));
        controller.submit("x").await;
        assert_eq!(
            controller.snapshot().status,
            SearchStatus::Error(SearchStatus::API_ERROR_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_submit_transport_error_is_generic_failure() {
        let controller = SearchController::new(FixedBackend::new(|| Err(transport_error())));
        controller.submit("x").await;
        let state = controller.snapshot();
        assert_eq!(
            state.status,
            SearchStatus::Error(SearchStatus::FAILED_MESSAGE.to_string())
        );
        assert!(state.songs().is_empty());
    }

    #[tokio::test]
    async fn test_every_path_clears_loading() {
        let outcomes: [fn() -> ti::ClientResult<Vec<ti::Song>>; 4] = [
            || Ok(vec![wire_song(1, Some("Pop"))]),
            || Ok(vec![]),
            || Err(ti::ClientError::MissingResults),
            || Err(transport_error()),
        ];
        for outcome in outcomes {
            let controller = SearchController::new(FixedBackend::new(outcome));
            controller.submit("term").await;
            assert!(!controller.snapshot().status.is_loading());
            controller.submit("").await;
            assert!(!controller.snapshot().status.is_loading());
        }
    }

    #[tokio::test]
    async fn test_loading_while_in_flight() {
        let controller = SearchController::new(GatedBackend::default());
        let gate = controller.backend.gate("slow");

        let task = tokio::spawn({
            let controller = controller.clone();
            async move { controller.submit("slow").await }
        });
        while !controller.snapshot().status.is_loading() {
            tokio::task::yield_now().await;
        }

        gate.send(vec![wire_song(1, Some("Pop"))]).unwrap();
        task.await.unwrap();
        assert_eq!(controller.snapshot().status, SearchStatus::Ready);
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let controller = SearchController::new(GatedBackend::default());
        let gate_a = controller.backend.gate("a");
        let gate_b = controller.backend.gate("b");

        let task_a = tokio::spawn({
            let controller = controller.clone();
            async move { controller.submit("a").await }
        });
        while controller.snapshot().generation() < 1 {
            tokio::task::yield_now().await;
        }
        let task_b = tokio::spawn({
            let controller = controller.clone();
            async move { controller.submit("b").await }
        });
        while controller.snapshot().generation() < 2 {
            tokio::task::yield_now().await;
        }

        // "b" answers first, then the slower "a".
        gate_b.send(vec![wire_song(2, Some("Rock"))]).unwrap();
        task_b.await.unwrap();
        gate_a
            .send(vec![wire_song(1, Some("Pop")), wire_song(3, Some("Pop"))])
            .unwrap();
        task_a.await.unwrap();

        let state = controller.snapshot();
        assert_eq!(state.query, "b");
        assert_eq!(state.status, SearchStatus::Ready);
        let ids: Vec<u64> = state.songs().iter().map(|s| s.id.0).collect();
        assert_eq!(ids, [2]);
        assert_eq!(state.groups().len(), 1);
        assert_eq!(state.groups()[0].genre, "Rock");
    }

    #[tokio::test]
    async fn test_generation_follows_begin_order() {
        let controller = SearchController::new(GatedBackend::default());
        let gate_a = controller.backend.gate("a");
        let gate_b = controller.backend.gate("b");

        let generation_a = controller.begin("a").unwrap();
        let generation_b = controller.begin("b").unwrap();
        assert!(generation_a < generation_b);
        assert!(controller.snapshot().status.is_loading());

        // Completing out of order must not let "a" win.
        gate_b.send(vec![wire_song(2, Some("Rock"))]).unwrap();
        controller.complete("b", generation_b).await;
        gate_a.send(vec![wire_song(1, Some("Pop"))]).unwrap();
        controller.complete("a", generation_a).await;

        let state = controller.snapshot();
        assert_eq!(state.query, "b");
        assert_eq!(state.status, SearchStatus::Ready);
        let ids: Vec<u64> = state.songs().iter().map(|s| s.id.0).collect();
        assert_eq!(ids, [2]);
    }

    #[test]
    fn test_begin_empty_term_takes_no_fetch() {
        let controller = SearchController::new(GatedBackend::default());
        assert_eq!(controller.begin(" \t "), None);
        let state = controller.snapshot();
        assert_eq!(state.status, SearchStatus::Prompt);
        assert_eq!(state.generation(), 1);
    }

    #[tokio::test]
    async fn test_empty_submit_supersedes_in_flight_request() {
        let controller = SearchController::new(GatedBackend::default());
        let gate = controller.backend.gate("a");

        let task = tokio::spawn({
            let controller = controller.clone();
            async move { controller.submit("a").await }
        });
        while controller.snapshot().generation() < 1 {
            tokio::task::yield_now().await;
        }
        controller.submit("").await;

        gate.send(vec![wire_song(1, Some("Pop"))]).unwrap();
        task.await.unwrap();

        let state = controller.snapshot();
        assert_eq!(state.status, SearchStatus::Prompt);
        assert!(state.songs().is_empty());
    }
}
