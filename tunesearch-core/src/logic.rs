use std::sync::{Arc, RwLock};

use crate::{
    SearchBackend, SearchController, SearchState, config::Endpoint, ti, tokio_thread::TokioThread,
};

pub struct LogicArgs {
    pub endpoint: Endpoint,
}

/// The bridge between the synchronous UI and the async search controller.
///
/// Submits are fired onto a background runtime; the UI reads the shared
/// state on every tick.
pub struct Logic {
    tokio_thread: TokioThread,
    controller: SearchController<ti::Client>,
}
impl Logic {
    pub fn new(args: LogicArgs) -> anyhow::Result<Self> {
        let LogicArgs { endpoint } = args;
        tracing::info!(
            relay_host = %endpoint.relay_host,
            search_url = %endpoint.search_url,
            timeout = ?endpoint.timeout(),
            "creating search client"
        );
        let client = ti::Client::new(
            endpoint.relay_host.clone(),
            endpoint.search_url.clone(),
            endpoint.timeout(),
        )?;

        Ok(Self {
            tokio_thread: TokioThread::new()?,
            controller: SearchController::new(client),
        })
    }

    /// Start a search for `term`. Returns immediately, with the submit
    /// already recorded in the state.
    pub fn submit(&self, term: impl Into<String>) {
        start_search(&self.tokio_thread, &self.controller, term.into());
    }

    pub fn get_state(&self) -> Arc<RwLock<SearchState>> {
        self.controller.get_state()
    }

    pub fn snapshot(&self) -> SearchState {
        self.controller.snapshot()
    }
}

/// The generation is taken here, on the caller's thread; only the fetch runs
/// on the runtime.
fn start_search<B: SearchBackend>(
    tokio_thread: &TokioThread,
    controller: &SearchController<B>,
    term: String,
) {
    let Some(generation) = controller.begin(&term) else {
        return;
    };
    let controller = controller.clone();
    tokio_thread.spawn(async move { controller.complete(&term, generation).await });
}
