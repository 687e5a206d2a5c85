pub mod config;
pub mod util;

mod controller;
pub use controller::{SearchBackend, SearchController, SearchState};

mod logic;
pub use logic::{Logic, LogicArgs};

mod status;
pub use status::SearchStatus;

mod tokio_thread;

pub use tunesearch_itunes as ti;
pub use tunesearch_state;
