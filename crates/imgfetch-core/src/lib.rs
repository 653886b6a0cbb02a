pub mod config;
pub mod logging;

pub mod batch;
pub mod content;
pub mod digest;
pub mod error;
pub mod pipeline;
pub mod session;
pub mod storage;
pub mod transport;
pub mod url_model;

pub use batch::{run_batch, BatchEvent, BatchSummary, UrlOutcome};
pub use error::FetchFailure;
pub use session::{FetchOptions, FetchResult, FetchSession, SavedImage};
