//! HTTP transport seam.
//!
//! The pipeline talks to the network only through [`Transport`], so tests can
//! swap in a scripted transport and count calls. [`CurlTransport`] is the
//! production implementation.

mod classify;
mod easy;
mod parse;

pub use self::classify::classify_curl_error;
pub use self::easy::{CurlTransport, TransportOptions};

use url::Url;

use crate::error::FetchFailure;

/// Status line and the headers the pipeline cares about, for the final
/// response after redirects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    pub status: u32,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub content_disposition: Option<String>,
}

impl ResponseHead {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Callback the transport runs on the response head before accepting any
/// body bytes. An `Err` aborts the transfer and is returned from `get`.
pub type HeadInspector<'a> = dyn FnMut(&ResponseHead) -> Result<(), FetchFailure> + 'a;

/// Issues one GET and returns the full body.
///
/// Implementations must call `inspect` exactly once per successful exchange,
/// before the body is handed back, and must not retry.
pub trait Transport {
    fn get(&self, url: &Url, inspect: &mut HeadInspector<'_>) -> Result<Vec<u8>, FetchFailure>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url, inspect: &mut HeadInspector<'_>) -> Result<Vec<u8>, FetchFailure> {
        (**self).get(url, inspect)
    }
}
