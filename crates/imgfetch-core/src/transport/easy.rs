//! Blocking GET through libcurl's easy interface.

use std::cell::RefCell;
use std::str;
use std::time::{Duration, Instant};

use url::Url;

use super::parse::parse_header_lines;
use super::{HeadInspector, ResponseHead, Transport};
use crate::content::bytes_to_mb;
use crate::error::FetchFailure;
use crate::url_model::check_url;

/// Settings fixed for the lifetime of a transport.
#[derive(Debug, Clone)]
pub struct TransportOptions {
    /// Whole-request timeout (connect + transfer).
    pub timeout: Duration,
    /// Identifying `User-Agent`; never empty.
    pub user_agent: String,
    pub max_redirects: u32,
    /// Abort the body once it grows past this many bytes.
    pub max_body_bytes: Option<u64>,
}

/// [`Transport`] backed by a fresh `curl::easy::Easy` handle per request.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    options: TransportOptions,
}

impl CurlTransport {
    pub fn new(mut options: TransportOptions) -> Self {
        if options.user_agent.trim().is_empty() {
            options.user_agent = crate::session::DEFAULT_USER_AGENT.to_string();
        }
        CurlTransport { options }
    }

    pub fn options(&self) -> &TransportOptions {
        &self.options
    }

    fn easy_for(&self, url: &Url, timeout: Duration) -> Result<curl::easy::Easy, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.useragent(&self.options.user_agent)?;
        // Redirects are followed in `get` so every hop passes `check_url`.
        easy.follow_location(false)?;
        easy.connect_timeout(timeout)?;
        easy.timeout(timeout)?;
        Ok(easy)
    }

    /// One request/response exchange. Redirect responses are returned
    /// without running `inspect`.
    fn exchange(
        &self,
        url: &Url,
        timeout: Duration,
        inspect: &mut HeadInspector<'_>,
    ) -> Result<Exchange, FetchFailure> {
        let mut easy = self.easy_for(url, timeout)?;

        // Header lines of the response; reset on each status line so an
        // interim `100 Continue` is dropped.
        let lines: RefCell<Vec<String>> = RefCell::new(Vec::new());
        let mut body: Vec<u8> = Vec::new();
        let mut head_seen = false;
        let mut redirecting = false;
        let mut aborted: Option<FetchFailure> = None;
        let max_body = self.options.max_body_bytes;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    let line = s.trim_end();
                    let mut lines = lines.borrow_mut();
                    if line.starts_with("HTTP/") {
                        lines.clear();
                    }
                    lines.push(line.to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                if !head_seen {
                    head_seen = true;
                    let head = parse_header_lines(&lines.borrow());
                    if is_redirect(head.status) {
                        redirecting = true;
                    } else if let Err(failure) = inspect(&head) {
                        aborted = Some(failure);
                        return Ok(0);
                    }
                }
                if redirecting {
                    return Ok(data.len());
                }
                let received = (body.len() + data.len()) as u64;
                if max_body.is_some_and(|max| received > max) {
                    tracing::debug!(received, "body exceeded size limit; aborting transfer");
                    aborted = Some(FetchFailure::TooLarge {
                        size_mb: bytes_to_mb(received),
                    });
                    return Ok(0);
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()
        };

        if let Some(failure) = aborted {
            return Err(failure);
        }
        performed?;

        let mut head: ResponseHead = parse_header_lines(&lines.borrow());
        if head.status == 0 {
            head.status = easy.response_code()?;
        }
        if is_redirect(head.status) {
            if let Some(next) = easy.redirect_url()? {
                return Ok(Exchange::Redirect(next.to_string()));
            }
        }
        // Empty bodies never reach the write callback; a redirect without a
        // location is inspected like any other non-2xx response.
        if !head_seen || redirecting {
            inspect(&head)?;
        }
        Ok(Exchange::Body(body))
    }
}

enum Exchange {
    Body(Vec<u8>),
    Redirect(String),
}

fn is_redirect(status: u32) -> bool {
    (300..400).contains(&status)
}

impl Transport for CurlTransport {
    fn get(&self, url: &Url, inspect: &mut HeadInspector<'_>) -> Result<Vec<u8>, FetchFailure> {
        let deadline = Instant::now() + self.options.timeout;
        let mut current = url.clone();
        let mut hops = 0u32;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(FetchFailure::Timeout);
            }
            match self.exchange(&current, remaining, inspect)? {
                Exchange::Body(body) => return Ok(body),
                Exchange::Redirect(next) => {
                    hops += 1;
                    if hops > self.options.max_redirects {
                        return Err(FetchFailure::TransportError {
                            message: format!("more than {} redirects", self.options.max_redirects),
                        });
                    }
                    current = check_url(&next).map_err(|failure| match failure {
                        FetchFailure::InvalidUrl { reason } => {
                            FetchFailure::invalid_url(format!("redirect to {next}: {reason}"))
                        }
                        other => other,
                    })?;
                    tracing::debug!(from = %url, to = %current, hops, "following redirect");
                }
            }
        }
    }
}
