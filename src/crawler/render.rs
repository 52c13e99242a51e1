//! Rendering collaborator interface
//!
//! Some sites only produce useful markup after JavaScript runs. The fetch
//! engine can route a URL through a rendering-capable collaborator (such as
//! a headless browser) before falling back to plain HTTP. The capability is
//! injected behind this trait so the fetch engine's control flow is the same
//! whether or not a real renderer exists.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors a renderer can produce. All of them cause the fetch engine to fall
/// back to plain HTTP.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("rendering capability is not available")]
    Unavailable,

    #[error("page load timed out after {0:?}")]
    Timeout(Duration),

    #[error("rendering failed: {0}")]
    Failed(String),
}

/// A collaborator that loads a page, lets dynamic content settle, and
/// returns the post-JavaScript HTML.
///
/// Implementations should bound the page load with `timeout` and are
/// expected to wait a short randomized settle delay after load so
/// dynamically inserted content is present in the returned markup.
pub trait Renderer {
    fn render(
        &self,
        url: &Url,
        timeout: Duration,
    ) -> impl Future<Output = Result<String, RenderError>> + Send;
}

/// The always-absent renderer: every render attempt fails with
/// `RenderError::Unavailable`, which sends the fetch engine straight to its
/// HTTP fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRenderer;

impl Renderer for DisabledRenderer {
    async fn render(&self, _url: &Url, _timeout: Duration) -> Result<String, RenderError> {
        Err(RenderError::Unavailable)
    }
}
