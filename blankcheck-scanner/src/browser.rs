use crate::error::{Result, ScanError};
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// A headless Chromium instance scoped to a single audit.
///
/// The CDP event handler is polled on a background task for the lifetime of
/// the session. `shutdown` must run on every exit path so the child process
/// does not outlive the audit.
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch a fresh headless browser process.
    pub async fn launch() -> Result<Self> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .build()
            .map_err(ScanError::Launch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| ScanError::Launch(e.to_string()))?;

        // The handler stream drives all CDP traffic; it ends when the
        // browser process goes away.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        debug!("Headless browser launched");
        Ok(Self {
            browser,
            handler_task,
        })
    }

    /// Navigate to `url` and return the serialized DOM, bounded by `timeout`.
    ///
    /// The bound covers opening the tab, the navigation itself, and DOM
    /// serialization; full subresource load is not waited for beyond what
    /// the engine needs to settle the navigation.
    pub async fn dom_content(&self, url: &str, timeout: Duration) -> Result<String> {
        let navigate = async {
            let page = self.browser.new_page("about:blank").await?;
            page.goto(url).await?;
            page.wait_for_navigation().await?;
            page.content().await
        };

        match tokio::time::timeout(timeout, navigate).await {
            Ok(Ok(html)) => Ok(html),
            Ok(Err(e)) => Err(ScanError::Navigation(e.to_string())),
            Err(_) => Err(ScanError::Timeout(timeout.as_secs())),
        }
    }

    /// Close the browser and reap the child process.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        let _ = self.browser.wait().await;
        self.handler_task.abort();
        debug!("Headless browser released");
    }
}
