use std::time::Duration;

use crate::clipboard::Clipboard;
use crate::completion::Completer;
use crate::error::{ProcessError, ServiceError};
use crate::keystroke::Keystrokes;
use crate::mode::Mode;
use crate::notify::Notifier;

pub const NOTIFICATION_TITLE: &str = "Text Processing";
pub const NOTIFICATION_MESSAGE: &str = "Text has been processed and copied to clipboard.";

/// Trim surrounding whitespace and strip trailing periods.
pub fn clean_result(text: &str) -> &str {
    text.trim().trim_end_matches('.').trim_end()
}

/// One copy → complete → paste cycle over the four external services.
pub struct TextProcessor<K, C, A, N> {
    pub keys: K,
    pub clipboard: C,
    pub completer: A,
    pub notifier: N,
    /// Pause after each simulated chord so the clipboard can catch up.
    pub settle_delay: Duration,
}

impl<K, C, A, N> TextProcessor<K, C, A, N>
where
    K: Keystrokes,
    C: Clipboard,
    A: Completer,
    N: Notifier,
{
    /// Run one cycle and log, rather than return, any failure.
    pub async fn run(&mut self, mode: Mode) {
        match self.process(mode).await {
            Ok(_) => {}
            Err(ProcessError::EmptyInput) => {
                log::warn!("{}", ProcessError::EmptyInput);
            }
            Err(e) => {
                log::error!("Error processing text: {e}");
            }
        }
    }

    /// Copy the selection, send it off, and paste the answer back.
    /// Returns the text that was written to the clipboard.
    pub async fn process(&mut self, mode: Mode) -> Result<String, ProcessError> {
        log::info!("Simulating copy to capture selected text.");
        self.keys.copy()?;
        tokio::time::sleep(self.settle_delay).await;

        let text = self.clipboard.read_text()?;
        if text.trim().is_empty() {
            return Err(ProcessError::EmptyInput);
        }

        log::info!("Sending text to the completion service for {mode}.");
        let response = self.completer.complete(mode.instruction(), &text).await?;

        let result = clean_result(&response);
        if result.is_empty() {
            return Err(ServiceError::EmptyResponse.into());
        }

        self.clipboard.write_text(result)?;
        log::info!("Text processed successfully. Updating clipboard.");

        if let Err(e) = self.notifier.notify(NOTIFICATION_TITLE, NOTIFICATION_MESSAGE) {
            log::error!("Error showing notification: {e}");
        }

        log::info!("Simulating paste to insert the result.");
        self.keys.paste()?;
        tokio::time::sleep(self.settle_delay).await;

        Ok(result.to_string())
    }
}
