//! Hand-off of the exported text to the host clipboard.

use std::future::Future;

use thiserror::Error;

use crate::{
    config::CopyConfig,
    util::notice::{Notice, NoticeKind},
};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("clipboard rejected the write: {0}")]
    Rejected(String),
    #[error("clipboard did not respond within {0:?}")]
    TimedOut(std::time::Duration),
}

/// Destination for exported text, implemented by the host.
pub trait ClipboardTransport {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), TransportError>>;
}

/// Writes `text` once and reports the outcome as a notice. Never retried.
pub async fn copy_text<T: ClipboardTransport>(
    transport: &T,
    text: &str,
    config: &CopyConfig,
) -> Notice {
    let outcome = match tokio::time::timeout(config.timeout, transport.write_text(text)).await {
        Ok(result) => result,
        Err(_) => Err(TransportError::TimedOut(config.timeout)),
    };

    match outcome {
        Ok(()) => Notice::new(NoticeKind::Success, config.success_text.clone()),
        Err(err) => {
            log::error!("[clipboard] Failed to copy: {err}");
            Notice::new(NoticeKind::Error, config.failure_text.clone())
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{cell::RefCell, time::Duration};

    use super::*;

    /// Records writes, or fails every write when `fail` is set.
    #[derive(Default)]
    pub(crate) struct RecordingClipboard {
        pub(crate) fail: bool,
        pub(crate) written: RefCell<Vec<String>>,
    }

    impl ClipboardTransport for RecordingClipboard {
        async fn write_text(&self, text: &str) -> Result<(), TransportError> {
            if self.fail {
                return Err(TransportError::Rejected("permission denied".into()));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct StalledClipboard;

    impl ClipboardTransport for StalledClipboard {
        async fn write_text(&self, _text: &str) -> Result<(), TransportError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn success_notice_after_write() {
        let clipboard = RecordingClipboard::default();
        let notice = copy_text(&clipboard, "hello", &CopyConfig::default()).await;
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "已複製");
        assert_eq!(clipboard.written.borrow().as_slice(), ["hello"]);
    }

    #[tokio::test]
    async fn failure_notice_on_rejection() {
        let clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        let notice = copy_text(&clipboard, "hello", &CopyConfig::default()).await;
        assert!(notice.is_error());
        assert_eq!(notice.text, "複製失敗，請手動複製。");
    }

    #[tokio::test]
    async fn stalled_write_times_out() {
        let config = CopyConfig {
            timeout: Duration::from_millis(50),
            ..CopyConfig::default()
        };
        let notice = copy_text(&StalledClipboard, "hello", &config).await;
        assert!(notice.is_error());
    }
}
