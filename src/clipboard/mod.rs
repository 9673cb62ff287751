use anyhow::{Context, Result};
use arboard::Clipboard;

use crate::models::Item;

/// Maximum clipboard size (10MB)
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Real clipboard implementation using arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Text copied for a selection: one line per item, the name or the id when unnamed
pub fn selection_text(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| item.name.as_deref().unwrap_or(item.id.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Cannot copy empty text to clipboard");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        anyhow::bail!(
            "Text too large for clipboard ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_SIZE
        );
    }

    Ok(())
}

fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)?;
    Ok(())
}

/// Copy text to the system clipboard.
///
/// # Errors
/// Returns error if:
/// - Text is empty or larger than 10MB
/// - Clipboard is locked or access is denied
/// - System clipboard is unavailable (headless environment)
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    // Validate before touching the clipboard so headless runs get the clearer message
    validate_clipboard_text(text)?;

    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(text, &mut clipboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock clipboard for testing without system clipboard access
    struct MockClipboard {
        text: Option<String>,
        should_fail: bool,
    }

    impl MockClipboard {
        fn new() -> Self {
            Self { text: None, should_fail: false }
        }

        fn with_failure() -> Self {
            Self { text: None, should_fail: true }
        }
    }

    impl ClipboardProvider for MockClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.should_fail {
                anyhow::bail!("Mock clipboard error");
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_selection_text_uses_names() {
        let items = vec![Item::new("1", "Apple"), Item::new("2", "Banana")];
        assert_eq!(selection_text(&items), "Apple\nBanana");
    }

    #[test]
    fn test_selection_text_falls_back_to_id() {
        let items = vec![Item::unnamed("sku-9"), Item::new("2", "Banana")];
        assert_eq!(selection_text(&items), "sku-9\nBanana");
    }

    #[test]
    fn test_selection_text_empty() {
        assert_eq!(selection_text(&[]), "");
    }

    #[test]
    fn test_copy_with_mock() {
        let mut mock = MockClipboard::new();
        assert!(copy_with_provider("Apple\nBanana", &mut mock).is_ok());
        assert_eq!(mock.text.as_deref(), Some("Apple\nBanana"));
    }

    #[test]
    fn test_copy_empty_rejected_before_provider() {
        let mut mock = MockClipboard::new();
        let err = copy_with_provider("", &mut mock).unwrap_err();
        assert!(err.to_string().contains("empty text"));
        assert!(mock.text.is_none());
    }

    #[test]
    fn test_copy_too_large_rejected() {
        let mut mock = MockClipboard::new();
        let text = "x".repeat(MAX_CLIPBOARD_SIZE + 1);
        let err = copy_with_provider(&text, &mut mock).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_copy_provider_failure() {
        let mut mock = MockClipboard::with_failure();
        let err = copy_with_provider("Apple", &mut mock).unwrap_err();
        assert!(err.to_string().contains("Mock clipboard error"));
    }

    #[test]
    fn test_copy_to_clipboard_empty_fails_without_clipboard() {
        assert!(copy_to_clipboard("").is_err());
    }
}
