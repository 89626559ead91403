use inker_engine::{Clipboard, ClipboardBridge, ClipboardError, WorkflowError};
use pretty_assertions::assert_eq;

/// In-memory stand-in for the OS clipboard.
#[derive(Default)]
struct MemoryClipboard {
    contents: Option<String>,
    writes: usize,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Backend("no display".to_string()))
    }
}

#[test]
fn copy_places_text_on_the_clipboard() {
    let mut bridge = ClipboardBridge::new(MemoryClipboard::default());

    bridge.copy("Hello World").unwrap();

    let clipboard = bridge.into_inner();
    assert_eq!(clipboard.contents.as_deref(), Some("Hello World"));
}

#[test]
fn repeated_copies_are_idempotent() {
    let mut bridge = ClipboardBridge::new(MemoryClipboard::default());

    bridge.copy("Hello World").unwrap();
    bridge.copy("Hello World").unwrap();

    let clipboard = bridge.into_inner();
    assert_eq!(clipboard.contents.as_deref(), Some("Hello World"));
    assert_eq!(clipboard.writes, 2);
}

#[test]
fn empty_text_is_rejected_and_clipboard_untouched() {
    let mut clipboard = MemoryClipboard::default();
    clipboard.contents = Some("prior".to_string());
    let mut bridge = ClipboardBridge::new(clipboard);

    let result = bridge.copy("");

    assert_eq!(result, Err(WorkflowError::EmptyContent));
    let clipboard = bridge.into_inner();
    assert_eq!(clipboard.contents.as_deref(), Some("prior"));
    assert_eq!(clipboard.writes, 0);
}

#[test]
fn backend_failure_surfaces_as_clipboard_error() {
    let mut bridge = ClipboardBridge::new(FailingClipboard);

    let result = bridge.copy("Hello World");

    assert_eq!(
        result,
        Err(WorkflowError::Clipboard(
            "clipboard backend unavailable: no display".to_string()
        ))
    );
}
