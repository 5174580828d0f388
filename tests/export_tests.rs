//! Integration tests for the exporters and the delivery layer

use chrono::TimeZone;
use std::sync::Mutex;
use tokensmith::clipboard::{ClipboardBackend, ClipboardError, ClipboardResult};
use tokensmith::config::{set_token_value, TokenConfig};
use tokensmith::export::{css, markdown, tailwind, ExportDelivery};
use tokensmith::view;

fn session_time() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc.with_ymd_and_hms(2025, 6, 1, 9, 15, 0).unwrap()
}

#[test]
fn test_markdown_documents_default_palette() {
    let md = markdown::render(&TokenConfig::default(), session_time());
    assert!(md.contains("- **Primary 400**: `#3B85FF` - Main brand color, used for primary actions"));
    assert!(md.contains("- **Primary 600**: `#0066BB` - Darker shade for hover states"));
    assert!(md.contains("- **Muted Text**: `#666666` - Placeholder and disabled text"));
    assert!(md.contains("### Active Font Family\nsans\n"));
}

#[test]
fn test_markdown_reflects_light_weight() {
    let mut config = TokenConfig::default();
    set_token_value(&mut config, "typography.weights.normal", "200").unwrap();

    let md = markdown::render(&config, session_time());
    assert!(md.contains("Thin and elegant"));
    assert!(md.contains("- **normal**: 200"));
}

#[test]
fn test_css_block_contract() {
    let css = css::render(&TokenConfig::default());
    assert!(css.contains("--border-radius: 0.5rem;"));
    assert!(css.contains("--spacing: 1rem;"));

    let mut config = TokenConfig::default();
    set_token_value(&mut config, "ui.activeBorderRadius", "full").unwrap();
    let css = css::render(&config);
    assert!(css.contains("--border-radius: 9999px;"));
}

#[test]
fn test_css_variable_order() {
    let css = css::render(&TokenConfig::default());
    let names: Vec<&str> = css
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix("--"))
        .filter_map(|rest| rest.split(':').next())
        .collect();
    assert_eq!(
        names,
        vec![
            "primary-400",
            "primary-600",
            "accent-400",
            "accent-600",
            "surface-bg",
            "surface",
            "text-primary",
            "text-secondary",
            "text-muted",
            "border-radius",
            "spacing"
        ]
    );
}

#[test]
fn test_tailwind_font_arrays() {
    let tw = tailwind::render(&TokenConfig::default());
    assert!(tw.contains("sans: ['Inter', 'system-ui', 'sans-serif'],"));
    assert!(tw.contains("serif: ['Georgia', 'serif'],"));
    assert!(tw.contains("mono: ['Monaco', 'monospace'],"));
}

#[test]
fn test_tailwind_preserves_empty_font_segments() {
    let mut config = TokenConfig::default();
    set_token_value(&mut config, "typography.fontFamily.sans", "Inter,,fallback").unwrap();

    let tw = tailwind::render(&config);
    assert!(tw.contains("sans: ['Inter', '', 'fallback'],"));
}

#[test]
fn test_unknown_selectors_degrade_gracefully() {
    let mut config = TokenConfig::default();
    set_token_value(&mut config, "ui.shadowIntensity", "dramatic").unwrap();
    set_token_value(&mut config, "typography.baseFontFamily", "display").unwrap();

    assert_eq!(view::resolve_shadow(&config.ui.shadow_intensity), view::SHADOW_MEDIUM);
    assert_eq!(view::resolve_font_stack(&config), "Inter, system-ui, sans-serif");

    // Exporters keep working with the documented fallbacks
    set_token_value(&mut config, "ui.activeBorderRadius", "mega").unwrap();
    let css = css::render(&config);
    assert!(css.contains("--border-radius: 0.5rem;"));
}

struct RecordingClipboard {
    copied: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    fn new() -> Self {
        Self {
            copied: Mutex::new(Vec::new()),
        }
    }
}

impl ClipboardBackend for &RecordingClipboard {
    fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct UnavailableClipboard;

impl ClipboardBackend for UnavailableClipboard {
    fn copy_text(&self, _text: &str) -> ClipboardResult<()> {
        Err(ClipboardError::NoBackend)
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[test]
fn test_backend_availability_reflects_backend() {
    let recording = RecordingClipboard::new();
    assert!((&recording).is_available());
    assert!(!UnavailableClipboard.is_available());
}

#[test]
fn test_delivery_copies_document_and_marks_indicator() {
    let clipboard = RecordingClipboard::new();
    let mut delivery = ExportDelivery::new(&clipboard);

    let config = TokenConfig::default();
    let document = delivery.deliver_markdown(&config);

    let copied = clipboard.copied.lock().unwrap();
    assert_eq!(copied.len(), 1);
    assert_eq!(copied[0], document);
    assert!(delivery.indicator.is_copied());
    assert!(document.contains("# Nova UI Design System"));
}

#[test]
fn test_delivery_without_clipboard_still_renders() {
    let mut delivery = ExportDelivery::new(UnavailableClipboard);

    let document = delivery.deliver_markdown(&TokenConfig::default());
    assert!(document.contains("## Color Palette"));
    assert!(!delivery.indicator.is_copied());
}
