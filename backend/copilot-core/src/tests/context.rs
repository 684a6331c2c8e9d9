use crate::context::{ContextExtractor, DEFAULT_MAX_CONTEXT_CHARS, PageSnapshot, truncate_chars};

/// **VALUE**: Verifies the body never exceeds the configured bound, whatever the page size.
///
/// **WHY THIS MATTERS**: The bound caps request size and cost. A page larger than the limit
/// must not reach the API in full.
#[test]
fn given_various_limits_when_captured_then_body_never_exceeds_limit() {
    // GIVEN: A page with mixed-width characters
    let text = "Grüße aus Köln. שלום עולם. 你好世界. ".repeat(50);
    let extractor = ContextExtractor::new(PageSnapshot::new("https://example.com", "Mixed", text));

    // WHEN / THEN: Every limit is honored
    for limit in [1, 2, 7, 64, 999, 5_000, DEFAULT_MAX_CONTEXT_CHARS] {
        let context = extractor.capture(limit);
        assert!(
            context.body_text().chars().count() <= limit,
            "limit {limit} exceeded"
        );
    }
}

#[test]
fn given_short_page_when_captured_then_body_kept_whole() {
    let extractor = ContextExtractor::new(PageSnapshot::new(
        "https://example.com/a",
        "Example",
        "Short body.",
    ));

    let context = extractor.capture(DEFAULT_MAX_CONTEXT_CHARS);

    assert_eq!(context.url(), "https://example.com/a");
    assert_eq!(context.title(), "Example");
    assert_eq!(context.body_text(), "Short body.");
}

#[test]
fn given_page_without_text_when_captured_then_body_is_empty() {
    let extractor = ContextExtractor::new(PageSnapshot::new("about:blank", "", ""));

    let context = extractor.capture(10);

    assert_eq!(context.body_text(), "");
    assert_eq!(context.url(), "about:blank");
}

/// **BUG THIS CATCHES**: Byte slicing would panic on a multi-byte boundary or
/// produce invalid UTF-8.
#[test]
fn given_multibyte_text_when_truncated_then_keeps_whole_characters() {
    assert_eq!(truncate_chars("héllo", 2), "hé");
    assert_eq!(truncate_chars("שלום", 3), "שלו");
    assert_eq!(truncate_chars("abc", 3), "abc");
    assert_eq!(truncate_chars("abc", 0), "");
}

#[test]
fn given_same_source_when_captured_twice_then_contexts_equal() {
    let extractor = ContextExtractor::new(PageSnapshot::new("u", "t", "body"));

    assert_eq!(extractor.capture(3), extractor.capture(3));
}
