use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(Category::Text, 10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.last(), Some(19));
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn test_span_empty_has_no_last() {
    let span = Span::new(Category::Text, 4, 4);
    assert!(span.is_empty());
    assert_eq!(span.last(), None);
}

#[test]
fn test_span_text() {
    let source = "a /* b */ c";
    let span = Span::new(Category::Delimited, 2, 9);
    assert_eq!(span.text(source), "/* b */");
}

#[test]
fn test_span_text_off_boundary_is_empty() {
    let source = "\u{e9}t\u{e9}";
    let span = Span::new(Category::Text, 1, 3);
    assert_eq!(span.text(source), "");
}

#[test]
fn test_span_extend_back() {
    let span = Span::new(Category::WholeLine, 4, 10).extend_back_to(1);
    assert_eq!(span.to_range(), 1..10);
    let unchanged = Span::new(Category::WholeLine, 4, 10).extend_back_to(6);
    assert_eq!(unchanged.to_range(), 4..10);
}

#[test]
fn test_span_formatting() {
    let span = Span::new(Category::LineEnd, 3, 8);
    assert_eq!(format!("{span}"), "3..8");
    assert_eq!(format!("{span:?}"), "LineEnd 3..8");
}
