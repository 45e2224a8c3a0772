use matter_core::escape;

#[test]
fn escapes_leading_tabs_after_newlines() {
    assert_eq!(escape("foo\n\tbar\n\t\tbaz"), "foo\n  bar\n    baz");
}

#[test]
fn leaves_text_without_tabs_untouched() {
    assert_eq!(escape("foo\nbar\n"), "foo\nbar\n");
}

#[test]
fn inner_tabs_are_not_indentation() {
    assert_eq!(escape("foo\tbar\nbaz"), "foo\tbar\nbaz");
}

#[test]
fn tabs_at_start_of_text_are_untouched() {
    // The transform anchors on newlines; a tab run before the first line
    // break is not rewritten.
    assert_eq!(escape("\tfoo\n\tbar"), "\tfoo\n  bar");
}

#[test]
fn crlf_before_tabs_is_normalized() {
    assert_eq!(escape("foo\r\n\tbar"), "foo\n  bar");
}

#[test]
fn crlf_without_tabs_is_preserved() {
    assert_eq!(escape("foo\r\nbar"), "foo\r\nbar");
}

#[test]
fn escape_is_idempotent() {
    let once = escape("foo\n\tbar\n\t\tbaz");
    assert_eq!(escape(&once), once);
}

#[test]
fn empty_input() {
    assert_eq!(escape(""), "");
}
