//! Delimiter detection — isolates the metadata header from the document body.
//!
//! Two historical layouts are recognized, tried in priority order:
//!
//! 1. **Old style**: the document opens with a delimiter line and the header
//!    runs until the first line carrying exactly the same token
//!    (`---\nfoo\n---\nbody`).
//! 2. **New style**: everything before the first delimiter line is the header
//!    (`foo\n---\nbody`).
//!
//! A document that opens with a delimiter-like prefix but never closes it in
//! old style is plain content, not a header. A delimiter only counts when it
//! occupies its line in entirety; `---foo` never marks a boundary. Body text
//! after the first closing delimiter is returned verbatim, including any
//! further delimiter-shaped lines it contains.

/// Outcome of scanning a document for a front matter header.
///
/// `data` is present iff a header was detected. When it is absent, `content`
/// is the entire input unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplitResult<'a> {
    /// Raw header text, not yet decoded.
    pub data: Option<&'a str>,
    /// Body text following the header, or the whole document.
    pub content: &'a str,
    /// The delimiter token that matched, verbatim (e.g. `---` or `;;;;`).
    /// Its leading character implies the decode mode: `;` is JSON, `-` YAML.
    pub separator: Option<&'a str>,
    /// True when the delimiter appears before and after the header
    /// (old style).
    pub prefix_separator: bool,
}

/// Split a document into header and body.
pub fn split(text: &str) -> SplitResult<'_> {
    if let Some(result) = split_old_style(text) {
        return result;
    }

    // A dangling delimiter prefix means the document resembles an old-style
    // header that never closed: the whole text is body.
    if has_delimiter_prefix(text) {
        return SplitResult {
            content: text,
            ..Default::default()
        };
    }

    if let Some(result) = split_new_style(text) {
        return result;
    }

    SplitResult {
        content: text,
        ..Default::default()
    }
}

/// Old style: `<token>\n<header>\n<token>[\n<body>]`, same token both sides.
fn split_old_style(text: &str) -> Option<SplitResult<'_>> {
    let (first_line, rest) = text.split_once('\n')?;
    let separator = as_delimiter_line(first_line)?;

    let header_start = first_line.len() + 1;
    let mut offset = header_start;
    for line in rest.split('\n') {
        if as_delimiter_line(line) == Some(separator) {
            if offset == header_start {
                return None;
            }
            let data = trim_line_end(&text[header_start..offset - 1]);
            if data.is_empty() {
                return None;
            }
            let content_start = offset + line.len() + 1;
            return Some(SplitResult {
                data: Some(data),
                content: text.get(content_start..).unwrap_or(""),
                separator: Some(separator),
                prefix_separator: true,
            });
        }
        offset += line.len() + 1;
    }
    None
}

/// New style: `<header>\n<token>[\n<body>]`. The earliest delimiter line with
/// non-empty preceding text wins.
fn split_new_style(text: &str) -> Option<SplitResult<'_>> {
    let mut offset = 0;
    for line in text.split('\n') {
        if offset > 0 {
            if let Some(separator) = as_delimiter_line(line) {
                let data = trim_line_end(&text[..offset - 1]);
                if !data.is_empty() {
                    let content_start = offset + line.len() + 1;
                    return Some(SplitResult {
                        data: Some(data),
                        content: text.get(content_start..).unwrap_or(""),
                        separator: Some(separator),
                        prefix_separator: false,
                    });
                }
            }
        }
        offset += line.len() + 1;
    }
    None
}

/// Does the text open with 3+ repetitions of `-` or `;`? The rest of the
/// first line does not matter here; this is what disqualifies `---foo`
/// documents from the new-style scan.
fn has_delimiter_prefix(text: &str) -> bool {
    let mut bytes = text.bytes();
    match bytes.next() {
        Some(first @ (b'-' | b';')) => 1 + bytes.take_while(|&b| b == first).count() >= 3,
        _ => false,
    }
}

/// Check that a line consists solely of 3+ repetitions of `-` or `;`.
/// Returns the token without any trailing `\r`.
fn as_delimiter_line(line: &str) -> Option<&str> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let first = *line.as_bytes().first()?;
    if first != b'-' && first != b';' {
        return None;
    }
    (line.len() >= 3 && line.bytes().all(|b| b == first)).then_some(line)
}

/// Drop a `\r` left behind when the delimiting `\n` was part of a `\r\n`.
fn trim_line_end(data: &str) -> &str {
    data.strip_suffix('\r').unwrap_or(data)
}
