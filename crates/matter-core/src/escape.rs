//! Tab escaping for YAML headers.
//!
//! YAML forbids tabs as structural indentation, so headers written with
//! tab-indented nesting would be rejected by the generic decoder. This pass
//! rewrites every tab run at the start of a line to two spaces per tab,
//! preserving indentation depth. Tabs elsewhere in a line are untouched.

/// Replace each newline-plus-tab-run with a newline and two spaces per tab.
///
/// A `\r\n` directly before such a tab run is normalized to `\n`. The
/// transform is a fixed point: applying it twice yields the same text.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(nl) = rest.find('\n') {
        let tabs = rest[nl + 1..].bytes().take_while(|&b| b == b'\t').count();
        if tabs == 0 {
            out.push_str(&rest[..nl + 1]);
            rest = &rest[nl + 1..];
            continue;
        }
        let keep = if rest[..nl].ends_with('\r') { nl - 1 } else { nl };
        out.push_str(&rest[..keep]);
        out.push('\n');
        for _ in 0..tabs {
            out.push_str("  ");
        }
        rest = &rest[nl + 1 + tabs..];
    }

    out.push_str(rest);
    out
}
