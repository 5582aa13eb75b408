//! Bracket-Tag Highlighting
//!
//! Splits row text into plain runs and `[...]` tag runs so the view can
//! wrap tags in a styled span. Display-only: the stored text is never the
//! decorated form, and concatenating the runs gives back the input.

/// One run of row text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Tag(&'a str),
}

/// Split `text` into plain and tag runs.
///
/// A tag starts at `[`, holds at least one character, ends at the last `]`
/// before the next `[` (so `[a]b]` is one tag and `[]` is none) and never
/// nests. Surrounding whitespace stays in the plain runs.
pub fn spans(text: &str) -> Vec<Span<'_>> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'[' {
            // stretch from after '[' up to the next '[' or the end
            let stretch_end = bytes[pos + 1..]
                .iter()
                .position(|&b| b == b'[')
                .map(|off| pos + 1 + off)
                .unwrap_or(bytes.len());
            // last ']' in the stretch, with something between the brackets
            let close = bytes[pos + 1..stretch_end]
                .iter()
                .rposition(|&b| b == b']')
                .map(|off| pos + 1 + off);
            if let Some(close) = close {
                if close > pos + 1 {
                    if plain_start < pos {
                        out.push(Span::Plain(&text[plain_start..pos]));
                    }
                    out.push(Span::Tag(&text[pos..=close]));
                    plain_start = close + 1;
                    pos = close + 1;
                    continue;
                }
            }
        }
        pos += 1;
    }

    if plain_start < text.len() {
        out.push(Span::Plain(&text[plain_start..]));
    }
    out
}

/// Render `text` as markup with tag runs wrapped in `<span class="tag">`
pub fn to_html(text: &str) -> String {
    let mut html = String::with_capacity(text.len() + 16);
    for span in spans(text) {
        match span {
            Span::Plain(run) => push_escaped(&mut html, run),
            Span::Tag(run) => {
                html.push_str("<span class=\"tag\">");
                push_escaped(&mut html, run);
                html.push_str("</span>");
            }
        }
    }
    html
}

fn push_escaped(out: &mut String, run: &str) {
    for ch in run.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
