//! Single-line code frames.
//!
//! A frame is a window of the source around an offset with line feeds
//! rendered as the two characters `\n`, followed by a caret line:
//!
//! ```text
//! value |> upper |>
//!                  ^
//! ```

/// Bytes of context shown on each side of the highlighted offset.
pub const DEFAULT_PADDING: usize = 25;

/// Highlight `index` in `source` with the default padding.
pub fn highlight(source: &str, index: usize) -> String {
    highlight_with_padding(source, index, DEFAULT_PADDING)
}

/// Highlight `index` in `source`, showing up to `padding` bytes either side.
///
/// Offsets past the end point just after the last character. Window edges
/// are widened to character boundaries.
pub fn highlight_with_padding(source: &str, index: usize, padding: usize) -> String {
    let index = floor_boundary(source, index.min(source.len()));
    let start = floor_boundary(source, index.saturating_sub(padding));
    let end = ceil_boundary(source, index.saturating_add(padding).min(source.len()));

    let before = escape_line_feeds(&source[start..index]);
    let after = escape_line_feeds(&source[index..end]);
    let column = before.chars().count();

    format!("{before}{after}\n{}^", " ".repeat(column))
}

/// Format `message` over a tab-indented code frame.
///
/// This is the presentation hook for any failure reported against a
/// source text; it never influences whether a rewrite succeeds.
pub fn render(message: &str, source: &str, index: usize) -> String {
    let frame = highlight(source, index).replacen('\n', "\n\t", 1);
    format!("{}:\n\n\t{frame}\n", capitalize(message))
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            let mut out = String::with_capacity(message.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        _ => message.to_string(),
    }
}

fn escape_line_feeds(text: &str) -> String {
    text.replace("\r\n", "\\n").replace('\n', "\\n")
}

fn floor_boundary(source: &str, mut index: usize) -> usize {
    while !source.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_boundary(source: &str, mut index: usize) -> usize {
    while !source.is_char_boundary(index) {
        index += 1;
    }
    index
}
