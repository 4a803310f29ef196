//! Inline markup for styled line content.
//!
//! Handler-authored line text may carry a small tag language: `<g>` green,
//! `<c>` cyan, `<a>` amber, `<r>` red, `<w>` white, `<d>` dim, `<b>` bold,
//! `<u>` underline, closed by `</>` or `</x>`. The entities `&lt;`, `&gt;`,
//! and `&amp;` stand for literal `<`, `>`, `&`.
//!
//! The engine treats markup as an opaque payload: the only operations it
//! performs are [`escape`] (mandatory for user-typed text so it is never
//! interpreted as markup), [`strip`] (plain text, which defines the unit
//! count for character-by-character reveal), and [`parse`] (styled segments
//! for the rendering surface).

/// A color or attribute applied by a markup tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Green,
    Cyan,
    Amber,
    Red,
    White,
    Dim,
    Bold,
    Underline,
}

impl Tag {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "g" => Some(Self::Green),
            "c" => Some(Self::Cyan),
            "a" => Some(Self::Amber),
            "r" => Some(Self::Red),
            "w" => Some(Self::White),
            "d" => Some(Self::Dim),
            "b" => Some(Self::Bold),
            "u" => Some(Self::Underline),
            _ => None,
        }
    }

    fn is_color(self) -> bool {
        !matches!(self, Self::Bold | Self::Underline)
    }
}

/// A run of text with resolved styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// Innermost color tag in effect, if any.
    pub color: Option<Tag>,
    pub bold: bool,
    pub underline: bool,
}

/// Escape user-supplied text so none of it is interpreted as markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Strip tags and decode entities, yielding the plain rendered text.
///
/// This is what character-by-character reveal animates over, so raw markup
/// is never visible mid-reveal.
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        match ch {
            '<' => {
                // Skip to the closing '>'. An unterminated tag is dropped.
                for (_, c) in chars.by_ref() {
                    if c == '>' {
                        break;
                    }
                }
            },
            '&' => match entity_at(text, i) {
                Some((decoded, len)) => {
                    out.push(decoded);
                    // Consume the rest of the entity.
                    for _ in 0..len - 1 {
                        chars.next();
                    }
                },
                None => out.push('&'),
            },
            _ => out.push(ch),
        }
    }
    out
}

/// Parse markup into styled segments for the rendering surface.
///
/// Unknown tags are dropped. A closing tag pops the innermost open tag;
/// unclosed tags apply to the end of the line.
pub fn parse(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut stack: Vec<Tag> = Vec::new();
    let mut current = String::new();
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        match ch {
            '<' => {
                let mut name = String::new();
                let mut terminated = false;
                for (_, c) in chars.by_ref() {
                    if c == '>' {
                        terminated = true;
                        break;
                    }
                    name.push(c);
                }
                if !terminated {
                    break;
                }
                if !current.is_empty() {
                    segments.push(make_segment(std::mem::take(&mut current), &stack));
                }
                if name.starts_with('/') {
                    stack.pop();
                } else if let Some(tag) = Tag::from_name(&name) {
                    stack.push(tag);
                }
                // Unknown open tags are ignored entirely.
            },
            '&' => match entity_at(text, i) {
                Some((decoded, len)) => {
                    current.push(decoded);
                    for _ in 0..len - 1 {
                        chars.next();
                    }
                },
                None => current.push('&'),
            },
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        segments.push(make_segment(current, &stack));
    }
    segments
}

fn make_segment(text: String, stack: &[Tag]) -> Segment {
    Segment {
        text,
        color: stack.iter().rev().copied().find(|t| t.is_color()),
        bold: stack.contains(&Tag::Bold),
        underline: stack.contains(&Tag::Underline),
    }
}

/// Decode the entity starting at byte offset `i`, returning the character
/// and the entity's length in chars.
fn entity_at(text: &str, i: usize) -> Option<(char, usize)> {
    let rest = &text[i..];
    if rest.starts_with("&lt;") {
        Some(('<', 4))
    } else if rest.starts_with("&gt;") {
        Some(('>', 4))
    } else if rest.starts_with("&amp;") {
        Some(('&', 5))
    } else {
        None
    }
}
