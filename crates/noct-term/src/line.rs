//! Output line model: markup text, style tag, reveal delay.

/// Visual treatment for a rendered line.
///
/// Opaque to engine logic except for [`Style::is_banner`], which selects the
/// whole-line-then-hold playback branch (per-character reveal would corrupt
/// the alignment of multi-column art).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Default,
    White,
    Dim,
    Green,
    Cyan,
    Amber,
    Red,
    Error,
    Link,
    Heading,
    SubHeading,
    Separator,
    /// Full-width ASCII-art banner row.
    Banner,
    /// Compact banner for narrow surfaces.
    BannerCompact,
    /// Boot phrase (slow-typed).
    Intro,
    /// Centered title line.
    Title,
    /// Centered dim tagline.
    Tagline,
    /// Centered hint line.
    HintCentered,
}

impl Style {
    /// Banner-category styles render whole and hold instead of typing.
    pub fn is_banner(self) -> bool {
        matches!(self, Self::Banner | Self::BannerCompact)
    }

    /// Styles rendered centered on the surface.
    pub fn is_centered(self) -> bool {
        matches!(
            self,
            Self::BannerCompact | Self::Title | Self::Tagline | Self::HintCentered
        )
    }
}

/// A unit of rendered output.
///
/// Constructed by a command handler, consumed exactly once by the playback
/// engine, never mutated after creation.
#[derive(Debug, Clone)]
pub struct OutputLine {
    /// Markup-bearing content (opaque payload, see [`crate::markup`]).
    pub text: String,
    /// Visual treatment tag, passed through to the rendering surface.
    pub style: Style,
    /// Per-line reveal delay in milliseconds. `None` uses the sequence
    /// default; `Some(0)` renders instantly with no pause.
    pub delay_ms: Option<u64>,
}

impl OutputLine {
    /// A line using the sequence's default delay.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            delay_ms: None,
        }
    }

    /// A line rendered instantly (delay 0).
    pub fn instant(text: impl Into<String>, style: Style) -> Self {
        Self::new(text, style).with_delay(0)
    }

    /// An empty spacer line (instant).
    pub fn blank() -> Self {
        Self::instant("", Style::Default)
    }

    /// Override the per-line delay.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }
}
