//! Status bar content: modification marker, character count, font choice.
//!
//! Pure functions only. The browser layer decides where the strings go.

use std::fmt;
use std::str::FromStr;

use crate::config::EnhancerConfig;

/// Non-breaking space, keeps the marker slot from collapsing when clean.
pub const CLEAN_MARKER: &str = "\u{a0}";

/// Snapshot of what the status bar should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    /// Text differs from the baseline captured at load.
    pub modified: bool,
    /// Length of the text in UTF-16 code units, as the browser counts
    /// `value.length`. Characters outside the BMP count twice.
    pub char_count: usize,
}

impl StatusView {
    /// Compute the view for `text` against `original`.
    pub fn for_text(text: &str, original: &str) -> Self {
        Self {
            modified: text != original,
            char_count: text.encode_utf16().count(),
        }
    }

    pub fn marker<'a>(&self, config: &'a EnhancerConfig) -> &'a str {
        modification_label(self.modified, config)
    }

    pub fn char_count_label(&self) -> String {
        char_count_label(self.char_count)
    }
}

/// Marker shown in the modification slot.
pub fn modification_label(modified: bool, config: &EnhancerConfig) -> &str {
    if modified {
        config.modified_marker.as_str()
    } else {
        CLEAN_MARKER
    }
}

/// `"1 char"`, otherwise `"N chars"`.
pub fn char_count_label(count: usize) -> String {
    if count == 1 {
        "1 char".to_owned()
    } else {
        format!("{count} chars")
    }
}

/// Font families offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Sans,
    Serif,
    Monospace,
}

impl FontFamily {
    /// All choices, in selector order.
    pub const ALL: [FontFamily; 3] = [FontFamily::Sans, FontFamily::Serif, FontFamily::Monospace];

    /// Option value and class-name suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::Sans => "sans",
            FontFamily::Serif => "serif",
            FontFamily::Monospace => "monospace",
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            FontFamily::Sans => "Sans-serif",
            FontFamily::Serif => "Serif",
            FontFamily::Monospace => "Monospace",
        }
    }

    /// Full class token for this font, e.g. `ti-font-serif`.
    pub fn class_name(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.as_str())
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised font selector value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown font family: {0}")]
pub struct UnknownFont(pub String);

impl FromStr for FontFamily {
    type Err = UnknownFont;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sans" => Ok(FontFamily::Sans),
            "serif" => Ok(FontFamily::Serif),
            "monospace" => Ok(FontFamily::Monospace),
            other => Err(UnknownFont(other.to_owned())),
        }
    }
}

/// Replace every `prefix*` token in a class attribute with a single token
/// for `font`. Other classes keep their order.
pub fn swap_font_class(class_attr: &str, prefix: &str, font: FontFamily) -> String {
    let font_class = font.class_name(prefix);
    class_attr
        .split_ascii_whitespace()
        .filter(|token| !token.starts_with(prefix))
        .chain(std::iter::once(font_class.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_pluralization() {
        let table = [0, 1, 2, 11]
            .into_iter()
            .map(char_count_label)
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(table, @r"
        0 chars
        1 char
        2 chars
        11 chars
        ");
    }

    #[test]
    fn test_char_count_counts_chars_not_bytes() {
        let view = StatusView::for_text("héllo ✓", "");
        assert_eq!(view.char_count, 7);
        assert_eq!(view.char_count_label(), "7 chars");
    }

    #[test]
    fn test_char_count_matches_js_length() {
        // One emoji is a surrogate pair in the browser.
        assert_eq!(StatusView::for_text("🙂", "").char_count, 2);
        assert_eq!(StatusView::for_text("a🙂b", "").char_count_label(), "4 chars");
    }

    #[test]
    fn test_marker_blank_iff_unchanged() {
        let config = EnhancerConfig::default();
        let clean = StatusView::for_text("Hello", "Hello");
        let changed = StatusView::for_text("Hello!", "Hello");

        assert_eq!(clean.marker(&config), CLEAN_MARKER);
        assert_eq!(changed.marker(&config), "(*)");

        // Reverting to the original text clears the marker again.
        let reverted = StatusView::for_text("Hello", "Hello");
        assert_eq!(reverted.marker(&config), CLEAN_MARKER);
    }

    #[test]
    fn test_font_parse() {
        for font in FontFamily::ALL {
            assert_eq!(font.as_str().parse::<FontFamily>(), Ok(font));
        }
        assert!("comic".parse::<FontFamily>().is_err());
    }

    #[test]
    fn test_font_swap_is_exclusive() {
        let prefix = "ti-font-";
        let mut classes = "text-input wide".to_owned();

        for font in [
            FontFamily::Serif,
            FontFamily::Monospace,
            FontFamily::Serif,
            FontFamily::Sans,
        ] {
            classes = swap_font_class(&classes, prefix, font);
            let font_tokens: Vec<_> = classes
                .split_whitespace()
                .filter(|t| t.starts_with(prefix))
                .collect();
            assert_eq!(font_tokens, vec![font.class_name(prefix)]);
        }

        assert_eq!(classes, "text-input wide ti-font-sans");
    }

    #[test]
    fn test_font_swap_strips_duplicates() {
        let swapped = swap_font_class(
            "ti-font-serif text-input ti-font-monospace",
            "ti-font-",
            FontFamily::Sans,
        );
        assert_eq!(swapped, "text-input ti-font-sans");
    }

    #[test]
    fn test_font_swap_on_empty_class() {
        assert_eq!(swap_font_class("", "ti-font-", FontFamily::Serif), "ti-font-serif");
    }
}
