use std::fmt;

/// Character, line and word counts for a piece of text.
///
/// Character counts are in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane (most emoji) counts as 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub chars: usize,
    /// Characters left once all whitespace is removed
    pub no_space: usize,
    /// Newline-separated lines; empty text has none
    pub lines: usize,
    /// Whitespace-separated words, or `chars` when the text contains Japanese
    pub words: usize,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        let chars = utf16_len(text);
        let no_space = text
            .chars()
            .filter(|&c| !is_whitespace(c))
            .map(char::len_utf16)
            .sum();
        let lines = if text.is_empty() {
            0
        } else {
            text.split('\n').count()
        };

        // No word boundaries in Japanese, every character counts as a word
        let words = if contains_japanese(text) {
            chars
        } else {
            text.split(is_whitespace).filter(|w| !w.is_empty()).count()
        };

        Self {
            chars,
            no_space,
            lines,
            words,
        }
    }
}

impl From<&str> for TextStats {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "chars:    {}", self.chars)?;
        writeln!(f, "no space: {}", self.no_space)?;
        writeln!(f, "lines:    {}", self.lines)?;
        write!(f, "words:    {}", self.words)
    }
}

fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Hiragana, Katakana or CJK ideographs
pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{3040}'..='\u{309f}'
            | '\u{30a0}'..='\u{30ff}'
            | '\u{4e00}'..='\u{9faf}')
    })
}

/// Whitespace as browsers match it with `\s`: `char::is_whitespace` minus
/// U+0085, plus the byte order mark U+FEFF.
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\u{0085}' => false,
        '\u{feff}' => true,
        _ => c.is_whitespace(),
    }
}
