use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::highlighting::{
    Color as SyntectColor, HighlightIterator, HighlightState, Highlighter, ThemeSet,
};
use syntect::parsing::{ParseState, ScopeStack, SyntaxSet};

use crate::app::domain::editor_mode::EditorMode;
use crate::app::domain::settings::SyntaxTheme;

/// Turns editor text into an FLTK style-character string.
///
/// Workspace files are small, so every pass re-highlights the whole buffer;
/// the caller debounces keystrokes before asking.
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    style_map: StyleMap,
}

impl SyntaxHighlighter {
    pub fn new(theme: SyntaxTheme, font: Font, font_size: i32) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.theme_key().to_string(),
            style_map: StyleMap::new(font, font_size),
        }
    }

    /// Highlight `text` as `mode`'s language. The result has exactly one
    /// style character per byte of `text`.
    pub fn highlight(&mut self, text: &str, mode: EditorMode) -> String {
        let syntax = match self
            .syntax_set
            .find_syntax_by_extension(mode.syntax_extension())
        {
            Some(s) => s.clone(),
            None => return plain_style(text),
        };
        let theme = &self.theme_set.themes[&self.theme_name];
        let highlighter = Highlighter::new(theme);
        let mut parse_state = ParseState::new(&syntax);
        let mut highlight_state = HighlightState::new(&highlighter, ScopeStack::new());
        let mut style_string = String::with_capacity(text.len());

        for line in LinesWithEndings::new(text) {
            let ops = parse_state
                .parse_line(line, &self.syntax_set)
                .unwrap_or_default();
            let iter = HighlightIterator::new(&mut highlight_state, &ops, line, &highlighter);
            for (style, piece) in iter {
                let ch = self.style_map.get_or_insert(style.foreground);
                // One style char per byte (not per char) for UTF-8 correctness
                for _ in 0..piece.len() {
                    style_string.push(ch);
                }
            }
        }

        style_string
    }

    /// Switch to a specific theme. Clears the style map.
    pub fn set_theme(&mut self, theme: SyntaxTheme) {
        self.theme_name = theme.theme_key().to_string();
        self.style_map.clear();
    }

    /// Update the font used in style table entries.
    pub fn set_font(&mut self, font: Font, size: i32) {
        self.style_map.update_font(font, size);
    }

    /// Get the style table for FLTK's set_highlight_data.
    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.style_map.entries().to_vec()
    }

    /// Get the background color of the current theme as RGB tuple.
    pub fn theme_background(&self) -> (u8, u8, u8) {
        if let Some(theme) = self.theme_set.themes.get(&self.theme_name)
            && let Some(bg) = theme.settings.background
        {
            return (bg.r, bg.g, bg.b);
        }
        // Fallback to white
        (255, 255, 255)
    }

    /// Get the foreground color of the current theme as RGB tuple.
    pub fn theme_foreground(&self) -> (u8, u8, u8) {
        if let Some(theme) = self.theme_set.themes.get(&self.theme_name)
            && let Some(fg) = theme.settings.foreground
        {
            return (fg.r, fg.g, fg.b);
        }
        // Fallback to black
        (0, 0, 0)
    }
}

/// Style string for unhighlighted text: the default entry for every byte.
pub fn plain_style(text: &str) -> String {
    std::iter::repeat_n('A', text.len()).collect()
}

/// Maps syntect RGB colors to FLTK style characters ('A', 'B', 'C', ...).
/// Dynamically builds a StyleTableEntry table as new colors are encountered.
struct StyleMap {
    color_to_char: HashMap<(u8, u8, u8), char>,
    entries: Vec<StyleTableEntry>,
    font: Font,
    font_size: i32,
}

impl StyleMap {
    fn new(font: Font, font_size: i32) -> Self {
        let mut map = Self {
            color_to_char: HashMap::new(),
            entries: Vec::new(),
            font,
            font_size,
        };
        // Pre-insert 'A' as the default/fallback style (plain text color)
        map.entries.push(StyleTableEntry {
            color: Color::Foreground,
            font,
            size: font_size,
        });
        map.color_to_char.insert((0, 0, 0), 'A');
        map
    }

    /// Get the style character for a syntect color, inserting a new entry if needed.
    fn get_or_insert(&mut self, color: SyntectColor) -> char {
        let key = (color.r, color.g, color.b);
        if let Some(&ch) = self.color_to_char.get(&key) {
            return ch;
        }

        let idx = self.entries.len();
        // FLTK style chars go 'A'..'Z' then beyond if needed, but 26 colors is plenty
        if idx >= 26 {
            return (b'A' + 25) as char;
        }
        let ch = (b'A' + idx as u8) as char;
        self.entries.push(StyleTableEntry {
            color: Color::from_rgb(color.r, color.g, color.b),
            font: self.font,
            size: self.font_size,
        });
        self.color_to_char.insert(key, ch);
        ch
    }

    fn entries(&self) -> &[StyleTableEntry] {
        &self.entries
    }

    /// Clear all mappings (used on theme change).
    fn clear(&mut self) {
        self.color_to_char.clear();
        self.entries.clear();
        self.entries.push(StyleTableEntry {
            color: Color::Foreground,
            font: self.font,
            size: self.font_size,
        });
        self.color_to_char.insert((0, 0, 0), 'A');
    }

    /// Update font info for all entries.
    fn update_font(&mut self, font: Font, size: i32) {
        self.font = font;
        self.font_size = size;
        for entry in &mut self.entries {
            entry.font = font;
            entry.size = size;
        }
    }
}

/// Iterator that yields lines including their line endings.
struct LinesWithEndings<'a> {
    text: &'a str,
}

impl<'a> LinesWithEndings<'a> {
    fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl<'a> Iterator for LinesWithEndings<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.text.is_empty() {
            return None;
        }
        let end = self.text.find('\n').map(|i| i + 1).unwrap_or(self.text.len());
        let line = &self.text[..end];
        self.text = &self.text[end..];
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_highlighter() -> SyntaxHighlighter {
        SyntaxHighlighter::new(SyntaxTheme::Base16OceanDark, Font::Courier, 14)
    }

    #[test]
    fn test_style_string_covers_every_byte() {
        let mut hl = test_highlighter();
        let text = "let café = \"naïve\";\nconsole.log(café);\n";
        let styles = hl.highlight(text, EditorMode::Script);
        assert_eq!(styles.len(), text.len());
    }

    #[test]
    fn test_all_modes_resolve_a_syntax() {
        let mut hl = test_highlighter();
        for mode in [
            EditorMode::Script,
            EditorMode::Stylesheet,
            EditorMode::Data,
            EditorMode::Markup,
        ] {
            let styles = hl.highlight("x\n", mode);
            assert_eq!(styles.len(), 2, "mode {:?} produced wrong length", mode);
        }
    }

    #[test]
    fn test_highlighting_uses_more_than_one_style() {
        let mut hl = test_highlighter();
        let styles = hl.highlight("var answer = 42; // note\n", EditorMode::Script);
        let distinct: std::collections::HashSet<char> = styles.chars().collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_plain_style_matches_length() {
        assert_eq!(plain_style(""), "");
        assert_eq!(plain_style("héllo"), "AAAAAA");
    }

    #[test]
    fn test_style_table_starts_with_default_entry() {
        let hl = test_highlighter();
        let table = hl.style_table();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].color, Color::Foreground);
    }

    #[test]
    fn test_set_theme_resets_style_table() {
        let mut hl = test_highlighter();
        hl.highlight("body { color: red; }\n", EditorMode::Stylesheet);
        assert!(hl.style_table().len() > 1);

        hl.set_theme(SyntaxTheme::InspiredGitHub);
        assert_eq!(hl.style_table().len(), 1);
    }

    #[test]
    fn test_lines_with_endings_keeps_newlines() {
        let lines: Vec<&str> = LinesWithEndings::new("a\nbc\nd").collect();
        assert_eq!(lines, vec!["a\n", "bc\n", "d"]);
    }
}
