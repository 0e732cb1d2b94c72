/// Editing mode for the current document, inferred from its file extension.
///
/// Everything that is not a script, stylesheet or data file is treated as
/// markup, so `readme`, `.txt` and friends all render as HTML-ish text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    Script,
    Stylesheet,
    Data,
    #[default]
    Markup,
}

impl EditorMode {
    /// Infer the mode from a workspace path. The extension comparison is
    /// case-insensitive and only the final extension counts.
    pub fn from_path(path: &str) -> Self {
        let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        let ext = match name.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => return Self::Markup,
        };
        match ext.as_str() {
            "js" => Self::Script,
            "css" => Self::Stylesheet,
            "json" => Self::Data,
            _ => Self::Markup,
        }
    }

    /// Extension used to look up the matching syntect syntax definition.
    pub fn syntax_extension(&self) -> &'static str {
        match self {
            Self::Script => "js",
            Self::Stylesheet => "css",
            Self::Data => "json",
            Self::Markup => "html",
        }
    }

    /// Human-readable name shown in the current-file indicator.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Script => "JavaScript",
            Self::Stylesheet => "CSS",
            Self::Data => "JSON",
            Self::Markup => "HTML",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_for_each_extension() {
        assert_eq!(EditorMode::from_path("app.js"), EditorMode::Script);
        assert_eq!(EditorMode::from_path("style.css"), EditorMode::Stylesheet);
        assert_eq!(EditorMode::from_path("data.json"), EditorMode::Data);
        assert_eq!(EditorMode::from_path("index.html"), EditorMode::Markup);
    }

    #[test]
    fn test_unknown_extension_is_markup() {
        assert_eq!(EditorMode::from_path("notes.txt"), EditorMode::Markup);
        assert_eq!(EditorMode::from_path("picture.svg"), EditorMode::Markup);
    }

    #[test]
    fn test_no_extension_is_markup() {
        assert_eq!(EditorMode::from_path("Makefile"), EditorMode::Markup);
        assert_eq!(EditorMode::from_path(""), EditorMode::Markup);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(EditorMode::from_path("APP.JS"), EditorMode::Script);
        assert_eq!(EditorMode::from_path("Style.CsS"), EditorMode::Stylesheet);
        assert_eq!(EditorMode::from_path("Data.JSON"), EditorMode::Data);
    }

    #[test]
    fn test_only_final_extension_counts() {
        assert_eq!(EditorMode::from_path("bundle.min.js"), EditorMode::Script);
        assert_eq!(EditorMode::from_path("archive.tar.gz"), EditorMode::Markup);
    }

    #[test]
    fn test_nested_paths() {
        assert_eq!(EditorMode::from_path("src/lib/app.js"), EditorMode::Script);
        assert_eq!(EditorMode::from_path("assets.v2/readme"), EditorMode::Markup);
    }

    #[test]
    fn test_dotfile_with_known_extension() {
        assert_eq!(EditorMode::from_path(".json"), EditorMode::Data);
    }

    #[test]
    fn test_syntax_extension_roundtrip() {
        assert_eq!(EditorMode::Script.syntax_extension(), "js");
        assert_eq!(EditorMode::Stylesheet.syntax_extension(), "css");
        assert_eq!(EditorMode::Data.syntax_extension(), "json");
        assert_eq!(EditorMode::Markup.syntax_extension(), "html");
    }
}
