use serde::{Deserialize, Serialize};

/// Syntax-highlighting mode understood by the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxMode {
    #[default]
    JavaScript,
    Markup,
    Stylesheet,
    Python,
}

impl SyntaxMode {
    /// Unknown or missing extensions fall back to [`SyntaxMode::Markup`].
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some("js" | "jsx") => Self::JavaScript,
            Some("html") => Self::Markup,
            Some("css") => Self::Stylesheet,
            Some("py") => Self::Python,
            _ => Self::Markup,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Markup => "markup",
            Self::Stylesheet => "stylesheet",
            Self::Python => "python",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Markup => "Markup",
            Self::Stylesheet => "CSS",
            Self::Python => "Python",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "javascript" => Some(Self::JavaScript),
            "markup" => Some(Self::Markup),
            "stylesheet" => Some(Self::Stylesheet),
            "python" => Some(Self::Python),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
