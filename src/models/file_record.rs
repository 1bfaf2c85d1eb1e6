//! Virtual file record

use compact_str::CompactString;
use slotmap::new_key_type;

new_key_type! { pub struct FileId; }

/// Display icon for a file, derived from its extension only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileIcon {
    JavaScript,
    Html,
    Css,
    Python,
    Generic,
}

impl FileIcon {
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some("js" | "jsx") => Self::JavaScript,
            Some("html") => Self::Html,
            Some("css") => Self::Css,
            Some("py") => Self::Python,
            _ => Self::Generic,
        }
    }

    /// Two-cell glyph used by the file list.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::JavaScript => "JS",
            Self::Html => "<>",
            Self::Css => "#{",
            Self::Python => "Py",
            Self::Generic => "{}",
        }
    }
}

/// Final dot-segment of `name`, or `None` when there is no dot or the name
/// ends with one.
pub fn extension_of(name: &str) -> Option<&str> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    name: CompactString,
    extension: Option<CompactString>,
    icon: FileIcon,
    pub content: String,
}

impl FileRecord {
    pub fn new(name: &str) -> Self {
        let extension = extension_of(name).map(CompactString::from);
        let icon = FileIcon::from_extension(extension.as_deref());
        Self {
            name: CompactString::from(name),
            extension,
            icon,
            content: String::new(),
        }
    }

    pub fn with_content(name: &str, content: impl Into<String>) -> Self {
        let mut record = Self::new(name);
        record.content = content.into();
        record
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn icon(&self) -> FileIcon {
        self.icon
    }

    /// Renames in place, re-deriving the extension and icon.
    pub(super) fn set_name(&mut self, name: &str) {
        let content = std::mem::take(&mut self.content);
        *self = Self::with_content(name, content);
    }
}
