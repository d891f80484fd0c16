use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use crate::engine::extractor::formats::FormatType;

/// A file on disk the user asked to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    path: PathBuf,
    filename: String,
    extension: Option<String>,
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Document {{ path: {}, filename: {}, extension: {:?} }}",
            self.path.display(),
            self.filename,
            self.extension
        )
    }
}

impl Document {
    pub fn from_path(path: &Path) -> Self {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_string();

        let extension = if extension.is_empty() {
            None
        } else {
            Some(extension)
        };

        Document {
            path: path.to_path_buf(),
            filename,
            extension,
        }
    }

    pub fn get_path(&self) -> &Path {
        &self.path
    }

    pub fn get_filename(&self) -> &str {
        &self.filename
    }

    pub fn get_extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Extension with its leading dot, or an empty string when the file has none.
    pub fn get_extension_display(&self) -> String {
        self.get_extension()
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default()
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn get_format_type(&self) -> FormatType {
        FormatType::get_by_extension(self.get_extension().unwrap_or(""))
    }
}
