// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::file::looks_like_dir_hint;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub collect: CollectOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }

    /// `.tsv` means tab-separated; anything else is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => ExportFormat::Tsv,
            _ => ExportFormat::Csv,
        }
    }
}

/// Directory + stem; the extension always follows the chosen format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
}

impl OutputPath {
    pub fn new(dir: impl Into<PathBuf>, stem: impl Into<OsString>) -> Self {
        Self { dir: dir.into(), file_stem: stem.into() }
    }

    pub fn with_format(&self, format: ExportFormat) -> PathBuf {
        let stem = self.file_stem.to_string_lossy();
        self.dir.join(join!(stem, ".", format.ext()))
    }

    /// Parse user text into dir + stem. A pasted extension is ignored; a
    /// trailing separator changes only the directory.
    pub fn set(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if looks_like_dir_hint(p) {
            self.dir = p.to_path_buf();
            return;
        }
        if let Some(parent) = p.parent() {
            self.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    /// Listing directory; `first_page` and every "next" href resolve against it.
    pub base_url: String,
    pub first_page: String,
    /// Most pages a run may request before it fails.
    pub page_cap: usize,
    pub format: ExportFormat,
    pub output: OutputPath,
    /// Append a `Genre` column so the dashboard can group by category.
    pub category_column: bool,
    /// Label for the `Genre` column; derived from the listing slug when unset.
    pub category: Option<String>,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            first_page: s!(FIRST_PAGE),
            page_cap: DEFAULT_PAGE_CAP,
            format: ExportFormat::Csv,
            output: OutputPath::new(DEFAULT_OUT_DIR, DEFAULT_FILE),
            category_column: false,
            category: None,
        }
    }
}

impl CollectOptions {
    pub fn out_path(&self) -> PathBuf {
        self.output.with_format(self.format)
    }

    pub fn set_out_path(&mut self, text: &str) {
        self.format = ExportFormat::from_path(Path::new(text.trim()));
        self.output.set(text);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub output: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            output: OutputPath::new(DEFAULT_OUT_DIR, DEFAULT_EXPORT_FILE),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        self.output.with_format(self.format)
    }

    /// Parse GUI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        self.output.set(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_controls_extension() {
        let mut export = ExportOptions::default();
        export.set_path("out/custom/hello.data");
        assert!(export.out_path().ends_with("hello.csv"));
        export.format = ExportFormat::Tsv;
        assert!(export.out_path().ends_with("hello.tsv"));
        assert_eq!(export.out_path().parent(), Some(Path::new("out/custom")));
    }

    #[test]
    fn trailing_slash_keeps_the_file_name() {
        let mut export = ExportOptions::default();
        export.set_path("reports/");
        assert_eq!(export.out_path(), PathBuf::from("reports/filtered.csv"));
    }

    #[test]
    fn collect_out_path_picks_format_from_text() {
        let mut opts = CollectOptions::default();
        assert!(opts.out_path().ends_with("books.csv"));
        opts.set_out_path("data/classics.tsv");
        assert_eq!(opts.format, ExportFormat::Tsv);
        assert_eq!(opts.out_path(), PathBuf::from("data/classics.tsv"));
    }
}
