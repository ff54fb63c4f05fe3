//! Input-to-output path mapping
//!
//! An input file maps to the same relative location under the output root
//! with an `.html` extension. Page 1 of a paginated file keeps that name;
//! page `k > 1` becomes `<stem>_<k:03>.html`.

use std::path::{Component, Path, PathBuf};

/// Maps input files under one source directory to rendered output files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    source_root: PathBuf,
    output_root: PathBuf,
}

impl OutputPaths {
    /// Create a mapping from `source_root` into `output_root`.
    pub fn new(source_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            output_root: output_root.into(),
        }
    }

    /// Directory inputs are read from.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Directory outputs are written under.
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Output location of `input` relative to the output root.
    pub fn relative(&self, input: &Path, page: i64) -> PathBuf {
        let rel = input.strip_prefix(&self.source_root).unwrap_or(input);
        paged_name(rel, page)
    }

    /// Full output path of page `page` of `input`.
    pub fn output_path(&self, input: &Path, page: i64) -> PathBuf {
        self.output_root.join(self.relative(input, page))
    }

    /// Link to page `page` of `input`, relative to the output root and
    /// always `/`-separated.
    pub fn href(&self, input: &Path, page: i64) -> String {
        self.relative(input, page)
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn paged_name(rel: &Path, page: i64) -> PathBuf {
    if page <= 1 {
        return rel.with_extension("html");
    }
    let stem = rel
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    rel.with_file_name(format!("{}_{:03}.html", stem, page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paths() -> OutputPaths {
        OutputPaths::new("site/pages", "site/output")
    }

    #[test]
    fn test_first_page_swaps_extension() {
        assert_eq!(
            paths().output_path(Path::new("site/pages/blog/index.md"), 1),
            PathBuf::from("site/output/blog/index.html")
        );
    }

    #[test]
    fn test_later_pages_get_suffix() {
        assert_eq!(
            paths().output_path(Path::new("site/pages/blog/index.md"), 3),
            PathBuf::from("site/output/blog/index_003.html")
        );
    }

    #[test]
    fn test_href_is_relative_and_slashed() {
        assert_eq!(paths().href(Path::new("site/pages/blog/index.md"), 2), "blog/index_002.html");
        assert_eq!(paths().href(Path::new("site/pages/about.html"), 1), "about.html");
    }

    #[test]
    fn test_input_outside_root_is_kept_relative() {
        let paths = OutputPaths::default();
        assert_eq!(paths.href(Path::new("posts/a.md"), 1), "posts/a.html");
    }
}
