// src/corpus/crawl.rs
//! Corpus loader: turns a directory of HTML pages into a link graph.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use super::Corpus;
use crate::error::{RankError, Result};

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Parses a directory of HTML pages into a [`Corpus`].
///
/// Each `.html` file becomes a page named by its file name; anchor
/// `href` targets become links. Links to pages outside the directory
/// and self-references are dropped by corpus construction.
///
/// # Errors
/// Returns `RankError::Io` if a page cannot be read, or
/// `RankError::EmptyCorpus` if the directory holds no HTML files.
pub fn crawl(directory: &Path) -> Result<Corpus> {
    let mut pages: HashMap<String, HashSet<String>> = HashMap::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = html_file_name(entry.path()) else {
            continue;
        };

        let contents = fs::read_to_string(entry.path()).map_err(|source| RankError::Io {
            source,
            path: entry.path().to_path_buf(),
        })?;

        pages.insert(name, extract_links(&contents));
    }

    Corpus::from_links(&pages)
}

fn html_file_name(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if !ext.eq_ignore_ascii_case("html") {
        return None;
    }
    Some(path.file_name()?.to_string_lossy().into_owned())
}

fn extract_links(contents: &str) -> HashSet<String> {
    HREF_RE
        .captures_iter(contents)
        .map(|c| c[1].to_string())
        .collect()
}
