// src/corpus/mod.rs
//! The link graph: interned pages, forward and reverse adjacency.

pub mod crawl;

use std::collections::{HashMap, HashSet};

use crate::error::{RankError, Result};

/// A directed link graph over a fixed set of pages.
///
/// Pages are interned once at construction: names are sorted, assigned
/// consecutive indices, and all adjacency is stored as index vectors.
/// The reverse adjacency is built here so the iterative solver never has
/// to rescan the whole graph per page.
#[derive(Debug, Clone)]
pub struct Corpus {
    names: Vec<String>,
    index: HashMap<String, usize>,
    out_links: Vec<Vec<usize>>,
    in_links: Vec<Vec<usize>>,
}

impl Corpus {
    /// Builds a corpus from a `page -> set(linked page)` mapping.
    ///
    /// Self-links and links to pages outside the mapping are dropped.
    ///
    /// # Errors
    /// Returns `RankError::EmptyCorpus` if the mapping has no pages.
    #[allow(clippy::implicit_hasher)]
    pub fn from_links(links: &HashMap<String, HashSet<String>>) -> Result<Self> {
        if links.is_empty() {
            return Err(RankError::EmptyCorpus);
        }

        let (names, index) = intern_names(links);
        let out_links = build_out_links(links, &index, &names);
        let in_links = invert(&out_links);

        Ok(Self {
            names,
            index,
            out_links,
            in_links,
        })
    }

    /// Number of pages in the corpus. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: construction rejects an empty page set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Page names in index order (sorted at construction).
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn page_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Name of the page at `page`, or `None` if out of range.
    #[must_use]
    pub fn page_name(&self, page: usize) -> Option<&str> {
        self.names.get(page).map(String::as_str)
    }

    /// Pages linked from `page`. An out-of-range index reads as a page
    /// with no out-links.
    #[must_use]
    pub fn out_links(&self, page: usize) -> &[usize] {
        self.out_links.get(page).map_or(&[], Vec::as_slice)
    }

    /// Pages linking to `page`. Every source listed here has at least
    /// one out-link.
    #[must_use]
    pub fn in_links(&self, page: usize) -> &[usize] {
        self.in_links.get(page).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn out_degree(&self, page: usize) -> usize {
        self.out_links(page).len()
    }

    /// True if `page` has no out-links.
    #[must_use]
    pub fn is_sink(&self, page: usize) -> bool {
        self.out_links(page).is_empty()
    }

    /// Iterates `(index, name)` pairs in index order.
    pub fn pages(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.names.iter().enumerate().map(|(i, n)| (i, n.as_str()))
    }
}

fn intern_names(links: &HashMap<String, HashSet<String>>) -> (Vec<String>, HashMap<String, usize>) {
    let mut names: Vec<String> = links.keys().cloned().collect();
    names.sort();

    let index = names
        .iter()
        .enumerate()
        .map(|(i, n)| (n.clone(), i))
        .collect();

    (names, index)
}

fn build_out_links(
    links: &HashMap<String, HashSet<String>>,
    index: &HashMap<String, usize>,
    names: &[String],
) -> Vec<Vec<usize>> {
    let mut out_links = vec![Vec::new(); names.len()];

    for (source, targets) in links {
        let Some(&src_idx) = index.get(source) else {
            continue;
        };

        let mut resolved: Vec<usize> = targets
            .iter()
            .filter(|t| t.as_str() != source)
            .filter_map(|t| index.get(t).copied())
            .collect();
        resolved.sort_unstable();
        resolved.dedup();

        out_links[src_idx] = resolved;
    }

    out_links
}

fn invert(out_links: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut in_links = vec![Vec::new(); out_links.len()];

    for (source, targets) in out_links.iter().enumerate() {
        for &target in targets {
            in_links[target].push(source);
        }
    }

    for sources in &mut in_links {
        sources.sort_unstable();
    }

    in_links
}
