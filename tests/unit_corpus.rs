// tests/unit_corpus.rs
//! Tests for corpus construction and adjacency invariants.

use std::collections::{HashMap, HashSet};

use surfrank_core::corpus::Corpus;
use surfrank_core::error::RankError;

fn corpus(links: &[(&str, &[&str])]) -> Corpus {
    let map: HashMap<String, HashSet<String>> = links
        .iter()
        .map(|(page, targets)| {
            (
                (*page).to_string(),
                targets.iter().map(|t| (*t).to_string()).collect(),
            )
        })
        .collect();
    Corpus::from_links(&map).expect("valid corpus")
}

#[test]
fn test_index_assignment_is_sorted() {
    let c = corpus(&[("c.html", &[]), ("a.html", &[]), ("b.html", &[])]);
    assert_eq!(c.names(), ["a.html", "b.html", "c.html"]);
    assert_eq!(c.page_index("a.html"), Some(0));
    assert_eq!(c.page_index("c.html"), Some(2));
}

#[test]
fn test_page_lookup_round_trip() {
    let c = corpus(&[("a.html", &["b.html"]), ("b.html", &[])]);
    for (idx, name) in c.pages() {
        assert_eq!(c.page_index(name), Some(idx));
        assert_eq!(c.page_name(idx), Some(name));
    }
    assert_eq!(c.page_name(99), None);
    assert_eq!(c.page_index("missing.html"), None);
}

#[test]
fn test_self_link_stripped() {
    let c = corpus(&[("a.html", &["a.html", "b.html"]), ("b.html", &[])]);
    let a = c.page_index("a.html").unwrap();
    let b = c.page_index("b.html").unwrap();
    assert_eq!(c.out_links(a), [b]);
}

#[test]
fn test_dangling_external_target_dropped() {
    let c = corpus(&[
        ("a.html", &["b.html", "https://example.com/off-site.html"]),
        ("b.html", &[]),
    ]);
    let a = c.page_index("a.html").unwrap();
    assert_eq!(c.out_degree(a), 1, "external target should not survive");
}

#[test]
fn test_empty_corpus_rejected() {
    let empty: HashMap<String, HashSet<String>> = HashMap::new();
    let err = Corpus::from_links(&empty).unwrap_err();
    assert!(matches!(err, RankError::EmptyCorpus));
}

#[test]
fn test_in_links_inverts_out_links() {
    let c = corpus(&[
        ("a.html", &["b.html", "c.html"]),
        ("b.html", &["c.html"]),
        ("c.html", &[]),
    ]);
    let a = c.page_index("a.html").unwrap();
    let b = c.page_index("b.html").unwrap();
    let cc = c.page_index("c.html").unwrap();

    assert!(c.in_links(a).is_empty());
    assert_eq!(c.in_links(b), [a]);
    assert_eq!(c.in_links(cc), [a, b]);
}

#[test]
fn test_sink_detection() {
    let c = corpus(&[("a.html", &["b.html"]), ("b.html", &[])]);
    let a = c.page_index("a.html").unwrap();
    let b = c.page_index("b.html").unwrap();

    assert!(!c.is_sink(a));
    assert!(c.is_sink(b));
    // Out-of-range indices read as dead ends.
    assert!(c.is_sink(42));
}

#[test]
fn test_out_links_sorted_and_unique() {
    let c = corpus(&[
        ("a.html", &["d.html", "b.html", "c.html"]),
        ("b.html", &[]),
        ("c.html", &[]),
        ("d.html", &[]),
    ]);
    let a = c.page_index("a.html").unwrap();
    let links = c.out_links(a);
    let mut sorted = links.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(links, sorted);
}
