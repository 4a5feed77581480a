pub mod corpus;
#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

/// Abstraction for a multi-pattern searcher.
pub trait Searcher: Sized {
    fn name() -> &'static str;
    fn build(patterns: &[String]) -> Self;
    fn scan(&self, text: &str) -> BTreeSet<String>;
}

////////////////////////////////////////////////////////////////////////////////
/// aho-corasick
////////////////////////////////////////////////////////////////////////////////

pub struct AhoCorasick {
    imp: aho_corasick::AhoCorasick,
    patterns: Vec<String>,
}

impl Searcher for AhoCorasick {
    #[inline]
    fn name() -> &'static str {
        "aho-corasick"
    }

    #[inline]
    fn build(patterns: &[String]) -> Self {
        let imp = aho_corasick::AhoCorasick::new(patterns).unwrap();
        Self {
            imp,
            patterns: patterns.to_vec(),
        }
    }

    #[inline]
    fn scan(&self, text: &str) -> BTreeSet<String> {
        self.imp
            .find_overlapping_iter(text)
            .map(|m| self.patterns[m.pattern().as_usize()].clone())
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////
/// dynamatch
////////////////////////////////////////////////////////////////////////////////

pub type Automaton = dynamatch::Automaton;

impl Searcher for dynamatch::Automaton {
    #[inline]
    fn name() -> &'static str {
        "dynamatch"
    }

    #[inline]
    fn build(patterns: &[String]) -> Self {
        dynamatch::Automaton::new(patterns.iter().cloned()).unwrap()
    }

    #[inline]
    fn scan(&self, text: &str) -> BTreeSet<String> {
        dynamatch::Automaton::scan(self, text)
            .unwrap()
            .into_iter()
            .map(String::from)
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////
/// dynamatch (dynamic index)
////////////////////////////////////////////////////////////////////////////////

pub type DynamicIndex = dynamatch::DynamicIndex;

impl Searcher for dynamatch::DynamicIndex {
    #[inline]
    fn name() -> &'static str {
        "dynamatch-index"
    }

    #[inline]
    fn build(patterns: &[String]) -> Self {
        let mut index = dynamatch::DynamicIndex::new();
        index.extend(patterns.iter().cloned()).unwrap();
        index
    }

    #[inline]
    fn scan(&self, text: &str) -> BTreeSet<String> {
        self.search(text)
            .unwrap()
            .into_iter()
            .map(String::from)
            .collect()
    }
}
