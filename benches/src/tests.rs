use std::collections::BTreeSet;

use crate::corpus;
use crate::{AhoCorasick, Automaton, DynamicIndex, Searcher};

macro_rules! t {
    ($S:ty) => {{
        for _ in 0..50 {
            let patterns = corpus::words(20, 1, 6, 4);
            let text = corpus::text(200, 4);
            let exp = naive(&patterns, &text);
            let searcher = <$S as Searcher>::build(&patterns);
            let got = Searcher::scan(&searcher, &text);
            assert_eq!(got, exp, "{}", <$S as Searcher>::name());
        }
    }};
}

#[test]
fn aho_corasick() {
    t!(AhoCorasick);
}

#[test]
fn automaton() {
    t!(Automaton);
}

#[test]
fn dynamic_index() {
    t!(DynamicIndex);
}

#[test]
fn he_she_his_hers() {
    let patterns: Vec<_> = ["he", "she", "his", "hers"].map(String::from).into();
    let exp = naive(&patterns, "ahishers");
    let ac = AhoCorasick::build(&patterns);
    assert_eq!(Searcher::scan(&ac, "ahishers"), exp);
    let automaton = Automaton::build(&patterns);
    assert_eq!(Searcher::scan(&automaton, "ahishers"), exp);
    let index = DynamicIndex::build(&patterns);
    assert_eq!(Searcher::scan(&index, "ahishers"), exp);
}

fn naive(patterns: &[String], text: &str) -> BTreeSet<String> {
    patterns
        .iter()
        .filter(|p| text.contains(p.as_str()))
        .cloned()
        .collect()
}
