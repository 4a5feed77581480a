use std::collections::BTreeMap;

use super::Pattern;

/// A unique identifier for a state.
pub type S = usize;

/// The identifier for an automaton's root state.
pub const ROOT: S = 0;

/// A state in an Aho-Corasick trie that is still under construction.
///
/// Transitions are sparse here, only explicit trie edges are present. The
/// compressor turns them into a dense row per state.
#[cfg_attr(internal_debug, derive(Debug))]
pub struct State {
    /// The explicit trie edges, keyed by symbol index.
    pub trans: BTreeMap<usize, S>,

    /// The failure transition.
    pub fail: S,

    /// The state this state was created from.
    pub parent: S,

    /// The symbol index on the edge from the parent to this state.
    pub symbol: usize,

    /// The distance from the root state in the automaton.
    pub depth: usize,

    /// The patterns that are matched at this state, longest first.
    pub output: Vec<Pattern>,
}

impl State {
    /// Returns the explicit transition for the given symbol, if any.
    pub fn next_state(&self, symbol: usize) -> Option<S> {
        self.trans.get(&symbol).copied()
    }

    /// Whether or not this state contains any matches.
    pub fn is_match(&self) -> bool {
        !self.output.is_empty()
    }
}
