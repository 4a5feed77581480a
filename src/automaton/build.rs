//! A builder for an Aho-Corasick automaton.
//!
//! From the given set of patterns we build a state machine with a series of
//! states that encode a transition for every symbol in the alphabet. This
//! state machine can then be used to simultaneously search a string for all
//! the patterns.
//!
//! Building happens in three passes, each consuming the full result of the
//! previous one.
//!
//! **Trie.** Each pattern is inserted as a path from the root state, states
//! are created on demand. Consider the patterns 'ab' and 'cd', the trie would
//! look like the following. Where the states are represented as `S?` and have
//! an asterisk (`*`) if there are any matches at that state.
//!
//! ```text
//!      a - S1 - b - S2*
//!     /
//! S0 - c - S3 - d - S4*
//! ```
//!
//! **Failure transitions.** Now consider the patterns 'abe' and 'bcd'. In the
//! case of an input text of 'abcd', when at S2 we would fail to transition on
//! 'c'. But 'b' is a proper suffix of 'ab' and a prefix of 'bcd', so the
//! search can continue from S4. This is the failure transition of S2. Every
//! state has one, most of them lead back to the root.
//!
//! ```text
//!      a - S1 - b - S2 - e - S3*
//!     /             /
//!    /       -------
//!   /       /
//! S0 - b - S4 - c - S5 - d - S6*
//! ```
//!
//! They are computed with a breadth-first search from the root, since the
//! failure state of a state is always shallower than the state itself. For a
//! state reached on symbol `c` we follow the failure transitions of its parent
//! until we find a state with a forward transition on `c`. The target of that
//! transition is the failure state. At the same time each state inherits the
//! matches of its failure state, so that a match state also reports every
//! pattern that is a suffix of its own.
//!
//! **Compression.** Finally the failure transitions are folded into a dense
//! table. A missing transition on `c` from a state is the transition on `c`
//! from its failure state, which is already complete because it is shallower.
//! Missing transitions from the root loop back to the root. Searching then
//! never needs to follow a failure transition.

use std::collections::VecDeque;

use super::{Automaton, Pattern, State, ROOT, S};
use crate::{Alphabet, Error, Result};

pub struct Builder {
    alphabet: Alphabet,
    states: Vec<State>,
}

impl Builder {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            states: Vec::new(),
        }
    }

    pub fn build<I>(mut self, patterns: I) -> Result<Automaton>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.push_state(ROOT, 0, 0);

        let mut words = Vec::new();
        for word in patterns {
            let word = word.into();
            self.insert(words.len(), &word)?;
            words.push(word);
        }

        let order = self.fill_failure_transitions();
        let trans = self.compress(&order);

        let Self { alphabet, states } = self;
        tracing::debug!(
            patterns = words.len(),
            states = states.len(),
            match_states = states.iter().filter(|s| s.is_match()).count(),
            symbols = alphabet.len(),
            "built automaton"
        );
        let output = states.into_iter().map(|s| s.output).collect();
        Ok(Automaton {
            alphabet,
            words,
            trans,
            output,
        })
    }

    /// Add a pattern to the trie, creating a path from the root state to the
    /// end of the pattern.
    fn insert(&mut self, pattern_id: usize, word: &str) -> Result<()> {
        if word.is_empty() {
            return Err(Error::invalid_pattern(format!(
                "pattern {pattern_id} is empty"
            )));
        }

        let bytes = word.as_bytes();
        let mut id = ROOT;
        for (depth, &byte) in bytes.iter().enumerate() {
            let symbol = match self.alphabet.index(byte) {
                Some(symbol) => symbol,
                None => {
                    return Err(Error::unknown_symbol(bytes, depth).in_pattern(pattern_id))
                }
            };
            id = match self.state(id).next_state(symbol) {
                Some(next) => next,
                None => {
                    let next = self.push_state(id, symbol, depth + 1);
                    self.state_mut(id).trans.insert(symbol, next);
                    next
                }
            };
        }

        // A repeated pattern ends at a state that already has its own match,
        // the first occurrence wins.
        let state = self.state_mut(id);
        if !state.is_match() {
            state.output.push(Pattern::new(pattern_id, bytes.len()));
        }
        Ok(())
    }

    /// Sets the failure transition of every state and merges the matches of
    /// the failure state into each state.
    ///
    /// Returns the states in breadth-first order.
    fn fill_failure_transitions(&mut self) -> Vec<S> {
        let mut order = Vec::with_capacity(self.states.len());
        let mut queue = VecDeque::new();
        queue.push_back(ROOT);

        while let Some(curr) = queue.pop_front() {
            order.push(curr);
            queue.extend(self.state(curr).trans.values().copied());

            let (parent, symbol, depth) = {
                let state = self.state(curr);
                (state.parent, state.symbol, state.depth)
            };

            // The root and the states directly after it always fail to the
            // root, which is the default.
            if depth < 2 {
                continue;
            }

            let mut id = self.state(parent).fail;
            let fail = loop {
                match self.state(id).next_state(symbol) {
                    Some(next) if next != curr => break next,
                    Some(_) => break ROOT,
                    None if id == ROOT => break ROOT,
                    None => id = self.state(id).fail,
                }
            };

            self.state_mut(curr).fail = fail;
            self.copy_matches(fail, curr);
        }

        order
    }

    /// Builds the dense transition table, one row of `alphabet.len()` entries
    /// per state.
    fn compress(&self, order: &[S]) -> Vec<S> {
        let stride = self.alphabet.len();
        let mut table = vec![ROOT; self.states.len() * stride];
        for &id in order {
            let state = self.state(id);
            let row = id * stride;
            if id != ROOT {
                let fail = state.fail * stride;
                table.copy_within(fail..fail + stride, row);
            }
            for (&symbol, &next) in &state.trans {
                table[row + symbol] = next;
            }
        }
        table
    }

    fn copy_matches(&mut self, src: S, dst: S) {
        if src == ROOT {
            return;
        }
        assert!(src != dst, "src {src} must not be equal to dst {dst}");

        // Simply gets a mutable reference to both states.
        let i = src;
        let j = dst;
        let (src, dst) = if i < j {
            let (left, right) = self.states.split_at_mut(j);
            (&mut left[i], &mut right[0])
        } else {
            let (left, right) = self.states.split_at_mut(i);
            (&mut right[0], &mut left[j])
        };

        dst.output.extend_from_slice(&src.output);
    }

    fn push_state(&mut self, parent: S, symbol: usize, depth: usize) -> S {
        let id = self.states.len();
        self.states.push(State {
            trans: Default::default(),
            fail: ROOT,
            parent,
            symbol,
            depth,
            output: Vec::new(),
        });
        id
    }

    fn state(&self, id: S) -> &State {
        &self.states[id]
    }

    fn state_mut(&mut self, id: S) -> &mut State {
        &mut self.states[id]
    }
}
