//! A fast, multi-pattern searcher based on the [Aho-Corasick
//! algorithm][wikipedia].
//!
//! The automaton is built once from a fixed list of patterns and is immutable
//! afterwards. Every state has a transition for every symbol in the alphabet,
//! so searching takes exactly one table lookup per byte of text and never
//! backtracks. This implementation reports all matches, including overlapping
//! ones.
//!
//! [wikipedia]: https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm

mod build;
mod state;

use std::collections::BTreeSet;
#[cfg(feature = "serde")]
use std::collections::VecDeque;
use std::fmt;

use self::build::Builder;
use self::state::{State, ROOT, S};
use crate::{Alphabet, Error, Result};

/// An immutable Aho-Corasick automaton.
///
/// # Examples
///
/// ```
/// let ac = dynamatch::Automaton::new(["he", "she", "his", "hers"])?;
/// let found = ac.scan("ushers")?;
/// assert_eq!(found.into_iter().collect::<Vec<_>>(), ["he", "hers", "she"]);
/// # Ok::<(), dynamatch::Error>(())
/// ```
#[derive(Clone)]
pub struct Automaton {
    alphabet: Alphabet,
    words: Vec<String>,
    /// The dense transition table, `alphabet.len()` entries per state.
    trans: Vec<S>,
    /// The patterns matched at each state, longest first.
    output: Vec<Vec<Pattern>>,
}

/// A single occurrence of a pattern in a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match<'a> {
    pattern: &'a str,
    start: usize,
    end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    id: usize,
    len: usize,
}

/// An iterator over every occurrence of every pattern in a text.
///
/// This struct is created by [`Automaton::find_iter`].
#[derive(Debug)]
pub struct FindIter<'a, 'h> {
    automaton: &'a Automaton,
    haystack: &'h [u8],
    state: S,
    at: usize,
    out: usize,
    done: bool,
}

/// A resumable search over text that arrives in chunks.
///
/// This struct is created by [`Automaton::scanner`] or
/// [`Automaton::scanner_at`].
///
/// # Examples
///
/// ```
/// let ac = dynamatch::Automaton::new(["lorem", "ipsum"])?;
/// let mut scanner = ac.scanner();
/// scanner.feed("lor")?;
/// scanner.feed("em ips")?;
///
/// // The state is a plain integer and can be persisted.
/// let state = scanner.state();
/// let mut scanner = ac.scanner_at(state).unwrap();
/// scanner.feed("um")?;
/// assert_eq!(scanner.matches().into_iter().collect::<Vec<_>>(), ["ipsum"]);
/// # Ok::<(), dynamatch::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    automaton: &'a Automaton,
    state: S,
    offset: usize,
    found: BTreeSet<usize>,
}

impl Automaton {
    /// Build an automaton over the default alphabet of all bytes.
    ///
    /// # Errors
    ///
    /// If any of the patterns is empty.
    #[inline]
    pub fn new<I>(patterns: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::with_alphabet(Alphabet::default(), patterns)
    }

    /// Build an automaton over a custom alphabet.
    ///
    /// # Errors
    ///
    /// If any of the patterns is empty or contains a byte that is not in the
    /// alphabet. No automaton is returned in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamatch::{Alphabet, Automaton, ErrorKind};
    ///
    /// let alphabet = Alphabet::builder().range(b'a'..=b'z').build();
    /// let err = Automaton::with_alphabet(alphabet, ["lorem", "Ipsum"]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::UnknownSymbol);
    /// ```
    pub fn with_alphabet<I>(alphabet: Alphabet, patterns: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Builder::new(alphabet).build(patterns)
    }

    /// Returns the set of distinct patterns that occur anywhere in the text.
    ///
    /// # Errors
    ///
    /// If the text contains a byte that is not in the alphabet. The automaton
    /// can still be used afterwards.
    pub fn scan<T>(&self, text: T) -> Result<BTreeSet<&str>>
    where
        T: AsRef<[u8]>,
    {
        let mut scanner = self.scanner();
        scanner.feed(text)?;
        Ok(scanner.matches())
    }

    /// Returns an iterator over every occurrence of every pattern in the
    /// text, including overlapping ones.
    ///
    /// Matches are ordered by their end offset and then longest first. If
    /// the text contains a byte that is not in the alphabet the iterator
    /// yields an error and then stops.
    ///
    /// # Examples
    ///
    /// ```
    /// let ac = dynamatch::Automaton::new(["a", "ab", "bab"])?;
    /// let matches: Vec<_> = ac
    ///     .find_iter(b"abab")
    ///     .map(|m| m.map(|m| (m.pattern(), m.start(), m.end())))
    ///     .collect::<dynamatch::Result<_>>()?;
    /// assert_eq!(
    ///     matches,
    ///     [("a", 0, 1), ("ab", 0, 2), ("a", 2, 3), ("bab", 1, 4), ("ab", 2, 4)]
    /// );
    /// # Ok::<(), dynamatch::Error>(())
    /// ```
    #[inline]
    pub fn find_iter<'a, 'h>(&'a self, haystack: &'h [u8]) -> FindIter<'a, 'h> {
        FindIter {
            automaton: self,
            haystack,
            state: ROOT,
            at: 0,
            out: 0,
            done: false,
        }
    }

    /// Returns a scanner starting at the root state.
    #[inline]
    pub fn scanner(&self) -> Scanner<'_> {
        Scanner {
            automaton: self,
            state: ROOT,
            offset: 0,
            found: BTreeSet::new(),
        }
    }

    /// Returns a scanner resuming from a state previously returned by
    /// [`Scanner::state`] or [`Automaton::next_state`].
    ///
    /// Returns `None` if the state does not exist in this automaton.
    pub fn scanner_at(&self, state: usize) -> Option<Scanner<'_>> {
        if state >= self.state_count() {
            return None;
        }
        Some(Scanner {
            state,
            ..self.scanner()
        })
    }

    /// Returns the root state, where every search starts.
    #[inline]
    pub fn start_state(&self) -> usize {
        ROOT
    }

    /// Returns the state that follows `state` on the given byte.
    ///
    /// # Errors
    ///
    /// If the byte is not in the alphabet.
    ///
    /// # Panics
    ///
    /// If the state does not exist in this automaton.
    pub fn next_state(&self, state: usize, byte: u8) -> Result<usize> {
        assert!(state < self.state_count(), "state {state} does not exist");
        self.step(state, byte)
            .ok_or_else(|| Error::unknown_byte(byte))
    }

    /// Returns the patterns that are matched upon entering the given state,
    /// longest first.
    ///
    /// # Panics
    ///
    /// If the state does not exist in this automaton.
    pub fn output(&self, state: usize) -> impl Iterator<Item = &str> + '_ {
        self.output[state]
            .iter()
            .map(move |p| self.words[p.id].as_str())
    }

    /// Returns the number of states in the automaton.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.output.len()
    }

    /// Returns the patterns the automaton was built from, in insertion
    /// order and including any duplicates.
    #[inline]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the alphabet the automaton was built over.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[cfg(feature = "serde")]
    pub(crate) fn to_states(&self) -> Vec<crate::ser::StateRepr> {
        let stride = self.alphabet.len();
        (0..self.state_count())
            .map(|id| crate::ser::StateRepr {
                trans: self.trans[id * stride..(id + 1) * stride].to_vec(),
                output: self.output[id].iter().map(|p| p.id).collect(),
            })
            .collect()
    }

    /// Reassembles an automaton from its written states, checking that the
    /// words are valid patterns, the table is complete, every index is in
    /// range and no state outputs a pattern longer than the shortest path to
    /// it.
    #[cfg(feature = "serde")]
    pub(crate) fn from_states(
        alphabet: Alphabet,
        words: Vec<String>,
        states: Vec<crate::ser::StateRepr>,
    ) -> std::result::Result<Self, String> {
        if states.is_empty() {
            return Err("automaton must have a root state".into());
        }
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(format!("word {i} is empty"));
            }
            alphabet
                .check(word)
                .map_err(|err| format!("word {i}: {err}"))?;
        }

        let stride = alphabet.len();
        let mut trans = Vec::with_capacity(states.len() * stride);
        let mut output = Vec::with_capacity(states.len());
        for (id, state) in states.iter().enumerate() {
            if state.trans.len() != stride {
                return Err(format!(
                    "state {id} has {} transitions, expected {stride}",
                    state.trans.len()
                ));
            }
            if let Some(next) = state.trans.iter().find(|&&next| next >= states.len()) {
                return Err(format!("state {id} has a transition to unknown state {next}"));
            }
            trans.extend_from_slice(&state.trans);

            let patterns = state
                .output
                .iter()
                .map(|&p| match words.get(p) {
                    Some(word) => Ok(Pattern::new(p, word.len())),
                    None => Err(format!("state {id} outputs unknown pattern {p}")),
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            output.push(patterns);
        }

        if let Some(p) = output[ROOT].first() {
            return Err(format!("root state outputs pattern {}", p.id));
        }

        // A state first reached after `depth` bytes can only end patterns of
        // at most that length.
        let mut depth = vec![None; states.len()];
        depth[ROOT] = Some(0);
        let mut queue = VecDeque::from([ROOT]);
        while let Some(id) = queue.pop_front() {
            let d = depth[id].unwrap_or_default();
            for &next in &trans[id * stride..(id + 1) * stride] {
                if depth[next].is_none() {
                    depth[next] = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }
        for (id, patterns) in output.iter().enumerate() {
            for p in patterns {
                match depth[id] {
                    None => {
                        return Err(format!(
                            "state {id} is unreachable and outputs pattern {}",
                            p.id
                        ))
                    }
                    Some(d) if p.len > d => {
                        return Err(format!(
                            "state {id} outputs pattern {} of length {} at depth {d}",
                            p.id, p.len
                        ))
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(Self {
            alphabet,
            words,
            trans,
            output,
        })
    }

    fn step(&self, state: S, byte: u8) -> Option<S> {
        let symbol = self.alphabet.index(byte)?;
        Some(self.trans[state * self.alphabet.len() + symbol])
    }

    fn to_match(&self, pattern: Pattern, end: usize) -> Match<'_> {
        Match {
            pattern: &self.words[pattern.id],
            start: end - pattern.len,
            end,
        }
    }
}

impl fmt::Debug for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("alphabet", &self.alphabet)
            .field("words", &self.words)
            .field("states", &self.state_count())
            .finish()
    }
}

impl<'a> Match<'a> {
    /// The pattern that matched.
    #[inline]
    pub fn pattern(&self) -> &'a str {
        self.pattern
    }

    /// The starting position of the match.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The ending position of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }
}

impl Pattern {
    fn new(id: usize, len: usize) -> Self {
        Self { id, len }
    }
}

impl<'a, 'h> Iterator for FindIter<'a, 'h> {
    type Item = Result<Match<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let automaton = self.automaton;
        loop {
            if let Some(&p) = automaton.output[self.state].get(self.out) {
                self.out += 1;
                return Some(Ok(automaton.to_match(p, self.at)));
            }
            if self.done || self.at >= self.haystack.len() {
                return None;
            }
            match automaton.step(self.state, self.haystack[self.at]) {
                Some(next) => {
                    self.state = next;
                    self.at += 1;
                    self.out = 0;
                }
                None => {
                    self.done = true;
                    return Some(Err(Error::unknown_symbol(self.haystack, self.at)));
                }
            }
        }
    }
}

impl<'a> Scanner<'a> {
    /// Advance the search over the next chunk of text.
    ///
    /// # Errors
    ///
    /// If the chunk contains a byte that is not in the alphabet. The error
    /// reports the offset of that byte from the start of the whole stream,
    /// and the scanner is left positioned just before it.
    pub fn feed<T>(&mut self, chunk: T) -> Result<()>
    where
        T: AsRef<[u8]>,
    {
        let chunk = chunk.as_ref();
        let automaton = self.automaton;
        let base = self.offset;
        for (i, &byte) in chunk.iter().enumerate() {
            match automaton.step(self.state, byte) {
                Some(next) => {
                    self.state = next;
                    self.found
                        .extend(automaton.output[next].iter().map(|p| p.id));
                }
                None => {
                    self.offset = base + i;
                    return Err(Error::unknown_symbol(chunk, i).offset(base));
                }
            }
        }
        self.offset = base + chunk.len();
        Ok(())
    }

    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> usize {
        self.state
    }

    /// Returns the number of bytes consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the distinct patterns matched so far.
    pub fn matches(&self) -> BTreeSet<&'a str> {
        let words = &self.automaton.words;
        self.found.iter().map(|&id| words[id].as_str()).collect()
    }
}
