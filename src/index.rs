//! An index of patterns that supports adding patterns one at a time.
//!
//! An [`Automaton`] is immutable, adding a single pattern to it would mean
//! rebuilding it from scratch. Instead the index keeps a list of slots where
//! slot `i` is either empty or holds an automaton built over exactly `2^i`
//! patterns. The occupied slots mirror the binary representation of the
//! number of patterns added so far.
//!
//! Adding a pattern works like incrementing a binary counter. The new pattern
//! is carried into slot 0. If that slot is occupied its patterns join the
//! carry and the slot is cleared, and so on until an empty slot absorbs the
//! carry and a single automaton is built over everything carried into it.
//!
//! ```text
//!  patterns   slot 0   slot 1   slot 2
//!         1   [a]
//!         2            [b a]
//!         3   [c]      [b a]
//!         4                     [d c b a]
//! ```
//!
//! A pattern takes part in a rebuild at most once per slot, and there are
//! `log2(n)` slots, so adding `n` patterns rebuilds `O(n log n)` patterns in
//! total. Searching scans the text once per occupied slot.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::automaton::{Automaton, Match};
use crate::{Alphabet, Error, Result};

/// A pattern index that supports adding patterns one at a time.
///
/// Slots hold their automata behind an [`Arc`], so cloning the index is cheap.
/// A clone can be used as a snapshot for readers while patterns are added to
/// another copy.
///
/// # Examples
///
/// ```
/// let mut index = dynamatch::DynamicIndex::new();
/// index.add("a")?;
/// index.add("b")?;
/// index.add("ab")?;
/// let found = index.search("cab")?;
/// assert_eq!(found.into_iter().collect::<Vec<_>>(), ["a", "ab", "b"]);
/// # Ok::<(), dynamatch::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DynamicIndex {
    alphabet: Alphabet,
    slots: Vec<Option<Arc<Automaton>>>,
    len: usize,
    rebuilt_bytes: usize,
}

impl DynamicIndex {
    /// Construct a new empty index over the default alphabet of all bytes.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new empty index over a custom alphabet.
    #[inline]
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            ..Self::default()
        }
    }

    /// Add a pattern to the index.
    ///
    /// # Errors
    ///
    /// If the pattern is empty or contains a byte that is not in the alphabet.
    /// The index is left unchanged in that case.
    pub fn add(&mut self, word: impl Into<String>) -> Result<()> {
        let word = word.into();
        if word.is_empty() {
            return Err(Error::invalid_pattern("pattern is empty"));
        }
        self.alphabet.check(&word)?;

        // The carry stops at the lowest empty slot, which may be a new one.
        let k = self
            .slots
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.slots.len());

        let mut carry = vec![word];
        for slot in self.slots[..k].iter().flatten() {
            tracing::trace!(words = slot.words().len(), "merging slot");
            carry.extend(slot.words().iter().cloned());
        }
        debug_assert_eq!(carry.len(), 1 << k);

        let bytes: usize = carry.iter().map(String::len).sum();
        let automaton = Automaton::with_alphabet(self.alphabet.clone(), carry)?;

        // Nothing is modified until the new automaton has been built.
        if k == self.slots.len() {
            self.slots.push(None);
        }
        for slot in &mut self.slots[..k] {
            *slot = None;
        }
        self.slots[k] = Some(Arc::new(automaton));
        self.len += 1;
        self.rebuilt_bytes += bytes;

        tracing::debug!(slot = k, words = 1usize << k, bytes, "carried into slot");
        Ok(())
    }

    /// Add each of the patterns to the index in order.
    ///
    /// # Errors
    ///
    /// Stops at the first pattern that cannot be added. Patterns before it
    /// remain in the index.
    pub fn extend<I>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for word in words {
            self.add(word)?;
        }
        Ok(())
    }

    /// Returns the set of distinct patterns that occur anywhere in the text.
    ///
    /// An empty index always returns an empty set, but the text is still
    /// checked against the alphabet.
    ///
    /// # Errors
    ///
    /// If the text contains a byte that is not in the alphabet.
    pub fn search<T>(&self, text: T) -> Result<BTreeSet<&str>>
    where
        T: AsRef<[u8]>,
    {
        let text = text.as_ref();
        if self.is_empty() {
            self.alphabet.check(text)?;
            return Ok(BTreeSet::new());
        }
        let mut found = BTreeSet::new();
        for automaton in self.automata() {
            found.extend(automaton.scan(text)?);
        }
        Ok(found)
    }

    /// Returns every occurrence of every pattern in the text.
    ///
    /// Matches are sorted by end offset, then start offset, then pattern. A
    /// pattern that was added more than once is only reported once per
    /// occurrence.
    ///
    /// # Errors
    ///
    /// If the text contains a byte that is not in the alphabet.
    pub fn find_all<T>(&self, text: T) -> Result<Vec<Match<'_>>>
    where
        T: AsRef<[u8]>,
    {
        let text = text.as_ref();
        self.alphabet.check(text)?;
        let mut matches = Vec::new();
        for automaton in self.automata() {
            for m in automaton.find_iter(text) {
                matches.push(m?);
            }
        }
        matches.sort_by(|a, b| {
            (a.end(), a.start(), a.pattern()).cmp(&(b.end(), b.start(), b.pattern()))
        });
        matches.dedup();
        Ok(matches)
    }

    /// Returns the number of patterns added, including duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no patterns have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns every pattern in the index.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.automata()
            .flat_map(|a| a.words().iter().map(String::as_str))
    }

    /// Returns the slots of the index, lowest first.
    ///
    /// Slot `i` is either empty or holds an automaton built over exactly
    /// `2^i` patterns.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Automaton>> + '_ {
        self.slots.iter().map(|slot| slot.as_deref())
    }

    /// Returns the alphabet of the index.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the total length in bytes of all patterns that have been fed
    /// to automaton builds so far.
    ///
    /// This is the amount of rebuild work done by [`.add()`][Self::add] and
    /// grows as `O(n log n)` in the number of patterns added.
    #[inline]
    pub fn rebuilt_bytes(&self) -> usize {
        self.rebuilt_bytes
    }

    fn automata(&self) -> impl Iterator<Item = &Automaton> + '_ {
        self.slots.iter().flatten().map(|a| &**a)
    }

    /// Reassembles an index from the word lists of its slots.
    #[cfg(feature = "serde")]
    pub(crate) fn from_slots(
        alphabet: Alphabet,
        slots: Vec<Option<Vec<String>>>,
    ) -> std::result::Result<Self, String> {
        let mut index = Self::with_alphabet(alphabet);
        for (i, words) in slots.into_iter().enumerate() {
            let slot = match words {
                Some(words) => {
                    if words.len() != 1 << i {
                        return Err(format!(
                            "slot {i} must have {} words, found {}",
                            1usize << i,
                            words.len()
                        ));
                    }
                    let automaton = Automaton::with_alphabet(index.alphabet.clone(), words)
                        .map_err(|err| format!("slot {i}: {err}"))?;
                    index.len += automaton.words().len();
                    Some(Arc::new(automaton))
                }
                None => None,
            };
            index.slots.push(slot);
        }
        Ok(index)
    }
}
