//! Multi-pattern substring search with Aho-Corasick automata.
//!
//! # Features
//!
//! - Find every pattern of a set that occurs in a text, in a single pass
//!   over the text with one table lookup per byte
//! - Report every occurrence with its position, including overlapping ones
//! - Add patterns one at a time with [`DynamicIndex`], without rebuilding
//!   everything on every insertion
//! - Resume a search across chunks of text with a [`Scanner`]
//! - Configurable alphabets, smaller alphabets give smaller automata
//! - Serialize automata and indexes using [`serde`]
//!
//! # Getting started
//!
//! If the set of patterns is known up front, build an [`Automaton`] from it.
//! The automaton is immutable and can be shared between threads.
//!
//! ```
//! let ac = dynamatch::Automaton::new(["he", "she", "his", "hers"])?;
//! let found = ac.scan("ahishers")?;
//! assert_eq!(found.into_iter().collect::<Vec<_>>(), ["he", "hers", "his", "she"]);
//! # Ok::<(), dynamatch::Error>(())
//! ```
//!
//! The free function [`build_automaton`] is a shorthand for
//! [`Automaton::new`].
//!
//! If patterns arrive over time, use a [`DynamicIndex`] instead. Adding `n`
//! patterns costs `O(n log n)` pattern rebuilds in total and a search scans
//! the text `O(log n)` times.
//!
//! ```
//! let mut index = dynamatch::DynamicIndex::new();
//! index.add("lorem")?;
//! index.add("ipsum")?;
//! let found = index.search("lorem ipsum dolor")?;
//! assert_eq!(found.len(), 2);
//! # Ok::<(), dynamatch::Error>(())
//! ```
//!
//! # Examples
//!
//! ### Find the positions of all matches
//!
//! [`.find_iter()`][Automaton::find_iter] reports every occurrence, ordered
//! by where it ends.
//!
//! ```
//! let ac = dynamatch::Automaton::new(["abcd", "bc"])?;
//! let spans: Vec<_> = ac
//!     .find_iter(b"xabcd")
//!     .map(|m| m.map(|m| (m.pattern(), m.start()..m.end())))
//!     .collect::<dynamatch::Result<_>>()?;
//! assert_eq!(spans, [("bc", 2..4), ("abcd", 1..5)]);
//! # Ok::<(), dynamatch::Error>(())
//! ```
//!
//! ### Use a custom alphabet
//!
//! By default every byte is a valid symbol. A custom [`Alphabet`] rejects any
//! pattern or text containing a byte outside of it.
//!
//! ```
//! use dynamatch::{Alphabet, Automaton, ErrorKind};
//!
//! let alphabet = Alphabet::builder().range(b'a'..=b'z').symbol(b' ').build();
//! let ac = Automaton::with_alphabet(alphabet, ["lorem", "ipsum"])?;
//!
//! let err = ac.scan("lorem, ipsum").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnknownSymbol);
//! assert_eq!(err.to_string(), "unknown symbol ',' between bytes 5 and 6");
//! # Ok::<(), dynamatch::Error>(())
//! ```
//!
//! ### Search text that arrives in chunks
//!
//! ```
//! let ac = dynamatch::Automaton::new(["needle"])?;
//! let mut scanner = ac.scanner();
//! for chunk in ["hay hay nee", "dle hay"] {
//!     scanner.feed(chunk)?;
//! }
//! assert!(scanner.matches().contains("needle"));
//! # Ok::<(), dynamatch::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod automaton;
mod error;
mod index;
#[cfg(feature = "serde")]
mod ser;
mod types;

pub use crate::automaton::{Automaton, FindIter, Match, Scanner};
pub use crate::error::{Error, ErrorKind};
pub use crate::index::DynamicIndex;
pub use crate::types::alphabet::{Alphabet, AlphabetBuilder};

/// A type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Build an automaton over the default alphabet of all bytes.
///
/// This is the same as [`Automaton::new`].
///
/// # Examples
///
/// ```
/// let ac = dynamatch::build_automaton(["a", "ab", "bab"])?;
/// assert_eq!(ac.scan("abab")?.len(), 3);
/// # Ok::<(), dynamatch::Error>(())
/// ```
#[inline]
pub fn build_automaton<I>(words: I) -> Result<Automaton>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    Automaton::new(words)
}
