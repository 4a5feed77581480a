use std::fmt;
use std::ops::RangeInclusive;

use crate::{Error, Result};

/// Marks a byte that is not part of the alphabet.
const UNKNOWN: u16 = u16::MAX;

/// The set of symbols that patterns and searched text may contain.
///
/// Every automaton is built over a fixed alphabet. Each symbol is a single
/// byte and is assigned a dense index, which is the column of that symbol in
/// the automaton's transition table. A smaller alphabet therefore means a
/// smaller automaton.
///
/// Use [`Alphabet::default()`] to get the alphabet of all bytes and
/// [`Alphabet::builder()`] to create a custom alphabet.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    index: [u16; 256],
    symbols: Vec<u8>,
}

/// A builder for an alphabet.
///
/// This struct is typically created using [`Alphabet::builder()`].
#[derive(Debug, Clone)]
pub struct AlphabetBuilder {
    include: [bool; 256],
}

impl Default for Alphabet {
    /// Returns the alphabet of all 256 byte values.
    ///
    /// This is equivalent to [`Alphabet::bytes()`].
    #[inline]
    fn default() -> Self {
        Self::bytes()
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet(\"{}\")", self.symbols.escape_ascii())
    }
}

impl Alphabet {
    /// Create a new alphabet builder.
    ///
    /// # Examples
    ///
    /// ```
    /// let alphabet = dynamatch::Alphabet::builder()
    ///     .range(b'a'..=b'z')
    ///     .symbols(" .,")
    ///     .build();
    /// assert_eq!(alphabet.len(), 29);
    /// ```
    #[inline]
    pub fn builder() -> AlphabetBuilder {
        AlphabetBuilder::new()
    }

    /// Returns the alphabet of all 256 byte values.
    ///
    /// Any text is accepted by automata built over this alphabet, including
    /// arbitrary UTF-8.
    pub fn bytes() -> Self {
        Self::builder().range(0..=u8::MAX).build()
    }

    /// Returns the alphabet of printable ASCII characters, from space (`0x20`)
    /// to tilde (`0x7e`).
    pub fn printable_ascii() -> Self {
        Self::builder().range(b' '..=b'~').build()
    }

    /// Returns the number of symbols in the alphabet.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the alphabet has no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns true if the byte is a symbol in this alphabet.
    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.index[byte as usize] != UNKNOWN
    }

    /// Returns the dense index of the given byte, if it is in the alphabet.
    #[inline]
    pub fn index(&self, byte: u8) -> Option<usize> {
        match self.index[byte as usize] {
            UNKNOWN => None,
            i => Some(i as usize),
        }
    }

    /// Returns the symbols in the alphabet in ascending order.
    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Checks that every byte in the text is a symbol in this alphabet.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownSymbol`][crate::ErrorKind::UnknownSymbol] error
    /// pointing at the first byte that is not in the alphabet.
    pub fn check<T>(&self, text: T) -> Result<()>
    where
        T: AsRef<[u8]>,
    {
        let text = text.as_ref();
        match text.iter().position(|&b| !self.contains(b)) {
            Some(at) => Err(Error::unknown_symbol(text, at)),
            None => Ok(()),
        }
    }
}

impl AlphabetBuilder {
    /// Creates a new alphabet builder with no symbols.
    #[inline]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            include: [false; 256],
        }
    }

    /// Add a single symbol.
    #[inline]
    pub fn symbol(&mut self, byte: u8) -> &mut Self {
        self.include[byte as usize] = true;
        self
    }

    /// Add every byte of the given string as a symbol.
    ///
    /// Symbols that were already added are ignored.
    pub fn symbols<T>(&mut self, bytes: T) -> &mut Self
    where
        T: AsRef<[u8]>,
    {
        for &b in bytes.as_ref() {
            self.symbol(b);
        }
        self
    }

    /// Add an inclusive range of bytes as symbols.
    pub fn range(&mut self, range: RangeInclusive<u8>) -> &mut Self {
        for b in range {
            self.symbol(b);
        }
        self
    }

    /// Builds the alphabet.
    ///
    /// Symbols are numbered in ascending byte order.
    pub fn build(&self) -> Alphabet {
        let mut index = [UNKNOWN; 256];
        let mut symbols = Vec::new();
        for (b, _) in self.include.iter().enumerate().filter(|&(_, &on)| on) {
            index[b] = symbols.len() as u16;
            symbols.push(b as u8);
        }
        Alphabet { index, symbols }
    }
}
