//! `Serialize` and `Deserialize` implementations.
//!
//! Alphabets are written as the list of their symbols. Automata are written
//! with their full transition table so that reading one back does not need to
//! rebuild it. Indexes are written as the word lists of their slots, their
//! automata are rebuilt on read.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::automaton::Automaton;
use crate::index::DynamicIndex;
use crate::Alphabet;

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for Alphabet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.symbols())
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let symbols = Vec::<u8>::deserialize(deserializer)?;
        Ok(Alphabet::builder().symbols(symbols).build())
    }
}

/// A single state of an automaton as it is written.
#[derive(Serialize, Deserialize)]
pub(crate) struct StateRepr {
    pub trans: Vec<usize>,
    pub output: Vec<usize>,
}

#[derive(Deserialize)]
struct AutomatonRepr {
    alphabet: Alphabet,
    words: Vec<String>,
    states: Vec<StateRepr>,
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for Automaton {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Automaton", 3)?;
        s.serialize_field("alphabet", self.alphabet())?;
        s.serialize_field("words", self.words())?;
        s.serialize_field("states", &self.to_states())?;
        s.end()
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for Automaton {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let AutomatonRepr {
            alphabet,
            words,
            states,
        } = AutomatonRepr::deserialize(deserializer)?;
        Automaton::from_states(alphabet, words, states).map_err(de::Error::custom)
    }
}

#[derive(Serialize)]
struct IndexRef<'a> {
    alphabet: &'a Alphabet,
    slots: Vec<Option<&'a [String]>>,
}

#[derive(Deserialize)]
struct IndexRepr {
    alphabet: Alphabet,
    slots: Vec<Option<Vec<String>>>,
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for DynamicIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        IndexRef {
            alphabet: self.alphabet(),
            slots: self.slots().map(|s| s.map(Automaton::words)).collect(),
        }
        .serialize(serializer)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for DynamicIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let IndexRepr { alphabet, slots } = IndexRepr::deserialize(deserializer)?;
        DynamicIndex::from_slots(alphabet, slots).map_err(de::Error::custom)
    }
}
