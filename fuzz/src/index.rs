#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    words: Vec<String>,
    texts: Vec<String>,
}

fuzz_target!(|input: Input| {
    let mut index = dynamatch::DynamicIndex::new();
    let mut added = Vec::new();
    for word in input.words {
        match index.add(word.clone()) {
            Ok(()) => added.push(word),
            Err(_) => assert!(word.is_empty()),
        }
        assert_eq!(index.len(), added.len());
    }
    let ac = dynamatch::build_automaton(added.iter().cloned()).unwrap();
    for text in &input.texts {
        assert_eq!(index.search(text).unwrap(), ac.scan(text).unwrap());
    }
});
