#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<String>, &[u8])| {
    let (words, text) = data;
    let ac = match dynamatch::build_automaton(words.iter().cloned()) {
        Ok(ac) => ac,
        Err(_) => {
            assert!(words.iter().any(String::is_empty));
            return;
        }
    };
    let found = ac.scan(text).unwrap();
    for word in &words {
        let occurs = text
            .windows(word.len())
            .any(|w| w == word.as_bytes());
        assert_eq!(found.contains(word.as_str()), occurs, "{word:?}");
    }
});
