use std::collections::BTreeSet;

use dynamatch::{build_automaton, Alphabet, DynamicIndex, ErrorKind};

#[test]
fn index_search_incremental() {
    let mut index = DynamicIndex::new();
    index.add("a").unwrap();
    index.add("b").unwrap();
    index.add("ab").unwrap();
    assert_eq!(index.search("cab").unwrap(), BTreeSet::from(["a", "ab", "b"]));
}

#[test]
fn index_search_empty() {
    let index = DynamicIndex::new();
    assert!(index.is_empty());
    assert!(index.search("lorem ipsum").unwrap().is_empty());
    assert!(index.search("").unwrap().is_empty());
    assert!(index.find_all("lorem").unwrap().is_empty());
}

#[test]
fn index_search_repeated_pattern() {
    let mut index = DynamicIndex::new();
    index.add("x").unwrap();
    index.add("x").unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.search("x").unwrap(), BTreeSet::from(["x"]));
    assert_eq!(index.find_all("xx").unwrap().len(), 2);
}

#[test]
fn index_search_matches_static_automaton() {
    let words = [
        "he", "she", "his", "hers", "lorem", "ipsum", "dolor", "sit", "amet", "or", "em", "s",
        "hershe",
    ];
    let texts = [
        "",
        "ahishers",
        "lorem ipsum dolor sit amet",
        "ushershe",
        "the quick brown fox",
    ];
    let mut index = DynamicIndex::new();
    for (n, word) in words.iter().enumerate() {
        index.add(*word).unwrap();
        let ac = build_automaton(words[..=n].iter().copied()).unwrap();
        for text in texts {
            assert_eq!(
                index.search(text).unwrap(),
                ac.scan(text).unwrap(),
                "after {} words, text {:?}",
                n + 1,
                text
            );
        }
    }
}

#[test]
fn index_find_all_matches_static_automaton() {
    let words = ["he", "she", "his", "hers"];
    let mut index = DynamicIndex::new();
    index.extend(words).unwrap();
    let ac = build_automaton(words).unwrap();

    let mut exp: Vec<_> = ac
        .find_iter(b"ahishers")
        .map(|m| m.unwrap())
        .map(|m| (m.end(), m.start(), m.pattern()))
        .collect();
    exp.sort_unstable();
    let got: Vec<_> = index
        .find_all("ahishers")
        .unwrap()
        .into_iter()
        .map(|m| (m.end(), m.start(), m.pattern()))
        .collect();
    assert_eq!(got, exp);
}

#[test]
fn index_custom_alphabet() {
    let alphabet = Alphabet::builder().symbols("ACGT").build();
    let mut index = DynamicIndex::with_alphabet(alphabet);
    index.extend(["GATTACA", "TAC", "CAT"]).unwrap();
    assert_eq!(
        index.search("TTGATTACAG").unwrap(),
        BTreeSet::from(["GATTACA", "TAC"])
    );

    let err = index.search("GATTACA-").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownSymbol);
    let err = index.add("gattaca").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownSymbol);
    assert_eq!(index.len(), 3);
}

#[test]
fn index_words_are_kept() {
    let mut index = DynamicIndex::new();
    index.extend(["lorem", "ipsum", "dolor"]).unwrap();
    let words: BTreeSet<_> = index.words().collect();
    assert_eq!(words, BTreeSet::from(["dolor", "ipsum", "lorem"]));
}

#[test]
fn index_slots_sizes() {
    let mut index = DynamicIndex::new();
    index.extend((0..11).map(|i| format!("w{i}"))).unwrap();
    // 11 = 0b1011
    let sizes: Vec<_> = index.slots().map(|s| s.map(|a| a.words().len())).collect();
    assert_eq!(sizes, [Some(1), Some(2), None, Some(8)]);
}

#[test]
fn index_amortized_rebuild_cost() {
    // Every word takes part in at most one rebuild per slot.
    const L: usize = 8;
    for n in [1usize, 7, 64, 100, 1000] {
        let mut index = DynamicIndex::new();
        for i in 0..n {
            index.add(format!("{:08}", i)).unwrap();
        }
        let levels = (usize::BITS - n.leading_zeros()) as usize;
        assert!(
            index.rebuilt_bytes() <= n * L * levels,
            "n = {n}, rebuilt {} bytes",
            index.rebuilt_bytes()
        );
        // Far below the cost of rebuilding everything on every insertion.
        if n >= 64 {
            assert!(index.rebuilt_bytes() * 4 < L * n * (n + 1) / 2);
        }
    }
}
