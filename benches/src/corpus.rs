use rand::Rng;

/// Returns `n` random words of between `min` and `max` lowercase letters
/// drawn from the first `letters` letters of the alphabet.
pub fn words(n: usize, min: usize, max: usize, letters: u8) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| {
            let len = rng.gen_range(min..=max);
            text_with(&mut rng, len, letters)
        })
        .collect()
}

/// Returns random text of `len` lowercase letters drawn from the first
/// `letters` letters of the alphabet.
pub fn text(len: usize, letters: u8) -> String {
    text_with(&mut rand::thread_rng(), len, letters)
}

fn text_with<R: Rng>(rng: &mut R, len: usize, letters: u8) -> String {
    let last = (b'a' + letters - 1) as char;
    (0..len).map(|_| rng.gen_range('a'..=last)).collect()
}
