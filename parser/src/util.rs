//! Byte-level helpers shared by the stateful decoder and encoder.

/// Reverse the byte order of each `word_size`-wide word in `data`.
///
/// Trailing bytes which do not form a full word are left untouched.
pub fn swap_words(data: &mut [u8], word_size: usize) {
    if word_size <= 1 {
        return;
    }
    for word in data.chunks_exact_mut(word_size) {
        word.reverse();
    }
}

/// Round a value length up to the next even number.
#[inline]
pub fn even_len(l: u32) -> u32 {
    (l + 1) & !1
}

#[cfg(test)]
mod tests {
    use super::{even_len, swap_words};

    #[test]
    fn swap_words_by_size() {
        let mut data = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        swap_words(&mut data, 2);
        assert_eq!(data, [2, 1, 4, 3, 6, 5, 8, 7, 9]);

        let mut data = [1, 2, 3, 4, 5, 6, 7, 8];
        swap_words(&mut data, 4);
        assert_eq!(data, [4, 3, 2, 1, 8, 7, 6, 5]);

        let mut data = [1, 2, 3];
        swap_words(&mut data, 1);
        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn test_even_len() {
        assert_eq!(even_len(0), 0);
        assert_eq!(even_len(1), 2);
        assert_eq!(even_len(2), 2);
        assert_eq!(even_len(3), 4);
        assert_eq!(even_len(4), 4);
        assert_eq!(even_len(5), 6);
    }
}
