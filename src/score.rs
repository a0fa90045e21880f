/// Number of leading bytes that contribute to the score of a sequence.
const SCORE_WIDTH: usize = 6;

/// Scores a byte sequence by packing its leading bytes into an integer.
///
/// Up to six leading bytes are packed big-endian into a 48-bit integer, which is represented
/// exactly by `f64`. Sequences shorter than six bytes are padded with zeros, so a prefix never
/// scores above its extensions. Sequences that agree on their first six bytes have the same score.
///
/// # Examples
///
/// ```rust
/// use ordinate::score_bytes;
///
/// assert!(score_bytes(b"abcdef") < score_bytes(b"abcdeg"));
/// assert_eq!(score_bytes(b"abcdefgh"), score_bytes(b"abcdefzz"));
/// ```
pub fn score_bytes(bytes: &[u8]) -> f64 {
    let packed = bytes
        .iter()
        .take(SCORE_WIDTH)
        .enumerate()
        .fold(0u64, |packed, (index, byte)| {
            packed | (u64::from(*byte) << ((SCORE_WIDTH - 1 - index) * 8))
        });
    packed as f64
}
