//! # Fixed-Length Sequences

/// Truncate or right-pad `seq` to exactly `target_len` elements.
///
/// If `seq` is at least `target_len` long, the first `target_len` elements
/// are kept; otherwise `fill` is appended until the length matches.
///
/// ## Arguments
/// * `seq` - the source sequence.
/// * `target_len` - the exact output length.
/// * `fill` - the padding value.
pub fn pad_right<V: Clone>(
    seq: &[V],
    target_len: usize,
    fill: V,
) -> Vec<V> {
    let mut out = Vec::with_capacity(target_len);
    out.extend_from_slice(&seq[..seq.len().min(target_len)]);
    out.resize(target_len, fill);
    out
}

/// Build a `{0, 1}` mask of `len` positions, with the first `ones` set.
///
/// `ones` is clamped to `len`.
pub fn prefix_mask(
    ones: usize,
    len: usize,
) -> Vec<u8> {
    (0..len).map(|i| u8::from(i < ones)).collect()
}
