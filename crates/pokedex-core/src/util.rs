// ── Small shared helpers ──

/// Order-insensitive equality: true iff both slices hold the same
/// multiset of elements.
pub fn same_elements<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}
