use rand::Rng;

/// Pick `count` elements of `items` uniformly at random without replacement.
///
/// Runs a partial Fisher-Yates shuffle over a copy of `items`, so only the
/// first `count` positions are ever randomised. The result order is the order
/// the draws happened in. Returns `None` if `items` is shorter than `count`.
pub fn sample_without_replacement<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    count: usize,
    rng: &mut R,
) -> Option<Vec<T>> {
    if count > items.len() {
        return None;
    }

    let mut pool = items.to_vec();
    for i in 0..count {
        let j = rng.gen_range(i..pool.len());
        pool.swap(i, j);
    }
    pool.truncate(count);
    Some(pool)
}

/// Drop repeated elements, keeping the first occurrence of each.
pub fn distinct<T: Clone + PartialEq>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}
