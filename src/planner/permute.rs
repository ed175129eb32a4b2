//! Component A — the permutation generator (spec.md §4.1).
//!
//! Orderings are represented as permutations of *indices* into the caller's
//! expression array rather than clones of the expressions themselves
//! (spec.md §3: "a sequence of references to the same underlying
//! expressions"). This mirrors the swap/recurse/unswap construction spec.md
//! describes directly: swap the prefix position with each candidate index,
//! recurse, then undo the swap — so the working array is bitwise identical
//! to its input once the full traversal completes.

/// Produce every ordering of `0..n` as index permutations. Production order
/// is the swap/recurse/unswap traversal order, stable for identical `n`.
pub fn generate_permutations(n: usize) -> Vec<Vec<usize>> {
    let mut results = Vec::new();
    if n == 0 {
        return results;
    }
    let mut working: Vec<usize> = (0..n).collect();
    permute(&mut working, 0, &mut results);
    results
}

fn permute(working: &mut Vec<usize>, l: usize, results: &mut Vec<Vec<usize>>) {
    let n = working.len();
    if l == n - 1 {
        results.push(working.clone());
        return;
    }
    for i in l..n {
        working.swap(l, i);
        permute(working, l + 1, results);
        working.swap(l, i);
    }
}
