//! Order-preserving map over independent work items
//!
//! Used by [`solve_batch`](crate::gauss::solve_batch). With the `native`
//! feature items are spread over the rayon pool; without it the same call runs
//! sequentially. A single solve is never split across threads.

/// Whether [`parallel_map`] dispatches to rayon in this build
pub fn is_parallel_available() -> bool {
    cfg!(feature = "native")
}

/// Map `f` over `items`, keeping the input order in the output
#[cfg(feature = "native")]
pub fn parallel_map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    use rayon::prelude::*;
    items.par_iter().map(f).collect()
}

/// Map `f` over `items`, keeping the input order in the output
#[cfg(not(feature = "native"))]
pub fn parallel_map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_map_keeps_order() {
        let items: Vec<usize> = (0..1000).collect();
        let squares = parallel_map(&items, |i| i * i);
        assert_eq!(squares.len(), items.len());
        assert!(squares.iter().enumerate().all(|(i, sq)| *sq == i * i));
    }

    #[test]
    fn test_parallel_map_empty() {
        let items: Vec<f64> = Vec::new();
        assert!(parallel_map(&items, |x| x * 2.0).is_empty());
    }

    #[test]
    fn test_availability_matches_feature() {
        assert_eq!(is_parallel_available(), cfg!(feature = "native"));
    }
}
