//! Stack safety for deep recursion.
//!
//! Documents produced for real programs nest one `Let` inside the next, so
//! both decoding and evaluation recurse once per binding. Recursive entry
//! points wrap themselves in [`ensure_sufficient_stack`], which grows the
//! stack on demand instead of overflowing it.

/// If less than this remains, the stack is grown.
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone is left.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Run `f` on a fresh stack segment of `size` bytes.
///
/// Used around code whose recursion we do not control, such as
/// `serde_json` building a deeply nested document or dropping a long
/// chain of boxed terms.
pub fn with_stack_size<R>(size: usize, f: impl FnOnce() -> R) -> R {
    stacker::grow(size, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
    }

    #[test]
    fn test_deep_recursion_does_not_overflow() {
        assert_eq!(depth(200_000), 200_000);
    }

    #[test]
    fn test_with_stack_size_returns_value() {
        assert_eq!(with_stack_size(1024 * 1024, || 41 + 1), 42);
    }
}
