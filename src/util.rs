/// The explicit stack used by the traversal algorithms in place of recursion.
pub(crate) type Stack<T> = alloc::vec::Vec<T>;

#[inline]
#[cfg_attr(debug_assertions, track_caller)]
pub(crate) unsafe fn unreachable_debugchecked(msg: &str) -> ! {
    #[cfg(debug_assertions)]
    {
        // Most of those panics are in a tree corruption context, so we should
        // just abort the process to prevent unwinders from collecting corrupted data
        abort_on_panic(|| -> () { unreachable!("{}", msg) });
        unreachable!("{}", msg)
    }
    #[cfg(not(debug_assertions))]
    {
        core::hint::unreachable_unchecked()
    }
}

#[inline]
pub(crate) fn abort_on_panic<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "unwind_safety")]
    {
        std::panic::catch_unwind(
            std::panic::AssertUnwindSafe(f)
        ).unwrap_or_else(|_| std::process::exit(101))
    }
    #[cfg(not(feature = "unwind_safety"))]
    {
        f()
    }
}
