use core::alloc::Layout;
use core::ptr;

use std::alloc::{self, handle_alloc_error};

/// Debug-mode check for a valid allocation count.
/// This function is only available in debug builds.
///
/// Conditions:
///
/// - `count` must be greater than `0`.
#[cfg(debug_assertions)]
const fn debug_assert_non_zero_count(count: usize) {
    assert!(count > 0, "Allocation count must be greater than 0");
}

/// Raw array allocator used for trie node storage.
///
/// The contract is deliberately narrow:
///
/// - [`allocate`](Allocator::allocate) receives an element **count** and must
///   hand back memory sized and aligned for `count` values of `T`, or null
///   when it cannot. It never panics and never aborts.
///
/// - [`deallocate`](Allocator::deallocate) receives the same count the block
///   was allocated with, not a byte length, so size-classed allocators can
///   bin by capacity without storing headers.
///
/// Each map owns a private allocator value and never re-enters it from
/// within a single call.
pub trait Allocator {
    /// Allocates room for `count` values of `T`.
    ///
    /// Returns a pointer aligned to `align_of::<T>()`, or null on exhaustion
    /// or when the requested size overflows.
    fn allocate<T>(&mut self, count: usize) -> *mut T;

    /// Releases a block previously returned by [`allocate`](Allocator::allocate).
    ///
    /// # Safety
    ///
    /// - `ptr` must come from a call to `allocate::<T>` on this same
    ///   allocator with the same `count`, and must not have been released
    ///   already.
    ///
    /// - The elements are not dropped; the caller destroys them first.
    unsafe fn deallocate<T>(&mut self, ptr: *mut T, count: usize);
}

/// Default allocator backed by the registered `#[global_allocator]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MallocAllocator;

impl Allocator for MallocAllocator {
    fn allocate<T>(&mut self, count: usize) -> *mut T {
        #[cfg(debug_assertions)]
        debug_assert_non_zero_count(count);

        match Layout::array::<T>(count) {
            Ok(layout) => unsafe { alloc::alloc(layout) as *mut T },
            Err(_) => ptr::null_mut(),
        }
    }

    unsafe fn deallocate<T>(&mut self, ptr: *mut T, count: usize) {
        #[cfg(debug_assertions)]
        debug_assert_non_zero_count(count);
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        // The block was allocated with this exact layout, so the unchecked
        // reconstruction cannot overflow.
        let layout = unsafe {
            Layout::from_size_align_unchecked(count * core::mem::size_of::<T>(), core::mem::align_of::<T>())
        };
        unsafe { alloc::dealloc(ptr as *mut u8, layout) };
    }
}

/// Allocates through `allocator` and diverts to [`handle_alloc_error`] on
/// failure. For paths that cannot report errors (construction, `Clone`).
pub(crate) fn allocate_or_abort<T, A: Allocator>(allocator: &mut A, count: usize) -> *mut T {
    let ptr = allocator.allocate::<T>(count);
    if ptr.is_null() {
        match Layout::array::<T>(count) {
            Ok(layout) => handle_alloc_error(layout),
            Err(_) => handle_alloc_error(Layout::new::<T>()),
        }
    }
    ptr
}

#[cfg(test)]
mod alloc_tests {
    use super::*;

    #[test]
    fn test_malloc_allocator_roundtrip() {
        let mut allocator = MallocAllocator;
        let ptr: *mut u64 = allocator.allocate(8);
        assert!(!ptr.is_null());

        unsafe {
            for i in 0..8 {
                ptr::write(ptr.add(i), i as u64);
            }
            for i in 0..8 {
                assert_eq!(*ptr.add(i), i as u64);
            }
            allocator.deallocate(ptr, 8);
        }
    }

    #[test]
    fn test_malloc_allocator_overflow_returns_null() {
        let mut allocator = MallocAllocator;
        let ptr: *mut u64 = allocator.allocate(usize::MAX / 2);
        assert!(ptr.is_null());
    }

    #[test]
    fn test_allocate_or_abort_success() {
        let mut allocator = MallocAllocator;
        let ptr: *mut u32 = allocate_or_abort(&mut allocator, 4);
        assert!(!ptr.is_null());
        unsafe { allocator.deallocate(ptr, 4) };
    }
}
