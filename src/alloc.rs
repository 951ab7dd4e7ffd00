use std::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;

use crate::error::AllocError;

/// An allocation strategy for the fixed-size node blocks of a
/// [`List`](crate::List).
///
/// The list asks the strategy for raw storage one node at a time and
/// gives every block back through [`deallocate`](Strategy::deallocate);
/// element construction and destruction never go through the strategy —
/// the list sequences those itself, directly on the reserved storage.
///
/// A strategy is an owned value of the list. It travels with the list on
/// clone according to [`select_for_clone`](Strategy::select_for_clone),
/// and on [`try_clone_from`](crate::List::try_clone_from) according to
/// [`PROPAGATE_ON_CLONE_FROM`](Strategy::PROPAGATE_ON_CLONE_FROM).
///
/// # Examples
///
/// A strategy that counts its live blocks:
///
/// ```
/// use std::alloc::Layout;
/// use std::cell::Cell;
/// use std::ptr::NonNull;
/// use std::rc::Rc;
/// use anchor_list::{AllocError, Heap, List, Strategy};
///
/// #[derive(Clone, Default)]
/// struct Counting {
///     live: Rc<Cell<usize>>,
/// }
///
/// impl Strategy for Counting {
///     fn allocate(&mut self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
///         self.live.set(self.live.get() + 1);
///         Heap.allocate(layout)
///     }
///
///     unsafe fn deallocate(&mut self, ptr: NonNull<u8>, layout: Layout) {
///         self.live.set(self.live.get() - 1);
///         Heap.deallocate(ptr, layout);
///     }
/// }
///
/// let counting = Counting::default();
/// let mut list = List::new_in(counting.clone());
/// list.push_back(1).unwrap();
/// list.push_back(2).unwrap();
/// assert_eq!(counting.live.get(), 3); // two elements plus the ring anchor
///
/// drop(list);
/// assert_eq!(counting.live.get(), 0);
/// ```
pub trait Strategy: Clone {
    /// Whether [`try_clone_from`](crate::List::try_clone_from) replaces
    /// the target's strategy with a copy of the source's.
    ///
    /// When `false` (the default), the target keeps its own instance and
    /// reuses the nodes it already holds where possible.
    const PROPAGATE_ON_CLONE_FROM: bool = false;

    /// Reserve storage for `layout`.
    ///
    /// The reservation is all-or-nothing: on [`AllocError`] no storage is
    /// held and nothing needs to be released.
    fn allocate(&mut self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Release storage previously reserved by this strategy.
    ///
    /// Must not fail.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by a matching [`allocate`] call on
    /// this instance (or one it was cloned from) with the same `layout`,
    /// and must not be released twice.
    ///
    /// [`allocate`]: Strategy::allocate
    unsafe fn deallocate(&mut self, ptr: NonNull<u8>, layout: Layout);

    /// Select the instance a cloned list starts from.
    ///
    /// [`try_clone`](crate::List::try_clone) seeds the copy's strategy
    /// through this hook, so a strategy can choose to be duplicated
    /// verbatim (the default), hand out a fresh instance, or share state.
    fn select_for_clone(&self) -> Self {
        self.clone()
    }
}

/// The default strategy, backed by the global allocator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heap;

impl Strategy for Heap {
    fn allocate(&mut self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        // A node block carries at least two links, so `layout` is never
        // zero-sized and the raw `alloc` contract holds.
        debug_assert!(layout.size() > 0);
        // SAFETY: `layout` has non-zero size, checked above.
        NonNull::new(unsafe { alloc(layout) }).ok_or(AllocError)
    }

    unsafe fn deallocate(&mut self, ptr: NonNull<u8>, layout: Layout) {
        dealloc(ptr.as_ptr(), layout);
    }
}
