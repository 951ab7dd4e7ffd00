use std::alloc::Layout;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use crate::alloc::{Heap, Strategy};
use crate::clone::{TryClone, TryDefault};
use crate::error::{AllocError, ConstructError, Error};
use crate::{IntoIter, Iter, IterMut};

pub mod iterator;

/// A doubly-linked list with allocator-managed nodes, closed into a ring
/// through a single anchor node.
///
/// The anchor carries no element and only exists while the list does:
/// it is materialized by the first insertion and released again when the
/// last element is removed, so an empty list holds no storage at all.
/// While present, `anchor.next` is the first element and `anchor.prev`
/// the last, which keeps insertion and removal at both ends free of
/// end-of-list special cases.
///
/// Node storage comes from an owned [`Strategy`] instance, one
/// node-sized block at a time. Every operation that reserves storage is
/// fallible and returns a [`Result`]; a failed operation never leaves a
/// partially linked node behind.
///
/// # Naming Conventions
///
/// - *element node*: a node carrying a value of `T`;
/// - *anchor*: the one node whose element slot is never initialized.
pub struct List<T, A: Strategy = Heap> {
    /// Ring anchor; `None` exactly while `len == 0`.
    anchor: Option<NonNull<Node<T>>>,
    len: usize,
    strategy: A,
    _marker: PhantomData<T>,
}

/// The links come ahead of the element so the anchor's element slot can
/// stay permanently uninitialized behind them.
#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

// Node storage lifecycle. Every block reserved here is released on every
// control path, including the failure ones.
impl<T, A: Strategy> List<T, A> {
    fn node_layout() -> Layout {
        Layout::new::<Node<T>>()
    }

    /// Reserve the anchor block and close it into a one-node ring.
    ///
    /// Only the links are initialized; the element slot is never written
    /// or read for the whole life of the anchor.
    fn allocate_anchor(&mut self) -> Result<NonNull<Node<T>>, AllocError> {
        let node: NonNull<Node<T>> = self.strategy.allocate(Self::node_layout())?.cast();
        let raw = node.as_ptr();
        // SAFETY: writing through `addr_of_mut!` initializes the link
        // fields of the fresh block without creating a reference to the
        // partly uninitialized node.
        unsafe {
            ptr::addr_of_mut!((*raw).next).write(node);
            ptr::addr_of_mut!((*raw).prev).write(node);
        }
        Ok(node)
    }

    /// Reserve one element-node block and move `element` into it.
    ///
    /// The links stay uninitialized until the node is spliced into the
    /// ring.
    fn allocate_node(&mut self, element: T) -> Result<NonNull<Node<T>>, AllocError> {
        let node: NonNull<Node<T>> = self.strategy.allocate(Self::node_layout())?.cast();
        // SAFETY: the block was just reserved for a `Node<T>`.
        unsafe { ptr::addr_of_mut!((*node.as_ptr()).element).write(element) };
        Ok(node)
    }

    /// Reserve one element-node block and run `init` into it.
    ///
    /// If `init` fails, the just-reserved block is released before the
    /// error is passed on, so the caller never holds a handle to
    /// half-built storage.
    fn allocate_node_with<F>(&mut self, init: F) -> Result<NonNull<Node<T>>, Error>
    where
        F: FnOnce() -> Result<T, ConstructError>,
    {
        let node: NonNull<Node<T>> = self.strategy.allocate(Self::node_layout())?.cast();
        match init() {
            Ok(element) => {
                // SAFETY: the block was just reserved for a `Node<T>`.
                unsafe { ptr::addr_of_mut!((*node.as_ptr()).element).write(element) };
                Ok(node)
            }
            Err(err) => {
                // The element slot was never written, so only the
                // storage needs releasing.
                // SAFETY: `node` came out of `allocate` above with the
                // same layout and has not been linked anywhere.
                unsafe { self.strategy.deallocate(node.cast(), Self::node_layout()) };
                Err(err.into())
            }
        }
    }

    /// Move the element out of `node` and release the block.
    ///
    /// # Safety
    ///
    /// `node` must be a detached element node of this list, and must not
    /// be used afterwards.
    unsafe fn destroy_node(&mut self, node: NonNull<Node<T>>) -> T {
        let element = ptr::addr_of!((*node.as_ptr()).element).read();
        self.strategy.deallocate(node.cast(), Self::node_layout());
        element
    }

    /// Release the anchor block without touching its element slot.
    ///
    /// # Safety
    ///
    /// The ring must hold no element nodes.
    unsafe fn release_anchor(&mut self) {
        debug_assert_eq!(self.len, 0);
        if let Some(anchor) = self.anchor.take() {
            self.strategy.deallocate(anchor.cast(), Self::node_layout());
        }
    }
}

// Ring maintenance.
impl<T, A: Strategy> List<T, A> {
    pub(crate) fn anchor_node(&self) -> Option<NonNull<Node<T>>> {
        self.anchor
    }

    fn ensure_anchor(&mut self) -> Result<NonNull<Node<T>>, AllocError> {
        match self.anchor {
            Some(anchor) => Ok(anchor),
            None => {
                let anchor = self.allocate_anchor()?;
                self.anchor = Some(anchor);
                Ok(anchor)
            }
        }
    }

    /// Splice `node` into the ring between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to this ring, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`). Misuse makes the ring ill-formed.
    unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.len += 1;
    }

    /// Unlink `node` from the ring by repointing its neighbours at each
    /// other.
    ///
    /// It is unsafe because it does not check whether `node` is an
    /// element node of this ring.
    unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) {
        connect(node.as_ref().prev, node.as_ref().next);
        self.len -= 1;
    }

    /// Common insert path: materialize the anchor if absent, build the
    /// new node, splice it in next to the anchor.
    ///
    /// All rollback lives here: if building the node fails and the
    /// anchor was freshly materialized, it is released again, so a
    /// failed insert leaves the list exactly as it was.
    fn grow<E, F>(&mut self, at_front: bool, build: F) -> Result<(), E>
    where
        E: From<AllocError>,
        F: FnOnce(&mut Self) -> Result<NonNull<Node<T>>, E>,
    {
        let fresh = self.anchor.is_none();
        let anchor = self.ensure_anchor()?;
        let node = match build(self) {
            Ok(node) => node,
            Err(err) => {
                if fresh {
                    // SAFETY: the anchor was materialized above and
                    // nothing has been spliced into it.
                    unsafe { self.release_anchor() };
                }
                return Err(err);
            }
        };
        // SAFETY: `anchor` is in the ring, so its neighbour on either
        // side is adjacent to it; `node` is fresh and unlinked.
        unsafe {
            let (prev, next) = if at_front {
                (anchor, anchor.as_ref().next)
            } else {
                (anchor.as_ref().prev, anchor)
            };
            self.attach_node(prev, next, node);
        }
        Ok(())
    }

    /// Common remove path: unlink the end node, move its element out,
    /// release the anchor once the ring is empty.
    fn shrink(&mut self, at_front: bool) -> Option<T> {
        let anchor = self.anchor?;
        // SAFETY: the anchor only exists while the ring holds element
        // nodes, so both of its neighbours are element nodes.
        unsafe {
            let node = if at_front {
                anchor.as_ref().next
            } else {
                anchor.as_ref().prev
            };
            self.detach_node(node);
            let element = self.destroy_node(node);
            if self.len == 0 {
                self.release_anchor();
            }
            Some(element)
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List` backed by the global allocator.
    ///
    /// No storage is reserved until the first insertion.
    ///
    /// # Examples
    /// ```
    /// use anchor_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::new_in(Heap)
    }

    /// Create a `List` of `count` clones of `elem`.
    ///
    /// If any clone or reservation fails, everything built so far is
    /// torn down before the error propagates.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let list = List::from_elem(&5, 3).unwrap();
    /// assert!(list.iter().all(|x| *x == 5));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn from_elem(elem: &T, count: usize) -> Result<Self, Error>
    where
        T: TryClone,
    {
        Self::from_elem_in(elem, count, Heap)
    }

    /// Create a `List` of `count` default-constructed elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let list: List<u32> = List::from_default(2).unwrap();
    /// assert_eq!(list.front(), Some(&0));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn from_default(count: usize) -> Result<Self, Error>
    where
        T: TryDefault,
    {
        Self::from_default_in(count, Heap)
    }
}

impl<T, A: Strategy> List<T, A> {
    /// Create an empty `List` backed by `strategy`.
    ///
    /// # Examples
    /// ```
    /// use anchor_list::{Heap, List};
    /// let list: List<u32, Heap> = List::new_in(Heap);
    /// ```
    #[inline]
    pub fn new_in(strategy: A) -> Self {
        Self {
            anchor: None,
            len: 0,
            strategy,
            _marker: PhantomData,
        }
    }

    /// Like [`from_elem`](List::from_elem), backed by `strategy`.
    pub fn from_elem_in(elem: &T, count: usize, strategy: A) -> Result<Self, Error>
    where
        T: TryClone,
    {
        let mut list = Self::new_in(strategy);
        for _ in 0..count {
            // A failure drops `list`, which clears every node built so
            // far along with the anchor.
            list.push_back_cloned(elem)?;
        }
        Ok(list)
    }

    /// Like [`from_default`](List::from_default), backed by `strategy`.
    pub fn from_default_in(count: usize, strategy: A) -> Result<Self, Error>
    where
        T: TryDefault,
    {
        let mut list = Self::new_in(strategy);
        for _ in 0..count {
            list.push_default()?;
        }
        Ok(list)
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo").unwrap();
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2).unwrap();
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1).unwrap();
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3).unwrap();
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Borrow the allocation strategy.
    #[inline]
    pub fn strategy(&self) -> &A {
        &self.strategy
    }

    /// Removes all elements, releasing the anchor along with the last
    /// one.
    ///
    /// Every failure-unwind path and the destructor funnel through
    /// this.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2).unwrap();
    /// list.push_front(1).unwrap();
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_back().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1).unwrap();
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Provides a mutable reference to the front element, or `None` if
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(1).unwrap();
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.iter_mut().next()
    }

    /// Provides a reference to the back element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1).unwrap();
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Provides a mutable reference to the back element, or `None` if
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1).unwrap();
    ///
    /// if let Some(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.iter_mut().next_back()
    }

    /// Adds an element first in the list.
    ///
    /// On [`AllocError`] the list is left exactly as it was, including
    /// an empty list staying anchor-free.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2).unwrap();
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1).unwrap();
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) -> Result<(), AllocError> {
        self.grow(true, move |list| list.allocate_node(value))
    }

    /// Appends an element to the back of the list.
    ///
    /// On [`AllocError`] the list is left exactly as it was, including
    /// an empty list staying anchor-free.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1).unwrap();
    /// list.push_back(3).unwrap();
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, value: T) -> Result<(), AllocError> {
        self.grow(false, move |list| list.allocate_node(value))
    }

    /// Appends a default-constructed element to the back of the list.
    ///
    /// Same splice protocol as [`push_back`](List::push_back), with the
    /// element produced by [`TryDefault`]; a construction failure
    /// releases the reserved node before propagating.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let mut list: List<u32> = List::new();
    /// list.push_default().unwrap();
    /// assert_eq!(list.back(), Some(&0));
    /// ```
    pub fn push_default(&mut self) -> Result<(), Error>
    where
        T: TryDefault,
    {
        self.grow(false, |list| list.allocate_node_with(T::try_default))
    }

    /// Appends a clone of `value` to the back of the list.
    pub(crate) fn push_back_cloned(&mut self, value: &T) -> Result<(), Error>
    where
        T: TryClone,
    {
        self.grow(false, |list| list.allocate_node_with(|| value.try_clone()))
    }

    /// Removes the first element and returns it, or `None` if the list
    /// is empty (removal from an empty list is not an error).
    ///
    /// Removing the last element releases the anchor too.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1).unwrap();
    /// list.push_front(3).unwrap();
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.shrink(true)
    }

    /// Removes the last element and returns it, or `None` if the list
    /// is empty (removal from an empty list is not an error).
    ///
    /// Removing the last element releases the anchor too.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1).unwrap();
    /// list.push_back(3).unwrap();
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        self.shrink(false)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let list = List::try_from_iter([0, 1, 2]).unwrap();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let mut list = List::try_from_iter([0, 1, 2]).unwrap();
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list, List::try_from_iter([10, 11, 12]).unwrap());
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns `true` if the `List` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let list = List::try_from_iter([0, 1, 2]).unwrap();
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Duplicate the list.
    ///
    /// The copy's strategy is seeded through
    /// [`select_for_clone`](Strategy::select_for_clone); the elements
    /// are deep-copied in order via [`TryClone`]. On failure everything
    /// copied so far is torn down before the error propagates, and
    /// `self` is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let list = List::try_from_iter([1, 2, 3]).unwrap();
    /// let mut copy = list.try_clone().unwrap();
    ///
    /// copy.push_back(4).unwrap();
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(copy.len(), 4);
    /// ```
    pub fn try_clone(&self) -> Result<Self, Error>
    where
        T: TryClone,
    {
        let mut copy = Self::new_in(self.strategy.select_for_clone());
        for element in self.iter() {
            copy.push_back_cloned(element)?;
        }
        Ok(copy)
    }

    /// Overwrite the list with clones of `source`'s elements.
    ///
    /// The behaviour follows the strategy's declared
    /// [`PROPAGATE_ON_CLONE_FROM`](Strategy::PROPAGATE_ON_CLONE_FROM)
    /// policy:
    ///
    /// - propagating: the list is cleared, the strategy is replaced by
    ///   a copy of `source`'s, and every element is copied in; a
    ///   failure clears everything before propagating.
    /// - non-propagating (default): existing nodes are reused by
    ///   assigning cloned values into them from the front; a longer
    ///   source appends the remainder, a shorter one removes the stale
    ///   tail nodes. The strategy is untouched. A clone failure here
    ///   rolls forward: values assigned before the failure stay
    ///   visible.
    ///
    /// Either way, on success the list compares element-wise equal to
    /// `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_list::List;
    ///
    /// let source = List::try_from_iter([1, 2]).unwrap();
    /// let mut list = List::try_from_iter([7, 8, 9]).unwrap();
    ///
    /// list.try_clone_from(&source).unwrap();
    /// assert_eq!(list, source);
    /// ```
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), Error>
    where
        T: TryClone,
    {
        if A::PROPAGATE_ON_CLONE_FROM {
            self.clear();
            self.strategy = source.strategy.clone();
            for element in source.iter() {
                if let Err(err) = self.push_back_cloned(element) {
                    self.clear();
                    return Err(err);
                }
            }
        } else {
            let reused = self.len.min(source.len);
            let mut src = source.iter();
            for (slot, element) in self.iter_mut().zip(src.by_ref().take(reused)) {
                *slot = element.try_clone()?;
            }
            for element in src {
                self.push_back_cloned(element)?;
            }
            while self.len > source.len {
                self.pop_back();
            }
        }
        Ok(())
    }
}

impl<T: Debug, A: Strategy> Debug for List<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, A: Strategy + Default> Default for List<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: PartialEq, A: Strategy, B: Strategy> PartialEq<List<T, B>> for List<T, A> {
    fn eq(&self, other: &List<T, B>) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq, A: Strategy> Eq for List<T, A> {}

impl<T: PartialOrd, A: Strategy, B: Strategy> PartialOrd<List<T, B>> for List<T, A> {
    fn partial_cmp(&self, other: &List<T, B>) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord, A: Strategy> Ord for List<T, A> {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash, A: Strategy> Hash for List<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

/// Point `prev` and `next` at each other.
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T, A: Strategy> Drop for List<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

// The list owns its elements and its strategy; sending or sharing it is
// sending or sharing them.
unsafe impl<T: Send, A: Strategy + Send> Send for List<T, A> {}

unsafe impl<T: Sync, A: Strategy + Sync> Sync for List<T, A> {}

// Ensure that `List` and its read-only iterators are covariant in their
// element type.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
