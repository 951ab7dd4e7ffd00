//! This crate provides a doubly-linked list with allocator-managed
//! nodes, implemented as a ring that is closed through a single anchor
//! node which only exists while the list is non-empty.
//!
//! The [`List`] allows inserting and removing elements at both ends in
//! constant time, and iterating in both directions. Node storage comes
//! from a caller-supplied allocation [`Strategy`]; every operation that
//! reserves storage is fallible and unwinds cleanly, so a failed
//! operation never leaks a node or leaves one half-linked.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use anchor_list::List;
//!
//! let mut list = List::new();
//!
//! list.push_back(1).unwrap();
//! list.push_back(2).unwrap();
//! list.push_front(0).unwrap();
//! assert_eq!(list.len(), 3);
//! assert_eq!(Vec::from_iter(&list), vec![&0, &1, &2]);
//!
//! assert_eq!(list.pop_front(), Some(0));
//! assert_eq!(list.pop_back(), Some(2));
//! assert_eq!(list.len(), 1);
//! ```
//!
//! # Memory Layout
//!
//! While the list holds elements, its nodes form a ring:
//!
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                        Anchor       │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 1, 2, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ element T ║           ║ element T ║                        ┊no element ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║  anchor   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╟───────────╢
//! ║ strategy  ║
//! ╚═══════════╝
//!     List
//! ```
//!
//! The anchor carries no element: its element slot exists but is never
//! initialized or read. `anchor.next` points to the first element and
//! `anchor.prev` to the last, so insertion and removal at either end
//! are plain splices with no null special cases.
//!
//! An *empty* list has no anchor at all — the first insertion
//! materializes it, and removing the last element releases it again,
//! so `List::new()` reserves nothing:
//!
//! ```text
//! ╔═══════════╗
//! ║  (none)   ║
//! ╟───────────╢
//! ║  len = 0  ║
//! ╟───────────╢
//! ║ strategy  ║
//! ╚═══════════╝
//!     List
//! ```
//!
//! # Allocation strategies
//!
//! Every node-sized block is reserved from and returned to an owned
//! [`Strategy`] value. The default, [`Heap`], uses the global allocator.
//! A strategy also declares how it travels when a list is duplicated:
//! [`Strategy::select_for_clone`] seeds the copy's instance, and
//! [`Strategy::PROPAGATE_ON_CLONE_FROM`] decides whether
//! [`List::try_clone_from`] adopts the source's instance or keeps (and
//! reuses the nodes of) its own.
//!
//! # Fallibility
//!
//! Reserving storage can fail with [`AllocError`], and element
//! construction — cloning through [`TryClone`], defaulting through
//! [`TryDefault`] — can fail with [`ConstructError`]. Bulk operations
//! ([`List::from_elem`], [`List::try_clone`], ...) tear down everything
//! they built before passing either failure on, so an error never
//! leaves a partially visible list behind.
//!
//! ```
//! use anchor_list::{ConstructError, List, TryClone};
//!
//! struct Odd(u32);
//!
//! impl TryClone for Odd {
//!     fn try_clone(&self) -> Result<Self, ConstructError> {
//!         // A value that refuses to be duplicated.
//!         Err(ConstructError)
//!     }
//! }
//!
//! let mut list = List::new();
//! list.push_back(Odd(1)).unwrap();
//!
//! assert!(list.try_clone().is_err());
//! assert_eq!(list.len(), 1); // the source is untouched
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended, fused, exact-size iterators; [`IterMut`]
//! provides mutability of the elements (but not of the linked structure
//! of the list). [`IntoIter`] consumes the list and drains it node by
//! node.
//!
//! ```
//! use anchor_list::List;
//!
//! let mut list = List::try_from_iter([1, 2, 3]).unwrap();
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```

#[doc(inline)]
pub use crate::alloc::{Heap, Strategy};
#[doc(inline)]
pub use crate::clone::{TryClone, TryDefault};
#[doc(inline)]
pub use crate::error::{AllocError, ConstructError, Error};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod alloc;
pub mod clone;
pub mod error;
pub mod list;

mod experiments;
