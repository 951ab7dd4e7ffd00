//! A pointer-free modelling of the two-ended node chain, used to
//! cross-check the "no storage while empty" lifecycle rule that the
//! raw-pointer ring relies on: both end handles are absent exactly
//! while the chain holds nothing.
//!
//! Every node is owned by exactly two half-references (`StaticRc`
//! halves), one reachable from each direction; the borrow discipline is
//! carried by a `GhostToken` instead of `unsafe`.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

type NodeRef<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

struct Node<'id, T> {
    /// Half of the neighbour closer to the head, if any.
    prev: Option<NodeRef<'id, T>>,
    /// Half of the neighbour closer to the tail, if any.
    next: Option<NodeRef<'id, T>>,
    element: T,
}

impl<'id, T> Node<'id, T> {
    fn ends(element: T) -> (NodeRef<'id, T>, NodeRef<'id, T>) {
        Full::split(Full::new(GhostCell::new(Node {
            prev: None,
            next: None,
            element,
        })))
    }
}

/// A chain addressed only by its two ends, like the ring is addressed
/// only through the anchor.
pub struct Chain<'id, T> {
    head: Option<NodeRef<'id, T>>,
    tail: Option<NodeRef<'id, T>>,
}

impl<'id, T> Default for Chain<'id, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }
}

impl<'id, T> Chain<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Both ends are a single state: present together or absent
    /// together.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.head.is_some(), self.tail.is_some());
        self.head.is_none()
    }

    pub fn push_back(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (near, far) = Node::ends(element);
        match self.tail.take() {
            Some(old_tail) => {
                old_tail.deref().borrow_mut(token).next = Some(near);
                far.deref().borrow_mut(token).prev = Some(old_tail);
            }
            None => self.head = Some(near),
        }
        self.tail = Some(far);
    }

    pub fn push_front(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (near, far) = Node::ends(element);
        match self.head.take() {
            Some(old_head) => {
                old_head.deref().borrow_mut(token).prev = Some(near);
                far.deref().borrow_mut(token).next = Some(old_head);
            }
            None => self.tail = Some(near),
        }
        self.head = Some(far);
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let tail = self.tail.take()?;
        let other = match tail.deref().borrow_mut(token).prev.take() {
            Some(prev) => {
                // The previous node's forward link holds the popped
                // node's second half.
                let other = prev.deref().borrow_mut(token).next.take().unwrap();
                self.tail = Some(prev);
                other
            }
            None => self.head.take().unwrap(),
        };
        Some(Full::into_box(Full::join(tail, other)).into_inner().element)
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let head = self.head.take()?;
        let other = match head.deref().borrow_mut(token).next.take() {
            Some(next) => {
                let other = next.deref().borrow_mut(token).prev.take().unwrap();
                self.head = Some(next);
                other
            }
            None => self.tail.take().unwrap(),
        };
        Some(Full::into_box(Full::join(head, other)).into_inner().element)
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::Chain;
    use ghost_cell::GhostToken;

    #[test]
    fn ends_absent_exactly_while_empty() {
        GhostToken::new(|mut token| {
            let mut chain = Chain::new();
            assert!(chain.is_empty());

            chain.push_back(1, &mut token);
            assert!(!chain.is_empty());

            chain.push_front(0, &mut token);
            chain.push_back(2, &mut token);

            assert_eq!(chain.pop_front(&mut token), Some(0));
            assert_eq!(chain.pop_back(&mut token), Some(2));
            assert_eq!(chain.pop_back(&mut token), Some(1));
            assert!(chain.is_empty());

            assert_eq!(chain.pop_back(&mut token), None);
            assert_eq!(chain.pop_front(&mut token), None);

            // The cycle restarts cleanly after draining.
            chain.push_front(7, &mut token);
            assert!(!chain.is_empty());
            assert_eq!(chain.pop_back(&mut token), Some(7));
            assert!(chain.is_empty());
        })
    }
}
