//! A singly linked queue that can also give up its most recently enqueued element.
//!
//! Elements go in at the tail with [`enqueue`][Queue::enqueue] and normally come out at the head
//! with [`dequeue`][Queue::dequeue]. [`pop`][Queue::pop] removes the tail element instead. Because
//! the links only point forward this has to walk the whole list to find the new tail, so it is
//! `O(n)` while everything else is `O(1)`.
//!
//! # Examples
//!
//! ```
//! use dslab::queue::Queue;
//!
//! let mut queue = Queue::new();
//!
//! // Nothing in here yet.
//! assert_eq!(queue.dequeue(), None);
//!
//! queue.enqueue(1);
//! queue.enqueue(2);
//! queue.enqueue(3);
//! assert_eq!(queue.to_string(), "(1 2 3)");
//!
//! // `dequeue` takes from the front...
//! assert_eq!(queue.dequeue(), Some(1));
//!
//! // ...and `pop` takes from the back.
//! assert_eq!(queue.pop(), Some(3));
//! assert_eq!(queue.size(), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use log::trace;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    item: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a node and gives up ownership of it. It must eventually be reclaimed with
    /// [`Node::reclaim`].
    fn leak(item: T) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { item, next: None })))
    }

    /// Takes back ownership of a node made by [`Node::leak`].
    ///
    /// # Safety
    ///
    /// `node` must have come from `Node::leak`, must not have been reclaimed yet and must not be
    /// used again afterwards.
    unsafe fn reclaim(node: NonNull<Self>) -> Box<Self> {
        Box::from_raw(node.as_ptr())
    }
}

/// A FIFO queue backed by a singly linked list.
///
/// The queue owns every node. `first` points at the head, each node points at its successor and
/// `last` points at the final node. `last` is `None` exactly when `first` is. All three are raw
/// pointers so moving one node never invalidates a pointer to another.
pub struct Queue<T> {
    first: Link<T>,
    last: Link<T>,
    size: usize,
    _items: PhantomData<Box<Node<T>>>,
}

// SAFETY: The queue owns its nodes outright and never shares them, so it is exactly as thread safe
// as a `Box<T>` would be.
unsafe impl<T: Send> Send for Queue<T> {}
// SAFETY: `&Queue` only hands out `&T`.
unsafe impl<T: Sync> Sync for Queue<T> {}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Queue<T> {
    /// Generate a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            first: None,
            last: None,
            size: 0,
            _items: PhantomData,
        }
    }

    /// Appends `item` to the back of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use dslab::queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue("a");
    /// queue.enqueue("b");
    ///
    /// assert_eq!(queue.peek(), Some(&"a"));
    /// assert_eq!(queue.peek_back(), Some(&"b"));
    /// ```
    pub fn enqueue(&mut self, item: T) {
        let new_last = Node::leak(item);

        match self.last {
            // SAFETY: `last` is a live node owned by this queue and we hold `&mut self`, so no
            // other reference to it exists.
            Some(mut old_last) => unsafe { old_last.as_mut().next = Some(new_last) },
            None => self.first = Some(new_last),
        }

        self.last = Some(new_last);
        self.size += 1;
    }

    /// Removes and returns the element at the front of the queue, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dslab::queue::Queue;
    ///
    /// let mut queue: Queue<_> = (1..=2).collect();
    ///
    /// assert_eq!(queue.dequeue(), Some(1));
    /// assert_eq!(queue.dequeue(), Some(2));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        let first = self.first?;
        // SAFETY: `first` is owned by this queue and is unlinked right here, so it is reclaimed
        // exactly once.
        let Node { item, next } = *unsafe { Node::reclaim(first) };

        self.first = next;
        if self.first.is_none() {
            self.last = None;
        }
        self.size -= 1;

        Some(item)
    }

    /// Removes and returns the element at the back of the queue, or `None` if it is empty.
    ///
    /// This walks from the front of the queue to find the node before the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use dslab::queue::Queue;
    ///
    /// let mut queue: Queue<_> = (1..=3).collect();
    ///
    /// assert_eq!(queue.pop(), Some(3));
    /// assert_eq!(queue.pop(), Some(2));
    /// assert_eq!(queue.to_string(), "(1)");
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let old_last = self.last?;
        if self.first == Some(old_last) {
            trace!("Popping the only element, queue is now empty");
            return self.dequeue();
        }

        // SAFETY: Every node reached from `first` is live and owned by this queue, and `&mut self`
        // means nothing else is looking at them. The walk stops at the node linking to `old_last`,
        // which is unlinked before being reclaimed so it is reclaimed exactly once.
        unsafe {
            let mut before_last = self.first?;
            while before_last.as_ref().next != Some(old_last) {
                before_last = before_last.as_ref().next?;
            }

            before_last.as_mut().next = None;
            self.last = Some(before_last);
            self.size -= 1;

            let Node { item, .. } = *Node::reclaim(old_last);
            Some(item)
        }
    }

    /// Drops every element, leaving the queue empty.
    ///
    /// Nodes are reclaimed one at a time, front to back.
    pub fn clear(&mut self) {
        let mut cursor = self.first.take();
        while let Some(node) = cursor {
            // SAFETY: `first` was taken above and each `next` is read before its node is freed,
            // so every node is reclaimed once and never touched again.
            cursor = unsafe { Node::reclaim(node) }.next;
        }

        self.last = None;
        self.size = 0;
    }

    /// The number of elements in the queue.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`size`][Queue::size].
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the queue has no elements.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// The element [`dequeue`][Queue::dequeue] would return.
    pub fn peek(&self) -> Option<&T> {
        // SAFETY: The node is owned by this queue and `&self` keeps it alive and unchanged for as
        // long as the returned reference.
        self.first.map(|first| unsafe { &(*first.as_ptr()).item })
    }

    /// The element [`pop`][Queue::pop] would return.
    pub fn peek_back(&self) -> Option<&T> {
        // SAFETY: As for `peek`.
        self.last.map(|last| unsafe { &(*last.as_ptr()).item })
    }

    /// Iterates over the elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.first,
            _queue: PhantomData,
        }
    }
}

/// Borrowing iterator over a [`Queue`], front to back.
pub struct Iter<'a, T> {
    next: Link<T>,
    _queue: PhantomData<&'a Queue<T>>,
}

// SAFETY: An `Iter` is a shared borrow of the queue.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
// SAFETY: As above.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: The iterator borrows the queue for `'a`, so every node it reaches stays
            // alive and unchanged for that long.
            let node: &'a Node<T> = unsafe { &*node.as_ptr() };
            self.next = node.next;
            &node.item
        })
    }
}

/// Owning iterator over a [`Queue`]. Each step is a [`dequeue`][Queue::dequeue].
pub struct IntoIter<T>(Queue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.size, Some(self.0.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> fmt::Display for Queue<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, ")")
    }
}

impl<T> fmt::Debug for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
