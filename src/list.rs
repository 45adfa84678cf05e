use alloc::boxed::Box;
use alloc::fmt;
use core::mem;
use core::ptr::{self, NonNull};

extern crate alloc;

/// A node in the recency sequence.
///
/// Contains an entry and pointers to the neighbouring nodes. Raw pointers to
/// nodes are the stable locators the store keeps in its lookup index; a node's
/// address never changes while it is linked into the list.
pub(crate) struct Node<T> {
    /// The entry stored in this node. Uses MaybeUninit to allow for sigil nodes.
    val: mem::MaybeUninit<T>,
    /// Pointer to the previous node in the list.
    prev: *mut Node<T>,
    /// Pointer to the next node in the list.
    next: *mut Node<T>,
}

impl<T> Node<T> {
    /// Creates a new node holding the given entry.
    fn new(val: T) -> Self {
        Node {
            val: mem::MaybeUninit::new(val),
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        }
    }

    /// Creates a new sigil (sentinel) node without initializing the entry.
    ///
    /// Sigil nodes are used as head and tail markers in the list.
    fn new_sigil() -> Self {
        Node {
            val: mem::MaybeUninit::uninit(),
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        }
    }

    /// Borrows the entry stored in this node.
    ///
    /// # Safety
    ///
    /// The entry must be initialized. Must only be called on non-sigil nodes.
    pub(crate) unsafe fn value(&self) -> &T {
        // SAFETY: the caller guarantees this is a non-sigil node
        unsafe { self.val.assume_init_ref() }
    }

    /// Mutably borrows the entry stored in this node.
    ///
    /// # Safety
    ///
    /// The entry must be initialized. Must only be called on non-sigil nodes.
    pub(crate) unsafe fn value_mut(&mut self) -> &mut T {
        // SAFETY: the caller guarantees this is a non-sigil node
        unsafe { self.val.assume_init_mut() }
    }

    /// Consumes an unlinked node and moves its entry out.
    ///
    /// This is the only way the entry of a removed node gets dropped; letting
    /// a non-sigil `Box<Node<T>>` fall out of scope would leak the entry
    /// because `MaybeUninit` never runs destructors.
    ///
    /// # Safety
    ///
    /// The entry must be initialized. Must only be called on non-sigil nodes
    /// that have already been detached from the list.
    pub(crate) unsafe fn into_value(self: Box<Self>) -> T {
        let node = *self;
        // SAFETY: the caller guarantees this is a non-sigil node
        unsafe { node.val.assume_init() }
    }
}

/// A doubly linked list holding entries in recency order.
///
/// The list has a fixed capacity set at creation time and provides O(1)
/// insertion at the front, removal at the back, and relocation of an existing
/// node to the front. Sentinel nodes (sigils) at the head and tail keep the
/// link surgery branch-free.
///
/// A capacity of zero is valid: `add` always declines and the list stays
/// empty.
pub(crate) struct List<T> {
    /// Maximum number of entries the list can hold. May be zero.
    cap: usize,
    /// Current number of entries in the list.
    len: usize,
    /// Pointer to the head sentinel node.
    head: *mut Node<T>,
    /// Pointer to the tail sentinel node.
    tail: *mut Node<T>,
}

impl<T> List<T> {
    /// Creates a new list that holds at most `cap` entries.
    pub(crate) fn new(cap: usize) -> List<T> {
        let head = Box::into_raw(Box::new(Node::new_sigil()));
        let tail = Box::into_raw(Box::new(Node::new_sigil()));

        let list = List {
            cap,
            len: 0,
            head,
            tail,
        };

        unsafe {
            // SAFETY: head and tail are newly allocated and valid pointers
            (*list.head).next = list.tail;
            (*list.tail).prev = list.head;
        }

        list
    }

    /// Returns the maximum number of entries the list can hold.
    #[allow(dead_code)]
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the current number of entries in the list.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no entries.
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the list is at capacity.
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.cap
    }

    /// Borrows the entry at the back of the list (the least recently used),
    /// without relinking anything.
    pub(crate) fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: tail is a valid sentinel and the list is not empty, so
        // tail's predecessor is a non-sigil node holding an initialized entry
        unsafe {
            let prev = (*self.tail).prev;
            Some((*prev).value())
        }
    }

    /// Removes the first (most recently used) entry from the list.
    ///
    /// Returns the detached node if the list is not empty. The caller takes
    /// ownership of the node and is responsible for consuming its entry via
    /// [`Node::into_value`].
    pub(crate) fn remove_first(&mut self) -> Option<Box<Node<T>>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: head is a valid sentinel initialized in `new`, and the list
        // is not empty, so there is at least one node between the sentinels
        let next = unsafe { (*self.head).next };
        if next != self.tail {
            unsafe {
                // SAFETY: next is a non-sigil node linked into this list
                self.detach(next);
            }
            self.len -= 1;
            // SAFETY: next was just detached and is no longer reachable
            unsafe { Some(Box::from_raw(next)) }
        } else {
            None
        }
    }

    /// Removes the last (least recently used) entry from the list.
    ///
    /// Returns the detached node if the list is not empty. The caller takes
    /// ownership of the node and is responsible for consuming its entry via
    /// [`Node::into_value`].
    pub(crate) fn remove_last(&mut self) -> Option<Box<Node<T>>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: tail is a valid sentinel initialized in `new`, and the list
        // is not empty, so there is at least one node between the sentinels
        let prev = unsafe { (*self.tail).prev };
        if prev != self.head {
            unsafe {
                // SAFETY: prev is a non-sigil node linked into this list
                self.detach(prev);
            }
            self.len -= 1;
            // SAFETY: prev was just detached and is no longer reachable
            unsafe { Some(Box::from_raw(prev)) }
        } else {
            None
        }
    }

    /// Unlinks a node from the list without deallocating it.
    ///
    /// # Safety
    ///
    /// `node` must be a valid pointer to a non-sigil node currently linked
    /// into this list.
    unsafe fn detach(&mut self, node: *mut Node<T>) {
        // SAFETY: the caller guarantees that node is linked into the list,
        // which means its prev and next pointers are also valid nodes
        unsafe {
            (*(*node).prev).next = (*node).next;
            (*(*node).next).prev = (*node).prev;
        }
    }

    /// Links a node in directly after the head sentinel, making it the first
    /// (most recently used) entry.
    ///
    /// # Safety
    ///
    /// `node` must be a valid pointer to a node that is not currently linked
    /// into the list (newly allocated or previously detached).
    unsafe fn attach(&mut self, node: *mut Node<T>) {
        // SAFETY: head is a valid sentinel initialized in `new`, and the
        // caller guarantees that node is a valid unlinked node
        unsafe {
            (*node).next = (*self.head).next;
            (*node).prev = self.head;
            (*self.head).next = node;
            (*(*node).next).prev = node;
        }
    }

    /// Moves a node to the front of the list (after the head sentinel).
    ///
    /// The node's address, and therefore any locator pointing at it, is
    /// unchanged; only the links around it are rewritten.
    ///
    /// # Safety
    ///
    /// `node` must be a valid pointer to a non-sigil node currently linked
    /// into this list.
    pub(crate) unsafe fn move_to_front(&mut self, node: *mut Node<T>) {
        if node.is_null() || node == self.head || node == self.tail {
            return;
        }

        // SAFETY: the caller guarantees node is linked into this list
        unsafe {
            // Already the first entry, nothing to relink
            if (*self.head).next == node {
                return;
            }

            self.detach(node);
            self.attach(node);
        }
    }

    /// Adds an entry to the front of the list.
    ///
    /// Returns a pointer to the newly created node, or None if the list is
    /// full. With a capacity of zero this always returns None.
    pub(crate) fn add(&mut self, v: T) -> Option<*mut Node<T>> {
        if self.is_full() {
            return None;
        }
        // SAFETY: Box::into_raw never returns null
        let node = unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(Node::new(v)))) };
        // SAFETY: node is a newly allocated node not yet linked into any list
        unsafe { self.attach(node.as_ptr()) };
        self.len += 1;
        Some(node.as_ptr())
    }

    /// Clears the list, removing and dropping all entries.
    pub(crate) fn clear(&mut self) {
        while let Some(node) = self.remove_first() {
            // SAFETY: nodes handed out by remove_first are non-sigil and
            // hold initialized entries
            drop(unsafe { node.into_value() });
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();

        // SAFETY: head and tail are valid sentinels initialized in `new` and
        // only freed here; null checks guard against a double drop
        unsafe {
            if !self.head.is_null() {
                let _ = Box::from_raw(self.head);
                self.head = ptr::null_mut();
            }
            if !self.tail.is_null() {
                let _ = Box::from_raw(self.tail);
                self.tail = ptr::null_mut();
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("capacity", &self.cap)
            .field("length", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_new_and_cap() {
        let list = List::<u32>::new(3);
        assert_eq!(list.cap(), 3);
        assert_eq!(list.len(), 0);
        assert!(!list.head.is_null());
        assert!(!list.tail.is_null());
    }

    #[test]
    fn test_add_until_full() {
        let mut list = List::<u32>::new(2);
        let node1 = list.add(10).unwrap();
        let node2 = list.add(20).unwrap();
        assert_eq!(list.len(), 2);
        assert_ne!(node1, node2);
        // Declines to add when at capacity
        assert!(list.add(30).is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_zero_capacity_never_holds_anything() {
        let mut list = List::<u32>::new(0);
        assert!(list.is_full());
        assert!(list.add(10).is_none());
        assert_eq!(list.len(), 0);
        assert!(list.back().is_none());
        assert!(list.remove_first().is_none());
        assert!(list.remove_last().is_none());
    }

    #[test]
    fn test_remove_first_and_last() {
        let mut list = List::<u32>::new(3);

        assert!(list.remove_first().is_none());
        assert!(list.remove_last().is_none());

        let _node1 = list.add(10).unwrap();
        let _node2 = list.add(20).unwrap();
        let _node3 = list.add(30).unwrap();
        assert_eq!(list.len(), 3);

        // Adds go to the front, so the first entry is the newest
        let first = list.remove_first().unwrap();
        assert_eq!(unsafe { first.into_value() }, 30);
        assert_eq!(list.len(), 2);

        let last = list.remove_last().unwrap();
        assert_eq!(unsafe { last.into_value() }, 10);
        assert_eq!(list.len(), 1);

        let remaining = list.remove_first().unwrap();
        assert_eq!(unsafe { remaining.into_value() }, 20);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_back_observes_oldest() {
        let mut list = List::<u32>::new(3);
        assert!(list.back().is_none());

        let _node1 = list.add(10).unwrap();
        let _node2 = list.add(20).unwrap();
        assert_eq!(list.back(), Some(&10));
        // back() does not relink or remove
        assert_eq!(list.len(), 2);
        assert_eq!(list.back(), Some(&10));
    }

    #[test]
    fn test_move_to_front() {
        let mut list = List::<u32>::new(3);

        // Order after adds: front->30->20->10->back
        let node1 = list.add(10).unwrap();
        let _node2 = list.add(20).unwrap();
        let node3 = list.add(30).unwrap();

        // front->10->30->20->back
        unsafe {
            list.move_to_front(node1);
        }
        assert_eq!(list.len(), 3);
        assert_eq!(list.back(), Some(&20));

        // Moving the current front is a no-op
        unsafe {
            list.move_to_front(node1);
        }
        assert_eq!(list.len(), 3);

        // front->30->10->20->back
        unsafe {
            list.move_to_front(node3);
        }

        let first = list.remove_first().unwrap();
        assert_eq!(unsafe { first.into_value() }, 30);
        let second = list.remove_first().unwrap();
        assert_eq!(unsafe { second.into_value() }, 10);
        let third = list.remove_first().unwrap();
        assert_eq!(unsafe { third.into_value() }, 20);
    }

    #[test]
    fn test_value_access_through_node() {
        let mut list = List::<String>::new(3);
        let node = list.add(String::from("test")).unwrap();

        unsafe {
            assert_eq!((*node).value(), "test");

            (*node).value_mut().push_str("_modified");
            assert_eq!((*node).value(), "test_modified");

            *(*node).value_mut() = String::from("new_value");
            assert_eq!((*node).value(), "new_value");
        }
    }

    #[test]
    fn test_clear() {
        let mut list = List::<String>::new(3);

        let _node1 = list.add(String::from("one")).unwrap();
        let _node2 = list.add(String::from("two")).unwrap();
        let _node3 = list.add(String::from("three")).unwrap();
        assert_eq!(list.len(), 3);

        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());

        let _node4 = list.add(String::from("four")).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_length_consistency_after_mixed_operations() {
        let mut list = List::<u32>::new(4);

        let node1 = list.add(10).unwrap();
        let node2 = list.add(20).unwrap();
        let node3 = list.add(30).unwrap();
        assert_eq!(list.len(), 3);

        unsafe {
            list.move_to_front(node1);
        }
        assert_eq!(list.len(), 3, "length unchanged after move_to_front");

        unsafe {
            list.move_to_front(node3);
        }
        assert_eq!(list.len(), 3, "length unchanged after move_to_front");
        let _ = node2;

        let _node4 = list.add(40).unwrap();
        assert_eq!(list.len(), 4);
        assert!(list.is_full());

        let removed = list.remove_last().unwrap();
        drop(unsafe { removed.into_value() });
        assert_eq!(list.len(), 3);

        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }
}
