use std::fmt::{self, Debug, Display};

use tracing::trace;

/// separator placed between two rendered elements by [`LinkedList::display()`]
pub const SEPARATOR: &str = " -> ";
/// rendering of a [`LinkedList`] without any elements
pub const EMPTY_LIST: &str = "Empty list";

/// an owning slot for a [`Node`]: the list head or the successor link of another node
pub type Link<T> = Option<Box<Node<T>>>;

/// A single element of a [`LinkedList`] chain: a payload and the owning link to its successor.
pub struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// creates an unlinked node holding `value`
    pub fn new(value: T) -> Node<T> {
        Node { value, next: None }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// the successor of this node, `None` for the last node of a chain
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// the owning slot of the successor
    pub fn next_mut(&mut self) -> &mut Link<T> {
        &mut self.next
    }
}

/// A [`LinkedList`] is an ordered chain of [`Node`]s owned one after the other, starting at the head.
///
/// The list keeps nothing but the head. Size and end of the chain are always found by traversal,
/// so `push_front` is O(1) while `push_back`, `insert`, `size` and `search` are O(n).
///
/// Every operation is total: positions out of range clamp to the front or back of the chain and
/// values that are not present make `delete` a no-op.
///
/// # Examples
///
/// ```
/// use singly::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_back(1);
/// list.push_back(3);
/// list.push_front(0);
/// list.insert(2, 2);
/// assert_eq!(list.display(), "0 -> 1 -> 2 -> 3");
///
/// list.delete(&2);
/// assert!(!list.search(&2));
/// assert_eq!(list.size(), 3);
/// ```
pub struct LinkedList<T> {
    head: Link<T>,
}

impl<T> LinkedList<T> {
    /// creates an empty [`LinkedList`]
    pub fn new() -> LinkedList<T> {
        LinkedList { head: None }
    }

    /// number of nodes reachable from the head, counted by walking the whole chain
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// the first node of the chain, if any
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// links a new node holding `value` in front of the current head
    pub fn push_front(&mut self, value: T) {
        trace!("push_front");
        splice(&mut self.head, value);
    }

    /// walks to the last node and attaches a new node holding `value` after it
    pub fn push_back(&mut self, value: T) {
        trace!("push_back");
        splice(self.tail_slot(), value);
    }

    /// Inserts `value` so that it ends up at the 0-indexed `position`.
    ///
    /// - `position <= 0` behaves like [`push_front()`](Self::push_front)
    /// - a `position` at or past the end of the chain behaves like [`push_back()`](Self::push_back)
    /// - otherwise the node is spliced in between node `position - 1` and its old successor
    ///
    /// # Examples
    /// ```
    /// use singly::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = [1, 3].into_iter().collect();
    /// list.insert(2, 1);
    /// list.insert(0, -5);
    /// list.insert(4, 99);
    /// assert_eq!(list.display(), "0 -> 1 -> 2 -> 3 -> 4");
    /// ```
    pub fn insert(&mut self, value: T, position: isize) {
        if position <= 0 {
            trace!(position, "insert clamped to front");
            splice(&mut self.head, value);
            return;
        }
        let (slot, reached) = self.slot_at(position as usize);
        trace!(position, reached, "insert");
        splice(slot, value);
    }

    /// unlinks the first node and hands back its payload
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            node.value
        })
    }

    /// releases every node of the chain
    pub fn clear(&mut self) {
        trace!("clear");
        *self = LinkedList::new();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    /// the empty slot behind the last node (the head itself for an empty list)
    fn tail_slot(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }

    /// Walks up to `index` links from the head and returns the slot it stopped at together with
    /// the number of links actually followed. A chain shorter than `index` stops at its empty tail slot.
    fn slot_at(&mut self, index: usize) -> (&mut Link<T>, usize) {
        let mut link = &mut self.head;
        let mut steps = 0;
        while steps < index {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
            steps += 1;
        }
        (link, steps)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// `true` if any node of the chain holds a value equal to `value`
    pub fn search(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Removes the first node (head to tail) holding a value equal to `value`.
    ///
    /// Returns whether a node was removed. Deleting from an empty list or deleting an absent value
    /// leaves the list untouched.
    pub fn delete(&mut self, value: &T) -> bool {
        let slot = self.slot_holding(value);
        match slot.take() {
            Some(node) => {
                *slot = node.next;
                trace!("delete unlinked a node");
                true
            }
            None => {
                trace!("delete found no matching node");
                false
            }
        }
    }

    /// the slot owning the first node equal to `value`, or the empty tail slot if there is none
    fn slot_holding(&mut self, value: &T) -> &mut Link<T> {
        let mut link = &mut self.head;
        while link.as_deref().is_some_and(|node| node.value != *value) {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }
        link
    }
}

impl<T: Display> LinkedList<T> {
    /// Renders all payloads head to tail, joined by `" -> "`, or `"Empty list"` without any.
    ///
    /// # Examples
    /// ```
    /// use singly::LinkedList;
    ///
    /// let mut list: LinkedList<f64> = LinkedList::new();
    /// assert_eq!(list.display(), "Empty list");
    /// list.push_back(1.0);
    /// list.push_back(1.5);
    /// assert_eq!(list.display(), "1 -> 1.5");
    /// ```
    pub fn display(&self) -> String {
        self.to_string()
    }
}

/// inserts a new node holding `value` into `slot`, moving the slot's old node behind it
fn splice<T>(slot: &mut Link<T>, value: T) {
    let node = Box::new(Node {
        value,
        next: slot.take(),
    });
    *slot = Some(node);
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // unlinking one node at a time keeps long chains from recursing in Box's destructor
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = self.iter();
        match elements.next() {
            None => f.write_str(EMPTY_LIST),
            Some(first) => {
                write!(f, "{first}")?;
                for value in elements {
                    write!(f, "{SEPARATOR}{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    /// appends in iteration order, walking to the tail once
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = self.tail_slot();
        for value in iter {
            let node = link.insert(Box::new(Node::new(value)));
            link = &mut node.next;
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

/// borrowing iterator over the payloads of a [`LinkedList`], head to tail
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

/// consuming iterator, pops payloads off the front
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
