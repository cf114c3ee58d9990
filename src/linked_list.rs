use std::fmt::Display;

use itertools::Itertools;

use crate::errors::HeaplingError;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A singly linked list with insertion at the front.
///
/// For more information see https://en.wikipedia.org/wiki/Linked_list
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    length: usize,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            length: 0,
        }
    }

    /// Make `value` the new head of the list.
    pub fn prepend(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.length += 1;
    }

    /// Remove the head of the list, returning its value.
    pub fn delete_head(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.length -= 1;
        Some(node.value)
    }

    pub fn try_delete_head(&mut self) -> Result<T, HeaplingError> {
        self.delete_head().ok_or(HeaplingError::EmptyListDeletion)
    }

    /// Remove every node holding `value`, returning how many were removed.
    pub fn delete_all_by_value(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let mut removed = 0;
        let mut rest = self.head.take();
        let mut tail = &mut self.head;
        while let Some(mut node) = rest {
            rest = node.next.take();
            if node.value == *value {
                removed += 1;
            } else {
                tail = &mut tail.insert(node).next;
            }
        }
        self.length -= removed;
        removed
    }

    /// Find the first element equal to `value`, scanning from the head.
    pub fn search(&self, value: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.iter().find(|x| *x == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.search(value).is_some()
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // unlink one node at a time so long lists don't recurse
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

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

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    fn make(xs: &[i64]) -> LinkedList<i64> {
        let mut l = LinkedList::new();
        for x in xs.iter() {
            l.prepend(*x);
        }
        l
    }

    #[test]
    fn test_prepend() {
        let l = make(&[9, 32, 52, 62, 3, 235, 351, 52, 11]);
        assert_eq!(l.len(), 9);
        assert_eq!(l.to_vec(), vec![11, 52, 351, 235, 3, 62, 52, 32, 9]);
        assert_eq!(l.to_string(), "11 52 351 235 3 62 52 32 9");
    }

    #[test]
    fn test_delete_all_1() {
        let mut l = make(&[9, 32, 52, 62, 3, 235, 351, 52, 11]);
        assert_eq!(l.delete_all_by_value(&52), 2);
        assert_eq!(l.to_vec(), vec![11, 351, 235, 3, 62, 32, 9]);
        assert_eq!(l.len(), 7);

        assert_eq!(l.delete_all_by_value(&500), 0);
        assert_eq!(l.len(), 7);

        assert_eq!(l.delete_all_by_value(&11), 1);
        assert_eq!(l.to_vec(), vec![351, 235, 3, 62, 32, 9]);

        assert_eq!(l.delete_all_by_value(&9), 1);
        assert_eq!(l.to_vec(), vec![351, 235, 3, 62, 32]);
    }

    #[test]
    fn test_delete_all_2() {
        let mut l = make(&[1, 2, 2, 3, 2, 2]);
        assert_eq!(l.delete_all_by_value(&2), 4);
        assert_eq!(l.to_vec(), vec![3, 1]);
        assert_eq!(l.len(), 2);

        let mut l = make(&[7, 7, 7]);
        assert_eq!(l.delete_all_by_value(&7), 3);
        assert!(l.is_empty());
        assert_eq!(l.len(), 0);
        assert_eq!(l.to_string(), "");
    }

    #[test]
    fn test_delete_head() {
        let mut l = make(&[1, 2]);
        assert_eq!(l.delete_head(), Some(2));
        assert_eq!(l.try_delete_head(), Ok(1));
        assert_eq!(l.delete_head(), None);
        assert_eq!(l.try_delete_head(), Err(HeaplingError::EmptyListDeletion));
        assert_eq!(l.len(), 0);
    }

    #[test]
    fn test_search() {
        let l = make(&[9, 32, 235]);
        assert_eq!(l.search(&235), Some(&235));
        assert_eq!(l.search(&666), None);
        assert!(l.contains(&9));
        assert!(!l.contains(&10));
    }

    #[test]
    fn test_empty() {
        let mut l: LinkedList<i64> = LinkedList::new();
        assert_eq!(l.delete_all_by_value(&10), 0);
        assert_eq!(l.search(&10), None);
        assert_eq!(l.len(), 0);
        assert_eq!(l.to_string(), "");
    }

    #[test]
    fn test_random_deletes() {
        let mut rng = StdRng::seed_from_u64(19);
        let xs: Vec<i64> = (0..1000).map(|_| rng.random_range(0..10)).collect();
        let mut l = make(&xs);
        let mut shadow: Vec<i64> = xs.iter().rev().copied().collect();
        for v in 0..10 {
            let before = shadow.len();
            shadow.retain(|x| *x != v);
            assert_eq!(l.delete_all_by_value(&v), before - shadow.len());
            assert_eq!(l.to_vec(), shadow);
            assert_eq!(l.len(), shadow.len());
        }
    }

    #[test]
    fn test_long_drop() {
        let mut l = LinkedList::new();
        for i in 0..200_000 {
            l.prepend(i);
        }
        assert_eq!(l.len(), 200_000);
        drop(l);
    }
}
