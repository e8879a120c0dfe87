use std::collections::vec_deque;
use std::collections::VecDeque;
use std::fmt::{Debug, Display};
use std::iter::FromIterator;
use std::num::NonZeroU64;

use indexmap::IndexMap;

/// A priority queue that keeps FIFO order among entries with equal priority.
///
/// Bigger priority values are popped first.
/// Among entries with the same priority, the one pushed earliest is popped first.
///
/// Priorities are [`NonZeroU64`] so the "positive integer" contract is checked
/// by the type system instead of at runtime.
///
/// The same value may be stored any number of times, at the same or at
/// different priorities. Operations that look up an entry by value
/// ([`change_priority`], [`contains`]) require `T: PartialEq` and always act
/// on the first match in pop order.
///
/// [`NonZeroU64`]: std::num::NonZeroU64
/// [`change_priority`]: struct.FifoPriorityQueue.html#method.change_priority
/// [`contains`]: struct.FifoPriorityQueue.html#method.contains
///
/// # Examples
///
/// ```
/// use fifo_priority_queue::FifoPriorityQueue;
/// use std::num::NonZeroU64;
///
/// let low = NonZeroU64::new(1).unwrap();
/// let high = NonZeroU64::new(5).unwrap();
///
/// let mut queue = FifoPriorityQueue::new();
///
/// // Currently queue is empty
/// assert_eq!(queue.pop(), None);
///
/// queue.push("first low", low);
/// queue.push("first high", high);
/// queue.push("second high", high);
/// queue.push("second low", low);
///
/// assert_eq!(queue.len(), 4);
///
/// // Peek returns the entry that the next pop would remove.
/// assert_eq!(queue.peek(), Some((&"first high", high)));
///
/// // Higher priority wins, equal priority is served in insertion order.
/// assert_eq!(queue.pop(), Some("first high"));
/// assert_eq!(queue.pop(), Some("second high"));
/// assert_eq!(queue.pop(), Some("first low"));
/// assert_eq!(queue.pop(), Some("second low"));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Clone)]
pub struct FifoPriorityQueue<T> {
    buckets: IndexMap<NonZeroU64, VecDeque<T>>,
    count: usize,
}

impl<T> FifoPriorityQueue<T> {
    /// Creates an empty queue.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use fifo_priority_queue::FifoPriorityQueue;
    /// use std::num::NonZeroU64;
    /// let mut queue = FifoPriorityQueue::new();
    /// queue.push("task", NonZeroU64::new(4).unwrap());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            buckets: IndexMap::new(),
            count: 0,
        }
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep buckets for `capacity` distinct priorities without reallocation.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use fifo_priority_queue::FifoPriorityQueue;
    /// use std::num::NonZeroU64;
    /// let mut queue = FifoPriorityQueue::with_capacity(10);
    /// queue.push("task", NonZeroU64::new(4).unwrap());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: IndexMap::with_capacity(capacity),
            count: 0,
        }
    }

    /// Reserves space for at least `additional` new priority buckets.
    ///
    /// ### Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    ///
    /// ### Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use fifo_priority_queue::FifoPriorityQueue;
    /// use std::num::NonZeroU64;
    /// let mut queue = FifoPriorityQueue::new();
    /// queue.reserve(100);
    /// queue.push(4, NonZeroU64::new(4).unwrap());
    /// ```
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.buckets.reserve(additional);
    }

    /// Adds a value at the given priority.
    ///
    /// The value is appended to the back of its priority bucket, so among
    /// equal priorities it will be popped after everything pushed before it.
    /// Duplicates are accepted.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use fifo_priority_queue::FifoPriorityQueue;
    /// use std::num::NonZeroU64;
    /// let mut queue = FifoPriorityQueue::new();
    /// queue.push("first", NonZeroU64::new(5).unwrap());
    /// queue.push("second", NonZeroU64::new(5).unwrap());
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(queue.pop(), Some("first"));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Amortized ***O(1)***.
    /// The worst case is when bucket reallocation appears,
    /// in this case complexity of single call is ***O(n)***.
    pub fn push(&mut self, value: T, priority: NonZeroU64) {
        self.buckets
            .entry(priority)
            .or_insert_with(VecDeque::new)
            .push_back(value);
        self.count += 1;
    }

    /// Removes and returns the oldest-added value with the highest priority.
    ///
    /// Returns `None` if the queue is empty. `None` never collides with a
    /// stored value, so "empty" values like `0` or `""` are safe to store.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use fifo_priority_queue::FifoPriorityQueue;
    /// use std::num::NonZeroU64;
    /// let mut queue = FifoPriorityQueue::new();
    /// queue.push("low", NonZeroU64::new(1).unwrap());
    /// queue.push("high", NonZeroU64::new(9).unwrap());
    /// assert_eq!(queue.pop(), Some("high"));
    /// assert_eq!(queue.pop(), Some("low"));
    /// assert_eq!(queue.pop(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(p)*** where ***p*** is the number of distinct priorities present.
    pub fn pop(&mut self) -> Option<T> {
        let priority = self.buckets.keys().max().copied()?;
        let bucket = self
            .buckets
            .get_mut(&priority)
            .expect("max key comes from the bucket map");
        let value = bucket.pop_front().expect("buckets are never left empty");
        self.count -= 1;
        self.remove_bucket_if_empty(priority);
        Some(value)
    }

    /// Returns the entry that the next [`pop`] would remove, with its priority.
    ///
    /// [`pop`]: struct.FifoPriorityQueue.html#method.pop
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use fifo_priority_queue::FifoPriorityQueue;
    /// use std::num::NonZeroU64;
    /// let urgent = NonZeroU64::new(7).unwrap();
    /// let mut queue = FifoPriorityQueue::new();
    /// queue.push("routine", NonZeroU64::new(2).unwrap());
    /// queue.push("urgent", urgent);
    /// assert_eq!(queue.peek(), Some((&"urgent", urgent)));
    /// assert_eq!(queue.len(), 2);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(p)*** where ***p*** is the number of distinct priorities present.
    pub fn peek(&self) -> Option<(&T, NonZeroU64)> {
        let (&priority, bucket) = self.buckets.iter().max_by_key(|&(&priority, _)| priority)?;
        let value = bucket.front().expect("buckets are never left empty");
        Some((value, priority))
    }

    /// Get the number of values in the queue.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use fifo_priority_queue::FifoPriorityQueue;
    /// use std::num::NonZeroU64;
    /// let queue: FifoPriorityQueue<u64> = (1..6)
    ///     .map(|x| (x, NonZeroU64::new(x).unwrap()))
    ///     .collect();
    /// assert_eq!(queue.len(), 5);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(
            self.count,
            self.buckets.values().map(VecDeque::len).sum::<usize>()
        );
        self.count
    }

    /// Returns true if queue is empty.
    ///
    /// ```
    /// use std::num::NonZeroU64;
    /// let mut queue = fifo_priority_queue::FifoPriorityQueue::new();
    /// assert!(queue.is_empty());
    /// queue.push(0, NonZeroU64::new(5).unwrap());
    /// assert!(!queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.count == 0, self.buckets.is_empty());
        self.count == 0
    }

    /// Make the queue empty.
    ///
    /// ```
    /// use fifo_priority_queue::FifoPriorityQueue;
    /// use std::num::NonZeroU64;
    /// let mut queue: FifoPriorityQueue<u64> = (1..6)
    ///     .map(|x| (x, NonZeroU64::new(x).unwrap()))
    ///     .collect();
    /// assert!(!queue.is_empty());
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(n)***
    #[inline]
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.count = 0;
    }

    /// Returns every priority that currently holds at least one value,
    /// sorted numerically descending.
    ///
    /// The ordering is part of the contract: it is the order in which
    /// [`iter`] visits buckets and in which [`change_priority`] scans them.
    ///
    /// [`iter`]: struct.FifoPriorityQueue.html#method.iter
    /// [`change_priority`]: struct.FifoPriorityQueue.html#method.change_priority
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use fifo_priority_queue::FifoPriorityQueue;
    /// use std::num::NonZeroU64;
    /// let mut queue = FifoPriorityQueue::new();
    /// for &priority in &[2u64, 10, 1, 10] {
    ///     queue.push((), NonZeroU64::new(priority).unwrap());
    /// }
    /// let priorities: Vec<u64> = queue.priorities().iter().map(|p| p.get()).collect();
    /// assert_eq!(priorities, vec![10, 2, 1]);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(p log p)*** where ***p*** is the number of distinct priorities present.
    pub fn priorities(&self) -> Vec<NonZeroU64> {
        let mut keys: Vec<NonZeroU64> = self.buckets.keys().copied().collect();
        keys.sort_unstable_by(|a, b| b.cmp(a));
        keys
    }

    /// Create readonly borrowing iterator that visits every value in
    /// descending-priority order, FIFO within each priority.
    ///
    /// The traversal order matches the order repeated [`pop`] calls would
    /// return the values, but the queue is not modified.
    ///
    /// [`pop`]: struct.FifoPriorityQueue.html#method.pop
    ///
    /// ```
    /// use fifo_priority_queue::FifoPriorityQueue;
    /// use std::num::NonZeroU64;
    /// let low = NonZeroU64::new(1).unwrap();
    /// let high = NonZeroU64::new(3).unwrap();
    /// let mut queue = FifoPriorityQueue::new();
    /// queue.push("a", low);
    /// queue.push("b", low);
    /// queue.push("c", high);
    /// let visited: Vec<&str> = queue.iter().copied().collect();
    /// assert_eq!(visited, vec!["c", "a", "b"]);
    /// assert_eq!(queue.len(), 3);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Iterating over whole queue is ***O(n + p log p)***
    pub fn iter(&self) -> Iter<'_, T> {
        let mut buckets: Vec<(NonZeroU64, vec_deque::Iter<'_, T>)> = self
            .buckets
            .iter()
            .map(|(&priority, bucket)| (priority, bucket.iter()))
            .collect();
        // Ascending so that the iterator drains the highest priority from the back.
        buckets.sort_unstable_by_key(|&(priority, _)| priority);
        Iter {
            buckets: buckets.into_iter().map(|(_, values)| values).collect(),
            remaining: self.count,
        }
    }

    // Drops the bucket for `priority` if it exists and is empty. Idempotent.
    fn remove_bucket_if_empty(&mut self, priority: NonZeroU64) {
        if let Some(bucket) = self.buckets.get(&priority) {
            if bucket.is_empty() {
                self.buckets.swap_remove(&priority);
            }
        }
    }
}

impl<T: PartialEq> FifoPriorityQueue<T> {
    /// Moves the first value equal to `value` to a new priority.
    ///
    /// Buckets are scanned in descending-priority order and FIFO order within
    /// each bucket, so "first" means first in pop order. The moved value is
    /// appended to the back of the bucket for `new_priority`: it behaves as if
    /// it had just been pushed and loses its old position even when
    /// `new_priority` equals its old priority. Other entries equal to `value`
    /// are left untouched.
    ///
    /// Returns the old priority if a value was moved, or
    /// [`ChangePriorityNotFoundError`] if no stored value equals `value`;
    /// in that case the queue is left unmodified.
    /// The queue length never changes.
    ///
    /// [`ChangePriorityNotFoundError`]: struct.ChangePriorityNotFoundError.html
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use fifo_priority_queue::{ChangePriorityNotFoundError, FifoPriorityQueue};
    /// use std::num::NonZeroU64;
    /// let normal = NonZeroU64::new(5).unwrap();
    /// let urgent = NonZeroU64::new(10).unwrap();
    /// let mut queue = FifoPriorityQueue::new();
    /// queue.push("x", normal);
    /// queue.push("y", normal);
    /// assert_eq!(queue.change_priority(&"x", urgent), Ok(normal));
    /// assert_eq!(queue.pop(), Some("x"));
    /// assert_eq!(queue.pop(), Some("y"));
    /// assert_eq!(
    ///     queue.change_priority(&"missing", urgent),
    ///     Err(ChangePriorityNotFoundError)
    /// );
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n + p log p)*** in the worst case.
    pub fn change_priority(
        &mut self,
        value: &T,
        new_priority: NonZeroU64,
    ) -> Result<NonZeroU64, ChangePriorityNotFoundError> {
        for priority in self.priorities() {
            let bucket = self
                .buckets
                .get_mut(&priority)
                .expect("priorities() lists only existing buckets");
            if let Some(position) = bucket.iter().position(|stored| stored == value) {
                let moved = bucket
                    .remove(position)
                    .expect("position was found in this bucket");
                self.buckets
                    .entry(new_priority)
                    .or_insert_with(VecDeque::new)
                    .push_back(moved);
                self.remove_bucket_if_empty(priority);
                return Ok(priority);
            }
        }
        Err(ChangePriorityNotFoundError)
    }

    /// Returns true if some stored value equals `value`.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use fifo_priority_queue::FifoPriorityQueue;
    /// use std::num::NonZeroU64;
    /// let mut queue = FifoPriorityQueue::new();
    /// queue.push("present", NonZeroU64::new(3).unwrap());
    /// assert!(queue.contains(&"present"));
    /// assert!(!queue.contains(&"missing"));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)***
    pub fn contains(&self, value: &T) -> bool {
        self.buckets.values().any(|bucket| bucket.contains(value))
    }
}

impl<T: Debug> Debug for FifoPriorityQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for priority in self.priorities() {
            let bucket = self
                .buckets
                .get(&priority)
                .expect("priorities() lists only existing buckets");
            for value in bucket {
                write!(f, "({}, {:?})", priority, value)?;
            }
        }
        write!(f, "]")
    }
}

impl<T> Default for FifoPriorityQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(T, NonZeroU64)> for FifoPriorityQueue<T> {
    /// Allows building queue from iterator using `collect()`.
    /// Values are pushed in iteration order, so FIFO order among equal
    /// priorities follows the order of the input.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use fifo_priority_queue::FifoPriorityQueue;
    /// use std::num::NonZeroU64;
    /// let queue: FifoPriorityQueue<&str> = [("third", 1u64), ("first", 2), ("fourth", 1)]
    ///     .iter()
    ///     .map(|&(value, priority)| (value, NonZeroU64::new(priority).unwrap()))
    ///     .collect();
    /// let drained: Vec<&str> = queue.into_iter().collect();
    /// assert_eq!(drained, vec!["first", "third", "fourth"]);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)*** in average.
    fn from_iter<I: IntoIterator<Item = (T, NonZeroU64)>>(iter: I) -> Self {
        let mut queue = Self::new();
        for (value, priority) in iter {
            queue.push(value, priority);
        }
        queue
    }
}

impl<T> IntoIterator for FifoPriorityQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Make iterator that drains the queue in descending-priority order,
    /// FIFO within each priority.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use fifo_priority_queue::FifoPriorityQueue;
    /// use std::num::NonZeroU64;
    /// let queue: FifoPriorityQueue<&str> = [("last", 1u64), ("first", 3), ("middle", 2)]
    ///     .iter()
    ///     .map(|&(value, priority)| (value, NonZeroU64::new(priority).unwrap()))
    ///     .collect();
    /// let mut iterator = queue.into_iter();
    /// assert_eq!(iterator.next(), Some("first"));
    /// assert_eq!(iterator.next(), Some("middle"));
    /// assert_eq!(iterator.next(), Some("last"));
    /// assert_eq!(iterator.next(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n p)*** for iteration.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a FifoPriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// This is consuming iterator that returns values in pop order.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n p)***
pub struct IntoIter<T> {
    queue: FifoPriorityQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.queue.len()
    }
}

/// This is borrowing iterator over the queue in pop order.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n)***
pub struct Iter<'a, T> {
    // Sorted by ascending priority; the current bucket is the last one.
    buckets: Vec<vec_deque::Iter<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.buckets.last_mut()?;
            if let Some(value) = current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            self.buckets.pop();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// This is error type for [`change_priority`] method of [`FifoPriorityQueue`].
/// It means that queue doesn't contain such value.
///
/// [`FifoPriorityQueue`]: struct.FifoPriorityQueue.html
/// [`change_priority`]: struct.FifoPriorityQueue.html#method.change_priority
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Default)]
pub struct ChangePriorityNotFoundError;

impl Display for ChangePriorityNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "Value not found in FifoPriorityQueue during change_priority"
        )
    }
}

impl std::error::Error for ChangePriorityNotFoundError {}
