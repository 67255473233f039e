//! Frontier containers.
//!
//! The traversal order of a fill is decided entirely by the frontier's
//! discipline. [`Stack`] (LIFO) gives the depth-first flood fill;
//! [`Queue`] (FIFO) gives the breadth-first alternate mode.

use std::collections::VecDeque;
use std::fmt;

use floodfill_core::{Error, Result};

/// An ordered push/pop container.
pub trait OrderedContainer<T> {
    /// Add an item.
    fn push(&mut self, item: T);

    /// Remove the next item according to the container's discipline.
    ///
    /// Fails with [`Error::EmptyContainer`] when there is nothing to pop.
    fn pop(&mut self) -> Result<T>;

    /// Number of items held.
    fn len(&self) -> usize;

    /// Whether the container holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Stack
// ---------------------------------------------------------------------------

/// LIFO container: the most recently pushed item is popped first.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedContainer<T> for Stack<T> {
    #[inline]
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    #[inline]
    fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyContainer)
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.items).finish()
    }
}

// ---------------------------------------------------------------------------
// Queue
// ---------------------------------------------------------------------------

/// FIFO container: the oldest pushed item is popped first.
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedContainer<T> for Queue<T> {
    #[inline]
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    #[inline]
    fn pop(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::EmptyContainer)
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.items).finish()
    }
}

// ---------------------------------------------------------------------------
// Discipline / Frontier
// ---------------------------------------------------------------------------

/// Traversal order selected by the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Discipline {
    /// LIFO frontier. The flood-fill mode.
    #[default]
    DepthFirst,
    /// FIFO frontier.
    BreadthFirst,
}

/// A frontier whose discipline is chosen at runtime.
#[derive(Clone, Debug)]
pub enum Frontier<T> {
    Lifo(Stack<T>),
    Fifo(Queue<T>),
}

impl<T> Frontier<T> {
    pub fn new(discipline: Discipline) -> Self {
        match discipline {
            Discipline::DepthFirst => Frontier::Lifo(Stack::new()),
            Discipline::BreadthFirst => Frontier::Fifo(Queue::new()),
        }
    }

    pub fn discipline(&self) -> Discipline {
        match self {
            Frontier::Lifo(_) => Discipline::DepthFirst,
            Frontier::Fifo(_) => Discipline::BreadthFirst,
        }
    }
}

impl<T> OrderedContainer<T> for Frontier<T> {
    fn push(&mut self, item: T) {
        match self {
            Frontier::Lifo(s) => s.push(item),
            Frontier::Fifo(q) => q.push(item),
        }
    }

    fn pop(&mut self) -> Result<T> {
        match self {
            Frontier::Lifo(s) => s.pop(),
            Frontier::Fifo(q) => q.pop(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Frontier::Lifo(s) => s.len(),
            Frontier::Fifo(q) => q.len(),
        }
    }
}
