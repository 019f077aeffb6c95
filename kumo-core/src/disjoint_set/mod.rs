//! Union-find (disjoint set union) over arbitrary hashable elements.
//!
//! Elements are keyed by their own `Eq + Hash` implementation and mapped to
//! compact indices in registration order. Each index owns a [`Slot`] that is
//! either a root, carrying the size of its class, or a child pointing at its
//! parent. Lookups walk the parent chain iteratively and then compress it;
//! unions attach the smaller class beneath the larger one.

use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use crate::error::DisjointSetError;

/// Opaque identifier of a set, valid until the next successful union.
///
/// Two elements belong to the same set exactly when [`DisjointSet::find_set`]
/// returns equal identifiers for them without an intervening union.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SetId(usize);

impl SetId {
    /// Returns the root index backing this identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0 }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Slot {
    Root { size: usize },
    Child { parent: usize },
}

/// Partition of registered elements into disjoint classes.
///
/// # Examples
/// ```
/// use kumo_core::DisjointSet;
///
/// let mut sets = DisjointSet::new();
/// sets.make_set("a")?;
/// sets.make_set("b")?;
/// assert_ne!(sets.find_set("a")?, sets.find_set("b")?);
///
/// sets.union("a", "b")?;
/// assert_eq!(sets.find_set("a")?, sets.find_set("b")?);
/// assert!(sets.union("a", "b").is_err());
/// # Ok::<(), kumo_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<T> {
    indices: HashMap<T, usize>,
    slots: Vec<Slot>,
    set_count: usize,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self {
            indices: HashMap::new(),
            slots: Vec::new(),
            set_count: 0,
        }
    }
}

impl<T: Eq + Hash> DisjointSet<T> {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty structure with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: HashMap::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            set_count: 0,
        }
    }

    /// Returns the number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when no element has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of disjoint sets currently tracked.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns `true` when `item` has been registered.
    #[must_use]
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.indices.contains_key(item)
    }

    /// Registers `item` as a new singleton set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::AlreadyRegistered`] when an equal element
    /// was registered before.
    pub fn make_set(&mut self, item: T) -> Result<(), DisjointSetError> {
        if let Some(&index) = self.indices.get(&item) {
            return Err(DisjointSetError::AlreadyRegistered { index });
        }
        let index = self.slots.len();
        self.slots.push(Slot::Root { size: 1 });
        self.indices.insert(item, index);
        self.set_count += 1;
        Ok(())
    }

    /// Returns the identifier of the set containing `item`.
    ///
    /// The lookup compresses the traversed parent chain so later lookups on
    /// the same class are cheaper.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::Unregistered`] when `item` was never
    /// registered.
    pub fn find_set<Q>(&mut self, item: &Q) -> Result<SetId, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let index = self.index_of(item)?;
        Ok(SetId(self.find_root(index)))
    }

    /// Returns `true` when both elements belong to the same set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::Unregistered`] when either element was
    /// never registered.
    pub fn same_set<Q>(&mut self, left: &Q, right: &Q) -> Result<bool, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        Ok(self.find_set(left)? == self.find_set(right)?)
    }

    /// Merges the sets containing `left` and `right`, returning the
    /// identifier of the merged set.
    ///
    /// The larger class keeps its root; on equal sizes the root of `left`
    /// survives.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::Unregistered`] when either element was
    /// never registered, and [`DisjointSetError::RedundantUnion`] when both
    /// already share a set.
    pub fn union<Q>(&mut self, left: &Q, right: &Q) -> Result<SetId, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let left_root = self.find_set(left)?.get();
        let right_root = self.find_set(right)?.get();
        if left_root == right_root {
            return Err(DisjointSetError::RedundantUnion { root: left_root });
        }

        let left_size = self.size_of(left_root);
        let right_size = self.size_of(right_root);
        let (root, child) = if right_size > left_size {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        self.slots[child] = Slot::Child { parent: root };
        self.slots[root] = Slot::Root {
            size: left_size + right_size,
        };
        self.set_count -= 1;
        Ok(SetId(root))
    }

    fn index_of<Q>(&self, item: &Q) -> Result<usize, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.indices
            .get(item)
            .copied()
            .ok_or(DisjointSetError::Unregistered)
    }

    fn size_of(&self, root: usize) -> usize {
        match self.slots[root] {
            Slot::Root { size } => size,
            Slot::Child { .. } => 0,
        }
    }

    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while let Slot::Child { parent } = self.slots[root] {
            root = parent;
        }

        while let Slot::Child { parent } = self.slots[node] {
            self.slots[node] = Slot::Child { parent: root };
            node = parent;
        }

        root
    }
}
