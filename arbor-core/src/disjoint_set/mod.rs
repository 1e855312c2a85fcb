//! Disjoint-set (union-find) over arbitrary hashable elements.
//!
//! Elements are registered once and addressed internally through stable arena
//! handles. Each arena slot is either a root carrying its rank or a child
//! pointing at its parent. Lookups apply full path compression and merges use
//! union by rank, which together give the inverse-Ackermann amortized bound.

use std::{
    borrow::Borrow,
    cmp::Ordering,
    collections::{HashMap, hash_map::Entry},
    fmt,
    hash::Hash,
};

use crate::error::DisjointSetError;

/// Identifier of a group's representative.
///
/// Identifiers are only meaningful until the next successful
/// [`DisjointSet::union`], which may retire one of them.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut sets = DisjointSet::new();
/// let id = sets.make_set("a")?;
/// assert_eq!(sets.find_set("a")?, id);
/// # Ok::<(), arbor_core::DisjointSetError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetId(usize);

impl SetId {
    /// Returns the arena handle of the representative.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Link {
    Root { rank: u32 },
    Child { parent: usize },
}

/// Partition of registered elements into disjoint groups.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut sets = DisjointSet::new();
/// for room in ["hall", "kitchen", "attic"] {
///     sets.make_set(room)?;
/// }
/// sets.union("hall", "kitchen")?;
/// assert!(sets.same_set("hall", "kitchen")?);
/// assert!(!sets.same_set("hall", "attic")?);
/// assert_eq!(sets.set_count(), 2);
/// # Ok::<(), arbor_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<T> {
    links: Vec<Link>,
    handles: HashMap<T, usize>,
    sets: usize,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self {
            links: Vec::new(),
            handles: HashMap::new(),
            sets: 0,
        }
    }
}

impl<T: Eq + Hash> DisjointSet<T> {
    /// Creates an empty disjoint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty disjoint set with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: Vec::with_capacity(capacity),
            handles: HashMap::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Returns the number of registered elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` when no element has been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the number of disjoint groups.
    #[must_use]
    pub const fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns `true` when `item` has been registered.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.handles.contains_key(item)
    }

    /// Registers `item` as a new singleton group.
    ///
    /// Arena storage grows geometrically, so registration is amortized O(1).
    ///
    /// # Errors
    /// Returns [`DisjointSetError::DuplicateElement`] when `item` is already
    /// registered.
    pub fn make_set(&mut self, item: T) -> Result<SetId, DisjointSetError> {
        match self.handles.entry(item) {
            Entry::Occupied(existing) => Err(DisjointSetError::DuplicateElement {
                handle: *existing.get(),
            }),
            Entry::Vacant(slot) => {
                let handle = self.links.len();
                self.links.push(Link::Root { rank: 0 });
                slot.insert(handle);
                self.sets = self.sets.saturating_add(1);
                Ok(SetId(handle))
            }
        }
    }

    /// Returns the representative of the group containing `item`.
    ///
    /// Every element visited on the way to the root is repointed directly at
    /// the root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] when `item` was never
    /// registered.
    pub fn find_set<Q>(&mut self, item: &Q) -> Result<SetId, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.handle_of(item)?;
        let (root, _) = self.find_root(handle);
        Ok(SetId(root))
    }

    /// Merges the groups containing `first` and `second`.
    ///
    /// The root with the strictly larger rank absorbs the other. On a tie the
    /// root of `first` becomes the parent and its rank grows by one. Returns
    /// the representative of the merged group.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] when either element was
    /// never registered and [`DisjointSetError::SameGroup`] when both already
    /// share a representative.
    pub fn union<Q>(&mut self, first: &Q, second: &Q) -> Result<SetId, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let first = self.handle_of(first)?;
        let second = self.handle_of(second)?;
        let (first_root, first_rank) = self.find_root(first);
        let (second_root, second_rank) = self.find_root(second);

        if first_root == second_root {
            return Err(DisjointSetError::SameGroup {
                representative: first_root,
            });
        }

        let (parent, child) = match first_rank.cmp(&second_rank) {
            Ordering::Less => (second_root, first_root),
            Ordering::Greater | Ordering::Equal => (first_root, second_root),
        };
        self.links[child] = Link::Child { parent };
        if first_rank == second_rank {
            self.links[parent] = Link::Root {
                rank: first_rank.saturating_add(1),
            };
        }
        self.sets = self.sets.saturating_sub(1);
        Ok(SetId(parent))
    }

    /// Returns `true` when both elements belong to the same group.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] when either element was
    /// never registered.
    pub fn same_set<Q>(&mut self, first: &Q, second: &Q) -> Result<bool, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Ok(self.find_set(first)? == self.find_set(second)?)
    }

    /// Returns the rank recorded on the representative of `item`'s group.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] when `item` was never
    /// registered.
    pub fn rank<Q>(&mut self, item: &Q) -> Result<u32, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.handle_of(item)?;
        let (_, rank) = self.find_root(handle);
        Ok(rank)
    }

    fn handle_of<Q>(&self, item: &Q) -> Result<usize, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.handles
            .get(item)
            .copied()
            .ok_or(DisjointSetError::UnknownElement)
    }

    /// Walks to the root, then walks the same chain again repointing every
    /// node at the root.
    fn find_root(&mut self, node: usize) -> (usize, u32) {
        let mut cursor = node;
        let (root, rank) = loop {
            match self.links[cursor] {
                Link::Root { rank } => break (cursor, rank),
                Link::Child { parent } => cursor = parent,
            }
        };

        let mut current = node;
        while let Link::Child { parent } = self.links[current] {
            self.links[current] = Link::Child { parent: root };
            current = parent;
        }

        (root, rank)
    }

    #[cfg(test)]
    fn parent_handle(&self, node: usize) -> Option<usize> {
        match self.links.get(node)? {
            Link::Root { .. } => None,
            Link::Child { parent } => Some(*parent),
        }
    }
}
