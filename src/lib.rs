pub mod error;
pub mod iter;
pub mod student;

use core::ops::Index;
use std::fmt;

pub use error::{SlotError, SlotResult};
pub use iter::{Current, Cursor, Iter};
pub use student::Student;

#[cfg(feature = "with_serde")]
use serde::{de::Visitor, ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer};

/// Fixed capacity collection of students, addressed by seat index.
pub type Marksheet = SlotVec<Student>;

/// A fixed-capacity, index-addressed store owning at most one value per slot.
///
/// The capacity is chosen on construction and never changes. Values are owned
/// by the collection and released exactly once, either when their slot is
/// overwritten or cleared, or when the collection is dropped.
pub struct SlotVec<T> {
    slots: Box<[Option<T>]>,
}

impl<T> SlotVec<T> {
    /// Creates a new SlotVec with `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        tracing::debug!(capacity, "creating slot vector");
        SlotVec {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Creates a new SlotVec from a signed capacity, failing if it is negative
    pub fn try_new(capacity: isize) -> SlotResult<Self> {
        let capacity =
            usize::try_from(capacity).map_err(|_| SlotError::InvalidArgument(capacity))?;
        Ok(Self::new(capacity))
    }

    /// Returns the amount of slots the SlotVec has
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the count of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|i| i.is_some()).count()
    }

    /// Returns `true` if no slot is occupied
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the amount of empty slots
    pub fn free(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Returns `true` if there is no empty slot left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free() == 0
    }

    /// Returns `true` if the slot at `index` holds a value
    pub fn is_occupied(&self, index: usize) -> SlotResult<bool> {
        Ok(self.slot(index)?.is_some())
    }

    /// Gets the value stored at `index`, or `None` if the slot is empty.
    ///
    /// Fails with `IndexOutOfRange` if `index >= capacity`.
    #[inline]
    pub fn get(&self, index: usize) -> SlotResult<Option<&T>> {
        Ok(self.slot(index)?.as_ref())
    }

    /// Stores a deep copy of `item` at `index`.
    ///
    /// A value already held by the slot is dropped before `item` gets cloned,
    /// so the slot is left empty if cloning panics.
    pub fn set(&mut self, index: usize, item: &T) -> SlotResult<()>
    where
        T: Clone,
    {
        let slot = self.slot_mut(index)?;
        if slot.take().is_some() {
            tracing::trace!(index, "released previous value");
        }
        *slot = Some(item.clone());
        Ok(())
    }

    /// Moves `item` into the slot at `index` and returns the value it replaced.
    pub fn replace(&mut self, index: usize, item: T) -> SlotResult<Option<T>> {
        let prev = self.slot_mut(index)?.replace(item);
        if prev.is_some() {
            tracing::trace!(index, "replaced previous value");
        }
        Ok(prev)
    }

    /// Empties the slot at `index` and returns its value.
    #[inline]
    pub fn take(&mut self, index: usize) -> SlotResult<Option<T>> {
        Ok(self.slot_mut(index)?.take())
    }

    /// Drops every stored value. The capacity stays the same.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Iterates over the values of all occupied slots
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Lists `(index, value)` for occupied slots in ascending index order
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|item| (idx, item)))
    }

    /// Binds a new cursor to the first slot
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    #[inline]
    fn slot(&self, index: usize) -> SlotResult<&Option<T>> {
        let capacity = self.capacity();
        self.slots
            .get(index)
            .ok_or(SlotError::IndexOutOfRange { index, capacity })
    }

    #[inline]
    fn slot_mut(&mut self, index: usize) -> SlotResult<&mut Option<T>> {
        let capacity = self.capacity();
        self.slots
            .get_mut(index)
            .ok_or(SlotError::IndexOutOfRange { index, capacity })
    }
}

impl<T: Clone> Clone for SlotVec<T> {
    fn clone(&self) -> Self {
        SlotVec {
            slots: self.slots.clone(),
        }
    }

    /// Releases every value held by `self` before copying the ones of `source`.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if self.capacity() != source.capacity() {
            tracing::debug!(
                from = self.capacity(),
                to = source.capacity(),
                "reshaping slot vector"
            );
            self.slots = source.slots.clone();
            return;
        }
        for (dst, src) in self.slots.iter_mut().zip(source.slots.iter()) {
            *dst = src.clone();
        }
    }
}

impl<T: PartialEq> PartialEq for SlotVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<T: Eq> Eq for SlotVec<T> {}

impl<T> Index<usize> for SlotVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.slots.get(index) {
            Some(Some(e)) => e,
            Some(None) => panic!("Slot {index} is empty"),
            None => {
                let cap = self.capacity();
                panic!("Index {index} out of bounds with capacity of {cap}")
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a SlotVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<Vec<Option<T>>> for SlotVec<T> {
    fn from(values: Vec<Option<T>>) -> Self {
        SlotVec {
            slots: values.into_boxed_slice(),
        }
    }
}

impl<T> FromIterator<Option<T>> for SlotVec<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        SlotVec {
            slots: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.enumerate()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SlotVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, item) in self.enumerate() {
            writeln!(f, "[{idx}] {item}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "with_serde")]
impl<T> Serialize for SlotVec<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut list = serializer.serialize_seq(Some(self.capacity()))?;
        for slot in self.slots.iter() {
            list.serialize_element(slot)?;
        }
        list.end()
    }
}

#[cfg(feature = "with_serde")]
pub struct SlotVecVisitor<T> {
    pd: std::marker::PhantomData<T>,
}

#[cfg(feature = "with_serde")]
impl<'de, T> Visitor<'de> for SlotVecVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = SlotVec<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of optional slot values")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // the length hint comes from the input, don't trust it for allocation
        let mut slots = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(next) = seq.next_element::<Option<T>>()? {
            slots.push(next);
        }
        Ok(SlotVec::from(slots))
    }
}

#[cfg(feature = "with_serde")]
impl<'de, T> Deserialize<'de> for SlotVec<T>
where
    T: Deserialize<'de>,
{
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SlotVecVisitor::<T> {
            pd: std::marker::PhantomData,
        })
    }
}
