use super::SlotVec;

/// Borrowing iterator over the occupied slots of a `SlotVec`, in index order.
pub struct Iter<'a, T> {
    svec: &'a SlotVec<T>,
    pos: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub fn new(svec: &'a SlotVec<T>) -> Self {
        Self { svec, pos: 0 }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.svec.slots.get(self.pos) {
            self.pos += 1;
            if let Some(item) = slot {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.svec.capacity() - self.pos))
    }
}

/// What a `Cursor` sees at its current position.
#[derive(Debug, PartialEq)]
pub enum Current<'a, T> {
    /// The slot is occupied
    Element(&'a T),
    /// The slot is within bounds but unset
    Empty,
    /// The cursor is past the last slot
    NoElement,
}

impl<'a, T> Current<'a, T> {
    /// Returns the element, if the cursor stands on an occupied slot.
    #[inline]
    pub fn element(&self) -> Option<&'a T> {
        match self {
            Current::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` if the cursor stands on an unset slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Current::Empty)
    }
}

/// External cursor over every slot of a `SlotVec`, empty ones included.
///
/// The cursor never owns or copies elements, its position is the only state.
/// Positions run from `0` to `capacity`, where `capacity` means exhausted.
/// Any number of cursors can observe the same collection, each with its own position.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    svec: &'a SlotVec<T>,
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub fn new(svec: &'a SlotVec<T>) -> Self {
        Self { svec, pos: 0 }
    }

    /// Returns `true` while the cursor stands on a slot.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.pos < self.svec.capacity()
    }

    /// Returns the slot under the cursor, `Current::NoElement` once exhausted.
    pub fn current(&self) -> Current<'a, T> {
        match self.svec.slots.get(self.pos) {
            Some(Some(item)) => Current::Element(item),
            Some(None) => Current::Empty,
            None => Current::NoElement,
        }
    }

    /// Moves to the next slot and returns whether the cursor is still in bounds.
    /// An exhausted cursor stays exhausted.
    #[inline]
    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.pos += 1;
        }
        self.has_next()
    }

    /// Moves the cursor back to the first slot.
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Returns the index of the slot under the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            svec: self.svec,
            pos: self.pos,
        }
    }
}
