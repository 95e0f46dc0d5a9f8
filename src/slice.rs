use core::ops::Range;

use crate::{
    error::{Error, Result},
    raw::{unchecked_precondition, Buffer},
    MVector,
};

impl<S: Buffer> MVector<S> {
    /// The absolute range of slots this view addresses in its buffer
    pub fn buffer_range(&self) -> Range<usize> { self.offset..self.offset + self.len }

    /// Returns a view of `len` elements starting at `start`, sharing this
    /// view's buffer. Nothing is copied.
    ///
    /// ```rust
    /// # use generic_mvec::UnboxedMVector;
    /// let vec = UnboxedMVector::<i32>::generate(5, |i| i as i32).unwrap();
    /// let mid = vec.slice(1, 3).unwrap();
    /// assert_eq!(mid.to_vec().unwrap(), [1, 2, 3]);
    ///
    /// mid.write(0, 10).unwrap();
    /// assert_eq!(vec.read(1).unwrap(), 10);
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `start + len` is larger than `self.len()`
    pub fn slice(&self, start: usize, len: usize) -> Result<Self> {
        match start.checked_add(len) {
            Some(end) if end <= self.len => Ok(unsafe { self.slice_unchecked(start, len) }),
            _ => Err(Error::OutOfRange {
                start,
                len,
                available: self.len,
            }),
        }
    }

    /// Returns a view of `len` elements starting at `start`, without
    /// checking the bounds
    ///
    /// # Safety
    ///
    /// `start + len` must not overflow and must be at most `self.len()`
    pub unsafe fn slice_unchecked(&self, start: usize, len: usize) -> Self {
        if cfg!(debug_assertions) && start.checked_add(len).map_or(true, |end| end > self.len) {
            unchecked_precondition("MVector::slice_unchecked")
        }

        Self {
            offset: self.offset + start,
            len,
            buffer: self.buffer.clone(),
        }
    }

    /// Returns a view of the first `n` elements, or of the whole vector if
    /// it is shorter than `n`
    pub fn take(&self, n: usize) -> Self { unsafe { self.slice_unchecked(0, n.min(self.len)) } }

    /// Returns a view of all but the first `n` elements, or an empty view at
    /// the end of the vector if it is shorter than `n`
    pub fn drop(&self, n: usize) -> Self {
        let n = n.min(self.len);
        unsafe { self.slice_unchecked(n, self.len - n) }
    }

    /// Splits the view in two at `at`, clamped to the length
    ///
    /// ```rust
    /// # use generic_mvec::UnboxedMVector;
    /// let vec = UnboxedMVector::<u8>::replicate(4, 0).unwrap();
    /// let (front, back) = vec.split_at(1);
    /// assert_eq!((front.len(), back.len()), (1, 3));
    /// assert!(!front.overlaps(&back));
    /// ```
    pub fn split_at(&self, at: usize) -> (Self, Self) { (self.take(at), self.drop(at)) }

    /// Returns a view of all but the last element
    ///
    /// # Errors
    ///
    /// [`Error::EmptyVector`] if the vector is empty
    pub fn init(&self) -> Result<Self> {
        if self.is_empty() {
            return Err(Error::EmptyVector)
        }

        Ok(unsafe { self.init_unchecked() })
    }

    /// Returns a view of all but the last element
    ///
    /// # Safety
    ///
    /// The vector must not be empty
    pub unsafe fn init_unchecked(&self) -> Self { unsafe { self.slice_unchecked(0, self.len.wrapping_sub(1)) } }

    /// Returns a view of all but the first element
    ///
    /// # Errors
    ///
    /// [`Error::EmptyVector`] if the vector is empty
    pub fn tail(&self) -> Result<Self> {
        if self.is_empty() {
            return Err(Error::EmptyVector)
        }

        Ok(unsafe { self.tail_unchecked() })
    }

    /// Returns a view of all but the first element
    ///
    /// # Safety
    ///
    /// The vector must not be empty
    pub unsafe fn tail_unchecked(&self) -> Self { unsafe { self.slice_unchecked(1, self.len.wrapping_sub(1)) } }

    /// Returns true if and only if both views share a buffer and their
    /// buffer ranges intersect.
    ///
    /// Views over different buffers never overlap, even when they hold
    /// equal elements. The test is the half-open interval intersection of
    /// the two buffer ranges, so an empty view strictly inside another view
    /// still counts as overlapping it.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.buffer.same_handle(&other.buffer)
            && self.offset < other.offset + other.len
            && other.offset < self.offset + self.len
    }
}
