//! The buffer handles that back-up an [`MVector`](crate::MVector)

mod boxed;
mod fail;
mod unboxed;

pub use boxed::Boxed;
pub(crate) use fail::{uninitialized_read, unchecked_precondition};
pub use unboxed::Unboxed;

/// Error on failure to allocate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocError;
/// Result of an allocation
pub type AllocResult<T = ()> = Result<T, AllocError>;

impl core::fmt::Display for AllocError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result { f.write_str("memory allocation failed") }
}

#[cfg(feature = "std")]
impl std::error::Error for AllocError {}

/// A shared, fixed-capacity block of `Self::Item` slots.
///
/// Cloning a buffer clones the *handle*: both values refer to the same slots,
/// and a write through one is visible through the other. The capacity of a
/// handle never changes after allocation.
///
/// Every slot is either written, or holds the strategy's uninitialized
/// sentinel. Fresh allocations and [`Buffer::clear_unchecked`] produce the
/// sentinel.
///
/// # Safety
///
/// Other safe types rely on this trait being implemented correctly.
/// See the safety requirements on each function
pub unsafe trait Buffer: Clone {
    /// The type of item that this buffer can contain
    type Item;

    /// Allocates a new handle with `capacity` slots, all holding the sentinel
    ///
    /// # Safety
    ///
    /// If `Ok(_)` is returned, `capacity()` of the new handle must be exactly
    /// `capacity`, and the handle must not be shared with any other handle
    ///
    /// # Errors
    ///
    /// If the slots cannot be allocated, returns Err(AllocError). The shipped
    /// strategies reserve the slots fallibly, then move them into their
    /// reference counted block with an infallible allocation, so exhaustion
    /// at that second step aborts rather than returning an error.
    fn try_allocate(capacity: usize) -> AllocResult<Self>;

    /// Allocates a new handle with `capacity` slots, all holding `value`
    ///
    /// # Errors
    ///
    /// If the slots cannot be allocated, returns Err(AllocError)
    fn try_allocate_filled(capacity: usize, value: Self::Item) -> AllocResult<Self>
    where
        Self::Item: Clone,
    {
        let buffer = Self::try_allocate(capacity)?;
        if capacity != 0 {
            // Safety
            //
            // the buffer was just allocated with `capacity` slots
            unsafe {
                for index in 1..capacity {
                    buffer.set_unchecked(index, value.clone());
                }
                buffer.set_unchecked(0, value);
            }
        }
        Ok(buffer)
    }

    /// The number of slots in this handle
    fn capacity(&self) -> usize;

    /// Returns true if and only if both values are handles to the same slots
    fn same_handle(&self, other: &Self) -> bool;

    /// Reads the slot at `index`, returning `None` if it holds the sentinel
    ///
    /// # Safety
    ///
    /// `index` must be less than `capacity()`
    unsafe fn get_unchecked(&self, index: usize) -> Option<Self::Item>;

    /// Writes `value` into the slot at `index`
    ///
    /// # Safety
    ///
    /// `index` must be less than `capacity()`
    unsafe fn set_unchecked(&self, index: usize, value: Self::Item);

    /// Resets the slot at `index` to the sentinel, dropping whatever it held.
    /// Strategies with no embedded references may leave the slot untouched.
    ///
    /// # Safety
    ///
    /// `index` must be less than `capacity()`
    unsafe fn clear_unchecked(&self, index: usize);

    /// Transfers the state of `len` slots from `src[src_offset..]` into
    /// `self[dst_offset..]`, sentinels included
    ///
    /// # Safety
    ///
    /// * `src_offset + len` must be at most `src.capacity()`
    /// * `dst_offset + len` must be at most `self.capacity()`
    /// * if `self` and `src` are the same handle, the two ranges must not intersect
    unsafe fn copy_nonoverlapping(&self, dst_offset: usize, src: &Self, src_offset: usize, len: usize) {
        for i in 0..len {
            unsafe { self.transfer_slot(dst_offset + i, src, src_offset + i) }
        }
    }

    /// Transfers the state of a single slot, see [`Buffer::copy_nonoverlapping`]
    ///
    /// # Safety
    ///
    /// * `src_index` must be less than `src.capacity()`
    /// * `dst_index` must be less than `self.capacity()`
    #[inline]
    unsafe fn transfer_slot(&self, dst_index: usize, src: &Self, src_index: usize) {
        unsafe {
            match src.get_unchecked(src_index) {
                Some(value) => self.set_unchecked(dst_index, value),
                None => self.clear_unchecked(dst_index),
            }
        }
    }
}
