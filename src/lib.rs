#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![allow(unused_unsafe)]
#![forbid(missing_docs, clippy::missing_safety_doc)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

//! A mutable vector made of zero-copy views into a shared buffer, generic
//! over how the buffer stores its elements.
//!
//! An [`MVector`] is an `(offset, len, buffer)` triple. Slicing it creates
//! another view over the *same* buffer, so writes through one view are seen
//! by every other view that addresses the same slots. Only [`MVector::try_clone`]
//! and [`MVector::grow`] allocate a new buffer, and that is the only way to
//! break the sharing.
//!
//! Because views share storage, all operations take `&self`, and an
//! `MVector` can never leave the thread it was created on.
//!
//! # Storage
//!
//! * [`BoxedMVector`] stores any `Clone` element. Slots that were never
//!   written are detected, and [`MVector::clear`] releases the elements.
//! * [`UnboxedMVector`] stores `Copy` elements inline. Fresh slots hold
//!   `T::default()`, and copies are block copies.
//!
//! Any other strategy can implement [`raw::Buffer`].
//!
//! # Checked and unchecked operations
//!
//! Every operation with a precondition comes in two flavours: a checked one
//! returning an [`Error`] without touching anything, and an `unsafe`
//! `*_unchecked` one that trusts the caller. Breaking the precondition of an
//! unchecked operation is undefined behavior.
//!
//! ```rust
//! use generic_mvec::UnboxedMVector;
//!
//! let vec = UnboxedMVector::<i32>::new(4).unwrap();
//! for (i, x) in [10, 20, 30, 40].iter().enumerate() {
//!     vec.write(i, *x).unwrap();
//! }
//!
//! let (front, back) = vec.split_at(2);
//! assert!(!front.overlaps(&back));
//!
//! front.copy_from(&back).unwrap();
//! assert_eq!(vec.to_vec().unwrap(), [30, 40, 30, 40]);
//!
//! assert!(vec.take(3).copy_from(&vec.drop(1)).is_err());
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc as std;

use std::vec::Vec;

mod error;
mod impls;
mod slice;

pub mod raw;

pub use error::{Error, Result};
use raw::{uninitialized_read, unchecked_precondition, Buffer};

/// A mutable vector of arbitrary `Clone` elements
pub type BoxedMVector<T> = MVector<raw::Boxed<T>>;
/// A mutable vector of `Copy` elements stored inline
pub type UnboxedMVector<T> = MVector<raw::Unboxed<T>>;

/// A view of `len` consecutive slots of a shared buffer, starting at `offset`
///
/// `offset + len` is never larger than the capacity of the buffer.
pub struct MVector<S: Buffer> {
    offset: usize,
    len: usize,
    buffer: S,
}

fn checked_size(requested: isize) -> Result<usize> {
    if requested < 0 {
        Err(Error::InvalidSize { requested })
    } else {
        Ok(requested as usize)
    }
}

impl<S: Buffer> MVector<S> {
    /// Creates a view of the whole of `buffer`
    pub fn from_buffer(buffer: S) -> Self {
        Self {
            offset: 0,
            len: buffer.capacity(),
            buffer,
        }
    }

    fn allocate(len: usize) -> Result<Self> { S::try_allocate(len).map(Self::from_buffer).map_err(Error::alloc(len)) }

    /// Creates a vector of `len` uninitialized elements over a new buffer
    ///
    /// Reading an element before writing it is a logic error. Depending on
    /// the storage it either fails with [`Error::UninitializedAccess`] or
    /// yields the storage's placeholder value.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidSize`] if `len` is negative
    /// * [`Error::Alloc`] if the buffer could not be allocated
    pub fn new(len: isize) -> Result<Self> { Self::allocate(checked_size(len)?) }

    /// Creates a vector of `len` uninitialized elements, without checking
    /// `len`
    ///
    /// # Safety
    ///
    /// `len` must not be negative
    ///
    /// # Errors
    ///
    /// [`Error::Alloc`] if the buffer could not be allocated
    pub unsafe fn new_unchecked(len: isize) -> Result<Self> {
        if cfg!(debug_assertions) && len < 0 {
            unchecked_precondition("MVector::new_unchecked")
        }

        Self::allocate(len as usize)
    }

    /// Creates a vector of `len` copies of `value`. A negative `len` creates
    /// an empty vector.
    ///
    /// # Errors
    ///
    /// [`Error::Alloc`] if the buffer could not be allocated
    pub fn replicate(len: isize, value: S::Item) -> Result<Self>
    where
        S::Item: Clone,
    {
        let len = checked_size(len).unwrap_or(0);
        S::try_allocate_filled(len, value)
            .map(Self::from_buffer)
            .map_err(Error::alloc(len))
    }

    /// Creates a vector of `len` elements, each produced by a call to `value`,
    /// in order. A negative `len` creates an empty vector.
    ///
    /// # Errors
    ///
    /// [`Error::Alloc`] if the buffer could not be allocated
    pub fn replicate_with<F>(len: isize, mut value: F) -> Result<Self>
    where
        F: FnMut() -> S::Item,
    {
        Self::generate(checked_size(len).unwrap_or(0), |_| value())
    }

    /// Creates a vector of `len` elements where the element at `i` is `value(i)`
    ///
    /// # Errors
    ///
    /// [`Error::Alloc`] if the buffer could not be allocated
    pub fn generate<F>(len: usize, mut value: F) -> Result<Self>
    where
        F: FnMut(usize) -> S::Item,
    {
        let vec = Self::allocate(len)?;
        for index in 0..len {
            // Safety
            //
            // the buffer was just allocated with `len` slots
            unsafe { vec.buffer.set_unchecked(index, value(index)) }
        }
        Ok(vec)
    }

    /// Creates a vector holding a copy of every element of `values`
    ///
    /// # Errors
    ///
    /// [`Error::Alloc`] if the buffer could not be allocated
    pub fn from_slice(values: &[S::Item]) -> Result<Self>
    where
        S::Item: Clone,
    {
        Self::generate(values.len(), |index| values[index].clone())
    }

    /// Returns the number of elements in the view
    pub fn len(&self) -> usize { self.len }

    /// Returns true if and only if the view contains no elements
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of slots in the underlying buffer, which may be
    /// larger than `len()` for a sliced view
    pub fn capacity(&self) -> usize { self.buffer.capacity() }

    /// Returns the underlying buffer handle
    pub fn buffer(&self) -> &S { &self.buffer }

    /// Copies the view into a new buffer of exactly `len()` slots. The copy
    /// never overlaps `self`. Uninitialized elements stay uninitialized.
    ///
    /// # Errors
    ///
    /// [`Error::Alloc`] if the buffer could not be allocated
    pub fn try_clone(&self) -> Result<Self> {
        let vec = Self::allocate(self.len)?;
        // Safety
        //
        // `vec` has `self.len` slots in a buffer fresh from allocation, so
        // it can't share a handle with `self`
        unsafe {
            vec.buffer.copy_nonoverlapping(0, &self.buffer, self.offset, self.len);
        }
        Ok(vec)
    }

    /// Copies the view into the front of a new buffer with `extra`
    /// uninitialized slots after it, and returns a view of the whole new
    /// buffer. `self` and its buffer are left untouched.
    ///
    /// ```rust
    /// # use generic_mvec::BoxedMVector;
    /// let vec = BoxedMVector::from_slice(&["a", "b"]).unwrap();
    /// let grown = vec.grow(2).unwrap();
    /// assert_eq!(grown.len(), 4);
    /// assert_eq!(grown.read(1).unwrap(), "b");
    /// assert!(grown.read(2).is_err());
    /// assert!(!grown.overlaps(&vec));
    /// ```
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidSize`] if `extra` is negative, or the new length overflows
    /// * [`Error::Alloc`] if the buffer could not be allocated
    pub fn grow(&self, extra: isize) -> Result<Self> {
        let additional = checked_size(extra)?;
        if self.len.checked_add(additional).is_none() {
            return Err(Error::InvalidSize { requested: extra })
        }

        // Safety
        //
        // `extra` is not negative, and the new length does not overflow
        unsafe { self.grow_unchecked(extra) }
    }

    /// Like [`MVector::grow`], without checking `extra`
    ///
    /// # Safety
    ///
    /// `extra` must not be negative, and `len() + extra` must not overflow
    ///
    /// # Errors
    ///
    /// [`Error::Alloc`] if the buffer could not be allocated
    pub unsafe fn grow_unchecked(&self, extra: isize) -> Result<Self> {
        if cfg!(debug_assertions) && (extra < 0 || self.len.checked_add(extra as usize).is_none()) {
            unchecked_precondition("MVector::grow_unchecked")
        }

        let vec = Self::allocate(self.len.wrapping_add(extra as usize))?;
        // Safety
        //
        // the new buffer is at least `self.len` slots, and is not shared
        unsafe {
            vec.buffer.copy_nonoverlapping(0, &self.buffer, self.offset, self.len);
        }
        Ok(vec)
    }

    /// Resets every element of the view to uninitialized, releasing
    /// anything the elements hold.
    ///
    /// The length and the buffer are unchanged. For storages whose elements
    /// hold nothing (see [`raw::Unboxed`]) this does nothing.
    pub fn clear(&self) {
        for index in self.buffer_range() {
            // Safety
            //
            // the buffer range is in bounds for the buffer
            unsafe { self.buffer.clear_unchecked(index) }
        }
    }

    /// Copies the elements of the view into a `Vec`
    ///
    /// # Errors
    ///
    /// [`Error::UninitializedAccess`] if any element is uninitialized
    pub fn to_vec(&self) -> Result<Vec<S::Item>> { (0..self.len).map(|index| self.read(index)).collect() }

    fn check_index(&self, index: usize) -> Result {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, len: self.len })
        }
    }

    /// Returns a copy of the element at `index`
    ///
    /// # Errors
    ///
    /// * [`Error::IndexOutOfRange`] if `index >= len()`
    /// * [`Error::UninitializedAccess`] if the element was never written
    pub fn read(&self, index: usize) -> Result<S::Item> {
        self.check_index(index)?;
        // Safety
        //
        // the index was checked against the length of the view
        unsafe { self.buffer.get_unchecked(self.offset + index) }.ok_or(Error::UninitializedAccess { index })
    }

    /// Returns a copy of the element at `index`, without checking the index
    ///
    /// # Panics
    ///
    /// Panics if the element was never written and the storage can tell
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`
    pub unsafe fn read_unchecked(&self, index: usize) -> S::Item {
        if cfg!(debug_assertions) && index >= self.len {
            unchecked_precondition("MVector::read_unchecked")
        }

        match unsafe { self.buffer.get_unchecked(self.offset + index) } {
            Some(value) => value,
            None => uninitialized_read(index),
        }
    }

    /// Writes `value` to the element at `index`
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len()`
    pub fn write(&self, index: usize, value: S::Item) -> Result {
        self.check_index(index)?;
        // Safety
        //
        // the index was checked against the length of the view
        unsafe { self.write_unchecked(index, value) }
        Ok(())
    }

    /// Writes `value` to the element at `index`, without checking the index
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`
    pub unsafe fn write_unchecked(&self, index: usize, value: S::Item) {
        if cfg!(debug_assertions) && index >= self.len {
            unchecked_precondition("MVector::write_unchecked")
        }

        unsafe { self.buffer.set_unchecked(self.offset + index, value) }
    }

    /// Replaces the element at `index` with `f` applied to it
    ///
    /// # Errors
    ///
    /// * [`Error::IndexOutOfRange`] if `index >= len()`
    /// * [`Error::UninitializedAccess`] if the element was never written
    pub fn modify<F>(&self, index: usize, f: F) -> Result
    where
        F: FnOnce(S::Item) -> S::Item,
    {
        let value = self.read(index)?;
        // Safety
        //
        // `read` succeeded, so the index is in bounds
        unsafe { self.write_unchecked(index, f(value)) }
        Ok(())
    }

    /// Writes `value` to the element at `index` and returns the element it
    /// replaced
    ///
    /// # Errors
    ///
    /// * [`Error::IndexOutOfRange`] if `index >= len()`
    /// * [`Error::UninitializedAccess`] if the element was never written,
    ///   in which case nothing is written
    pub fn exchange(&self, index: usize, value: S::Item) -> Result<S::Item> {
        let old = self.read(index)?;
        // Safety
        //
        // `read` succeeded, so the index is in bounds
        unsafe { self.write_unchecked(index, value) }
        Ok(old)
    }

    /// Swaps the elements at `a` and `b`. Uninitialized elements are swapped
    /// like any other.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if either index is not less than `len()`
    pub fn swap(&self, a: usize, b: usize) -> Result {
        self.check_index(a)?;
        self.check_index(b)?;
        // Safety
        //
        // both indices were checked against the length of the view
        unsafe { self.swap_unchecked(a, b) }
        Ok(())
    }

    /// Swaps the elements at `a` and `b`, without checking the indices
    ///
    /// # Safety
    ///
    /// `a` and `b` must both be less than `len()`
    pub unsafe fn swap_unchecked(&self, a: usize, b: usize) {
        if cfg!(debug_assertions) && (a >= self.len || b >= self.len) {
            unchecked_precondition("MVector::swap_unchecked")
        }

        let a = self.offset + a;
        let b = self.offset + b;
        unsafe {
            let at_a = self.buffer.get_unchecked(a);
            let at_b = self.buffer.get_unchecked(b);
            self.put(a, at_b);
            self.put(b, at_a);
        }
    }

    unsafe fn put(&self, index: usize, value: Option<S::Item>) {
        unsafe {
            match value {
                Some(value) => self.buffer.set_unchecked(index, value),
                None => self.buffer.clear_unchecked(index),
            }
        }
    }

    /// Writes `value` to every element of the view
    pub fn set(&self, value: S::Item)
    where
        S::Item: Clone,
    {
        for index in self.buffer_range() {
            // Safety
            //
            // the buffer range is in bounds for the buffer
            unsafe { self.buffer.set_unchecked(index, value.clone()) }
        }
    }

    /// Copies every element of `src` into the element at the same index of
    /// `self`
    ///
    /// # Errors
    ///
    /// * [`Error::LengthMismatch`] if the views have different lengths
    /// * [`Error::Overlap`] if the views [overlap](MVector::overlaps); use
    ///   [`MVector::move_from`] to copy between overlapping views
    pub fn copy_from(&self, src: &Self) -> Result {
        if self.len != src.len {
            return Err(Error::LengthMismatch {
                dst: self.len,
                src: src.len,
            })
        }

        if self.overlaps(src) {
            return Err(Error::Overlap {
                dst: self.buffer_range(),
                src: src.buffer_range(),
            })
        }

        // Safety
        //
        // the lengths are equal and the views do not overlap
        unsafe { self.copy_from_unchecked(src) }
        Ok(())
    }

    /// Copies every element of `src` into `self`, without checking lengths
    /// or overlap
    ///
    /// # Safety
    ///
    /// * `self.len()` must equal `src.len()`
    /// * the views must not [overlap](MVector::overlaps); the storage is
    ///   free to use a block copy that assumes disjoint ranges
    pub unsafe fn copy_from_unchecked(&self, src: &Self) {
        if cfg!(debug_assertions) && (self.len != src.len || self.overlaps(src)) {
            unchecked_precondition("MVector::copy_from_unchecked")
        }

        unsafe {
            self.buffer
                .copy_nonoverlapping(self.offset, &src.buffer, src.offset, self.len);
        }
    }

    /// Copies every element of `src` into the element at the same index of
    /// `self`, as if through a temporary buffer. The views may overlap.
    ///
    /// ```rust
    /// # use generic_mvec::UnboxedMVector;
    /// let vec = UnboxedMVector::<u8>::from_slice(&[1, 2, 3, 4, 5]).unwrap();
    /// vec.drop(1).move_from(&vec.take(4)).unwrap();
    /// assert_eq!(vec.to_vec().unwrap(), [1, 1, 2, 3, 4]);
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if the views have different lengths
    pub fn move_from(&self, src: &Self) -> Result {
        if self.len != src.len {
            return Err(Error::LengthMismatch {
                dst: self.len,
                src: src.len,
            })
        }

        // Safety
        //
        // the lengths are equal
        unsafe { self.move_from_unchecked(src) }
        Ok(())
    }

    /// Like [`MVector::move_from`], without checking the lengths
    ///
    /// # Safety
    ///
    /// `self.len()` must equal `src.len()`
    pub unsafe fn move_from_unchecked(&self, src: &Self) {
        if cfg!(debug_assertions) && self.len != src.len {
            unchecked_precondition("MVector::move_from_unchecked")
        }

        if !self.overlaps(src) {
            return unsafe { self.copy_from_unchecked(src) }
        }

        let (dst, src_offset) = (self.offset, src.offset);
        // copy away from the side being overwritten
        unsafe {
            if dst <= src_offset {
                for i in 0..self.len {
                    self.buffer.transfer_slot(dst + i, &src.buffer, src_offset + i);
                }
            } else {
                for i in (0..self.len).rev() {
                    self.buffer.transfer_slot(dst + i, &src.buffer, src_offset + i);
                }
            }
        }
    }
}
