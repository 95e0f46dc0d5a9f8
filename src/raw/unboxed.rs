use crate::raw::{AllocError, AllocResult, Buffer};

use core::{cell::Cell, ptr};
use std::{rc::Rc, vec::Vec};

/// A buffer of plain `Copy` elements stored inline.
///
/// Fresh slots hold `T::default()`, which doubles as the uninitialized
/// sentinel: reading a slot before writing it is a logic error that is *not*
/// detected at runtime. Since `Copy` elements own nothing, clearing a slot
/// leaves it untouched.
pub struct Unboxed<T>(Rc<[Cell<T>]>);

impl<T> Clone for Unboxed<T> {
    fn clone(&self) -> Self { Self(Rc::clone(&self.0)) }
}

impl<T> Unboxed<T> {
    /// Returns the number of live handles to this buffer
    pub fn handle_count(&self) -> usize { Rc::strong_count(&self.0) }
}

unsafe impl<T: Copy + Default> Buffer for Unboxed<T> {
    type Item = T;

    fn try_allocate(capacity: usize) -> AllocResult<Self> { Self::try_allocate_filled(capacity, T::default()) }

    fn try_allocate_filled(capacity: usize, value: T) -> AllocResult<Self> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(|_| AllocError)?;
        slots.resize(capacity, Cell::new(value));
        Ok(Self(Rc::from(slots)))
    }

    #[inline]
    fn capacity(&self) -> usize { self.0.len() }

    #[inline]
    fn same_handle(&self, other: &Self) -> bool { Rc::ptr_eq(&self.0, &other.0) }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> Option<T> {
        debug_assert!(index < self.capacity());
        Some(unsafe { self.0.get_unchecked(index) }.get())
    }

    #[inline]
    unsafe fn set_unchecked(&self, index: usize, value: T) {
        debug_assert!(index < self.capacity());
        unsafe { self.0.get_unchecked(index) }.set(value);
    }

    #[inline]
    unsafe fn clear_unchecked(&self, index: usize) { debug_assert!(index < self.capacity()); }

    unsafe fn copy_nonoverlapping(&self, dst_offset: usize, src: &Self, src_offset: usize, len: usize) {
        debug_assert!(dst_offset + len <= self.capacity());
        debug_assert!(src_offset + len <= src.capacity());

        // Safety
        //
        // * `Cell<T>` has the same layout as `T`, and writes through a shared
        //   `Cell` are permitted
        // * the caller guarantees both ranges are in bounds and disjoint
        unsafe {
            let src = src.0.as_ptr().add(src_offset).cast::<T>();
            let dst = self.0.as_ptr().add(dst_offset).cast::<T>().cast_mut();
            ptr::copy_nonoverlapping(src, dst, len);
        }
    }
}
