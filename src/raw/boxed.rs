use crate::raw::{AllocError, AllocResult, Buffer};

use core::cell::Cell;
use std::{rc::Rc, vec::Vec};

/// A buffer of arbitrary `Clone` elements, each slot either holding a value
/// or empty.
///
/// The empty slot is the uninitialized sentinel. Reading one is detected, and
/// clearing a slot drops the value it held, so a cleared vector does not keep
/// its former elements alive.
pub struct Boxed<T>(Rc<[Cell<Option<T>>]>);

impl<T> Clone for Boxed<T> {
    fn clone(&self) -> Self { Self(Rc::clone(&self.0)) }
}

/// Puts a value taken out of a slot back when dropped, including when
/// `T::clone` unwinds. A value written into the slot in the meantime wins.
struct Restore<'a, T> {
    slot: &'a Cell<Option<T>>,
    value: Option<T>,
}

impl<T> Drop for Restore<'_, T> {
    fn drop(&mut self) {
        let written = self.slot.take();
        self.slot.set(written.or_else(|| self.value.take()));
    }
}

impl<T> Boxed<T> {
    /// Returns the number of live handles to this buffer
    pub fn handle_count(&self) -> usize { Rc::strong_count(&self.0) }
}

unsafe impl<T: Clone> Buffer for Boxed<T> {
    type Item = T;

    fn try_allocate(capacity: usize) -> AllocResult<Self> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(|_| AllocError)?;
        slots.resize_with(capacity, || Cell::new(None));
        Ok(Self(Rc::from(slots)))
    }

    fn try_allocate_filled(capacity: usize, value: T) -> AllocResult<Self> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(|_| AllocError)?;
        slots.resize_with(capacity, || Cell::new(Some(value.clone())));
        Ok(Self(Rc::from(slots)))
    }

    #[inline]
    fn capacity(&self) -> usize { self.0.len() }

    #[inline]
    fn same_handle(&self, other: &Self) -> bool { Rc::ptr_eq(&self.0, &other.0) }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> Option<T> {
        debug_assert!(index < self.capacity());
        let slot = unsafe { self.0.get_unchecked(index) };
        let taken = Restore {
            value: slot.take(),
            slot,
        };
        taken.value.clone()
    }

    #[inline]
    unsafe fn set_unchecked(&self, index: usize, value: T) {
        debug_assert!(index < self.capacity());
        unsafe { self.0.get_unchecked(index) }.set(Some(value));
    }

    #[inline]
    unsafe fn clear_unchecked(&self, index: usize) {
        debug_assert!(index < self.capacity());
        unsafe { self.0.get_unchecked(index) }.set(None);
    }

    #[inline]
    unsafe fn transfer_slot(&self, dst_index: usize, src: &Self, src_index: usize) {
        unsafe {
            let value = src.get_unchecked(src_index);
            self.0.get_unchecked(dst_index).set(value);
        }
    }
}
