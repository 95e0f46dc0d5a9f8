use crate::{raw::Buffer, MVector};

use core::fmt;

impl<S: Buffer> From<S> for MVector<S> {
    fn from(buffer: S) -> Self { Self::from_buffer(buffer) }
}

impl<S: Buffer> fmt::Debug for MVector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MVector")
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T> fmt::Debug for crate::raw::Boxed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boxed").field("handles", &self.handle_count()).finish()
    }
}

impl<T> fmt::Debug for crate::raw::Unboxed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unboxed").field("handles", &self.handle_count()).finish()
    }
}
