use core::{
    fmt::{self, Display, Formatter},
    ops::Range,
};

use crate::raw::AllocError;

/// Result of a checked [`MVector`](crate::MVector) operation
pub type Result<T = (), E = Error> = core::result::Result<T, E>;

/// The ways a checked [`MVector`](crate::MVector) operation can reject its
/// arguments. No operation mutates anything before failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A negative size was requested where negative sizes are not clamped,
    /// or the requested size does not fit in memory
    InvalidSize {
        /// The requested size
        requested: isize,
    },
    /// An element index outside of `0..len`
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// The length of the vector
        len: usize,
    },
    /// A sub-slice that does not fit in the vector
    OutOfRange {
        /// The start of the requested sub-slice
        start: usize,
        /// The length of the requested sub-slice
        len: usize,
        /// The length of the vector that was sliced
        available: usize,
    },
    /// `init` or `tail` of an empty vector
    EmptyVector,
    /// A copy between vectors of different lengths
    LengthMismatch {
        /// The length of the destination
        dst: usize,
        /// The length of the source
        src: usize,
    },
    /// A copy between views whose slots intersect in the same buffer
    Overlap {
        /// The absolute range of the destination in the buffer
        dst: Range<usize>,
        /// The absolute range of the source in the buffer
        src: Range<usize>,
    },
    /// A read of a slot that was never written, or was cleared
    UninitializedAccess {
        /// The offending index
        index: usize,
    },
    /// The buffer could not be allocated
    Alloc {
        /// The capacity that was requested
        capacity: usize,
    },
}

impl Error {
    pub(crate) fn alloc(capacity: usize) -> impl FnOnce(AllocError) -> Self { move |AllocError| Self::Alloc { capacity } }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { requested } => write!(f, "invalid vector size {}", requested),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of range for a vector of length {}", index, len)
            }
            Self::OutOfRange { start, len, available } => write!(
                f,
                "slice of length {} starting at {} is out of range for a vector of length {}",
                len, start, available
            ),
            Self::EmptyVector => f.write_str("vector is empty"),
            Self::LengthMismatch { dst, src } => write!(
                f,
                "length mismatch: destination has length {}, source has length {}",
                dst, src
            ),
            Self::Overlap { dst, src } => write!(
                f,
                "overlapping copy: destination {:?} and source {:?} share slots",
                dst, src
            ),
            Self::UninitializedAccess { index } => write!(f, "element {} is uninitialized", index),
            Self::Alloc { capacity } => write!(f, "failed to allocate a buffer of {} elements", capacity),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
