#[cold]
#[inline(never)]
pub(crate) fn uninitialized_read(index: usize) -> ! {
    panic!("Tried to read the uninitialized element at index {}", index)
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn unchecked_precondition(operation: &str) -> ! {
    panic!(
        "The precondition of `{}` was violated. This is undefined behavior on release mode!",
        operation
    )
}
