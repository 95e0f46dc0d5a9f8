#[mockalloc::test]
fn read_and_write_check_bounds() {
    new_vec!(vec, [1, 2, 3]);
    let view = vec.drop(1);
    assert_eq!(view.read(2).unwrap_err(), Error::IndexOutOfRange { index: 2, len: 2 });
    assert_eq!(view.write(5, S!(0)).unwrap_err(), Error::IndexOutOfRange { index: 5, len: 2 });
    assert_eq!(vec.to_vec().unwrap(), S!([1, 2, 3]));

    unsafe {
        view.write_unchecked(1, S!(8));
        assert_eq!(view.read_unchecked(1), S!(8));
    }
    assert_eq!(vec.read(2).unwrap(), S!(8));
}

#[mockalloc::test]
fn swap_is_an_involution() {
    new_vec!(vec, [1, 2, 3]);
    vec.swap(0, 2).unwrap();
    assert_eq!(vec.to_vec().unwrap(), S!([3, 2, 1]));
    vec.swap(0, 2).unwrap();
    assert_eq!(vec.to_vec().unwrap(), S!([1, 2, 3]));

    vec.swap(1, 1).unwrap();
    assert_eq!(vec.to_vec().unwrap(), S!([1, 2, 3]));

    unsafe { vec.swap_unchecked(0, 1) };
    assert_eq!(vec.to_vec().unwrap(), S!([2, 1, 3]));
}

#[mockalloc::test]
fn swap_checks_both_indices() {
    new_vec!(vec, [1, 2, 3]);
    assert_eq!(vec.swap(0, 3).unwrap_err(), Error::IndexOutOfRange { index: 3, len: 3 });
    assert_eq!(vec.swap(4, 0).unwrap_err(), Error::IndexOutOfRange { index: 4, len: 3 });
    assert_eq!(vec.to_vec().unwrap(), S!([1, 2, 3]));
}

#[mockalloc::test]
fn set_fills_only_the_view() {
    new_vec!(vec, [1, 2, 3, 4]);
    vec.slice(1, 2).unwrap().set(S!(0));
    assert_eq!(vec.to_vec().unwrap(), S!([1, 0, 0, 4]));
}

#[mockalloc::test]
fn modify_and_exchange() {
    new_vec!(vec, [1, 2, 3]);
    vec.modify(1, |_| S!(5)).unwrap();
    assert_eq!(vec.exchange(1, S!(6)).unwrap(), S!(5));
    assert_eq!(vec.read(1).unwrap(), S!(6));
    assert!(vec.modify(3, |x| x).is_err());
    assert!(vec.exchange(3, S!(0)).is_err());
}

#[mockalloc::test]
fn copy_between_buffers() {
    new_vec!(dst, 3);
    new_vec!(src, [7, 8, 9]);
    dst.copy_from(&src).unwrap();
    assert_eq!(dst.to_vec().unwrap(), S!([7, 8, 9]));

    src.write(0, S!(1)).unwrap();
    assert_eq!(dst.read(0).unwrap(), S!(7));
}

#[mockalloc::test]
fn copy_between_disjoint_views() {
    new_vec!(vec, [1, 2, 3, 4]);
    let (front, back) = vec.split_at(2);
    front.copy_from(&back).unwrap();
    assert_eq!(vec.to_vec().unwrap(), S!([3, 4, 3, 4]));

    new_vec!(vec, [1, 2, 3, 4]);
    unsafe { vec.drop(2).copy_from_unchecked(&vec.take(2)) };
    assert_eq!(vec.to_vec().unwrap(), S!([1, 2, 1, 2]));
}

#[mockalloc::test]
fn copy_rejects_overlap() {
    new_vec!(vec, [1, 2, 3, 4, 5]);
    let dst = vec.slice(0, 3).unwrap();
    let src = vec.slice(1, 3).unwrap();
    assert_eq!(dst.copy_from(&src).unwrap_err(), Error::Overlap { dst: 0..3, src: 1..4 });
    assert_eq!(vec.to_vec().unwrap(), S!([1, 2, 3, 4, 5]));
}

#[mockalloc::test]
fn copy_rejects_length_mismatch_first() {
    new_vec!(vec, [1, 2, 3, 4, 5]);
    let dst = vec.slice(0, 3).unwrap();
    let src = vec.slice(0, 4).unwrap();
    assert_eq!(dst.copy_from(&src).unwrap_err(), Error::LengthMismatch { dst: 3, src: 4 });

    new_vec!(other, 4);
    assert_eq!(dst.copy_from(&other).unwrap_err(), Error::LengthMismatch { dst: 3, src: 4 });
}

#[mockalloc::test]
fn move_handles_overlap_in_both_directions() {
    new_vec!(vec, [1, 2, 3, 4, 5]);
    vec.slice(1, 4).unwrap().move_from(&vec.slice(0, 4).unwrap()).unwrap();
    assert_eq!(vec.to_vec().unwrap(), S!([1, 1, 2, 3, 4]));

    new_vec!(vec, [1, 2, 3, 4, 5]);
    vec.slice(0, 4).unwrap().move_from(&vec.slice(1, 4).unwrap()).unwrap();
    assert_eq!(vec.to_vec().unwrap(), S!([2, 3, 4, 5, 5]));

    new_vec!(vec, [1, 2, 3, 4]);
    vec.move_from(&vec.take(4)).unwrap();
    assert_eq!(vec.to_vec().unwrap(), S!([1, 2, 3, 4]));

    assert_eq!(
        vec.take(2).move_from(&vec.take(3)).unwrap_err(),
        Error::LengthMismatch { dst: 2, src: 3 }
    );
}

#[mockalloc::test]
fn move_between_buffers() {
    new_vec!(dst, [0, 0]);
    new_vec!(src, [5, 6]);
    unsafe { dst.move_from_unchecked(&src) };
    assert_eq!(dst.to_vec().unwrap(), S!([5, 6]));
}
