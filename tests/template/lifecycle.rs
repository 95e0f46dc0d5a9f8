#[mockalloc::test]
fn new_rejects_negative_sizes() {
    assert_eq!(Vector::new(-1).unwrap_err(), Error::InvalidSize { requested: -1 });
    new_vec!(vec, 3);
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.buffer_range(), 0..3);
}

#[mockalloc::test]
fn replicate_clamps_negative_sizes() {
    let vec = Vector::replicate(-3, S!(1)).unwrap();
    assert!(vec.is_empty());

    let vec = Vector::replicate(3, S!(1)).unwrap();
    assert_eq!(vec.to_vec().unwrap(), S!([1, 1, 1]));
}

#[mockalloc::test]
fn replicate_with_and_generate() {
    let mut next = 0;
    let vec = Vector::replicate_with(3, || {
        next += 1;
        S!(next)
    })
    .unwrap();
    assert_eq!(vec.to_vec().unwrap(), S!([1, 2, 3]));
    assert!(Vector::replicate_with(-2, || S!(0)).unwrap().is_empty());

    let vec = Vector::generate(4, |i| S!(i * 10)).unwrap();
    assert_eq!(vec.to_vec().unwrap(), S!([0, 10, 20, 30]));
}

#[mockalloc::test]
fn clone_is_independent() {
    new_vec!(vec, [1, 2, 3, 4]);
    let view = vec.slice(1, 2).unwrap();
    let copy = view.try_clone().unwrap();

    assert_eq!(copy.len(), 2);
    assert_eq!(copy.capacity(), 2);
    assert_eq!(copy.to_vec().unwrap(), S!([2, 3]));
    assert!(!copy.overlaps(&view));

    copy.write(0, S!(9)).unwrap();
    assert_eq!(view.read(0).unwrap(), S!(2));
}

#[mockalloc::test]
fn grow_copies_into_a_new_buffer() {
    new_vec!(vec, [1, 2, 3]);
    let grown = vec.drop(1).grow(2).unwrap();

    assert_eq!(grown.len(), 4);
    assert_eq!(grown.read(0).unwrap(), S!(2));
    assert_eq!(grown.read(1).unwrap(), S!(3));
    assert!(!grown.overlaps(&vec));

    grown.write(0, S!(5)).unwrap();
    assert_eq!(vec.to_vec().unwrap(), S!([1, 2, 3]));
    assert_eq!(vec.len(), 3);

    assert_eq!(vec.grow(0).unwrap().to_vec().unwrap(), S!([1, 2, 3]));
    let grown = unsafe { vec.grow_unchecked(1) }.unwrap();
    assert_eq!(grown.len(), 4);
}

#[mockalloc::test]
fn grow_rejects_negative_sizes() {
    new_vec!(vec, [1, 2, 3]);
    assert_eq!(vec.grow(-1).unwrap_err(), Error::InvalidSize { requested: -1 });
}

#[mockalloc::test]
fn clear_keeps_the_shape() {
    new_vec!(vec, [1, 2, 3]);
    let view = vec.slice(1, 2).unwrap();
    view.clear();
    assert_eq!(view.len(), 2);
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.read(0).unwrap(), S!(1));
}

#[mockalloc::test]
fn from_buffer_views_everything() {
    new_vec!(vec, [1, 2, 3]);
    let whole = Vector::from(vec.buffer().clone());
    assert_eq!(whole.len(), 3);
    assert!(whole.overlaps(&vec));
}
