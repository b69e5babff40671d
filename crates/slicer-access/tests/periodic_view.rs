use slicer_access::{
    bind, bind_with, AccessError, ArrayGrid, AxisState, FactoryConfig, OutOfBoundsAccess,
    OutOfBoundsFactory, WrapAccessorFactory,
};
use slicer_core::{BoundedGrid, BoundedSource};

fn digits() -> ArrayGrid<u32> {
    let grid = BoundedGrid::new(&[0], &[9]).unwrap();
    ArrayGrid::from_fn(grid, |p| p[0] as u32).unwrap()
}

/// Read the sample at every logical coordinate of `xs` through any strategy.
fn read_all<A>(acc: &mut A, xs: impl IntoIterator<Item = i64>) -> Vec<A::Sample>
where
    A: OutOfBoundsAccess,
{
    xs.into_iter()
        .map(|x| {
            acc.set_absolute(0, x);
            acc.get()
        })
        .collect()
}

#[test]
fn one_axis_absolute_jumps_fold_into_grid() {
    let mut acc = WrapAccessorFactory::new().create(&digits()).unwrap();

    acc.set_absolute(0, 23);
    assert_eq!(acc.get(), 3);
    assert_eq!(acc.axis_state(0), AxisState::AboveMax);

    acc.set_absolute(0, -3);
    assert_eq!(acc.get(), 7);
    assert_eq!(acc.axis_state(0), AxisState::BelowMin);

    assert_eq!(read_all(&mut acc, -10..0), (0..10).collect::<Vec<_>>());
    assert_eq!(read_all(&mut acc, 100..103), vec![0, 1, 2]);
}

#[test]
fn stepping_off_max_wraps_delegate_to_min() {
    let mut acc = WrapAccessorFactory::new().create(&digits()).unwrap();
    acc.set_absolute(0, 9);
    assert!(!acc.is_out_of_bounds());

    acc.step_forward(0);
    assert_eq!(acc.position(0), 10);
    assert!(acc.is_out_of_bounds_on_axis(0));
    assert_eq!(acc.get(), 0);

    acc.step_backward(0);
    assert_eq!(acc.get(), 9);
    assert!(!acc.is_out_of_bounds());
}

#[test]
fn clone_moves_independently() {
    let mut original = WrapAccessorFactory::new().create(&digits()).unwrap();
    original.set_absolute(0, 8);
    let mut copy = original.clone();
    copy.step_forward(0);
    copy.step_forward(0);
    assert_eq!(copy.position(0), 10);
    assert!(copy.is_out_of_bounds());
    assert_eq!(original.position(0), 8);
    assert!(!original.is_out_of_bounds());
    assert_eq!(original.get(), 8);
}

#[test]
fn extreme_coordinates_wrap_exactly() {
    let mut acc = WrapAccessorFactory::new().create(&digits()).unwrap();

    acc.set_absolute(0, i64::MAX);
    assert_eq!(acc.get(), 7);
    assert!(acc.is_out_of_bounds());

    acc.set_absolute(0, i64::MIN);
    assert_eq!(acc.get(), 2);
    assert!(acc.is_out_of_bounds());

    let grid = BoundedGrid::new(&[i64::MIN], &[i64::MIN + 4]).unwrap();
    let edge = ArrayGrid::from_fn(grid, |p| p[0] - i64::MIN).unwrap();
    let mut acc = WrapAccessorFactory::new().create(&edge).unwrap();
    acc.set_absolute(0, i64::MAX);
    // i64::MAX - i64::MIN = 2^64 - 1, which is 0 mod 5.
    assert_eq!(acc.get(), 0);
    acc.step_backward(0);
    assert!(acc.is_out_of_bounds());
    assert_eq!(acc.get(), 4);
}

#[test]
fn view_reads_three_dimensional_volume_everywhere() {
    let grid = BoundedGrid::new(&[0, 0, 0], &[3, 2, 1]).unwrap();
    let volume = ArrayGrid::from_fn(grid, |p| p[0] + 10 * p[1] + 100 * p[2]).unwrap();
    let mut view = bind(volume).unwrap();

    assert_eq!(view.get_sample_at(&[-1, -1, -1]).unwrap(), 3 + 20 + 100);
    assert!((0..3).all(|d| view.is_out_of_bounds_on_axis(d)));

    assert_eq!(view.get_sample_at(&[4, 3, 2]).unwrap(), 0);
    assert_eq!(view.get_sample_at(&[1, 5, 1]).unwrap(), 1 + 20 + 100);
    assert!(!view.is_out_of_bounds_on_axis(0));
    assert!(view.is_out_of_bounds_on_axis(1));
    assert!(!view.is_out_of_bounds_on_axis(2));
    assert!(view.is_out_of_bounds());

    let region = BoundedGrid::new(&[-4, 0, 0], &[7, 0, 0]).unwrap();
    let row: Vec<i64> = view.samples(&region).unwrap().collect();
    assert_eq!(row, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
}

#[test]
fn bind_with_custom_config() {
    let grid = BoundedGrid::new(&[0, 0], &[1, 1]).unwrap();
    let image = ArrayGrid::from_vec(grid, vec![1, 2, 3, 4]).unwrap();

    let strict = WrapAccessorFactory::with_config(FactoryConfig {
        expected_ndim: Some(3),
        ..FactoryConfig::default()
    });
    assert_eq!(
        bind_with(image.clone(), strict).unwrap_err(),
        AccessError::DimensionMismatch {
            expected: 3,
            actual: 2
        }
    );

    let factory = WrapAccessorFactory::with_config(FactoryConfig {
        slice_axes: (1, 0),
        expected_ndim: Some(2),
    });
    let mut view = bind_with(image, factory).unwrap();
    assert_eq!(view.factory().config().slice_axes, (1, 0));
    assert_eq!(view.get_sample_at(&[2, 3]).unwrap(), 3);
}

#[test]
fn factory_trait_builds_same_accessor() {
    let source = digits();
    let factory = WrapAccessorFactory::new();
    let mut via_trait = OutOfBoundsFactory::create(&factory, &source).unwrap();
    let mut direct = factory.create(&source).unwrap();
    assert_eq!(
        read_all(&mut via_trait, -25..25),
        read_all(&mut direct, -25..25)
    );
    assert_eq!(via_trait.grid(), source.bounds().as_ref().unwrap());
}

#[test]
fn independent_accessors_share_one_source_across_threads() {
    let grid = BoundedGrid::from_dimensions(&[16, 16]).unwrap();
    let image = ArrayGrid::from_fn(grid, |p| p[0] * p[1]).unwrap();
    let view = bind(image).unwrap();

    let totals: Vec<i64> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|k| {
                let mut acc = view.random_access().unwrap();
                s.spawn(move || {
                    let mut total = 0;
                    for x in (k * 16)..(k * 16 + 16) {
                        acc.set_absolute(0, x);
                        acc.set_absolute(1, -1);
                        total += acc.get();
                    }
                    total
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // y = -1 wraps to 15 on every thread.
    let expected: i64 = (0..16).map(|x| x * 15).sum();
    assert!(totals.iter().all(|&t| t == expected), "{totals:?}");
}
