use super::*;
use crate::error::Error;
use crate::grid::gauss_2d;
use crate::test_utils::{assert_close, axis, init_logging};

fn sample_split() -> SplitParams {
    SplitParams {
        a: 120.0,
        a2: 80.0,
        x0: 0.3,
        y0: -0.2,
        sigma: 1.4,
        b: 5.0,
        b1: 9.0,
        b_x: 0.05,
        b_y: -0.1,
    }
}

fn grids() -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    (
        axis(-3.0, 1.0, 7),
        axis(-2.0, 1.0, 5),
        axis(-2.5, 1.0, 7),
        axis(-1.5, 1.0, 5),
    )
}

// ============================================================================
// Composer
// ============================================================================

#[test]
fn test_split_blocks_match_single_channel() {
    let (x, y, x2, y2) = grids();
    let p = sample_split();
    let mut out = Buffer2::new_default(14, 5);
    split_gauss_into(&mut out, &x, &y, &x2, &y2, &p).unwrap();

    let [c1, c2] = p.channels();
    let first = gauss_2d(&x, &y, &c1);
    let second = gauss_2d(&x2, &y2, &c2);
    assert_eq!(&out.as_slice()[..35], first.as_slice());
    assert_eq!(&out.as_slice()[35..], second.as_slice());
}

#[test]
fn test_split_identical_channels_stack() {
    let x = axis(-2.0, 0.5, 6);
    let y = axis(-1.0, 0.5, 4);
    let p = SplitParams {
        a2: 120.0,
        b1: 5.0,
        ..sample_split()
    };
    let mut out = Buffer2::new_default(12, 4);
    split_gauss_into(&mut out, &x, &y, &x, &y, &p).unwrap();
    let (top, bottom) = out.split_at(24);
    assert_eq!(top, bottom);

    let single = GaussParams {
        a: p.a,
        x0: p.x0,
        y0: p.y0,
        sigma: p.sigma,
        b: p.b,
        b_x: p.b_x,
        b_y: p.b_y,
    };
    assert_eq!(top, gauss_2d(&x, &y, &single).as_slice());
}

#[test]
fn test_split_second_channel_uses_b1() {
    let x = [0.0];
    let y = [0.0];
    let p = SplitParams {
        a: 0.0,
        a2: 0.0,
        b: 2.0,
        b1: 7.0,
        ..Default::default()
    };
    let mut out = Buffer2::new_default(2, 1);
    split_gauss_into(&mut out, &x, &y, &x, &y, &p).unwrap();
    assert_eq!(out.as_slice(), &[2.0, 7.0]);
}

#[test]
fn test_split_rejects_wrong_output_shape() {
    init_logging();
    let (x, y, x2, y2) = grids();
    // channels stacked along the column axis instead of the row axis
    let mut out = Buffer2::new_filled(7, 10, 0.5);
    let err = split_gauss_into(&mut out, &x, &y, &x2, &y2, &sample_split()).unwrap_err();
    assert_eq!(
        err,
        Error::Layout {
            expected: vec![14, 5],
            found: vec![7, 10],
        }
    );
    assert!(out.iter().all(|&v| v == 0.5));
}

#[test]
fn test_split_accepts_row_stacked_buffer() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0];
    let p = SplitParams::default();
    let mut out = Buffer2::new_default(6, 2);
    split_gauss_into(&mut out, &x, &y, &x, &y, &p).unwrap();
    assert_eq!(out.shape(), [x.len() + x.len(), y.len()]);

    let single = gauss_2d(&x, &y, &p.channels()[0]);
    assert_eq!(&out.as_slice()[..6], single.as_slice());
    assert_eq!(&out.as_slice()[6..], single.as_slice());

    let mut returned = Buffer2::new_default(6, 2);
    split_gauss_pvec(&p.to_vec(), &x, &y, &x, &y, &mut returned).unwrap();
    assert_eq!(returned, out);
}

#[test]
fn test_split_rejects_mismatched_second_channel() {
    let (x, y, _, y2) = grids();
    let short_x2 = axis(0.0, 1.0, 6);
    let mut out = Buffer2::new_default(14, 5);
    let err = split_gauss_into(&mut out, &x, &y, &short_x2, &y2, &sample_split()).unwrap_err();
    assert_eq!(
        err,
        Error::SizeMismatch {
            arg: Arg::X2,
            expected: 7,
            found: 6,
        }
    );
}

#[test]
fn test_pvec_returns_same_buffer() {
    let (x, y, x2, y2) = grids();
    let p = sample_split();
    let mut out = Buffer2::new_default(14, 5);
    let ptr = out.as_slice().as_ptr();
    let returned = split_gauss_pvec(&p.to_vec(), &x, &y, &x2, &y2, &mut out).unwrap();
    assert_eq!(returned.as_slice().as_ptr(), ptr);

    let mut expected = Buffer2::new_default(14, 5);
    split_gauss_into(&mut expected, &x, &y, &x2, &y2, &p).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn test_pvec_short_vector_defaults_tail() {
    let x = axis(-1.0, 1.0, 3);
    let mut out = Buffer2::new_default(6, 3);
    split_gauss_pvec(&[2.0, 3.0], &x, &x, &x, &x, &mut out).unwrap();
    let mut expected = Buffer2::new_default(6, 3);
    let p = SplitParams {
        a: 2.0,
        a2: 3.0,
        ..Default::default()
    };
    split_gauss_into(&mut expected, &x, &x, &x, &x, &p).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn test_pvec_rejects_long_vector() {
    let x = axis(-1.0, 1.0, 3);
    let mut out = Buffer2::new_filled(6, 3, 1.0);
    let err = split_gauss_pvec(&[1.0; 10], &x, &x, &x, &x, &mut out).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { arg: Arg::Params, .. }));
    assert!(out.iter().all(|&v| v == 1.0));
}

// ============================================================================
// Weighted misfit
// ============================================================================

#[test]
fn test_misfit_unit_weight_zero_data_is_negated_model() {
    let (x, y, x2, y2) = grids();
    let p = sample_split();
    let mut model = Buffer2::new_default(14, 5);
    split_gauss_into(&mut model, &x, &y, &x2, &y2, &p).unwrap();

    let data = vec![0.0; 70];
    let weights = vec![1.0; 70];
    let mut out = Buffer2::new_filled(14, 5, f64::NAN);
    split_weighted_misfit(&p.to_vec(), &data, &weights, &x, &y, &x2, &y2, &mut out).unwrap();
    for (k, (&r, &m)) in out.iter().zip(model.iter()).enumerate() {
        assert_eq!(r, -m, "element {k}");
    }
}

#[test]
fn test_misfit_weighted_residual() {
    let (x, y, x2, y2) = grids();
    let p = sample_split();
    let mut model = Buffer2::new_default(14, 5);
    split_gauss_into(&mut model, &x, &y, &x2, &y2, &p).unwrap();

    let data: Vec<f64> = (0..70).map(|k| 10.0 + (k % 9) as f64).collect();
    let weights: Vec<f64> = (0..70).map(|k| 1.0 / (1.0 + k as f64)).collect();
    let mut out = Buffer2::new_default(14, 5);
    let returned =
        split_weighted_misfit(&p.to_vec(), &data, &weights, &x, &y, &x2, &y2, &mut out).unwrap();
    assert_eq!(returned.shape(), [14, 5]);
    for k in 0..70 {
        assert_close(out.as_slice()[k], weights[k] * (data[k] - model.as_slice()[k]), 1e-12);
    }
}

#[test]
fn test_misfit_perfect_fit_is_zero() {
    let (x, y, x2, y2) = grids();
    let p = sample_split();
    let mut model = Buffer2::new_default(14, 5);
    split_gauss_into(&mut model, &x, &y, &x2, &y2, &p).unwrap();
    let weights = vec![3.0; 70];
    let mut out = Buffer2::new_filled(14, 5, 1.0);
    split_weighted_misfit(&p.to_vec(), &model, &weights, &x, &y, &x2, &y2, &mut out).unwrap();
    assert!(out.iter().all(|&r| r == 0.0));
}

#[test]
fn test_misfit_short_weights_fails_before_writing() {
    init_logging();
    let (x, y, x2, y2) = grids();
    let data = vec![0.0; 70];
    let weights = vec![1.0; 69];
    let mut out = Buffer2::new_filled(14, 5, -7.0);
    let err = split_weighted_misfit(
        &sample_split().to_vec(),
        &data,
        &weights,
        &x,
        &y,
        &x2,
        &y2,
        &mut out,
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::SizeMismatch {
            arg: Arg::Weights,
            expected: 70,
            found: 69,
        }
    );
    assert!(out.iter().all(|&v| v == -7.0));
}

#[test]
fn test_misfit_rejects_bad_data_and_output() {
    let (x, y, x2, y2) = grids();
    let p = sample_split().to_vec();
    let weights = vec![1.0; 70];

    let mut out = Buffer2::new_default(14, 5);
    let err = split_weighted_misfit(&p, &[0.0; 35], &weights, &x, &y, &x2, &y2, &mut out);
    assert!(matches!(err, Err(Error::SizeMismatch { arg: Arg::Data, .. })));

    // right element count, wrong stacking axis
    let mut column_stacked = Buffer2::new_default(7, 10);
    let err = split_weighted_misfit(&p, &weights, &weights, &x, &y, &x2, &y2, &mut column_stacked);
    assert!(matches!(err, Err(Error::Layout { .. })));
}
