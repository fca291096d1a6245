//! # Dense kernels
//!
//! Element-wise operations over a slice. These are the primitives that the tableau elimination is
//! built from; they don't allocate.
use num_traits::Float;

/// Multiply each element by a constant: `data[i] *= alpha`.
pub fn scale<F: Float>(data: &mut [F], alpha: F) {
    for value in data {
        *value = *value * alpha;
    }
}

/// Divide each element by a constant.
///
/// This is not expressed as a `scale` with the reciprocal, as that doesn't give the same rounding.
pub fn divide<F: Float>(data: &mut [F], divisor: F) {
    debug_assert!(!divisor.is_zero());

    for value in data {
        *value = *value / divisor;
    }
}

/// Add a multiple of one slice to another: `y[i] += alpha * x[i]`.
///
/// # Arguments
///
/// * `y`: Values that get updated.
/// * `alpha`: Multiple of `x` to add.
/// * `x`: Values to read, should have the same length as `y`.
pub fn axpy<F: Float>(y: &mut [F], alpha: F, x: &[F]) {
    debug_assert_eq!(y.len(), x.len());

    for (target, &value) in y.iter_mut().zip(x) {
        *target = *target + alpha * value;
    }
}

#[cfg(test)]
mod test {
    use super::{axpy, divide, scale};

    #[test]
    fn test_scale() {
        let mut data = vec![1_f64, -2_f64, 0_f64, 4_f64];
        scale(&mut data, 0.5);
        assert_eq!(data, vec![0.5, -1_f64, 0_f64, 2_f64]);
    }

    #[test]
    fn test_divide() {
        let mut data = vec![3_f64, 6_f64, -9_f64];
        divide(&mut data, 3_f64);
        assert_eq!(data, vec![1_f64, 2_f64, -3_f64]);
    }

    #[test]
    fn test_axpy() {
        let mut y = vec![1_f64, 2_f64, 3_f64];
        axpy(&mut y, -2_f64, &[1_f64, 0_f64, 0.5]);
        assert_eq!(y, vec![-1_f64, 2_f64, 2_f64]);
    }
}
