//! Differential Geometry Operations
//!
//! This module provides tensor operations for differential geometry:
//! - Christoffel symbols
//! - Riemann curvature tensor
//! - Ricci tensor and scalar
//! - Metric tensor operations

use crate::Tensor;
use std::ops::{Add, Mul, Sub};

/// Compute Christoffel symbols of the first kind from a metric tensor
/// Γ_{ijk} = (1/2)(∂g_{jk}/∂x^i + ∂g_{ik}/∂x^j - ∂g_{ij}/∂x^k)
///
/// For symbolic computation, this would require differentiation.
/// This is a placeholder that demonstrates the structure.
pub fn christoffel_first_kind<T>(_metric: &Tensor<T>, _dim: usize) -> Tensor<T>
where
    T: Clone + Default,
{
    // In a full implementation, this would:
    // 1. Take partial derivatives of metric components
    // 2. Compute the formula above
    // For now, return a placeholder
    let shape = vec![_dim, _dim, _dim];
    Tensor::new(shape, T::default())
}

/// Compute Christoffel symbols of the second kind from a metric tensor
/// Γ^i_{jk} = (1/2)g^{il}(∂g_{lk}/∂x^j + ∂g_{lj}/∂x^k - ∂g_{jk}/∂x^l)
///
/// This requires the inverse metric g^{ij}
pub fn christoffel_second_kind<T>(
    _metric: &Tensor<T>,
    _inverse_metric: &Tensor<T>,
    _dim: usize,
) -> Tensor<T>
where
    T: Clone + Default + Add<Output = T> + Mul<Output = T>,
{
    // Placeholder for symbolic implementation
    let shape = vec![_dim, _dim, _dim];
    Tensor::new(shape, T::default())
}

/// Compute the Riemann curvature tensor from Christoffel symbols
/// R^i_{jkl} = ∂Γ^i_{jl}/∂x^k - ∂Γ^i_{jk}/∂x^l + Γ^i_{mk}Γ^m_{jl} - Γ^i_{ml}Γ^m_{jk}
pub fn riemann_tensor<T>(_christoffel: &Tensor<T>, _dim: usize) -> Tensor<T>
where
    T: Clone + Default + Add<Output = T> + Mul<Output = T> + Sub<Output = T>,
{
    // Placeholder - full implementation requires differentiation
    let shape = vec![_dim, _dim, _dim, _dim];
    Tensor::new(shape, T::default())
}

/// Compute the Ricci tensor from the Riemann tensor
/// R_{ij} = R^k_{ikj} (contraction over first and third indices)
pub fn ricci_tensor<T>(riemann: &Tensor<T>) -> Tensor<T>
where
    T: Clone + Default + Add<Output = T> + Mul<Output = T>,
{
    assert_eq!(riemann.rank(), 4, "Riemann tensor must be rank 4");
    let dim = riemann.shape()[0];
    assert_eq!(riemann.shape(), &[dim, dim, dim, dim], "Riemann tensor must be square");

    // Contract over first and third indices: R_{ij} = R^k_{ikj}
    // This is a simplified version - full implementation would handle index raising
    let mut result = Tensor::new(vec![dim, dim], T::default());

    for i in 0..dim {
        for j in 0..dim {
            let mut sum = T::default();
            for k in 0..dim {
                // R^k_{ikj} - we're treating upper index as if it's lower for this demo
                let val = riemann.get(&[k, i, k, j]).clone();
                sum = sum + val;
            }
            result.set(&[i, j], sum);
        }
    }

    result
}

/// Compute the Ricci scalar from the Ricci tensor and inverse metric
/// R = g^{ij}R_{ij}
pub fn ricci_scalar<T>(ricci: &Tensor<T>, inverse_metric: &Tensor<T>) -> T
where
    T: Clone + Default + Add<Output = T> + Mul<Output = T>,
{
    assert_eq!(ricci.rank(), 2, "Ricci tensor must be rank 2");
    assert_eq!(inverse_metric.rank(), 2, "Inverse metric must be rank 2");
    let dim = ricci.shape()[0];

    let mut scalar = T::default();
    for i in 0..dim {
        for j in 0..dim {
            let g_ij = inverse_metric.get(&[i, j]).clone();
            let r_ij = ricci.get(&[i, j]).clone();
            scalar = scalar + g_ij * r_ij;
        }
    }

    scalar
}

/// Raise an index using the metric tensor
/// V^i = g^{ij}V_j
pub fn raise_index<T>(covariant: &Tensor<T>, metric_inv: &Tensor<T>) -> Tensor<T>
where
    T: Clone + Default + Add<Output = T> + Mul<Output = T>,
{
    assert_eq!(covariant.rank(), 1, "Input must be a vector");
    assert_eq!(metric_inv.rank(), 2, "Metric must be rank 2");
    let dim = covariant.shape()[0];

    let mut result = Tensor::new(vec![dim], T::default());

    for i in 0..dim {
        let mut sum = T::default();
        for j in 0..dim {
            let g_ij = metric_inv.get(&[i, j]).clone();
            let v_j = covariant.get(&[j]).clone();
            sum = sum + g_ij * v_j;
        }
        result.set(&[i], sum);
    }

    result
}

/// Lower an index using the metric tensor
/// V_i = g_{ij}V^j
pub fn lower_index<T>(contravariant: &Tensor<T>, metric: &Tensor<T>) -> Tensor<T>
where
    T: Clone + Default + Add<Output = T> + Mul<Output = T>,
{
    assert_eq!(contravariant.rank(), 1, "Input must be a vector");
    assert_eq!(metric.rank(), 2, "Metric must be rank 2");
    let dim = contravariant.shape()[0];

    let mut result = Tensor::new(vec![dim], T::default());

    for i in 0..dim {
        let mut sum = T::default();
        for j in 0..dim {
            let g_ij = metric.get(&[i, j]).clone();
            let v_j = contravariant.get(&[j]).clone();
            sum = sum + g_ij * v_j;
        }
        result.set(&[i], sum);
    }

    result
}

/// Create a Minkowski metric tensor (flat spacetime)
/// η = diag(-1, 1, 1, 1) for signature (-,+,+,+)
pub fn minkowski_metric<T>(dim: usize) -> Tensor<T>
where
    T: Clone + From<i32>,
{
    let mut metric = Tensor::new(vec![dim, dim], T::from(0));

    // Set diagonal: -1 for time, +1 for space
    metric.set(&[0, 0], T::from(-1));
    for i in 1..dim {
        metric.set(&[i, i], T::from(1));
    }

    metric
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minkowski_metric() {
        let metric: Tensor<i64> = minkowski_metric(4);
        assert_eq!(metric.shape(), &[4, 4]);
        assert_eq!(*metric.get(&[0, 0]), -1);
        assert_eq!(*metric.get(&[1, 1]), 1);
        assert_eq!(*metric.get(&[2, 2]), 1);
        assert_eq!(*metric.get(&[3, 3]), 1);
        assert_eq!(*metric.get(&[0, 1]), 0);
    }

    #[test]
    fn test_raise_lower_index() {
        // Euclidean metric (identity)
        let metric: Tensor<i64> = Tensor::kronecker_delta(3, 2);
        let vector = Tensor::from_vec(vec![3], vec![1i64, 2, 3]);

        // Raising with identity should give same result
        let raised = raise_index(&vector, &metric);
        assert_eq!(raised, vector);

        // Lowering with identity should give same result
        let lowered = lower_index(&vector, &metric);
        assert_eq!(lowered, vector);
    }

    #[test]
    fn test_ricci_tensor_structure() {
        // Create a dummy Riemann tensor
        let dim = 2;
        let riemann: Tensor<i64> = Tensor::new(vec![dim, dim, dim, dim], 0);

        let ricci = ricci_tensor(&riemann);
        assert_eq!(ricci.shape(), &[dim, dim]);
    }

    #[test]
    fn test_ricci_scalar_flat() {
        // For flat space, Ricci tensor is zero, so scalar is zero
        let dim = 3;
        let ricci: Tensor<i64> = Tensor::new(vec![dim, dim], 0);
        let metric_inv: Tensor<i64> = Tensor::kronecker_delta(dim, 2);

        let scalar = ricci_scalar(&ricci, &metric_inv);
        assert_eq!(scalar, 0);
    }
}
