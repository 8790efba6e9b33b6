//! Cyclotomic Fields Q(ζ_n)
//!
//! This module provides support for cyclotomic extensions Q(ζ_n) where ζ_n is a primitive nth root of unity.
//! ζ_n = e^(2πi/n)

use arith::Q;
use std::f64::consts::PI;

/// Represents an element in Q(ζ_n) as a polynomial in ζ_n
/// Element: a_0 + a_1*ζ + a_2*ζ^2 + ... + a_{φ(n)-1}*ζ^{φ(n)-1}
/// where φ(n) is Euler's totient function
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cyclotomic {
    /// Coefficients a_0, a_1, ..., a_{φ(n)-1}
    pub coeffs: Vec<Q>,
    /// Order n (ζ_n is primitive nth root of unity)
    pub n: usize,
}

impl Cyclotomic {
    /// Create a new cyclotomic number
    pub fn new(coeffs: Vec<Q>, n: usize) -> Self {
        assert!(n > 0, "Order must be positive");
        let phi_n = euler_phi(n);
        assert!(coeffs.len() <= phi_n, "Too many coefficients for Q(ζ_{})", n);

        // Pad with zeros if needed
        let mut padded = coeffs;
        padded.resize(phi_n, Q::zero());

        Cyclotomic { coeffs: padded, n }
    }

    /// Create from a rational number (constant term)
    pub fn from_rational(q: Q, n: usize) -> Self {
        let phi_n = euler_phi(n);
        let mut coeffs = vec![Q::zero(); phi_n];
        coeffs[0] = q;
        Cyclotomic { coeffs, n }
    }

    /// Create the primitive root ζ_n itself
    pub fn primitive_root(n: usize) -> Self {
        let phi_n = euler_phi(n);
        let mut coeffs = vec![Q::zero(); phi_n];
        if phi_n > 1 {
            coeffs[1] = Q::new(1, 1);
        }
        Cyclotomic { coeffs, n }
    }

    /// Degree of the extension [Q(ζ_n) : Q] = φ(n)
    pub fn degree(&self) -> usize {
        euler_phi(self.n)
    }

    /// Evaluate numerically (for testing)
    pub fn eval_numeric(&self) -> (f64, f64) {
        let theta = 2.0 * PI / (self.n as f64);
        let mut real = 0.0;
        let mut imag = 0.0;

        for (k, coeff) in self.coeffs.iter().enumerate() {
            let c_val = coeff.0 as f64 / coeff.1 as f64;
            let angle = theta * (k as f64);
            real += c_val * angle.cos();
            imag += c_val * angle.sin();
        }

        (real, imag)
    }

    /// Complex conjugate (ζ_n → ζ_n^{-1} = ζ_n^{n-1})
    pub fn conjugate(&self) -> Self {
        // For ζ_n, conjugate maps ζ^k → ζ^{-k} = ζ^{n-k}
        let mut new_coeffs = vec![Q::zero(); self.coeffs.len()];
        new_coeffs[0] = self.coeffs[0]; // Constant term unchanged

        for k in 1..self.coeffs.len() {
            // ζ^k → ζ^{n-k}
            let new_idx = (self.n - k) % self.n;
            if new_idx < self.coeffs.len() {
                new_coeffs[new_idx] = self.coeffs[k];
            }
        }

        Cyclotomic { coeffs: new_coeffs, n: self.n }
    }

    /// Norm (product of all conjugates)
    pub fn norm(&self) -> Q {
        // For cyclotomic fields, this is more complex
        // Simplified: just return product with conjugate for now
        let conj = self.conjugate();
        let prod = self.clone() * conj;

        // Should be rational, return constant term
        prod.coeffs[0]
    }

    /// Trace (sum of all conjugates)
    pub fn trace(&self) -> Q {
        // Simplified: for ζ_n, trace is φ(n) times the constant term
        let phi = euler_phi(self.n);
        Q(self.coeffs[0].0 * phi as i64, self.coeffs[0].1)
    }
}

impl std::ops::Add for Cyclotomic {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        assert_eq!(self.n, rhs.n, "Cannot add elements from different cyclotomic fields");

        let coeffs: Vec<Q> =
            self.coeffs.iter().zip(rhs.coeffs.iter()).map(|(a, b)| arith::add_q(*a, *b)).collect();

        Cyclotomic { coeffs, n: self.n }
    }
}

impl std::ops::Mul for Cyclotomic {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        assert_eq!(self.n, rhs.n, "Cannot multiply elements from different cyclotomic fields");

        let phi_n = euler_phi(self.n);
        let mut result = vec![Q::zero(); phi_n];

        // Multiply polynomials and reduce modulo Φ_n(x)
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                let coeff = arith::mul_q(*a, *b);
                let power = (i + j) % self.n;

                // Reduce using ζ^n = 1
                if power < phi_n {
                    result[power] = arith::add_q(result[power], coeff);
                } else {
                    // ζ^n = 1, so ζ^{n+k} = ζ^k
                    let reduced_power = power % self.n;
                    if reduced_power < phi_n {
                        result[reduced_power] = arith::add_q(result[reduced_power], coeff);
                    }
                }
            }
        }

        Cyclotomic { coeffs: result, n: self.n }
    }
}

/// Euler's totient function φ(n)
/// Returns the number of integers k in 1..n that are coprime to n
pub fn euler_phi(n: usize) -> usize {
    if n == 1 {
        return 1;
    }

    let mut result = n;
    let mut n_mut = n;
    let mut p = 2;

    while p * p <= n_mut {
        if n_mut.is_multiple_of(p) {
            while n_mut.is_multiple_of(p) {
                n_mut /= p;
            }
            result -= result / p;
        }
        p += 1;
    }

    if n_mut > 1 {
        result -= result / n_mut;
    }

    result
}

/// Check if n is a primitive nth root of unity
pub fn is_primitive_root(power: usize, n: usize) -> bool {
    if power == 0 {
        return false;
    }

    // ζ^k is primitive iff gcd(k, n) = 1
    gcd(power, n) == 1
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}
