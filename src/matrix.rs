//! Dense matrix algebra.
//!
//! `Matrix` is a row-major, heap-backed container of `f64` values. It is an
//! immutable value object: every transformation (`map`, arithmetic, `transpose`,
//! `mul`, ...) allocates and returns a new matrix, and no two matrices ever share
//! backing storage. The training engine swaps whole weight matrices between
//! samples instead of mutating them in place.
//!
//! # Panics vs `Result`
//!
//! - Public reads/writes (`get`, `set`) and shape-sensitive operations (`op`,
//!   `add`, `sub`, `mul`, `mul_elementwise`) are checked and return [`Result`].
//! - Crate-internal hot-path reads use [`Matrix::at`], whose bounds are validated
//!   by callers; it only carries a `debug_assert!`.

use crate::{Error, Result};

/// A dense 2D matrix with row-major storage.
///
/// Invariant: `values.len() == rows * cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Build a matrix by evaluating `f(i, j)` at every cell.
    ///
    /// This is the sole generator-function constructor; random initialization
    /// and `identity` both go through it.
    pub fn build(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                values.push(f(i, j));
            }
        }
        Self { rows, cols, values }
    }

    /// An all-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::build(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// A `1 x n` row vector. Vectors are plain matrices here, not a subtype.
    pub fn row_vector(values: &[f64]) -> Self {
        Self {
            rows: 1,
            cols: values.len(),
            values: values.to_vec(),
        }
    }

    /// Build from a flat row-major buffer of length `rows * cols`.
    pub fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        if values.len() != rows * cols {
            return Err(Error::Shape(format!(
                "{} values do not fill a {rows}x{cols} matrix",
                values.len()
            )));
        }
        Ok(Self { rows, cols, values })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat row-major view of the values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    fn check_index(&self, i: usize, j: usize) -> Result<()> {
        if i >= self.rows || j >= self.cols {
            return Err(Error::Index(format!(
                "({i}, {j}) in a {}x{} matrix",
                self.rows, self.cols
            )));
        }
        Ok(())
    }

    /// Read the element at `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Result<f64> {
        self.check_index(i, j)?;
        Ok(self.values[i * self.cols + j])
    }

    /// Write the element at `(i, j)`.
    ///
    /// Exists for construction-time code and tests; transformations never mutate
    /// an existing matrix.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, val: f64) -> Result<()> {
        self.check_index(i, j)?;
        self.values[i * self.cols + j] = val;
        Ok(())
    }

    /// Unchecked-in-release read for hot paths. Bounds are validated by callers.
    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.rows && j < self.cols);
        self.values[i * self.cols + j]
    }

    /// Apply `f(value, i, j)` to every cell, producing a new matrix of the same
    /// shape.
    pub fn map(&self, mut f: impl FnMut(f64, usize, usize) -> f64) -> Self {
        Self::build(self.rows, self.cols, |i, j| f(self.at(i, j), i, j))
    }

    #[inline]
    fn is_same_size(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    fn shape_err(&self, other: &Self, what: &str) -> Error {
        Error::Shape(format!(
            "cannot {what} {}x{} and {}x{}",
            self.rows, self.cols, other.rows, other.cols
        ))
    }

    /// Element-wise combine with `other` via `f(a, b)`.
    pub fn op(&self, other: &Self, mut f: impl FnMut(f64, f64) -> f64) -> Result<Self> {
        if !self.is_same_size(other) {
            return Err(self.shape_err(other, "combine"));
        }
        Ok(self.map(|x, i, j| f(x, other.at(i, j))))
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if !self.is_same_size(other) {
            return Err(self.shape_err(other, "add"));
        }
        Ok(self.map(|x, i, j| x + other.at(i, j)))
    }

    /// Element-wise difference.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if !self.is_same_size(other) {
            return Err(self.shape_err(other, "subtract"));
        }
        Ok(self.map(|x, i, j| x - other.at(i, j)))
    }

    /// Add `k` to every cell.
    pub fn add_scalar(&self, k: f64) -> Self {
        self.map(|x, _, _| x + k)
    }

    /// Subtract `k` from every cell.
    pub fn sub_scalar(&self, k: f64) -> Self {
        self.map(|x, _, _| x - k)
    }

    /// Multiply every cell by `k`.
    pub fn mul_scalar(&self, k: f64) -> Self {
        self.map(|x, _, _| x * k)
    }

    /// Standard matrix product.
    ///
    /// Shape contract: `self.cols == other.rows`; the result is
    /// `(self.rows, other.cols)` with `out[i][j] = sum_k self[i][k] * other[k][j]`.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(self.shape_err(other, "multiply"));
        }

        let n = self.cols;
        Ok(Self::build(self.rows, other.cols, |i, j| {
            let mut sum = 0.0;
            for k in 0..n {
                sum += self.at(i, k) * other.at(k, j);
            }
            sum
        }))
    }

    /// Hadamard (element-wise) product.
    pub fn mul_elementwise(&self, other: &Self) -> Result<Self> {
        if !self.is_same_size(other) {
            return Err(self.shape_err(other, "multiply element-wise"));
        }
        Ok(self.map(|x, i, j| x * other.at(i, j)))
    }

    /// The transposed matrix, shape `(cols, rows)`.
    pub fn transpose(&self) -> Self {
        Self::build(self.cols, self.rows, |i, j| self.at(j, i))
    }

    /// A matrix of the same shape with every cell set to `val`.
    pub fn fill(&self, val: f64) -> Self {
        self.map(|_, _, _| val)
    }
}
