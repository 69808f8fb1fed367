//! Vector-valued state for ODE integration.
//!
//! A [`Point`] is a fixed-dimension vector of `f64` components. By the
//! framework's convention, component 0 holds the independent variable
//! (usually time) and the remaining components hold the dependent state.
//!
//! Arithmetic is elementwise and dimension-checked: adding, subtracting, or
//! dotting two points of different dimension is a caller bug and panics
//! immediately rather than truncating or zero-padding. Binary operators
//! always allocate a new point; operands are never mutated.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

/// Fixed-dimension vector of `f64` values representing ODE state.
///
/// The dimension is set at construction and never changes. Cloning a point
/// deep-copies its storage; a clone and its original never alias.
///
/// # Example
///
/// ```
/// use odestep::point;
///
/// let a = point![0.0, 1.0, 2.0];
/// let b = point![0.0, 3.0, 4.0];
///
/// assert_eq!((&a + &b).dimension(), 3);
/// assert_eq!(a.dot(&b), 11.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    data: Vec<f64>,
}

impl Point {
    /// Create a point from an owned vector of components.
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Create a point by copying a slice of components.
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }

    /// Create a point of the given dimension with every component zero.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            data: vec![0.0; dimension],
        }
    }

    /// Number of components.
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Value of the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.dimension()`.
    pub fn get(&self, index: usize) -> f64 {
        self.check_index(index);
        self.data[index]
    }

    /// Overwrite the component at `index` in place.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.dimension()`.
    pub fn set(&mut self, index: usize, value: f64) {
        self.check_index(index);
        self.data[index] = value;
    }

    /// Dot product with another point of the same dimension.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    pub fn dot(&self, other: &Point) -> f64 {
        self.check_dimension(other);
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Elementwise scaling by a scalar, returning a new point.
    pub fn times(&self, scalar: f64) -> Point {
        Point {
            data: self.data.iter().map(|v| v * scalar).collect(),
        }
    }

    /// Components as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Whether every component is finite (neither NaN nor infinite).
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    fn check_index(&self, index: usize) {
        if index >= self.data.len() {
            panic!(
                "point index out of range: index {} but dimension is {}",
                index,
                self.data.len()
            );
        }
    }

    fn check_dimension(&self, other: &Point) {
        if self.data.len() != other.data.len() {
            panic!(
                "point dimensions must be equal: left {} right {}",
                self.data.len(),
                other.data.len()
            );
        }
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        self.check_index(index);
        &self.data[index]
    }
}

impl IndexMut<usize> for Point {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        self.check_index(index);
        &mut self.data[index]
    }
}

impl Add for &Point {
    type Output = Point;

    /// Elementwise addition.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn add(self, other: &Point) -> Point {
        self.check_dimension(other);
        Point {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl Sub for &Point {
    type Output = Point;

    /// Elementwise subtraction.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn sub(self, other: &Point) -> Point {
        self.check_dimension(other);
        Point {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a - b)
                .collect(),
        }
    }
}

impl Mul<f64> for &Point {
    type Output = Point;

    fn mul(self, scalar: f64) -> Point {
        self.times(scalar)
    }
}

impl Mul<&Point> for f64 {
    type Output = Point;

    fn mul(self, point: &Point) -> Point {
        point.times(self)
    }
}

impl Div<f64> for &Point {
    type Output = Point;

    /// Elementwise division by a scalar (multiplication by its reciprocal).
    /// Division by zero is not trapped; IEEE-754 infinities and NaNs
    /// propagate into the components.
    fn div(self, scalar: f64) -> Point {
        self.times(1.0 / scalar)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

/// Create a [`Point`] from a literal list of components.
///
/// ```
/// use odestep::point;
///
/// let p = point![0.0, 1.5, -2.0];
/// assert_eq!(p.dimension(), 3);
/// assert_eq!(p[1], 1.5);
/// ```
#[macro_export]
macro_rules! point {
    ($($value:expr),* $(,)?) => {
        $crate::Point::new(vec![$($value),*])
    };
}
