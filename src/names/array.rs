//! Array dimensions.

use std::fmt;

use crate::Result;

/// One dimension of an array type, with optional lower and upper bounds.
///
/// A dimension without bounds is unsized. Bounds are never negative and, when both are
/// present, the lower bound does not exceed the upper bound.
///
/// # Text Form
///
/// | Bounds | Text |
/// |---|---|
/// | none | (empty) |
/// | lower only | `0...` |
/// | both | `0...9` |
/// | upper only | `...9` |
///
/// # Examples
///
/// ```rust
/// use dotnames::ArrayDimension;
///
/// let dimension = ArrayDimension::with_size(10)?;
/// assert_eq!(dimension.to_string(), "0...9");
/// assert!(ArrayDimension::new(Some(5), Some(1)).is_err());
/// # Ok::<(), dotnames::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArrayDimension {
    lower_bound: Option<i32>,
    upper_bound: Option<i32>,
}

impl ArrayDimension {
    /// A dimension without bounds.
    pub const UNSIZED: ArrayDimension = ArrayDimension {
        lower_bound: None,
        upper_bound: None,
    };

    /// Creates a dimension from optional bounds.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if a bound is negative or the lower bound
    /// exceeds the upper bound.
    pub fn new(lower_bound: Option<i32>, upper_bound: Option<i32>) -> Result<Self> {
        if let Some(lower) = lower_bound {
            if lower < 0 {
                return Err(invalid_argument!(
                    "lower_bound",
                    "Array bound {} is negative",
                    lower
                ));
            }
        }
        if let Some(upper) = upper_bound {
            if upper < 0 {
                return Err(invalid_argument!(
                    "upper_bound",
                    "Array bound {} is negative",
                    upper
                ));
            }
        }
        if let (Some(lower), Some(upper)) = (lower_bound, upper_bound) {
            if lower > upper {
                return Err(invalid_argument!(
                    "upper_bound",
                    "Upper bound {} is below lower bound {}",
                    upper,
                    lower
                ));
            }
        }

        Ok(ArrayDimension {
            lower_bound,
            upper_bound,
        })
    }

    /// Creates a zero based dimension holding `size` elements.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `size` is not positive.
    pub fn with_size(size: i32) -> Result<Self> {
        if size <= 0 {
            return Err(invalid_argument!(
                "size",
                "Array size must be positive, got {}",
                size
            ));
        }
        Self::new(Some(0), Some(size - 1))
    }

    /// The lower bound, if any.
    #[must_use]
    pub fn lower_bound(&self) -> Option<i32> {
        self.lower_bound
    }

    /// The upper bound, if any.
    #[must_use]
    pub fn upper_bound(&self) -> Option<i32> {
        self.upper_bound
    }

    /// Returns `true` if neither bound is present.
    #[must_use]
    pub fn is_unsized(&self) -> bool {
        self.lower_bound.is_none() && self.upper_bound.is_none()
    }

    /// Number of elements, if both bounds are present.
    #[must_use]
    pub fn size(&self) -> Option<i32> {
        match (self.lower_bound, self.upper_bound) {
            (Some(lower), Some(upper)) => Some(upper - lower + 1),
            _ => None,
        }
    }
}

impl fmt::Display for ArrayDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower_bound, self.upper_bound) {
            (None, None) => Ok(()),
            (Some(lower), None) => write!(f, "{}...", lower),
            (Some(lower), Some(upper)) => write!(f, "{}...{}", lower, upper),
            (None, Some(upper)) => write!(f, "...{}", upper),
        }
    }
}
