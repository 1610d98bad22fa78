use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, NonNegative};

/// Marker type enforcing that a value is greater than zero.
///
/// # Examples
///
/// ```
/// use twine_boundary_models::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Time, time::second};
///
/// let period = StrictlyPositive::new(Time::new::<second>(5.0)).unwrap();
/// assert_eq!(period.into_inner().get::<second>(), 5.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is greater than zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// A strictly positive value is also non-negative.
impl<T: PartialOrd + Zero> From<Constrained<T, StrictlyPositive>> for Constrained<T, NonNegative> {
    fn from(value: Constrained<T, StrictlyPositive>) -> Self {
        Constrained::new_unchecked(value.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Time, time::second};

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-12).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn widens_to_non_negative() {
        let period = StrictlyPositive::new(Time::new::<second>(3.0)).unwrap();
        let widened: Constrained<Time, NonNegative> = period.into();
        assert_eq!(widened.into_inner(), Time::new::<second>(3.0));
    }
}
