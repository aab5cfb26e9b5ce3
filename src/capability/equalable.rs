//! Value-equality predicates.

/// Value-based equality predicates derived from `PartialEq`.
///
/// `is_equal_to` compares two values of the same type. `is_same_as`
/// accepts any right-hand side the type knows how to compare with, such
/// as `String` against `str`. Neither looks at addresses.
///
/// # Examples
///
/// ```rust
/// use frozen::capability::Equalable;
///
/// let name = String::from("frozen");
/// assert!(name.is_equal_to(&String::from("frozen")));
/// assert!(name.is_same_as("frozen"));
/// assert!(name.is_not_same_as("thawed"));
/// ```
pub trait Equalable {
    /// Returns `true` if `self` and `other` are equal by value.
    fn is_equal_to(&self, other: &Self) -> bool
    where
        Self: PartialEq,
    {
        self == other
    }

    /// Negation of [`Equalable::is_equal_to`].
    fn is_not_equal_to(&self, other: &Self) -> bool
    where
        Self: PartialEq,
    {
        !self.is_equal_to(other)
    }

    /// Returns `true` if `self` equals `other` by value, across types.
    fn is_same_as<Rhs>(&self, other: &Rhs) -> bool
    where
        Self: PartialEq<Rhs>,
        Rhs: ?Sized,
    {
        self == other
    }

    /// Negation of [`Equalable::is_same_as`].
    fn is_not_same_as<Rhs>(&self, other: &Rhs) -> bool
    where
        Self: PartialEq<Rhs>,
        Rhs: ?Sized,
    {
        !self.is_same_as(other)
    }
}

impl<T: ?Sized> Equalable for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    struct Celsius(f64);

    #[rstest]
    #[case(1, 1, true)]
    #[case(1, 2, false)]
    fn test_is_equal_to(#[case] left: i32, #[case] right: i32, #[case] expected: bool) {
        assert_eq!(left.is_equal_to(&right), expected);
        assert_eq!(left.is_not_equal_to(&right), !expected);
    }

    #[rstest]
    fn test_value_semantics_not_identity() {
        let first = Celsius(21.5);
        let second = Celsius(21.5);
        assert!(first.is_equal_to(&second));
    }

    #[rstest]
    fn test_is_same_as_across_types() {
        let owned = String::from("ice");
        assert!(owned.is_same_as("ice"));
        assert!(owned.is_not_same_as("water"));
    }

    #[rstest]
    fn test_unsized_receiver() {
        let slice: &[i32] = &[1, 2];
        assert!(slice.is_equal_to(&[1, 2][..]));
    }
}
