//! Closed enumerated types.
//!
//! [`Enumeration`] is implemented by field-less enums whose constants are
//! known at compile time. The declaration index of each constant (its
//! ordinal) is the dense index used by the enum-specialized containers.
//! Use `#[derive(Enumeration)]` (feature `derive`) rather than writing the
//! implementation by hand.

use crate::capability::NoElement;

/// A closed enumerated type with dense ordinals.
///
/// # Contract
///
/// - `VARIANTS[i].ordinal() == i` for every declared constant.
/// - `VARIANTS` lists every constant exactly once, in declaration order.
///
/// # Examples
///
/// ```rust
/// use frozen::immutable::Enumeration;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Suit {
///     Clubs,
///     Diamonds,
///     Hearts,
///     Spades,
/// }
///
/// impl Enumeration for Suit {
///     const VARIANTS: &'static [Self] = &[Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];
///
///     fn ordinal(self) -> usize {
///         self as usize
///     }
/// }
///
/// assert_eq!(Suit::COUNT, 4);
/// assert_eq!(Suit::from_ordinal(2), Some(Suit::Hearts));
/// assert_eq!(Suit::Spades.ordinal(), 3);
/// ```
pub trait Enumeration: Copy + Eq + 'static {
    /// Every constant, in declaration order.
    const VARIANTS: &'static [Self];

    /// Number of declared constants.
    const COUNT: usize = Self::VARIANTS.len();

    /// Returns the declaration index of this constant.
    fn ordinal(self) -> usize;

    /// Returns the constant declared at `ordinal`, if any.
    #[inline]
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VARIANTS.get(ordinal).copied()
    }

    /// Iterates every constant in declaration order.
    fn values() -> std::iter::Copied<std::slice::Iter<'static, Self>> {
        Self::VARIANTS.iter().copied()
    }
}

impl Enumeration for NoElement {
    const VARIANTS: &'static [Self] = &[];

    fn ordinal(self) -> usize {
        match self {}
    }
}
