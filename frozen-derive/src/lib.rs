//! Derive macro for frozen's `Enumeration` trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use frozen::immutable::{Enumeration, ImmutableEnumSet};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
//! enum Season {
//!     Spring,
//!     Summer,
//!     Autumn,
//!     Winter,
//! }
//!
//! assert_eq!(Season::COUNT, 4);
//! assert_eq!(Season::Autumn.ordinal(), 2);
//!
//! let warm = ImmutableEnumSet::range(Season::Spring, Season::Summer).unwrap();
//! assert!(warm.contains(Season::Summer));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod enumeration;

use proc_macro::TokenStream;

/// Derive macro implementing `frozen::immutable::Enumeration` for a
/// field-less enum.
///
/// # Requirements
///
/// - The type must be an enum whose variants are all unit variants
/// - The enum must also implement `Copy` and `Eq`
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::frozen::immutable::Enumeration for EnumName {
///     const VARIANTS: &'static [Self] = &[Self::First, Self::Second];
///
///     fn ordinal(self) -> usize {
///         match self {
///             Self::First => 0,
///             Self::Second => 1,
///         }
///     }
/// }
/// ```
///
/// Ordinals are declaration indices; explicit discriminants are ignored.
#[proc_macro_derive(Enumeration)]
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
    enumeration::derive_enumeration_impl(input)
}
