//! Foldable type class - reducing a container to a summary value.
//!
//! Every immutable container in this crate is [`Foldable`]: its elements
//! can be consumed one at a time into an accumulator. Ordered containers
//! fold in their iteration order; hash-backed ones fold in an unspecified
//! order, so only order-insensitive functions give stable results there.
//!
//! # Laws
//!
//! ## Consistency with `to_vec`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_vec().fold_left(init, f)
//! ```
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative and commutative
//! ```
//!
//! # Examples
//!
//! ```rust
//! use frozen::typeclass::Foldable;
//! use frozen::immutable::{ImmutableList, ImmutableSet};
//!
//! fn total<F: Foldable<Element = i32>>(container: F) -> i32 {
//!     container.fold_left(0, |accumulator, element| accumulator + element)
//! }
//!
//! assert_eq!(total(ImmutableList::of([1, 2, 3, 4, 5])), 15);
//! assert_eq!(total(ImmutableSet::of([4, 4, 6])), 10);
//! ```

/// A type class for containers that can be folded to a summary value.
///
/// # Required Items
///
/// - `Element`: the type handed to the folding function
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// - `is_empty`, `length`: Size queries (implementors usually override these)
/// - `to_vec`: Collect the elements into a `Vec`
/// - `find`, `exists`, `for_all`: Predicate queries
pub trait Foldable {
    /// The element type the container holds.
    type Element;

    /// Folds the structure from left to right with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen::immutable::ImmutableList;
    /// use frozen::typeclass::Foldable;
    ///
    /// let words = ImmutableList::of(["a", "b", "c"]);
    /// let joined = words.fold_left(String::new(), |accumulator, word| accumulator + word);
    /// assert_eq!(joined, "abc");
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Element) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen::immutable::ImmutableList;
    /// use frozen::typeclass::Foldable;
    ///
    /// let words = ImmutableList::of(["a", "b", "c"]);
    /// let joined = words.fold_right(String::new(), |word, accumulator| accumulator + word);
    /// assert_eq!(joined, "cba");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Element, B) -> B;

    /// Returns `true` if the structure holds no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`, in fold order.
    fn to_vec(self) -> Vec<Self::Element>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element, in fold order, satisfying the predicate.
    fn find<P>(self, mut predicate: P) -> Option<Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Returns `true` if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// Vacuously `true` for an empty structure.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}
