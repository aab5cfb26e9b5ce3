//! The four-stage fold protocol.

use std::fmt;
use std::sync::Arc;

use super::{Characteristic, CollectorBuilder};
use crate::immutable::ImmutableEnumSet;

/// Creates an empty accumulator.
pub type Supplier<A> = Arc<dyn Fn() -> A + Send + Sync>;
/// Folds one element into an accumulator.
pub type Accumulator<A, T> = Arc<dyn Fn(&mut A, T) + Send + Sync>;
/// Merges two accumulators; the left one holds the earlier elements.
pub type Combiner<A> = Arc<dyn Fn(A, A) -> A + Send + Sync>;
/// Freezes an accumulator into the result.
pub type Finisher<A, R> = Arc<dyn Fn(A) -> R + Send + Sync>;

// =============================================================================
// CollectorImpl Definition
// =============================================================================

/// A reusable fold of `T` elements through an accumulator `A` into a result `R`.
///
/// The combiner must be associative: folding two partitions of an input
/// and combining them yields the same result as folding the whole input.
///
/// # Examples
///
/// ```rust
/// use frozen::collector::{Characteristic, CollectorImpl};
///
/// let total = CollectorImpl::identity(
///     || 0_i64,
///     |sum: &mut i64, element: i64| *sum += element,
///     |left, right| left + right,
///     [Characteristic::Unordered],
/// );
/// assert_eq!(total.collect(1..=10), 55);
/// assert_eq!(total.collect_chunked(1..=10, 3), 55);
/// assert!(total.is_identity_finish());
/// assert!(!total.is_ordered());
/// ```
pub struct CollectorImpl<T, A, R> {
    supplier: Supplier<A>,
    accumulator: Accumulator<A, T>,
    combiner: Combiner<A>,
    finisher: Finisher<A, R>,
    characteristics: ImmutableEnumSet<Characteristic>,
}

impl<T, A, R> CollectorImpl<T, A, R> {
    /// Creates a collector from its four stages.
    pub fn new<S, F, C, G, I>(
        supplier: S,
        accumulator: F,
        combiner: C,
        finisher: G,
        characteristics: I,
    ) -> Self
    where
        S: Fn() -> A + Send + Sync + 'static,
        F: Fn(&mut A, T) + Send + Sync + 'static,
        C: Fn(A, A) -> A + Send + Sync + 'static,
        G: Fn(A) -> R + Send + Sync + 'static,
        I: IntoIterator<Item = Characteristic>,
    {
        Self::from_parts(
            Arc::new(supplier),
            Arc::new(accumulator),
            Arc::new(combiner),
            Arc::new(finisher),
            ImmutableEnumSet::of(characteristics),
        )
    }

    /// Returns a builder whose missing stages are reported by `build`.
    #[must_use]
    pub fn builder() -> CollectorBuilder<T, A, R> {
        CollectorBuilder::new()
    }

    pub(crate) const fn from_parts(
        supplier: Supplier<A>,
        accumulator: Accumulator<A, T>,
        combiner: Combiner<A>,
        finisher: Finisher<A, R>,
        characteristics: ImmutableEnumSet<Characteristic>,
    ) -> Self {
        Self {
            supplier,
            accumulator,
            combiner,
            finisher,
            characteristics,
        }
    }

    /// Creates a fresh, empty accumulator.
    #[inline]
    pub fn supply(&self) -> A {
        (self.supplier)()
    }

    /// Folds `element` into `accumulator`.
    #[inline]
    pub fn accumulate(&self, accumulator: &mut A, element: T) {
        (self.accumulator)(accumulator, element);
    }

    /// Merges two partial accumulators, `left` holding the earlier elements.
    #[inline]
    pub fn combine(&self, left: A, right: A) -> A {
        (self.combiner)(left, right)
    }

    /// Freezes an accumulator into the result.
    #[inline]
    pub fn finish(&self, accumulator: A) -> R {
        (self.finisher)(accumulator)
    }

    /// Returns the declared characteristics.
    #[must_use]
    pub const fn characteristics(&self) -> &ImmutableEnumSet<Characteristic> {
        &self.characteristics
    }

    /// Returns `true` unless the collector is [`Characteristic::Unordered`].
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        !self.characteristics.contains(Characteristic::Unordered)
    }

    /// Returns `true` if the finisher is the identity.
    #[must_use]
    pub fn is_identity_finish(&self) -> bool {
        self.characteristics.contains(Characteristic::IdentityFinish)
    }

    /// Returns `true` if one accumulator may be shared between threads.
    #[must_use]
    pub fn is_concurrent(&self) -> bool {
        self.characteristics.contains(Characteristic::Concurrent)
    }

    /// Folds every element of `elements` and finishes the result.
    pub fn collect<I>(&self, elements: I) -> R
    where
        I: IntoIterator<Item = T>,
    {
        let mut accumulator = self.supply();
        for element in elements {
            self.accumulate(&mut accumulator, element);
        }
        self.finish(accumulator)
    }

    /// Folds `elements` in chunks of `chunk_size` and combines the partial
    /// accumulators from left to right.
    ///
    /// A `chunk_size` of zero is treated as one.
    pub fn collect_chunked<I>(&self, elements: I, chunk_size: usize) -> R
    where
        I: IntoIterator<Item = T>,
    {
        let chunk_size = chunk_size.max(1);
        let mut combined: Option<A> = None;
        let mut partial = self.supply();
        let mut filled = 0;
        for element in elements {
            self.accumulate(&mut partial, element);
            filled += 1;
            if filled == chunk_size {
                let full = std::mem::replace(&mut partial, self.supply());
                combined = Some(self.absorb(combined, full));
                filled = 0;
            }
        }
        let accumulator = if filled == 0 {
            combined.unwrap_or(partial)
        } else {
            self.absorb(combined, partial)
        };
        self.finish(accumulator)
    }

    fn absorb(&self, combined: Option<A>, partial: A) -> A {
        match combined {
            Some(left) => {
                tracing::trace!("combining chunk accumulators");
                self.combine(left, partial)
            }
            None => partial,
        }
    }
}

impl<T, A: 'static> CollectorImpl<T, A, A> {
    /// Creates a collector whose accumulator is its result.
    ///
    /// [`Characteristic::IdentityFinish`] is added to `characteristics`.
    pub fn identity<S, F, C, I>(supplier: S, accumulator: F, combiner: C, characteristics: I) -> Self
    where
        S: Fn() -> A + Send + Sync + 'static,
        F: Fn(&mut A, T) + Send + Sync + 'static,
        C: Fn(A, A) -> A + Send + Sync + 'static,
        I: IntoIterator<Item = Characteristic>,
    {
        Self::new(
            supplier,
            accumulator,
            combiner,
            |accumulator| accumulator,
            characteristics
                .into_iter()
                .chain([Characteristic::IdentityFinish]),
        )
    }
}

#[cfg(feature = "rayon")]
impl<T: Send, A: Send, R> CollectorImpl<T, A, R> {
    /// Folds a parallel iterator on the rayon thread pool.
    ///
    /// Each worker folds its own accumulator; partial accumulators are
    /// combined in input order, so ordered collectors keep element order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen::collector::ImmutableCollectors;
    /// use rayon::prelude::*;
    ///
    /// let list = ImmutableCollectors::to_immutable_list().collect_parallel((0..1000).into_par_iter());
    /// assert_eq!(list.unwrap(), (0..1000).collect::<Vec<_>>());
    /// ```
    pub fn collect_parallel<I>(&self, elements: I) -> R
    where
        I: rayon::iter::IntoParallelIterator<Item = T>,
    {
        use rayon::iter::ParallelIterator;

        let accumulator = elements
            .into_par_iter()
            .fold(
                || self.supply(),
                |mut accumulator, element| {
                    self.accumulate(&mut accumulator, element);
                    accumulator
                },
            )
            .reduce(|| self.supply(), |left, right| self.combine(left, right));
        self.finish(accumulator)
    }
}

impl<T, A, R> Clone for CollectorImpl<T, A, R> {
    fn clone(&self) -> Self {
        Self {
            supplier: Arc::clone(&self.supplier),
            accumulator: Arc::clone(&self.accumulator),
            combiner: Arc::clone(&self.combiner),
            finisher: Arc::clone(&self.finisher),
            characteristics: self.characteristics.clone(),
        }
    }
}

impl<T, A, R> fmt::Debug for CollectorImpl<T, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CollectorImpl")
            .field("characteristics", &self.characteristics)
            .finish_non_exhaustive()
    }
}
