//! Stage-by-stage construction of a [`CollectorImpl`].

use std::sync::Arc;

use super::collector_impl::{Accumulator, Combiner, Finisher, Supplier};
use super::{Characteristic, CollectorImpl};
use crate::error::CollectionError;
use crate::immutable::{EnumBitSet, ImmutableEnumSet};

/// Collects the stages of a [`CollectorImpl`] and checks that none is missing.
///
/// Characteristics default to none.
///
/// # Examples
///
/// ```rust
/// use frozen::CollectionError;
/// use frozen::collector::{Characteristic, CollectorImpl};
///
/// let count = CollectorImpl::<&str, usize, usize>::builder()
///     .supplier(|| 0)
///     .accumulator(|count, _| *count += 1)
///     .combiner(|left, right| left + right)
///     .finisher(|count| count)
///     .characteristic(Characteristic::Unordered)
///     .build()
///     .unwrap();
/// assert_eq!(count.collect(["a", "b"]), 2);
///
/// let error = CollectorImpl::<&str, usize, usize>::builder()
///     .supplier(|| 0)
///     .build()
///     .unwrap_err();
/// assert_eq!(error, CollectionError::NullArgument { argument: "accumulator" });
/// ```
pub struct CollectorBuilder<T, A, R> {
    supplier: Option<Supplier<A>>,
    accumulator: Option<Accumulator<A, T>>,
    combiner: Option<Combiner<A>>,
    finisher: Option<Finisher<A, R>>,
    characteristics: EnumBitSet<Characteristic>,
}

impl<T, A, R> CollectorBuilder<T, A, R> {
    pub(crate) fn new() -> Self {
        Self {
            supplier: None,
            accumulator: None,
            combiner: None,
            finisher: None,
            characteristics: EnumBitSet::new(),
        }
    }

    /// Sets the stage that creates empty accumulators.
    #[must_use]
    pub fn supplier<S>(mut self, supplier: S) -> Self
    where
        S: Fn() -> A + Send + Sync + 'static,
    {
        self.supplier = Some(Arc::new(supplier));
        self
    }

    /// Sets the stage that folds one element into an accumulator.
    #[must_use]
    pub fn accumulator<F>(mut self, accumulator: F) -> Self
    where
        F: Fn(&mut A, T) + Send + Sync + 'static,
    {
        self.accumulator = Some(Arc::new(accumulator));
        self
    }

    /// Sets the stage that merges two accumulators.
    #[must_use]
    pub fn combiner<C>(mut self, combiner: C) -> Self
    where
        C: Fn(A, A) -> A + Send + Sync + 'static,
    {
        self.combiner = Some(Arc::new(combiner));
        self
    }

    /// Sets the stage that freezes an accumulator.
    #[must_use]
    pub fn finisher<G>(mut self, finisher: G) -> Self
    where
        G: Fn(A) -> R + Send + Sync + 'static,
    {
        self.finisher = Some(Arc::new(finisher));
        self
    }

    /// Declares one characteristic.
    #[must_use]
    pub fn characteristic(mut self, characteristic: Characteristic) -> Self {
        self.characteristics.insert(characteristic);
        self
    }

    /// Declares several characteristics.
    #[must_use]
    pub fn characteristics<I>(mut self, characteristics: I) -> Self
    where
        I: IntoIterator<Item = Characteristic>,
    {
        self.characteristics.extend(characteristics);
        self
    }

    /// Builds the collector.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NullArgument`] naming the first missing
    /// stage, checked in the order supplier, accumulator, combiner,
    /// finisher.
    pub fn build(self) -> Result<CollectorImpl<T, A, R>, CollectionError> {
        let collector = CollectorImpl::from_parts(
            required(self.supplier, "supplier")?,
            required(self.accumulator, "accumulator")?,
            required(self.combiner, "combiner")?,
            required(self.finisher, "finisher")?,
            ImmutableEnumSet::from(self.characteristics),
        );
        Ok(collector)
    }
}

fn required<S>(stage: Option<S>, argument: &'static str) -> Result<S, CollectionError> {
    stage.ok_or_else(|| {
        let error = CollectionError::NullArgument { argument };
        tracing::debug!(%error, "rejected collector definition");
        error
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn complete() -> CollectorBuilder<i32, Vec<i32>, usize> {
        CollectorImpl::<i32, Vec<i32>, usize>::builder()
            .supplier(Vec::new)
            .accumulator(|accumulator: &mut Vec<i32>, element| accumulator.push(element))
            .combiner(|mut left: Vec<i32>, right| {
                left.extend(right);
                left
            })
            .finisher(|accumulator: Vec<i32>| accumulator.len())
    }

    #[rstest]
    fn test_complete_builder_builds() {
        let collector = complete()
            .characteristics([Characteristic::Unordered, Characteristic::Concurrent])
            .build()
            .unwrap();
        assert_eq!(collector.collect([1, 2, 3]), 3);
        assert!(!collector.is_ordered());
        assert!(collector.is_concurrent());
    }

    #[rstest]
    fn test_missing_stage_is_named() {
        let error = CollectorImpl::<i32, Vec<i32>, usize>::builder()
            .supplier(Vec::new)
            .accumulator(|accumulator: &mut Vec<i32>, element| accumulator.push(element))
            .finisher(|accumulator: Vec<i32>| accumulator.len())
            .build()
            .unwrap_err();
        assert_eq!(error, CollectionError::NullArgument { argument: "combiner" });
    }

    #[rstest]
    fn test_empty_builder_reports_supplier_first() {
        let error = CollectorImpl::<i32, i32, i32>::builder().build().unwrap_err();
        assert_eq!(error, CollectionError::NullArgument { argument: "supplier" });
    }
}
