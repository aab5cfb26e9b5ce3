//! Properties a collector declares about its fold.

crate::enumeration! {
    /// A property of a [`CollectorImpl`](super::CollectorImpl).
    ///
    /// A collector's characteristics form an
    /// [`ImmutableEnumSet`](crate::immutable::ImmutableEnumSet).
    pub enum Characteristic {
        /// The result does not depend on the order elements are folded in.
        Unordered,
        /// The finisher returns the accumulator unchanged.
        IdentityFinish,
        /// One accumulator may receive elements from several threads.
        Concurrent,
    }
}
