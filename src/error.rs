use thiserror::Error;

/// Errors returned when configuring the data structures in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A [`HashTable`][crate::table::HashTable] needs at least one bucket to hash into.
    #[error("a hash table needs at least one bucket")]
    ZeroBuckets,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
