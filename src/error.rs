//! The error type shared by every container in this crate.
//!
//! Most operations are total. The few that can fail return [`Error`] instead of the
//! sentinel values and silent no-ops a classroom implementation would typically use.

use std::fmt;

/// Why an operation on one of the containers could not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The container holds no elements so there is nothing to return.
    EmptyContainer,
    /// A fixed-capacity container is full and cannot accept another element.
    CapacityExceeded {
        /// The capacity the container was created with.
        capacity: usize,
    },
    /// An argument did not name something the container understands, e.g. an unknown
    /// traversal order or a node handle that does not belong to the container.
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyContainer => write!(f, "container is empty"),
            Error::CapacityExceeded { capacity } => {
                write!(f, "capacity ({capacity}) exceeded")
            }
            Error::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

/// Shorthand for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
