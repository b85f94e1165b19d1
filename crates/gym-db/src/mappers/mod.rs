//! Entity <-> model mappers
//!
//! Rows whose text columns hold values outside a closed vocabulary fail to
//! convert instead of being coerced.

mod activity;
mod actor;
mod assignment;
mod plans;

use gym_core::error::DomainError;

/// Convert a batch of rows, failing on the first bad one
pub fn try_collect<M, E>(models: Vec<M>) -> Result<Vec<E>, DomainError>
where
    E: TryFrom<M, Error = DomainError>,
{
    models.into_iter().map(E::try_from).collect()
}
