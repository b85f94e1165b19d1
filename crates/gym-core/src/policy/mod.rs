//! Access-control and lifecycle policies
//!
//! Everything here is pure: callers pass in the facts and get decisions back.

pub mod bmi;
pub mod guards;
mod kind;
pub mod lifecycle;
pub mod mutation;
pub mod visibility;

pub use bmi::{classify, BmiCategory, BmiReading, CalorieRange, ExerciseFocus, Recommendation};
pub use kind::EntityKind;
pub use lifecycle::{DeleteEffect, Lifecycle, LifecycleState};
pub use mutation::{authorize, may_perform, Action};
pub use visibility::{visible_rows, OwnerFilter, RowOwner, RowScope};
