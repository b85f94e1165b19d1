//! Value objects - immutable types that represent domain concepts

mod choice;
mod role;
mod snowflake;

pub(crate) use choice::string_enum;
pub use choice::UnknownChoice;
pub use role::{Caller, Role, RoleSet};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
