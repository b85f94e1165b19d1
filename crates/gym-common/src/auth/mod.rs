//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, TokenType};
pub use password::{hash_password, validate_password_length, MIN_PASSWORD_LEN};
