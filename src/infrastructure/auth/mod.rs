//! Token infrastructure

mod jwt;

pub use jwt::{Claims, JwtConfig, TokenIssuer, TokenService};
