pub mod header;
pub mod secret;

pub use header::{add_jwt_header, new_header_with_jwt, EngineAuth};
pub use secret::{EngineClaims, JwtSecret, IAT_DRIFT_SECONDS, SECRET_LENGTH};
