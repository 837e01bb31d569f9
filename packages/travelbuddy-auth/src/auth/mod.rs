pub mod bearer;
pub mod claims;
pub mod jwt;
