pub mod rate_limit;
pub mod require_role;
