// src/application/ports/mod.rs
pub mod mailer;
pub mod security;
pub mod session_revocation;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type TokenManagerPort = dyn security::TokenManager;
pub type ClockPort = dyn time::Clock;
pub type MailerPort = dyn mailer::Mailer;
