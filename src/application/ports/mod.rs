// src/application/ports/mod.rs
pub mod time;
pub mod validation;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type EmailValidatorPort = dyn validation::EmailValidator;
