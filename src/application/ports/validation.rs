// src/application/ports/validation.rs

/// Email grammar check injected into validation so callers can swap or stub it.
pub trait EmailValidator: Send + Sync {
    fn is_email(&self, candidate: &str) -> bool;
}

impl<F> EmailValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_email(&self, candidate: &str) -> bool {
        self(candidate)
    }
}
