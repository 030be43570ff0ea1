use crate::application::ports::validation::EmailValidator;
use regex::Regex;

// Dot-atom local part over the RFC 5322 atext set (Unicode letters and digits
// allowed), then dot-separated domain labels ending in an alphabetic TLD.
const EMAIL_PATTERN: &str = concat!(
    r"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*",
    r"@(?:[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?\.)+\p{L}{2,}$",
);

/// Longest address allowed by RFC 5321.
pub const DEFAULT_MAX_EMAIL_LENGTH: usize = 254;

/// Longest local part allowed by RFC 5321.
const MAX_LOCAL_PART_LENGTH: usize = 64;

#[derive(Clone, Debug)]
pub struct RegexEmailValidator {
    pattern: Regex,
    max_length: usize,
}

impl RegexEmailValidator {
    pub fn new(max_length: usize) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(EMAIL_PATTERN)?,
            max_length,
        })
    }
}

impl EmailValidator for RegexEmailValidator {
    fn is_email(&self, candidate: &str) -> bool {
        let Some((local, _)) = candidate.rsplit_once('@') else {
            return false;
        };
        candidate.len() <= self.max_length
            && local.len() <= MAX_LOCAL_PART_LENGTH
            && self.pattern.is_match(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> RegexEmailValidator {
        RegexEmailValidator::new(DEFAULT_MAX_EMAIL_LENGTH).unwrap()
    }

    #[test]
    fn accepts_common_addresses() {
        let v = validator();
        assert!(v.is_email("a@b.com"));
        assert!(v.is_email("user.name+tag@domain.co.uk"));
    }

    #[test]
    fn accepts_the_full_atext_set() {
        let v = validator();
        for good in [
            "o'brien@example.com",
            "a!b@example.com",
            "x#y$z%w&v*u@example.com",
            "a/b=c?d^e_f`g{h|i}j~k@example.com",
            "first-last@sub-domain.example.org",
        ] {
            assert!(v.is_email(good), "{good}");
        }
    }

    #[test]
    fn accepts_unicode_addresses() {
        let v = validator();
        assert!(v.is_email("josé@example.com"));
        assert!(v.is_email("用户@例子.广告"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        let v = validator();
        for bad in ["invalid-email", "@example.com", "test@", "a@b", "a@@b.com", "a b@c.com"] {
            assert!(!v.is_email(bad), "{bad}");
        }
    }

    #[test]
    fn rejects_misplaced_dots() {
        let v = validator();
        for bad in [".a@b.com", "a.@b.com", "a..b@b.com", "a@.b.com", "a@b..com", "a@b.com."] {
            assert!(!v.is_email(bad), "{bad}");
        }
    }

    #[test]
    fn rejects_bad_domain_labels() {
        let v = validator();
        for bad in ["a@-b.com", "a@b-.com", "a@b.c", "a@b.c0m", "a@b_c.com"] {
            assert!(!v.is_email(bad), "{bad}");
        }
    }

    #[test]
    fn rejects_overlong_local_part() {
        let v = validator();
        let local = "a".repeat(MAX_LOCAL_PART_LENGTH);
        assert!(v.is_email(&format!("{local}@b.com")));
        assert!(!v.is_email(&format!("{local}a@b.com")));
    }

    #[test]
    fn rejects_overlong_addresses() {
        let v = RegexEmailValidator::new(10).unwrap();
        assert!(v.is_email("ab@cd.com"));
        assert!(!v.is_email("abcdef@gh.com"));
    }
}
