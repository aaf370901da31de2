//! Field validation.
//!
//! Entities collect every broken rule into [`Violations`] instead of stopping at the
//! first one, so a client gets the complete list in a single 400 response.

use serde::Serialize;
use std::fmt;

/// One broken rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub feld: String,
    pub meldung: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation unless `ok` holds.
    pub fn pruefe(&mut self, ok: bool, feld: &str, meldung: impl Into<String>) -> &mut Self {
        if !ok {
            self.0.push(Violation {
                feld: feld.to_string(),
                meldung: meldung.into(),
            });
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn felder(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.feld.as_str()).collect()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Violations> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meldungen: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.feld, v.meldung))
            .collect();
        f.write_str(&meldungen.join("; "))
    }
}

impl std::error::Error for Violations {}

pub fn ist_nachname(s: &str) -> bool {
    let laenge = s.chars().count();
    (2..=32).contains(&laenge) && s.chars().next().is_some_and(char::is_uppercase)
}

/// `local@domain.tld`, no whitespace, at most 128 characters.
pub fn ist_email(s: &str) -> bool {
    if s.chars().count() > 128 || s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((lokal, domain)) = s.split_once('@') else {
        return false;
    };
    if lokal.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => {
            !name.is_empty()
                && !name.starts_with('.')
                && tld.len() >= 2
                && tld.chars().all(char::is_alphabetic)
        }
        None => false,
    }
}

/// German postal code: exactly five digits.
pub fn ist_plz(s: &str) -> bool {
    s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit())
}

pub fn hat_laenge(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.trim().chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_all_violations() {
        let mut v = Violations::new();
        v.pruefe(false, "nachname", "zu kurz")
            .pruefe(true, "vorname", "egal")
            .pruefe(false, "email", "ungueltig");
        assert_eq!(v.felder(), vec!["nachname", "email"]);
        assert_eq!(v.to_string(), "nachname: zu kurz; email: ungueltig");
        assert!(v.into_result().is_err());
        assert!(Violations::new().into_result().is_ok());
    }

    #[test]
    fn nachname_rules() {
        assert!(ist_nachname("Meier"));
        assert!(ist_nachname("Öz"));
        assert!(!ist_nachname("meier"));
        assert!(!ist_nachname("M"));
        assert!(!ist_nachname(&format!("A{}", "b".repeat(32))));
    }

    #[test]
    fn email_rules() {
        assert!(ist_email("alice@example.com"));
        assert!(ist_email("a.b+c@mail.example.de"));
        assert!(!ist_email("alice@example"));
        assert!(!ist_email("@example.com"));
        assert!(!ist_email("alice@@example.com"));
        assert!(!ist_email("alice @example.com"));
        assert!(!ist_email("alice@.com"));
    }

    #[test]
    fn plz_rules() {
        assert!(ist_plz("76133"));
        assert!(!ist_plz("7613"));
        assert!(!ist_plz("7613a"));
    }
}
