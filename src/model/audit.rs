use chrono::{DateTime, Utc};
use serde::Serialize;

/// Version and timestamps carried by every entity.
///
/// `version` starts at 0 and is the value clients send back for optimistic locking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Audit {
    pub version: u32,
    pub erzeugt: DateTime<Utc>,
    pub aktualisiert: DateTime<Utc>,
}

impl Audit {
    pub fn neu() -> Self {
        let jetzt = Utc::now();
        Self {
            version: 0,
            erzeugt: jetzt,
            aktualisiert: jetzt,
        }
    }

    /// Marks a committed change.
    pub fn touch(&mut self) {
        self.version += 1;
        self.aktualisiert = Utc::now();
    }
}

impl Default for Audit {
    fn default() -> Self {
        Self::neu()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_bumps_version_and_timestamp() {
        let mut audit = Audit::neu();
        let erzeugt = audit.erzeugt;
        audit.touch();
        audit.touch();
        assert_eq!(audit.version, 2);
        assert_eq!(audit.erzeugt, erzeugt);
        assert!(audit.aktualisiert >= erzeugt);
    }
}
