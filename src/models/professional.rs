use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered professional. Created on registration, immutable thereafter;
/// the record store owns the canonical copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    pub id: i64,
    pub name: String,
    pub role: String,
    /// Weekly classes description. Meaningful only for the "professor" role.
    pub classes_info: Option<String>,
    /// Planning/preparation load ("PL"), free text. Professor-only.
    pub pl_info: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Professional {
    /// Role comparison is case-insensitive: "Professor", "PROFESSOR" and
    /// "professor" all get the professor-specific treatment.
    pub fn is_professor(&self) -> bool {
        self.role.trim().to_lowercase() == "professor"
    }
}

/// Registration payload, before an id and timestamp are assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProfessional {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub classes_info: Option<String>,
    #[serde(default)]
    pub pl_info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn professional_with_role(role: &str) -> Professional {
        Professional {
            id: 1,
            name: "Maria Silva".into(),
            role: role.into(),
            classes_info: None,
            pl_info: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn is_professor_case_insensitive() {
        assert!(professional_with_role("professor").is_professor());
        assert!(professional_with_role("Professor").is_professor());
        assert!(professional_with_role("PROFESSOR").is_professor());
        assert!(professional_with_role("  professor ").is_professor());
    }

    #[test]
    fn other_roles_are_not_professor() {
        assert!(!professional_with_role("Coordenador").is_professor());
        assert!(!professional_with_role("professora").is_professor());
        assert!(!professional_with_role("").is_professor());
    }
}
