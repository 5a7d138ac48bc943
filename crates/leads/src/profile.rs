//! Lead profile: who is taking the assessment.

use serde::{Deserialize, Serialize};

use maturity_core::{DomainError, DomainResult};

/// Contact details captured at the lead-capture step.
///
/// Fields are edited in place until submission; the wizard accepts the
/// profile only once it validates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadProfile {
    pub name: String,
    pub company: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl LeadProfile {
    /// Check required fields and email shape.
    ///
    /// The email check is deliberately permissive: something before an `@`
    /// and a domain with an interior dot. Anything stricter belongs in a
    /// verification flow, not a marketing form.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if self.company.trim().is_empty() {
            return Err(DomainError::validation("company cannot be empty"));
        }

        let email = self.email.trim();
        let shape_ok = email.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        });
        if !shape_ok {
            return Err(DomainError::validation("invalid email format"));
        }

        Ok(())
    }

    /// Trimmed copy with a lowercased email and empty optionals dropped.
    /// Applied after a successful [`validate`](Self::validate).
    pub fn normalized(&self) -> Self {
        fn opt(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        Self {
            name: self.name.trim().to_string(),
            company: self.company.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: opt(&self.phone),
            role: opt(&self.role),
        }
    }
}
