use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while validating candidate input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("job role must not be empty")]
    EmptyJobRole,

    #[error("tech stack must not be empty")]
    EmptyTechStack,

    #[error("unknown experience level: {0}")]
    UnknownExperienceLevel(String),
}

//
// ─── EXPERIENCE LEVEL ─────────────────────────────────────────────────────────
//

/// Self-reported seniority of the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    /// 0-1 years.
    Beginner,
    /// 1-3 years.
    Intermediate,
    /// 3+ years.
    Advanced,
}

impl ExperienceLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Beginner" => Ok(Self::Beginner),
            "Intermediate" => Ok(Self::Intermediate),
            "Advanced" => Ok(Self::Advanced),
            other => Err(ProfileError::UnknownExperienceLevel(other.to_string())),
        }
    }
}

//
// ─── CANDIDATE PROFILE ────────────────────────────────────────────────────────
//

/// Validated candidate input collected before a session starts.
///
/// Construction failure means the session is never created and no timers
/// exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateProfile {
    job_role: String,
    experience: ExperienceLevel,
    tech_stack: String,
}

impl CandidateProfile {
    /// Validate and normalize candidate input.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` when the job role or tech stack is blank.
    pub fn new(
        job_role: impl Into<String>,
        experience: ExperienceLevel,
        tech_stack: impl Into<String>,
    ) -> Result<Self, ProfileError> {
        let job_role = job_role.into().trim().to_string();
        if job_role.is_empty() {
            return Err(ProfileError::EmptyJobRole);
        }
        let tech_stack = tech_stack.into().trim().to_string();
        if tech_stack.is_empty() {
            return Err(ProfileError::EmptyTechStack);
        }

        Ok(Self {
            job_role,
            experience,
            tech_stack,
        })
    }

    #[must_use]
    pub fn job_role(&self) -> &str {
        &self.job_role
    }

    #[must_use]
    pub fn experience(&self) -> ExperienceLevel {
        self.experience
    }

    #[must_use]
    pub fn tech_stack(&self) -> &str {
        &self.tech_stack
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_trims_input() {
        let profile =
            CandidateProfile::new("  Backend Developer ", ExperienceLevel::Advanced, " Rust ")
                .unwrap();
        assert_eq!(profile.job_role(), "Backend Developer");
        assert_eq!(profile.tech_stack(), "Rust");
        assert_eq!(profile.experience(), ExperienceLevel::Advanced);
    }

    #[test]
    fn blank_job_role_is_rejected() {
        let err = CandidateProfile::new("   ", ExperienceLevel::Beginner, "Rust").unwrap_err();
        assert!(matches!(err, ProfileError::EmptyJobRole));
    }

    #[test]
    fn blank_tech_stack_is_rejected() {
        let err = CandidateProfile::new("Dev", ExperienceLevel::Beginner, "").unwrap_err();
        assert!(matches!(err, ProfileError::EmptyTechStack));
    }

    #[test]
    fn experience_level_round_trips_through_strings() {
        let level: ExperienceLevel = "Intermediate".parse().unwrap();
        assert_eq!(level, ExperienceLevel::Intermediate);
        assert_eq!(level.to_string(), "Intermediate");

        let err = "expert".parse::<ExperienceLevel>().unwrap_err();
        assert!(matches!(err, ProfileError::UnknownExperienceLevel(_)));
    }
}
