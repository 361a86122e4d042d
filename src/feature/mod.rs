//! Interactive prompt-generation flows, one questionnaire per department.

pub mod backend;
pub mod database;
pub mod frontend;
pub mod questions;

use crate::context::ServiceContext;

/// The department a task prompt is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    /// UI components and user-facing behavior.
    Frontend,
    /// APIs, services, and server-side logic.
    Backend,
    /// Schema design and data management.
    Database,
}

impl Department {
    /// Choice labels offered to the developer, in presentation order.
    pub const OPTIONS: &'static [&'static str] = &["frontend", "backend", "database"];

    /// Maps a choice label back to a department. Unrecognized input selects
    /// the first option, mirroring the console's default handling.
    #[must_use]
    pub fn from_choice(choice: &str) -> Self {
        match choice {
            "backend" => Self::Backend,
            "database" => Self::Database,
            _ => Self::Frontend,
        }
    }

    /// The department's choice label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
        }
    }
}

/// Runs the department's questionnaire and returns the assembled Markdown
/// prompt.
///
/// # Errors
///
/// Returns an error if reading console input fails.
pub fn questionnaire(
    ctx: &ServiceContext,
    department: Department,
    name: &str,
    skill_level: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    match department {
        Department::Frontend => frontend::questionnaire(ctx.console.as_ref(), name, skill_level),
        Department::Backend => backend::questionnaire(ctx.console.as_ref(), name, skill_level),
        Department::Database => {
            database::questionnaire(ctx.console.as_ref(), ctx.clock.as_ref(), name, skill_level)
        }
    }
}

/// Directory slug for a task name: lowercase, spaces replaced with dashes.
#[must_use]
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_labels_round_trip() {
        for option in Department::OPTIONS {
            assert_eq!(Department::from_choice(option).as_str(), *option);
        }
    }

    #[test]
    fn unrecognized_choice_selects_frontend() {
        assert_eq!(Department::from_choice("fullstack"), Department::Frontend);
    }

    #[test]
    fn slug_lowercases_and_dashes() {
        assert_eq!(slug("User Profile Page"), "user-profile-page");
        assert_eq!(slug("login"), "login");
    }
}
