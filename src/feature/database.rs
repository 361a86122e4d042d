//! Database-design questionnaire: seven sections folded into a Markdown
//! prompt. The migration-date default comes from the clock.

use crate::ports::clock::Clock;
use crate::ports::console::Console;

/// Walks the database question script and assembles the task prompt.
///
/// # Errors
///
/// Returns an error if reading console input fails.
#[allow(clippy::too_many_lines)]
pub fn questionnaire(
    console: &dyn Console,
    clock: &dyn Clock,
    name: &str,
    skill_level: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    println!();
    println!("DATABASE DESIGN TASK DETAILS");
    println!();

    println!("1. BUSINESS OBJECTIVE & CONTEXT");
    let business_goal = console.ask(
        "What is the business goal of this database design?",
        "Improve data organization and query performance",
    )?;
    let primary_users = console.ask(
        "Who are the primary users or systems interacting with this database?",
        "Backend services and reporting systems",
    )?;
    let compatibility = console.ask(
        "Does this impact any existing database schemas or require backward compatibility?",
        "Yes, must maintain compatibility with existing data structures",
    )?;
    let blueprint = console
        .ask("Is database blueprint available? (path to file)", "devteam/contexts/db.json")?;

    println!();
    println!("2. SCHEMA DESIGN");
    let tables = console.ask(
        "What are the main tables/entities needed in this design?",
        "Let AI decide based on context",
    )?;
    let relationships = console.ask(
        "What are the key relationships between these entities?",
        "Let AI decide based on context",
    )?;
    let constraints = console.ask(
        "What constraints (unique, foreign keys, checks) are required?",
        "Let AI decide based on context",
    )?;
    let indexes = console.ask(
        "What indexes should be created for performance?",
        "Let AI decide based on context",
    )?;

    println!();
    println!("3. DATA TYPES & VALIDATION");
    let data_types = console.ask(
        "What specific data types are required for key fields?",
        "Let AI decide based on context",
    )?;
    let validation = console.ask(
        "What data validation rules should be enforced at the database level?",
        "Let AI decide based on context",
    )?;
    let default_values = console.ask(
        "Are there default values or auto-generated fields?",
        "Let AI decide based on context",
    )?;

    println!();
    println!("4. MIGRATION & DEPLOYMENT");
    let today = clock.now().format("%Y-%m-%d").to_string();
    let migration_date = console.ask(
        "When should the migration be scheduled for? (YYYY-MM-DD or leave empty for today)",
        &today,
    )?;
    let data_transition = console.ask(
        "Is there existing data that needs to be migrated or transformed?",
        "Yes, data from legacy tables needs to be migrated with transformation rules",
    )?;
    let rollback_plan = console.ask(
        "What is the rollback plan if the migration fails?",
        "Transaction-based migration with ability to revert to previous schema",
    )?;

    println!();
    println!("5. PERFORMANCE & SCALING");
    let data_volume = console.ask(
        "What is the expected data volume and growth rate?",
        "Initial 1M records with 10% monthly growth",
    )?;
    let query_patterns = console.ask(
        "What are the most common query patterns and access patterns?",
        "Let AI decide based on context",
    )?;
    let partitioning = console.ask(
        "Is table partitioning or sharding required?",
        "Consider partitioning large tables by date range",
    )?;
    let caching = console.ask(
        "What caching strategies should be implemented?",
        "Cache frequently accessed lookup data and query results",
    )?;

    println!();
    println!("6. SECURITY & COMPLIANCE");
    let sensitive_data = console.ask(
        "Is there sensitive data that requires special handling?",
        "PII should be encrypted at rest, payment data should be tokenized",
    )?;
    let access_control = console.ask(
        "What database-level access controls are needed?",
        "Role-based access with row-level security for multi-tenant data",
    )?;
    let audit_requirements = console.ask(
        "Are there auditing or logging requirements?",
        "Track all data modifications with user ID and timestamp",
    )?;
    let compliance = console.ask(
        "Are there specific compliance requirements (GDPR, HIPAA, etc.)?",
        "GDPR compliance with right to be forgotten capabilities",
    )?;

    println!();
    println!("7. TESTING & MAINTENANCE");
    let create_factories = console.choose("Should database factories be created?", &["yes", "no"], 0)?;
    let create_seeders = console.choose("Should database seeders be created?", &["yes", "no"], 0)?;
    let test_data = console.ask(
        "What test data requirements are there?",
        "Realistic test data for development and staging environments",
    )?;
    let maintenance = console.ask(
        "What ongoing maintenance procedures are needed?",
        "Regular index maintenance, statistics updates, and integrity checks",
    )?;

    Ok(format!(
        "# Database Design Task: {name}

## Database Administrator Skill Level
- **Skill Level:** {skill_level}
- **Database Blueprint:** {blueprint}

## 1. Business Objective & Context
- **Business Goal:** {business_goal}
- **Primary Users/Systems:** {primary_users}
- **Compatibility Requirements:** {compatibility}

## 2. Schema Design
- **Main Tables/Entities:** {tables}
- **Key Relationships:** {relationships}
- **Constraints Required:** {constraints}
- **Indexes Required:** {indexes}

## 3. Data Types & Validation
- **Specific Data Types:** {data_types}
- **Validation Rules:** {validation}
- **Default Values:** {default_values}

## 4. Migration & Deployment
- **Migration Date:** {migration_date}
- **Data Migration Strategy:** {data_transition}
- **Rollback Plan:** {rollback_plan}
- **Create Factories:** {create_factories}
- **Create Seeders:** {create_seeders}

## 5. Performance & Scaling
- **Expected Data Volume:** {data_volume}
- **Common Query Patterns:** {query_patterns}
- **Partitioning Strategy:** {partitioning}
- **Caching Strategy:** {caching}

## 6. Security & Compliance
- **Sensitive Data Handling:** {sensitive_data}
- **Access Controls:** {access_control}
- **Audit Requirements:** {audit_requirements}
- **Compliance Requirements:** {compliance}

## 7. Testing & Maintenance
- **Test Data Requirements:** {test_data}
- **Maintenance Procedures:** {maintenance}
"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{FixedClock, ScriptedConsole};

    #[test]
    fn migration_date_defaults_to_today() {
        let console = ScriptedConsole::new();
        let clock = FixedClock::at("2025-06-15T09:30:00Z");
        let prompt = questionnaire(&console, &clock, "Orders Schema", "expert").unwrap();

        assert!(prompt.starts_with("# Database Design Task: Orders Schema\n"));
        assert!(prompt.contains("- **Migration Date:** 2025-06-15"));
        assert!(prompt.contains("- **Create Factories:** yes"));
        assert!(prompt.contains("- **Create Seeders:** yes"));
    }

    #[test]
    fn explicit_migration_date_wins() {
        let answers: Vec<String> = std::iter::repeat(String::new())
            .take(11)
            .chain(["2026-01-01".to_string()])
            .collect();
        let refs: Vec<&str> = answers.iter().map(String::as_str).collect();
        let console = ScriptedConsole::with_answers(&refs);
        let clock = FixedClock::at("2025-06-15T09:30:00Z");
        let prompt = questionnaire(&console, &clock, "Orders", "junior").unwrap();
        assert!(prompt.contains("- **Migration Date:** 2026-01-01"));
    }
}
