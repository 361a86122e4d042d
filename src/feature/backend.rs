//! Backend questionnaire: eight sections folded into a Markdown prompt.

use crate::ports::console::Console;

/// Walks the backend question script and assembles the task prompt.
///
/// # Errors
///
/// Returns an error if reading console input fails.
#[allow(clippy::too_many_lines)]
pub fn questionnaire(
    console: &dyn Console,
    name: &str,
    skill_level: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    println!();
    println!("BACKEND TASK DETAILS");
    println!();

    println!("1. BUSINESS OBJECTIVE & CONTEXT");
    let business_goal = console.ask(
        "What is the business goal of this backend feature?",
        "Improve data processing efficiency and system reliability",
    )?;
    let primary_users = console.ask(
        "Who are the primary users interacting with this functionality?",
        "Internal admin users and customer-facing applications",
    )?;
    let compatibility = console.ask(
        "Does this impact any existing workflows or require backward compatibility?",
        "Yes, must maintain compatibility with existing API consumers",
    )?;
    let blueprint = console.ask(
        "Is application blueprint available? (path to file)",
        "devteam/contexts/backend-summary.json",
    )?;
    let architecture = console.ask(
        "What application architecture should be followed?",
        "As per application blueprint",
    )?;

    println!();
    println!("2. API & SERVICES");
    let endpoints = console.ask(
        "Which API endpoints or services need to be created or modified?",
        "User management endpoints and authentication service",
    )?;
    let formats = console.ask(
        "What should be the expected request and response formats?",
        "JSON with standard API response envelope",
    )?;
    let data_flow = console.ask(
        "What is the expected data flow between services?",
        "RESTful API calls between microservices with event broadcasting",
    )?;

    println!();
    println!("3. DATABASE & STORAGE");
    let db_changes = console.ask(
        "Are there new database tables, columns, or indexes required?",
        "New user_preferences table and indexes on frequently queried columns",
    )?;
    let caching =
        console.ask("Should data be cached?", "Yes, cache frequently accessed data in Redis")?;
    let optimization = console.ask(
        "Are there any bulk operations or complex queries that need optimization?",
        "Optimize reporting queries and implement batch processing",
    )?;
    let migrations = console.ask(
        "How should database migrations and schema changes be handled?",
        "Use framework migrations with zero-downtime deployment strategy",
    )?;

    println!();
    println!("4. AUTHENTICATION, AUTHORIZATION & SECURITY");
    let auth_mechanism = console.ask(
        "What authentication mechanisms are required?",
        "JWT tokens with refresh mechanism",
    )?;
    let auth_rules = console.ask(
        "What authorization rules should be enforced?",
        "Role-based access control with granular permissions",
    )?;
    let sensitive_data = console.ask(
        "Are there any sensitive data handling or encryption requirements?",
        "Encrypt PII and implement proper data masking",
    )?;
    let rate_limit = console.ask(
        "Are there rate-limiting, throttling, or API abuse protections needed?",
        "Implement rate limiting on public endpoints",
    )?;

    println!();
    println!("5. PERFORMANCE & SCALABILITY");
    let traffic = console.ask(
        "What is the expected traffic/load this feature should handle?",
        "Up to 1000 requests per minute during peak hours",
    )?;
    let load_balancing = console.ask(
        "Should the API be rate-limited or load-balanced?",
        "Implement load balancing across multiple instances",
    )?;
    let async_processing = console.ask(
        "Are there asynchronous processing requirements?",
        "Use queues for email sending and report generation",
    )?;
    let scaling = console.ask(
        "Should this support horizontal scaling, containerization, or Kubernetes?",
        "Design for horizontal scaling with Docker containers",
    )?;

    println!();
    println!("6. ERROR HANDLING & LOGGING");
    let error_handling = console.ask(
        "How should errors and exceptions be handled?",
        "Standardized error responses with appropriate HTTP status codes",
    )?;
    let logging = console.ask(
        "Are there logging and monitoring requirements?",
        "Log to ELK stack with structured logging format",
    )?;
    let metrics = console.ask(
        "Should system metrics be tracked?",
        "Track response times, error rates, and database query performance",
    )?;

    println!();
    println!("7. DEPENDENCIES & DEPLOYMENT");
    let external = console.ask(
        "Are there any external APIs, SDKs, or third-party services involved?",
        "Integration with payment gateway and email service provider",
    )?;
    let cicd = console.ask(
        "What are the CI/CD pipeline requirements?",
        "GitHub Actions with automated testing and staged deployments",
    )?;
    let feature_flags = console.ask(
        "Should feature flags or blue-green deployments be used?",
        "Implement feature flags for gradual rollout",
    )?;

    println!();
    println!("8. TESTING REQUIREMENTS");
    let should_test = console.choose("Should tests be written for this feature?", &["yes", "no"], 0)?;
    let test_types = if should_test == "yes" {
        console.ask(
            "What types of tests should be included?",
            "Unit tests, feature tests, and integration tests",
        )?
    } else {
        String::new()
    };
    let stop_and_confirm =
        console.choose("Should implementation stop and confirm after each file?", &["yes", "no"], 1)?;

    let mut prompt = format!(
        "# Backend Task: {name}

## Developer Skill Level
- **Skill Level:** {skill_level}
- **Application Blueprint:** {blueprint}
- **Application Architecture:** {architecture}
- **Stop and Confirm After Each File:** {stop_and_confirm}

## 1. Business Objective & Context
- **Business Goal:** {business_goal}
- **Primary Users:** {primary_users}
- **Compatibility Requirements:** {compatibility}

## 2. API & Services
- **Endpoints/Services:** {endpoints}
- **Request/Response Formats:** {formats}
- **Service Data Flow:** {data_flow}

## 3. Database & Storage
- **Database Changes:** {db_changes}
- **Caching Strategy:** {caching}
- **Query Optimization:** {optimization}
- **Migration Handling:** {migrations}

## 4. Authentication, Authorization & Security
- **Authentication Mechanism:** {auth_mechanism}
- **Authorization Rules:** {auth_rules}
- **Sensitive Data Handling:** {sensitive_data}
- **Rate Limiting & Protection:** {rate_limit}

## 5. Performance & Scalability
- **Expected Traffic:** {traffic}
- **Load Balancing:** {load_balancing}
- **Asynchronous Processing:** {async_processing}
- **Scaling Strategy:** {scaling}

## 6. Error Handling & Logging
- **Error Handling Approach:** {error_handling}
- **Logging & Monitoring:** {logging}
- **System Metrics:** {metrics}

## 7. Dependencies & Deployment
- **External Dependencies:** {external}
- **CI/CD Requirements:** {cicd}
- **Feature Flags/Deployment:** {feature_flags}

## 8. Testing Requirements
- **Should Tests Be Written:** {should_test}
"
    );
    if should_test == "yes" {
        prompt.push_str(&format!("- **Test Types:** {test_types}\n"));
    }
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::ScriptedConsole;

    #[test]
    fn defaults_flow_produces_full_prompt() {
        let console = ScriptedConsole::new();
        let prompt = questionnaire(&console, "Billing API", "senior").unwrap();

        assert!(prompt.starts_with("# Backend Task: Billing API\n"));
        assert!(prompt.contains("- **Skill Level:** senior"));
        assert!(prompt.contains("- **Application Blueprint:** devteam/contexts/backend-summary.json"));
        assert!(prompt.contains("## 7. Dependencies & Deployment"));
        assert!(prompt.contains("- **Should Tests Be Written:** yes"));
        assert!(prompt.contains("- **Test Types:** Unit tests, feature tests, and integration tests"));
    }

    #[test]
    fn scripted_answers_land_in_their_sections() {
        let console = ScriptedConsole::with_answers(&["Reduce invoice processing time"]);
        let prompt = questionnaire(&console, "Invoices", "junior").unwrap();
        assert!(prompt.contains("- **Business Goal:** Reduce invoice processing time"));
    }
}
