//! Frontend questionnaire: six sections folded into a Markdown prompt.

use crate::ports::console::Console;

/// Walks the frontend question script and assembles the task prompt.
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
    println!("FRONTEND TASK DETAILS");
    println!();

    println!("1. GENERAL CONTEXT & BUSINESS OBJECTIVE");
    let business_goal = console.ask(
        "What is the business goal of this frontend task?",
        "Improve user engagement and conversion rate",
    )?;
    let user_journey = console.ask(
        "How does this UI/UX fit into the overall user journey?",
        "Part of the main conversion funnel",
    )?;
    let pain_points = console.ask(
        "What key pain points should be addressed in the design?",
        "Simplify complex interactions and improve clarity",
    )?;
    let blueprint = console.ask(
        "Is frontend blueprint available? (path to file)",
        "devteam/contexts/frontend-summary.json",
    )?;

    println!();
    println!("2. UI/UX & DESIGN");
    let components = console.ask(
        "What are the specific UI components or pages that need to be created or modified?",
        "Main dashboard page and navigation components",
    )?;
    let components_folder =
        console.ask("Where should the components be stored?", "resources/js/components")?;
    let design_system = console.ask(
        "Are there existing design systems or component libraries to follow?",
        "Yes, follow our internal Vue component library",
    )?;
    let branding = console.ask(
        "What are the primary colors, typography, and branding guidelines?",
        "Use the company style guide with primary brand colors",
    )?;
    let assets = console.ask(
        "Are there any design assets (images, icons, illustrations) that need to be used?",
        "Use icons from our design system",
    )?;
    let design_files = console.ask(
        "Is there an existing Figma, Sketch, or Adobe XD file for reference?",
        "Yes, Figma design file is available",
    )?;
    let animations = console.ask(
        "Should animations or micro-interactions be included?",
        "Yes, subtle animations for state changes",
    )?;
    let accessibility = console.ask(
        "Should the design be accessible (WCAG compliance, ARIA roles, contrast)?",
        "Yes, WCAG AA compliance required",
    )?;

    println!();
    println!("3. USER INTERACTIONS & BEHAVIOR");
    let interactions = console.ask(
        "What are the expected user interactions?",
        "Form submissions, filtering, and sorting data",
    )?;
    let edge_cases = console.ask(
        "Are there edge cases that need to be handled for user interactions?",
        "Handle form validation errors and empty states",
    )?;
    let realtime =
        console.ask("Are there any real-time features?", "No real-time features required")?;
    let errors = console.ask(
        "What should happen in case of errors or slow connections?",
        "Show friendly error messages and loading states",
    )?;

    println!();
    println!("4. PERFORMANCE, COMPATIBILITY & RESPONSIVENESS");
    let devices = console.ask(
        "Which devices and screen sizes should this be optimized for?",
        "Desktop, tablet, and mobile devices",
    )?;
    let browsers = console.ask(
        "What are the browser compatibility requirements?",
        "Chrome, Safari, Firefox, Edge (latest versions)",
    )?;
    let performance = console.ask(
        "Are there performance requirements?",
        "Optimize for fast initial load and minimal re-renders",
    )?;
    let dark_mode = console.ask(
        "Should this support dark mode or theme switching?",
        "Yes, support both light and dark themes",
    )?;

    println!();
    println!("5. INTEGRATION & DATA HANDLING");
    let apis = console.ask(
        "Which backend APIs does the frontend need to interact with?",
        "User API and Content API",
    )?;
    let auth = console.ask(
        "Are there any authentication/authorization flows to consider?",
        "JWT authentication required",
    )?;
    let validation = console.ask(
        "How should form validations be handled?",
        "Client-side validation with server-side confirmation",
    )?;
    let storage = console.ask(
        "Should the frontend store/cache any data locally?",
        "Cache user preferences in LocalStorage",
    )?;

    println!();
    println!("6. TESTING REQUIREMENTS");
    let should_test = console.choose("Should tests be written for this feature?", &["yes", "no"], 0)?;
    let test_types = if should_test == "yes" {
        console.ask(
            "What types of tests should be included?",
            "Unit tests for components and integration tests for user flows",
        )?
    } else {
        String::new()
    };
    let stop_and_confirm =
        console.choose("Should implementation stop and confirm after each file?", &["yes", "no"], 1)?;

    let mut prompt = format!(
        "# Frontend Task: {name}

## Implementation Style
- **Implementation Skill Level:** {skill_level}
- **Frontend Blueprint:** {blueprint}
- **Components Location:** {components_folder}
- **Stop and Confirm After Each File:** {stop_and_confirm}
- **Judiciously use frontend components as necessary as found in frontend blueprint**

## 1. General Context & Business Objective
- **Business Goal:** {business_goal}
- **User Journey Context:** {user_journey}
- **Pain Points to Address:** {pain_points}

## 2. UI/UX & Design
- **Components/Pages:** {components}
- **Design System:** {design_system}
- **Branding Guidelines:** {branding}
- **Design Assets:** {assets}
- **Design Files:** {design_files}
- **Animations:** {animations}
- **Accessibility:** {accessibility}

## 3. User Interactions & Behavior
- **Expected Interactions:** {interactions}
- **Edge Cases:** {edge_cases}
- **Real-time Features:** {realtime}
- **Error Handling:** {errors}

## 4. Performance, Compatibility & Responsiveness
- **Device Optimization:** {devices}
- **Browser Compatibility:** {browsers}
- **Performance Requirements:** {performance}
- **Theme Support:** {dark_mode}

## 5. Integration & Data Handling
- **API Integration:** {apis}
- **Authentication:** {auth}
- **Validation Approach:** {validation}
- **Local Storage:** {storage}

## 6. Testing Requirements
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
        let prompt = questionnaire(&console, "Login Page", "mid-level").unwrap();

        assert!(prompt.starts_with("# Frontend Task: Login Page\n"));
        assert!(prompt.contains("- **Implementation Skill Level:** mid-level"));
        assert!(prompt.contains("- **Frontend Blueprint:** devteam/contexts/frontend-summary.json"));
        assert!(prompt.contains("- **Stop and Confirm After Each File:** no"));
        assert!(prompt.contains("## 5. Integration & Data Handling"));
        assert!(prompt.contains("- **Should Tests Be Written:** yes"));
        assert!(prompt.contains(
            "- **Test Types:** Unit tests for components and integration tests for user flows"
        ));
    }

    #[test]
    fn declining_tests_omits_test_types() {
        let answers: Vec<String> = std::iter::repeat(String::new())
            .take(24)
            .chain(["no".to_string()])
            .collect();
        let refs: Vec<&str> = answers.iter().map(String::as_str).collect();
        let console = ScriptedConsole::with_answers(&refs);
        let prompt = questionnaire(&console, "Widget", "senior").unwrap();

        assert!(prompt.contains("- **Should Tests Be Written:** no"));
        assert!(!prompt.contains("- **Test Types:**"));
    }
}
