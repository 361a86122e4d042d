//! `feature` command: refresh both summaries, walk the questionnaire, ask
//! the AI collaborator for follow-ups, and write the prompt file.

use std::path::Path;

use crate::commands::{backend_summary, frontend_summary};
use crate::context::ServiceContext;
use crate::feature::{self, questions, Department};

const SKILL_LEVELS: &[&str] = &["junior", "mid-level", "senior", "expert"];

/// Runs the full prompt-generation flow.
///
/// # Errors
///
/// Returns an error string if a summary regeneration, console input, or the
/// prompt write fails. A chat failure never fails the flow; it degrades to
/// the static question list.
pub fn run_with_context(
    ctx: &ServiceContext,
    root: &Path,
    name: Option<&str>,
) -> Result<(), String> {
    println!("Generating updated backend summary");
    backend_summary::run_with_context(ctx, root, None)?;

    println!("Generating updated frontend summary");
    frontend_summary::run_with_context(ctx, root, None)?;

    println!();
    println!("DEVTEAM PROMPT GENERATOR");
    println!();

    let choice = ctx
        .console
        .choose("Which department is this task for?", Department::OPTIONS, 0)
        .map_err(|e| format!("Failed to read department choice: {e}"))?;
    let department = Department::from_choice(&choice);

    let name = match name {
        Some(given) => given.to_string(),
        None => ctx
            .console
            .ask("What is the task title?", "")
            .map_err(|e| format!("Failed to read task title: {e}"))?,
    };

    let skill_level = ctx
        .console
        .choose("What is the skill level for implementing this task?", SKILL_LEVELS, 1)
        .map_err(|e| format!("Failed to read skill level: {e}"))?;

    let mut prompt = feature::questionnaire(ctx, department, &name, &skill_level)
        .map_err(|e| format!("Questionnaire failed: {e}"))?;

    println!();
    println!("AI FOLLOW-UP QUESTIONS");
    println!();
    println!("Based on your answers, follow-up questions are being generated to ensure a complete understanding of the task...");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    let follow_ups = runtime.block_on(questions::follow_up(ctx.chat.as_ref(), &prompt, department));

    if follow_ups.is_empty() {
        println!("No additional questions needed. The initial information is comprehensive.");
    } else {
        println!();
        println!("ADDITIONAL DETAILS NEEDED");
        println!();

        let mut details = Vec::with_capacity(follow_ups.len());
        for (index, question) in follow_ups.iter().enumerate() {
            let answer = ctx
                .console
                .ask(&format!("{}. {question}", index + 1), "")
                .map_err(|e| format!("Failed to read follow-up answer: {e}"))?;
            details.push((question.clone(), answer));
        }

        prompt.push_str("\n\n## Additional Details\n");
        for (question, answer) in details {
            prompt.push_str(&format!("- **{question}:** {answer}\n"));
        }
    }

    let path = root.join("devteam/features").join(feature::slug(&name)).join("prompt.md");
    ctx.fs
        .write(&path, &prompt)
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

    println!();
    println!("Prompt saved successfully!");
    println!("File location: {}", path.display());
    Ok(())
}
