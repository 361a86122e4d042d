//! AI follow-up questions: one chat round trip with layered parsing
//! fallbacks and a static per-department list when the collaborator is
//! unavailable.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::feature::Department;
use crate::ports::chat::{ChatClient, ChatRequest};

const MODEL: &str = "gpt-4o-mini";

static NUMBERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\d+\.\s+"([^"]+)""#).expect("numbered question pattern"));

static QUOTED_QUESTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+\?)""#).expect("quoted question pattern"));

/// Asks the AI collaborator for follow-up questions about the assembled
/// prompt. Any network or parse failure degrades to the department's
/// static fallback list.
pub async fn follow_up(chat: &dyn ChatClient, prompt: &str, department: Department) -> Vec<String> {
    let request = ChatRequest {
        model: MODEL.to_string(),
        system: system_prompt(department),
        user: prompt.to_string(),
        temperature: 0.7,
        max_tokens: 500,
    };
    match chat.complete(&request).await {
        Ok(response) => match parse_questions(&response.content) {
            Some(questions) => questions,
            None => {
                eprintln!("Warning: could not parse follow-up questions; using the default list.");
                fallback(department)
            }
        },
        Err(e) => {
            eprintln!("Warning: could not generate follow-up questions ({e}); using the default list.");
            fallback(department)
        }
    }
}

fn system_prompt(department: Department) -> String {
    format!(
        "You are an expert software development assistant specializing in {} development. \
         Based on the task description provided, identify 5-7 critical pieces of information \
         that are missing but would be essential for an ai model to implement this task \
         perfectly. Note the AI model's skill level mentioned in the prompt and adjust your \
         questions accordingly - ask more fundamental questions for junior developers and \
         more advanced/architectural questions for senior/expert developers. Focus on \
         technical details, file locations, integration points, or specific requirements \
         that aren't clear from the initial description. Return ONLY an array of specific \
         questions in JSON format like: [\"Question 1?\", \"Question 2?\"]",
        department.as_str()
    )
}

/// Parses the assistant's reply: first the bracket-sliced JSON array, then
/// a numbered-list shape, then any quoted question. `None` means the reply
/// could not be parsed at all; an empty list is a valid reply meaning no
/// follow-up questions are needed.
fn parse_questions(content: &str) -> Option<Vec<String>> {
    if let (Some(start), Some(end)) = (content.find('['), content.rfind(']')) {
        if start < end {
            if let Ok(questions) = serde_json::from_str::<Vec<String>>(&content[start..=end]) {
                return Some(questions);
            }
        }
    }

    let numbered: Vec<String> =
        NUMBERED_RE.captures_iter(content).map(|caps| caps[1].to_string()).collect();
    if !numbered.is_empty() {
        return Some(numbered);
    }

    let quoted: Vec<String> =
        QUOTED_QUESTION_RE.captures_iter(content).map(|caps| caps[1].to_string()).collect();
    if quoted.is_empty() {
        None
    } else {
        Some(quoted)
    }
}

/// Static question lists used when the collaborator is unavailable.
fn fallback(department: Department) -> Vec<String> {
    let questions: &[&str] = match department {
        Department::Frontend => &[
            "What specific Vue components will this feature interact with?",
            "Are there any specific browser or device constraints beyond what was mentioned?",
            "What file structure should be followed for this implementation?",
            "Are there any specific state management requirements (Pinia, Vuex)?",
            "Are there any specific testing requirements for this feature?",
        ],
        Department::Backend => &[
            "What specific services or providers will this feature interact with?",
            "Are there any specific database transaction or locking requirements?",
            "What file structure should be followed for this implementation?",
            "Are there any specific testing requirements for this feature?",
            "Are there any specific performance benchmarks this feature needs to meet?",
        ],
        Department::Database => &[
            "What specific database engine and version will be used?",
            "Are there any specific naming conventions to follow for tables, columns, and constraints?",
            "What is the expected query load (reads vs writes)?",
            "Are there any specific backup or disaster recovery requirements?",
            "Should any database views, stored procedures, or functions be created?",
            "Are there any specific performance metrics this database design needs to meet?",
            "How should database migrations be versioned and deployed?",
        ],
    };
    questions.iter().map(|q| (*q).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::ScriptedChatClient;

    #[test]
    fn json_array_reply_is_parsed() {
        let content = r#"Here are the questions: ["What framework version?", "Where do tests live?"]"#;
        assert_eq!(
            parse_questions(content),
            Some(vec!["What framework version?".to_string(), "Where do tests live?".to_string()])
        );
    }

    #[test]
    fn numbered_list_reply_is_parsed() {
        let content = "1. \"First question?\"\n2. \"Second question?\"";
        assert_eq!(
            parse_questions(content),
            Some(vec!["First question?".to_string(), "Second question?".to_string()])
        );
    }

    #[test]
    fn quoted_questions_are_the_last_resort() {
        let content = "I suggest asking \"Which database engine?\" before starting.";
        assert_eq!(parse_questions(content), Some(vec!["Which database engine?".to_string()]));
    }

    #[test]
    fn unparsable_reply_yields_nothing() {
        assert!(parse_questions("No questions needed.").is_none());
    }

    #[test]
    fn empty_json_array_is_a_valid_reply() {
        assert_eq!(parse_questions("[]"), Some(Vec::new()));
    }

    #[tokio::test]
    async fn chat_reply_is_used_when_parsable() {
        let chat = ScriptedChatClient::replying(r#"["Only question?"]"#);
        let questions = follow_up(&chat, "# Task", Department::Backend).await;
        assert_eq!(questions, vec!["Only question?"]);
    }

    #[tokio::test]
    async fn empty_array_reply_means_no_questions() {
        let chat = ScriptedChatClient::replying("[]");
        let questions = follow_up(&chat, "# Task", Department::Frontend).await;
        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn chat_failure_degrades_to_fallback() {
        let chat = ScriptedChatClient::failing("connection refused");
        let questions = follow_up(&chat, "# Task", Department::Database).await;
        assert_eq!(questions.len(), 7);
        assert_eq!(questions[0], "What specific database engine and version will be used?");
    }

    #[tokio::test]
    async fn unparsable_chat_reply_degrades_to_fallback() {
        let chat = ScriptedChatClient::replying("The prompt looks complete to me.");
        let questions = follow_up(&chat, "# Task", Department::Frontend).await;
        assert_eq!(questions.len(), 5);
    }
}
