//! Live console adapter reading answers from stdin.

use std::io::{BufRead, Write};

use crate::ports::console::Console;

/// Live console that prompts on stdout and reads replies from stdin.
pub struct LiveConsole;

/// Prints a prompt and reads one trimmed line from stdin.
fn read_line(prompt: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    print!("{prompt} ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

impl Console for LiveConsole {
    fn ask(
        &self,
        question: &str,
        default: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let prompt = if default.is_empty() {
            format!("{question}:")
        } else {
            format!("{question} [{default}]:")
        };
        let reply = read_line(&prompt)?;
        if reply.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(reply)
        }
    }

    fn choose(
        &self,
        question: &str,
        options: &[&str],
        default: usize,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        println!("{question}");
        for (i, option) in options.iter().enumerate() {
            let marker = if i == default { "*" } else { " " };
            println!("  {marker} {}) {option}", i + 1);
        }
        let reply = read_line("Select:")?;
        let selected = reply
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|&n| n < options.len())
            .unwrap_or(default);
        Ok(options[selected].to_string())
    }
}
