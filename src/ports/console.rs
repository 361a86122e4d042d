//! Interactive console port for the questionnaire flows.

/// Asks the developer questions and collects answers.
///
/// The live adapter reads stdin; tests use a scripted adapter with a queue
/// of canned answers.
pub trait Console: Send + Sync {
    /// Asks an open question. An empty reply falls back to `default`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    fn ask(
        &self,
        question: &str,
        default: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Offers a fixed set of choices and returns the selected one.
    ///
    /// An empty or unrecognized reply selects `options[default]`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    fn choose(
        &self,
        question: &str,
        options: &[&str],
        default: usize,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
