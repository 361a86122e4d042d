//! Service context bundling all port trait objects.

use crate::ports::chat::ChatClient;
use crate::ports::clock::Clock;
use crate::ports::console::Console;
use crate::ports::filesystem::FileSystem;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors wire
/// up different adapter implementations (live, scripted).
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// Chat client for the AI collaborator.
    pub chat: Box<dyn ChatClient>,
    /// Interactive console for the questionnaire flows.
    pub console: Box<dyn Console>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for every port.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::{LiveChatClient, LiveClock, LiveConsole, LiveFileSystem};

        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            chat: Box::new(LiveChatClient::new()),
            console: Box::new(LiveConsole),
        }
    }

    /// Creates a scripted context from explicit port doubles.
    ///
    /// Used by tests to run full command flows against an in-memory tree,
    /// a canned chat reply, and a queue of console answers.
    #[must_use]
    pub fn scripted(
        fs: Box<dyn FileSystem>,
        chat: Box<dyn ChatClient>,
        console: Box<dyn Console>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self { clock, fs, chat, console }
    }
}
