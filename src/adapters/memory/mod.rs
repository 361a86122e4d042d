//! In-memory adapters for deterministic, disk-free tests.

pub mod chat;
pub mod clock;
pub mod console;
pub mod filesystem;

pub use chat::ScriptedChatClient;
pub use clock::FixedClock;
pub use console::ScriptedConsole;
pub use filesystem::MemoryFileSystem;
