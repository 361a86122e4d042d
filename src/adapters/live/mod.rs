//! Live adapters backed by real disk, network, and terminal I/O.

pub mod chat;
pub mod clock;
pub mod console;
pub mod filesystem;

pub use chat::LiveChatClient;
pub use clock::LiveClock;
pub use console::LiveConsole;
pub use filesystem::LiveFileSystem;
