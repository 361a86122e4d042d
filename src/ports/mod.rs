//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (filesystem, chat-completion API, interactive console,
//! time). Implementations live in `src/adapters/`.

pub mod chat;
pub mod clock;
pub mod console;
pub mod filesystem;

pub use chat::{ChatClient, ChatFuture, ChatRequest, ChatResponse};
pub use clock::Clock;
pub use console::Console;
pub use filesystem::FileSystem;
