//! Chat server integration layer: HTTP client, reply stream pump, and the
//! adapter that bridges async streams into the synchronous shell loop.

mod adapter;
mod client;
mod decode;
mod stream;

pub use adapter::HttpChatAdapter;
pub use client::ChatClient;

/// Returns the chat module name for smoke checks.
pub fn module_name() -> &'static str {
    "chat"
}
