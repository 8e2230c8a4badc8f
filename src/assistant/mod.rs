pub mod client;
pub mod persona;
pub mod prompts;
pub mod transcript;

pub use client::{AssistantError, DetectiveAi};
pub use prompts::{case_context, quick_prompts, QuickPrompt};
pub use transcript::{Message, Role, Transcript};
