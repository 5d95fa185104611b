pub mod feedback_prompt;
pub mod message_dialog;
