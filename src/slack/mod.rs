mod payload;
mod webhook;

pub use payload::{Attachment, Field, Message};
pub use webhook::post_webhook;
