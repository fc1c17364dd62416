use serde::Serialize;

// Incoming-webhook payload shapes. Slack ignores unknown fields and
// treats everything as optional, but the bot always sends a fallback
// so clients without attachment rendering still show something.

#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub title: String,
    pub value: String,
    pub short: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    pub fallback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl Attachment {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            color: None,
            title: None,
            title_link: None,
            text: None,
            fields: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Message {
    pub fn with_attachments(attachments: Vec<Attachment>) -> Self {
        Self {
            channel: None,
            text: None,
            attachments,
        }
    }
}
