use crate::model::User;

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of one operation.
///
/// `output` holds bytes destined verbatim for the output sink (the raw file
/// for list, a JSON object for a find hit). `messages` are human-readable
/// notes for outcomes that are not errors, such as a duplicate id.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_users: Vec<User>,
    pub output: Vec<u8>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_users(mut self, users: Vec<User>) -> Self {
        self.affected_users = users;
        self
    }

    pub fn with_output(mut self, output: Vec<u8>) -> Self {
        self.output = output;
        self
    }

    /// True when nothing at all would be written to the output sink.
    pub fn is_silent(&self) -> bool {
        self.output.is_empty() && self.messages.is_empty()
    }
}
