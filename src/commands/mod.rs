//! Business logic for each subcommand.
//!
//! Command modules operate on Rust types and return a [`CmdResult`]; they
//! never print, never exit, and never assume a terminal. The binary layer
//! turns results into output.

use crate::model::Book;

pub mod add;
pub mod export;
pub mod find;
pub mod helpers;
pub mod import;
pub mod list;
pub mod migrate;
pub mod quotes;
pub mod remove;
pub mod show;
pub mod sort;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
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

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
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

/// What a command produced: records to show and status lines to print.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub books: Vec<Book>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
