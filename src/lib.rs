// lib.rs - Library root for the rte rich text core

pub mod catalog;
pub mod cli;
pub mod codec;
pub mod color;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod position;
pub mod session;
pub mod store;
pub mod surface;

pub use document::{StyledDocument, TagRange};
pub use error::{Result, RteError};
pub use session::EditorSession;
