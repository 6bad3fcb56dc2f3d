// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module: message splitting and the commit type set.

mod message;
mod types;

pub use message::CommitMessage;
pub use types::CommitType;
