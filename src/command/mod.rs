// Author: Dustin Pilgrim
// License: MIT

use crate::case::Case;
use crate::FoamError;

pub use crate::case::Change;

mod handler;
mod items;
mod files;

pub use files::{CreateFile, DeleteFile};
pub use handler::{CommandHandler, StackDepth};
pub use items::{ClearDict, CreateItem, DeleteItem, StandardiseField, Update, UpdateItem};

/// A reversible edit of a [`Case`].
///
/// `redo` applies the edit and records whatever `undo` needs to reverse it.
/// A command is applied again with `redo` after an `undo`, so both must work
/// from key paths rather than from state that an edit may have moved.
pub trait Command {
    fn name(&self) -> &'static str;

    fn redo(&mut self, case: &mut Case) -> Result<Change, FoamError>;

    fn undo(&mut self, case: &mut Case) -> Result<Change, FoamError>;
}

fn not_applied(name: &str) -> FoamError {
    FoamError::InvalidLocation {
        path: Vec::new(),
        message: format!("{} has not been applied", name),
    }
}
