use super::*;

/// Undo and redo stack sizes, reported to observers after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StackDepth {
    pub undo: usize,
    pub redo: usize,
}

type Observer = Box<dyn FnMut(StackDepth)>;

/// Runs commands against a case and keeps them for undo and redo.
///
/// A command that fails stays where it was: a failed `execute` records
/// nothing and keeps the redo stack, a failed undo or redo leaves the command
/// on the stack it was taken from.
#[derive(Default)]
pub struct CommandHandler {
    undo_cmds: Vec<Box<dyn Command>>,
    redo_cmds: Vec<Box<dyn Command>>,
    observers: Vec<Observer>,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for stack depth changes.
    pub fn on_stack_changed<F: FnMut(StackDepth) + 'static>(&mut self, observer: F) {
        self.observers.push(Box::new(observer));
    }

    pub fn depth(&self) -> StackDepth {
        StackDepth {
            undo: self.undo_cmds.len(),
            redo: self.redo_cmds.len(),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_cmds.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_cmds.is_empty()
    }

    fn notify(&mut self) {
        let depth = self.depth();
        for observer in self.observers.iter_mut() {
            observer(depth);
        }
    }

    /// Apply `cmd` and push it onto the undo stack. The redo stack is
    /// dropped once the command has succeeded.
    pub fn execute<C: Command + 'static>(&mut self, case: &mut Case, cmd: C) -> Result<Change, FoamError> {
        let mut cmd: Box<dyn Command> = Box::new(cmd);
        let change = cmd.redo(case).inspect_err(|e| {
            tracing::warn!(command = cmd.name(), error = %e, "command failed");
        })?;

        self.redo_cmds.clear();
        self.undo_cmds.push(cmd);
        self.notify();
        Ok(change)
    }

    /// Undo the latest command. `Ok(None)` when there is nothing to undo.
    pub fn undo_latest(&mut self, case: &mut Case) -> Result<Option<Change>, FoamError> {
        let Some(mut cmd) = self.undo_cmds.pop() else {
            return Ok(None);
        };
        match cmd.undo(case) {
            Ok(change) => {
                self.redo_cmds.push(cmd);
                self.notify();
                Ok(Some(change))
            }
            Err(e) => {
                tracing::warn!(command = cmd.name(), error = %e, "undo failed");
                self.undo_cmds.push(cmd);
                self.notify();
                Err(e)
            }
        }
    }

    /// Re-apply the latest undone command. `Ok(None)` when there is nothing to redo.
    pub fn redo_latest(&mut self, case: &mut Case) -> Result<Option<Change>, FoamError> {
        let Some(mut cmd) = self.redo_cmds.pop() else {
            return Ok(None);
        };
        match cmd.redo(case) {
            Ok(change) => {
                self.undo_cmds.push(cmd);
                self.notify();
                Ok(Some(change))
            }
            Err(e) => {
                tracing::warn!(command = cmd.name(), error = %e, "redo failed");
                self.redo_cmds.push(cmd);
                self.notify();
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for CommandHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandHandler")
            .field("undo", &self.undo_cmds.iter().map(|c| c.name()).collect::<Vec<_>>())
            .field("redo", &self.redo_cmds.iter().map(|c| c.name()).collect::<Vec<_>>())
            .field("observers", &self.observers.len())
            .finish()
    }
}
