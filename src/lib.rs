//! Round-trip codec for OpenFOAM dictionary files, an insertion-ordered
//! dictionary tree for a whole case directory, and undoable edit commands
//! that write every change straight through to disk.
//!
//! ```no_run
//! use foamdict::{Case, CommandHandler, Value};
//! use foamdict::command::UpdateItem;
//!
//! # fn main() -> Result<(), foamdict::FoamError> {
//! let mut case = Case::open("cavity", &["0/U", "system/controlDict"])?;
//! let mut handler = CommandHandler::new();
//! handler.execute(&mut case, UpdateItem::value(&["system", "controlDict", "endTime"], Value::scalar("1")))?;
//! handler.undo_latest(&mut case)?;
//! # Ok(())
//! # }
//! ```

pub mod ast;
pub mod case;
pub mod command;
pub mod dict;
pub mod error;
pub mod export;
pub mod file;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod settings;
pub mod utils;
pub mod writer;

pub use ast::{DimensionSet, Header, List, Scalar, Value};
pub use case::{Case, Change, Location};
pub use command::{Command, CommandHandler};
pub use dict::{KeyPath, OrderedDict, Position, map_keys_onto};
pub use error::FoamError;
pub use file::FoamFile;
pub use settings::Settings;
pub use writer::Writer;
