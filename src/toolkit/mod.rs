//! Boundary to the external interpreter/compiler toolkit.
//!
//! The toolkit owns everything algorithmically interesting: source
//! parsing, bytecode generation, execution and the streamed binary
//! object format. This crate never looks inside a toolkit object; it
//! holds opaque `Ref` handles and calls through the narrow interface
//! below. The toolkit also owns the storage behind every handle.

pub mod trace;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolkitError>;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("toolkit start-up failed: {0}")]
    Init(String),

    #[error("parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    #[error("code generation error: {0}")]
    Codegen(String),

    #[error("execution error: {0}")]
    Exec(String),

    #[error("object serialization error: {0}")]
    Serialize(String),

    #[error("object deserialization error: {0}")]
    Deserialize(String),
}

impl ToolkitError {
    pub fn parse(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ToolkitError::Parse {
            file: file.into(),
            message: message.into(),
        }
    }
}

/// The five toolkit entry points the part builder drives, plus the two
/// slot accessors needed to walk platform frames.
///
/// `Ref` is an opaque handle into the toolkit's object system. Handles
/// stay valid for the lifetime of the toolkit value, across VM scopes.
pub trait Toolkit {
    type Ref: Clone;

    /// Open a virtual-machine scope. Every `build` runs inside one.
    fn vm_start(&mut self) -> Result<()>;

    /// Close the scope opened by [`Toolkit::vm_start`]. Must be safe to
    /// call after a failed operation; the builder calls it on every exit
    /// path.
    fn vm_stop(&mut self);

    /// Parse one source file into a syntax-tree handle.
    fn parse_file(&mut self, path: &Path) -> Result<Self::Ref>;

    /// Generate code for a parsed file. `constants` seeds the fresh
    /// constant table with named slots copied out of the platform table;
    /// any codegen-local set-up/tear-down happens inside this call.
    fn compile(
        &mut self,
        syntax: &Self::Ref,
        constants: &[(String, Self::Ref)],
    ) -> Result<Self::Ref>;

    /// Run a compiled code block and return its result object.
    fn execute(&mut self, func: &Self::Ref) -> Result<Self::Ref>;

    /// Write one object graph in the toolkit's streamed binary format.
    fn serialize(&mut self, obj: &Self::Ref) -> Result<Vec<u8>>;

    /// Read one object graph from the toolkit's streamed binary format.
    fn deserialize(&mut self, bytes: &[u8]) -> Result<Self::Ref>;

    /// Fetch a named slot out of a frame, if present.
    fn get_slot(&self, frame: &Self::Ref, name: &str) -> Option<Self::Ref>;

    /// Names of all slots of a frame, in the frame's own order.
    fn slot_names(&self, frame: &Self::Ref) -> Vec<String>;
}
