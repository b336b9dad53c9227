use std::path::PathBuf;

use serde::Deserialize;

/// Part descriptor exactly as it comes out of the JSON loader.
///
/// Everything is kept optional here so the validation step in `parser`
/// can report precise errors instead of serde's generic ones. The `type`
/// slot stays a raw JSON value: only the string `"auto"` means anything,
/// every other value (or none) falls back to a form part.
#[derive(Debug, Deserialize)]
pub struct RawDescriptor {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<String>>,
    #[serde(default, rename = "type")]
    pub part_type: Option<serde_json::Value>,
}

/// What kind of part the package ends up declaring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartType {
    #[default]
    Form,
    Auto,
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartType::Form => write!(f, "form"),
            PartType::Auto => write!(f, "auto"),
        }
    }
}

/// Validated descriptor handed to the builder.
///
/// `files` keeps the listed order; those are compiled first, the `main`
/// file always last.
#[derive(Debug, Clone)]
pub struct PartDescriptor {
    pub main: PathBuf,
    pub files: Vec<PathBuf>,
    pub part_type: PartType,
}

impl PartDescriptor {
    /// Number of compile steps a build of this part will run.
    pub fn compile_steps(&self) -> usize {
        self.files.len() + 1
    }
}
