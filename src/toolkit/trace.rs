//! Call-recording toolkit stand-in.
//!
//! `TraceToolkit` implements [`Toolkit`] without any interpreter behind
//! it: every call appends an [`Event`] and hands back a deterministic
//! placeholder handle. The test suite uses it to check compile order,
//! platform-table reloads and VM-scope bracketing; embedders can use it
//! the same way to test their own descriptors without the real toolkit.

use std::path::{Path, PathBuf};

use super::{Result, Toolkit, ToolkitError};

/// One recorded toolkit call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    VmStart,
    VmStop,
    Parse(PathBuf),
    /// Constant names handed to codegen, in the order they were copied.
    Compile(Vec<String>),
    Execute(PathBuf),
    Serialize(PathBuf),
    Deserialize(usize),
}

/// Placeholder handle type. Carries just enough structure for the
/// builder to walk platform frames and for tests to follow a file
/// through parse / compile / execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceRef {
    PlatformFrame,
    ConstantFrame,
    FunctionFrame,
    Constant(String),
    Syntax(PathBuf),
    CodeBlock(PathBuf),
    ResultObj(PathBuf),
}

#[derive(Debug, Default)]
pub struct TraceToolkit {
    pub events: Vec<Event>,
    /// Constant names the platform frame pretends to define.
    pub platform_constants: Vec<String>,
    /// Bytes `serialize` hands back for any object.
    pub package_bytes: Vec<u8>,
    /// Fail `parse_file` for this path, to exercise error paths.
    pub fail_parse: Option<PathBuf>,
}

impl TraceToolkit {
    pub fn new() -> Self {
        Self {
            package_bytes: b"pkg".to_vec(),
            ..Self::default()
        }
    }

    pub fn with_constants(names: &[&str]) -> Self {
        Self {
            platform_constants: names.iter().map(|n| n.to_string()).collect(),
            ..Self::new()
        }
    }

    /// Paths of all recorded `Parse` events, in call order.
    pub fn parsed_files(&self) -> Vec<PathBuf> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Parse(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Toolkit for TraceToolkit {
    type Ref = TraceRef;

    fn vm_start(&mut self) -> Result<()> {
        self.events.push(Event::VmStart);
        Ok(())
    }

    fn vm_stop(&mut self) {
        self.events.push(Event::VmStop);
    }

    fn parse_file(&mut self, path: &Path) -> Result<TraceRef> {
        self.events.push(Event::Parse(path.to_path_buf()));
        if self.fail_parse.as_deref() == Some(path) {
            return Err(ToolkitError::parse(path, "injected failure"));
        }
        Ok(TraceRef::Syntax(path.to_path_buf()))
    }

    fn compile(
        &mut self,
        syntax: &TraceRef,
        constants: &[(String, TraceRef)],
    ) -> Result<TraceRef> {
        let names = constants.iter().map(|(n, _)| n.clone()).collect();
        self.events.push(Event::Compile(names));
        match syntax {
            TraceRef::Syntax(p) => Ok(TraceRef::CodeBlock(p.clone())),
            other => Err(ToolkitError::Codegen(format!("not a syntax tree: {other:?}"))),
        }
    }

    fn execute(&mut self, func: &TraceRef) -> Result<TraceRef> {
        match func {
            TraceRef::CodeBlock(p) => {
                self.events.push(Event::Execute(p.clone()));
                Ok(TraceRef::ResultObj(p.clone()))
            }
            other => Err(ToolkitError::Exec(format!("not a code block: {other:?}"))),
        }
    }

    fn serialize(&mut self, obj: &TraceRef) -> Result<Vec<u8>> {
        match obj {
            TraceRef::ResultObj(p) => {
                self.events.push(Event::Serialize(p.clone()));
                Ok(self.package_bytes.clone())
            }
            other => Err(ToolkitError::Serialize(format!("not a result: {other:?}"))),
        }
    }

    fn deserialize(&mut self, bytes: &[u8]) -> Result<TraceRef> {
        self.events.push(Event::Deserialize(bytes.len()));
        Ok(TraceRef::PlatformFrame)
    }

    fn get_slot(&self, frame: &TraceRef, name: &str) -> Option<TraceRef> {
        match (frame, name) {
            (TraceRef::PlatformFrame, "platformConstants") => Some(TraceRef::ConstantFrame),
            (TraceRef::PlatformFrame, "platformFunctions") => Some(TraceRef::FunctionFrame),
            (TraceRef::ConstantFrame, n) if self.platform_constants.iter().any(|c| c == n) => {
                Some(TraceRef::Constant(n.to_string()))
            }
            _ => None,
        }
    }

    fn slot_names(&self, frame: &TraceRef) -> Vec<String> {
        match frame {
            TraceRef::ConstantFrame => self.platform_constants.clone(),
            _ => Vec::new(),
        }
    }
}
