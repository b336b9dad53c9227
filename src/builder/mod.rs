//! The part builder: owns descriptor state, drives compile order, owns
//! the serialized output buffer.
//!
//! The pipeline is deliberately linear. For every auxiliary file the
//! platform table is reloaded and the file compiled for its side
//! effects; the main file is compiled last and only its result object is
//! serialized into the part.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::model::{PartDescriptor, PartType};
use crate::toolkit::Toolkit;
use crate::writer::hex;

pub struct PartBuilder<T: Toolkit> {
    toolkit: T,
    main_file: PathBuf,
    files: Vec<PathBuf>,
    part_type: PartType,
    /// Platform table handles; storage belongs to the toolkit.
    constants: Option<T::Ref>,
    functions: Option<T::Ref>,
    output: Option<Vec<u8>>,
}

impl<T: Toolkit> PartBuilder<T> {
    /// Descriptor validity (a present, non-empty `main`) is enforced by
    /// `parser::load`, so construction cannot fail.
    pub fn new(toolkit: T, descriptor: &PartDescriptor) -> Self {
        Self {
            toolkit,
            main_file: descriptor.main.clone(),
            files: descriptor.files.clone(),
            part_type: descriptor.part_type,
            constants: None,
            functions: None,
            output: None,
        }
    }

    /// Run the whole pipeline and keep the serialized part bytes.
    ///
    /// The VM scope is closed on every exit path; a failed compile still
    /// releases the toolkit's VM state before the error propagates.
    pub fn build(&mut self, platform_file: &Path) -> Result<()> {
        self.output = None;
        self.toolkit.vm_start()?;
        let result = self.build_inner(platform_file);
        self.toolkit.vm_stop();
        self.output = Some(result?);
        Ok(())
    }

    fn build_inner(&mut self, platform_file: &Path) -> Result<Vec<u8>> {
        let files = self.files.clone();
        for file in &files {
            self.load_platform_file(platform_file)?;
            // compiled for side effects only (definitions land in the
            // toolkit's global environment); the result is dropped
            self.compile_file(file)?;
        }

        self.load_platform_file(platform_file)?;
        let main_file = self.main_file.clone();
        let main_form = self.compile_file(&main_file)?;

        let bytes = self.toolkit.serialize(&main_form)?;
        Ok(bytes)
    }

    /// Load predefined constants and global functions from a platform
    /// file in the toolkit's streamed object format.
    ///
    /// An unreadable file is a warning, not an error: the build carries
    /// on with whatever tables were loaded before (possibly none).
    pub fn load_platform_file(&mut self, path: &Path) -> Result<()> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                eprintln!("warning: cannot read platform file {}: {err}", path.display());
                return Ok(());
            }
        };
        println!("Reading platform file {}", path.display());

        let frame = self.toolkit.deserialize(&bytes)?;
        self.constants = self.toolkit.get_slot(&frame, "platformConstants");
        self.functions = self.toolkit.get_slot(&frame, "platformFunctions");
        Ok(())
    }

    /// Parse, compile and execute one source file, returning the result
    /// object of its top-level expression.
    pub fn compile_file(&mut self, path: &Path) -> Result<T::Ref> {
        println!("Compiling {}", path.display());
        let syntax = self.toolkit.parse_file(path)?;
        let constants = self.platform_constants();
        let func = self.toolkit.compile(&syntax, &constants)?;
        let result = self.toolkit.execute(&func)?;
        Ok(result)
    }

    /// Named slots of the loaded constant table, copied out so codegen
    /// can seed its fresh table with them.
    fn platform_constants(&self) -> Vec<(String, T::Ref)> {
        let Some(frame) = &self.constants else {
            return Vec::new();
        };
        self.toolkit
            .slot_names(frame)
            .into_iter()
            .filter_map(|name| self.toolkit.get_slot(frame, &name).map(|value| (name, value)))
            .collect()
    }

    /// Hex/ASCII dump of the output buffer to stdout. Does nothing
    /// before a successful build.
    pub fn dump(&self) {
        if let Some(data) = &self.output {
            print!("{}", hex::render(data));
        }
    }

    pub fn output(&self) -> Option<&[u8]> {
        self.output.as_deref()
    }

    /// Hand the part bytes to the caller, leaving the builder empty.
    pub fn take_output(&mut self) -> Option<Vec<u8>> {
        self.output.take()
    }

    pub fn part_type(&self) -> PartType {
        self.part_type
    }

    /// Constants table loaded from the last platform file, if any.
    pub fn constants(&self) -> Option<&T::Ref> {
        self.constants.as_ref()
    }

    /// Global-functions table loaded from the last platform file, if
    /// any. Kept alongside the constants even though only constants are
    /// injected at compile time.
    pub fn global_functions(&self) -> Option<&T::Ref> {
        self.functions.as_ref()
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }
}
