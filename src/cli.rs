use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a part descriptor and print its compile plan
    Check {
        /// Input .json part descriptor
        descriptor: PathBuf,
    },
    /// Hex-dump a binary file (package part, platform file, ...)
    Dump {
        /// File to dump
        file: PathBuf,
    },
}
