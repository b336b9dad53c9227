pub mod builder;
pub mod cli;
pub mod model;
pub mod parser;
pub mod toolkit;
pub mod writer;

use anyhow::Context;
use clap::Parser;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    match args.command {
        cli::Command::Check { descriptor } => {
            let json = std::fs::read_to_string(&descriptor)
                .with_context(|| format!("Reading {}", descriptor.display()))?;
            let part = parser::load(&json).with_context(|| "Parsing part descriptor")?;

            println!("Part type: {}", part.part_type);
            println!("Compile order ({} steps):", part.compile_steps());
            for (i, file) in part.files.iter().enumerate() {
                println!("  {}. {}", i + 1, file.display());
            }
            println!("  {}. {} (main)", part.compile_steps(), part.main.display());
        }
        cli::Command::Dump { file } => {
            let data = std::fs::read(&file)
                .with_context(|| format!("Reading {}", file.display()))?;
            print!("{}", writer::hex::render(&data));
        }
    }

    Ok(())
}
