// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod models;
pub mod prompt;
pub mod scanner;

use anyhow::{Context, Result};

use self::cli::Cli;
use self::config::resolve_config;
use self::filter::ExtensionFilter;
use self::formatter::{flatten, render_tree};
use self::models::{FileStructure, RuntimeConfig, Source};
use self::prompt::{assemble, read_sources};
use self::scanner::Scanner;

/// Resolves config, builds the prompt and prints it to stdout.
pub fn run(cli: Cli) -> Result<()> {
    // 1. Resolve Configuration
    let config = resolve_config(cli)?;

    // 2. Build Prompt
    let prompt = build_prompt(&config)?;

    // 3. Print to Stdout
    println!("{}", prompt);
    Ok(())
}

/// Collect, render, flatten, read, assemble.
pub fn build_prompt(config: &RuntimeConfig) -> Result<String> {
    // 1. Collect Structure (walk a directory or take the files as given)
    let (structure, base) = match &config.source {
        Source::Directory(dir) => {
            let scanner = Scanner::new(dir, ExtensionFilter::new(&config.extensions))?
                .respect_ignore(config.respect_ignore);
            let structure = scanner
                .collect()
                .with_context(|| format!("Failed to scan {}", dir.display()))?;
            (structure, Some(scanner.root().to_path_buf()))
        }
        Source::Files(files) => (FileStructure::from_files(files.iter().cloned()), None),
    };

    if structure.is_empty() {
        log::warn!("No files matched {:?}", config.extensions);
    }

    // 2. Render Tree
    let tree = render_tree(&structure);

    // 3. Flatten & Read Sources
    let paths = flatten(&structure);
    let sources = read_sources(&paths, base.as_deref())?;
    log::info!("Read {} of {} files", sources.len(), paths.len());

    // 4. Assemble Prompt
    Ok(assemble(&tree, &sources))
}
