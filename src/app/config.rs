use crate::app::cli::Cli;
use crate::app::filter::normalize_extension;
use crate::app::models::{RuntimeConfig, Source};
use anyhow::{bail, Result};
use std::collections::HashSet;

/// Normalizes to `.ext`, deduplicating while keeping order.
fn resolve_extensions(raw: Vec<String>) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut extensions = Vec::with_capacity(raw.len());

    for ext in raw {
        let bare = normalize_extension(&ext);
        if bare.is_empty() {
            bail!("Invalid extension {:?}: must not be empty", ext);
        }
        if seen.insert(bare.to_string()) {
            extensions.push(format!(".{}", bare));
        }
    }

    Ok(extensions)
}

pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let source = match (cli.dir, cli.files) {
        (Some(dir), _) => Source::Directory(dir),
        (None, files) => Source::Files(files.unwrap_or_default()),
    };

    Ok(RuntimeConfig {
        source,
        extensions: resolve_extensions(cli.ext)?,
        respect_ignore: cli.respect_ignore,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("review_prompt").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn extensions_are_normalized_and_deduplicated() {
        let cli = parse(&["--dir", ".", "--ext", "py", ".rs", ".py", "rs"]);
        let config = resolve_config(cli).unwrap();
        assert_eq!(config.extensions, vec![".py".to_string(), ".rs".to_string()]);
    }

    #[test]
    fn blank_extension_is_rejected() {
        let err = resolve_config(parse(&["--dir", ".", "--ext", "."])).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn picks_source_mode() {
        let config = resolve_config(parse(&["--dir", "src"])).unwrap();
        assert_eq!(config.source, Source::Directory(PathBuf::from("src")));
        assert!(!config.respect_ignore);

        let cli = parse(&["--files", "a.py", "b.py", "--respect-ignore"]);
        let config = resolve_config(cli).unwrap();
        assert_eq!(
            config.source,
            Source::Files(vec![PathBuf::from("a.py"), PathBuf::from("b.py")])
        );
        assert!(config.respect_ignore);
    }
}
