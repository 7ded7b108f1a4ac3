use crate::app::error::ScanError;
use pathdiff::diff_paths;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

const INTRO: &str = "You are a helpful assistant with software development knowledge.
Please analyze the following file structure and the code snippets, then answer the questions below.";

const QUESTIONS: &str = "1. What is the purpose of the code? (1-2 sentences)
2. Is there any problem with the code? If so, what is it? (1-2 sentences)
3. How would you improve the code? (1-2 sentences)
4. Please score the code on a scale of 1-10 at the following aspects:
    - Readability
    - Maintainability
    - Performance
    - Security
    - Reliability
";

/// A file read for the prompt, labelled the way it is shown to the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub label: String,
    pub path: PathBuf,
    pub content: String,
}

/// Reads every path that still exists. With a `base`, labels are relative
/// to it; otherwise the file name is used, or the path as given when two
/// inputs share a file name.
pub fn read_sources(paths: &[&Path], base: Option<&Path>) -> Result<Vec<SourceFile>, ScanError> {
    let mut sources = Vec::with_capacity(paths.len());

    let mut name_counts: HashMap<&OsStr, usize> = HashMap::new();
    for name in paths.iter().filter_map(|p| p.file_name()) {
        *name_counts.entry(name).or_default() += 1;
    }

    for &path in paths {
        if !path.exists() {
            log::debug!("Skipping {}: no longer exists", path.display());
            continue;
        }

        let content = fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        sources.push(SourceFile {
            label: label_for(path, base, &name_counts),
            path: path.to_path_buf(),
            content,
        });
    }

    Ok(sources)
}

fn label_for(path: &Path, base: Option<&Path>, name_counts: &HashMap<&OsStr, usize>) -> String {
    let relative = match base {
        Some(base) => diff_paths(path, base),
        None => path
            .file_name()
            .filter(|name| name_counts.get(name).copied().unwrap_or(0) < 2)
            .map(PathBuf::from),
    };
    relative
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .replace('\\', "/")
}

/// Fence info string for a file, e.g. `python` for `.py`.
fn fence_language(path: &Path) -> &str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return "";
    };
    match ext {
        "py" | "pyi" => "python",
        "rs" => "rust",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" => "typescript",
        "rb" => "ruby",
        "sh" => "bash",
        "md" => "markdown",
        "yml" => "yaml",
        "txt" => "text",
        other => other,
    }
}

fn code_block(source: &SourceFile) -> String {
    let mut block = format!("{}:\n```{}\n", source.label, fence_language(&source.path));
    block.push_str(&source.content);
    if !source.content.ends_with('\n') {
        block.push('\n');
    }
    block.push_str("```");
    block
}

/// Interpolates the tree and sources into the review template. Empty files
/// stay in the tree but get no code block.
pub fn assemble(tree: &str, sources: &[SourceFile]) -> String {
    let code = sources
        .iter()
        .filter(|s| !s.content.is_empty())
        .map(code_block)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{INTRO}\n\n{tree}\n\n{code}\n\n{QUESTIONS}")
}
