use crate::app::models::{FileStructure, Node};
use std::path::Path;

const INDENT: &str = "| ";
const MARKER: &str = "|- ";

/// Renders the structure as an indented tree, one line per entry, in
/// insertion order. Only the last path component is shown.
pub fn render_tree(structure: &FileStructure) -> String {
    let mut output = String::new();
    render_level(structure, 0, &mut output);
    output
}

fn render_level(structure: &FileStructure, depth: usize, output: &mut String) {
    for (path, node) in structure.iter() {
        let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
        output.push_str(&INDENT.repeat(depth));
        output.push_str(MARKER);
        output.push_str(&name);
        output.push('\n');

        if let Node::Directory(children) = node {
            render_level(children, depth + 1, output);
        }
    }
}

/// Leaf paths in depth-first, pre-order sibling order.
pub fn flatten(structure: &FileStructure) -> Vec<&Path> {
    let mut files = Vec::new();
    flatten_into(structure, &mut files);
    files
}

fn flatten_into<'a>(structure: &'a FileStructure, files: &mut Vec<&'a Path>) {
    for (path, node) in structure.iter() {
        match node {
            Node::File => files.push(path),
            Node::Directory(children) => flatten_into(children, files),
        }
    }
}
