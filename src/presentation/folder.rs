use crate::model::responses::Folder;

/// Renders a folder tree as indented lines, two spaces per level
///
/// Each line reads `<indent> + <name> (<id>)`, parents before children.
#[must_use]
pub fn render_folder_tree(folders: &[Folder]) -> Vec<String> {
    let mut lines = Vec::new();
    for folder in folders {
        render_folder(folder, 0, &mut lines);
    }
    lines
}

fn render_folder(folder: &Folder, depth: usize, lines: &mut Vec<String>) {
    let padding = "  ".repeat(depth);
    lines.push(format!("{padding} + {} ({})", folder.name, folder.id));
    for child in &folder.children {
        render_folder(child, depth + 1, lines);
    }
}
