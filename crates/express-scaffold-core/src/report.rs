//! Success report: the generated structure as a tree

use crate::compose::ProjectPlan;
use crate::manifest::MANIFEST_FILE;

const BRANCH: &str = "├── ";
const LAST: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

fn push_entries(lines: &mut Vec<String>, prefix: &str, entries: &[String]) {
    for (i, entry) in entries.iter().enumerate() {
        let connector = if i + 1 == entries.len() { LAST } else { BRANCH };
        lines.push(format!("{}{}{}", prefix, connector, entry));
    }
}

/// Tree lines for the project root, its `src/` skeleton and top-level files
pub fn structure_lines(project_name: &str, plan: &ProjectPlan) -> Vec<String> {
    let mut src_entries: Vec<String> = plan
        .directories
        .iter()
        .filter_map(|d| d.strip_prefix("src/"))
        .map(|d| format!("{}/", d))
        .collect();
    src_entries.extend(
        plan.files
            .paths()
            .filter_map(|p| p.strip_prefix("src/"))
            .filter(|p| !p.contains('/'))
            .map(str::to_string),
    );

    let mut top_dirs: Vec<String> = Vec::new();
    let mut top_files: Vec<String> = Vec::new();
    for path in plan.files.paths() {
        match path.split_once('/') {
            Some(("src", _)) => {}
            Some((dir, _)) => {
                let dir = format!("{}/", dir);
                if !top_dirs.contains(&dir) {
                    top_dirs.push(dir);
                }
            }
            None => top_files.push(path.to_string()),
        }
    }
    top_files.push(MANIFEST_FILE.to_string());

    let mut lines = vec![format!("{}/", project_name)];

    let mut root_entries = vec!["src/".to_string()];
    root_entries.extend(top_dirs);
    root_entries.extend(top_files);

    for (i, entry) in root_entries.iter().enumerate() {
        let is_last = i + 1 == root_entries.len();
        lines.push(format!("{}{}", if is_last { LAST } else { BRANCH }, entry));
        if i == 0 {
            let child_prefix = if is_last { SPACE } else { PIPE };
            push_entries(&mut lines, child_prefix, &src_entries);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::options::{Database, Language, ProjectOptions};

    #[test]
    fn test_tree_for_prisma_project() {
        let plan = compose(&ProjectOptions::fixture(
            Language::TypeScript,
            Database::Prisma,
            false,
            false,
        ));
        let lines = structure_lines("demo", &plan);

        assert_eq!(lines[0], "demo/");
        assert_eq!(lines[1], "├── src/");
        assert_eq!(lines[2], "│   ├── routes/");
        assert!(lines.contains(&"│   └── index.ts".to_string()));
        assert!(lines.contains(&"├── prisma/".to_string()));
        assert!(lines.contains(&"├── tsconfig.json".to_string()));
        assert_eq!(lines.last().unwrap(), "└── package.json");
        // config/db.ts is nested and represented by its directory
        assert!(!lines.iter().any(|l| l.contains("db.ts")));
    }

    #[test]
    fn test_tree_lists_swagger_source() {
        let plan = compose(&ProjectOptions::fixture(
            Language::JavaScript,
            Database::None,
            true,
            true,
        ));
        let lines = structure_lines("api", &plan);
        assert!(lines.contains(&"│   ├── index.js".to_string()));
        assert!(lines.contains(&"│   └── swagger.js".to_string()));
        assert!(lines.contains(&"├── jest.config.js".to_string()));
        assert!(!lines.iter().any(|l| l.contains("prisma")));
    }
}
