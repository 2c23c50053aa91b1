//! Integration tests for lstree
//!
//! These tests walk real temporary directories through the public API.
//! Listing order is whatever the host filesystem yields, so most checks are
//! structural rather than exact.

use std::fs;
use std::path::Path;

use lstree::integrate::print_tree;
use lstree::tree::{ErrorPolicy, ExclusionSet, PrintOptions, TreePrinter};
use lstree::TreeError;
use tempfile::TempDir;

/// Raw listing order of `dir`, as the printer will see it
fn listing(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn render(root: &Path, exclusions: &ExclusionSet) -> String {
    let mut out = Vec::new();
    print_tree(root, exclusions, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Number of characters before the connector
fn prefix_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| *c != '├' && *c != '└')
        .count()
}

fn depth_of(line: &str) -> usize {
    prefix_width(line) / 4
}

/// Check connectors and prefixes of every line against its neighbours
fn assert_well_formed(output: &str) {
    let lines: Vec<&str> = output.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        let width = prefix_width(line);
        assert_eq!(width % 4, 0, "ragged prefix: {:?}", line);
        let prefix: String = line.chars().take(width).collect();
        let depth = width / 4;
        let rest: String = line.chars().skip(width).collect();
        let is_last = rest.starts_with("└── ");
        assert!(is_last || rest.starts_with("├── "), "no connector: {:?}", line);

        // Last iff no later sibling follows before the walk climbs back up.
        let next = lines[i + 1..].iter().map(|l| depth_of(l)).find(|d| *d <= depth);
        assert_eq!(is_last, next != Some(depth), "wrong connector: {:?}", line);

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        for child in lines[i + 1..].iter().take_while(|l| depth_of(l) > depth) {
            assert!(child.starts_with(&child_prefix), "{:?} under {:?}", child, line);
        }
    }
}

/// /proj with src/{a.txt,b.txt}, node_modules/left-pad/index.js, README.md
fn setup_proj() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("src/a.txt"), "a").unwrap();
    fs::write(root.join("src/b.txt"), "b").unwrap();
    fs::create_dir_all(root.join("node_modules/left-pad")).unwrap();
    fs::write(root.join("node_modules/left-pad/index.js"), "").unwrap();
    fs::write(root.join("README.md"), "# proj").unwrap();
    temp
}

// =============================================================================
// Scenario
// =============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_proj_scenario_matches_listing_order() {
        let temp = setup_proj();
        let root = temp.path();

        let visible: Vec<String> = listing(root)
            .into_iter()
            .filter(|n| n != "node_modules")
            .collect();
        let mut expected = String::new();
        for (i, name) in visible.iter().enumerate() {
            let is_last = i == visible.len() - 1;
            expected.push_str(if is_last { "└── " } else { "├── " });
            expected.push_str(name);
            expected.push('\n');
            if name == "src" {
                let children = listing(&root.join("src"));
                for (j, child) in children.iter().enumerate() {
                    expected.push_str(if is_last { "    " } else { "│   " });
                    expected.push_str(if j == children.len() - 1 { "└── " } else { "├── " });
                    expected.push_str(child);
                    expected.push('\n');
                }
            }
        }

        assert_eq!(render(root, &ExclusionSet::default()), expected);
        assert_eq!(expected.lines().count(), 4);
    }
}

// =============================================================================
// Properties
// =============================================================================

mod property_tests {
    use super::*;

    #[test]
    fn test_excluded_entries_and_descendants_never_appear() {
        let temp = setup_proj();
        let output = render(temp.path(), &ExclusionSet::default());

        assert!(!output.contains("node_modules"));
        assert!(!output.contains("left-pad"));
        assert!(!output.contains("index.js"));
    }

    #[test]
    fn test_excluding_nested_name() {
        let temp = setup_proj();
        let output = render(temp.path(), &ExclusionSet::new(["a.txt", "node_modules"]));

        assert!(!output.contains("a.txt"));
        assert!(output.contains("b.txt"));
        assert_well_formed(&output);
    }

    #[test]
    fn test_output_is_well_formed() {
        let temp = setup_proj();
        fs::create_dir_all(temp.path().join("src/nested/deeper")).unwrap();
        fs::write(temp.path().join("src/nested/deeper/x.rs"), "").unwrap();
        fs::write(temp.path().join("src/nested/y.rs"), "").unwrap();

        assert_well_formed(&render(temp.path(), &ExclusionSet::default()));
        assert_well_formed(&render(temp.path(), &ExclusionSet::empty()));
    }

    #[test]
    fn test_prefix_width_tracks_depth() {
        let temp = setup_proj();
        let output = render(temp.path(), &ExclusionSet::empty());

        for line in output.lines() {
            let name = line.rsplit(' ').next().unwrap();
            let expected_depth = match name {
                "src" | "node_modules" | "README.md" => 0,
                "a.txt" | "b.txt" | "left-pad" => 1,
                "index.js" => 2,
                other => panic!("unexpected entry {}", other),
            };
            assert_eq!(prefix_width(line), expected_depth * 4, "{:?}", line);
        }
    }

    #[test]
    fn test_directory_line_precedes_its_children() {
        let temp = setup_proj();
        let output = render(temp.path(), &ExclusionSet::empty());
        let position = |name: &str| {
            output
                .lines()
                .position(|l| l.ends_with(&format!(" {}", name)))
                .unwrap()
        };

        assert!(position("src") < position("a.txt"));
        assert!(position("src") < position("b.txt"));
        assert!(position("node_modules") < position("left-pad"));
        assert!(position("left-pad") < position("index.js"));
    }

    #[test]
    fn test_repeated_walks_are_identical() {
        let temp = setup_proj();
        let first = render(temp.path(), &ExclusionSet::default());
        let second = render(temp.path(), &ExclusionSet::default());
        assert_eq!(first, second);
    }
}

// =============================================================================
// Root Errors
// =============================================================================

mod root_error_tests {
    use super::*;

    #[test]
    fn test_missing_root_reports_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let mut out = Vec::new();
        let err = print_tree(&missing, &ExclusionSet::default(), &mut out).unwrap_err();

        assert!(matches!(err, TreeError::NotFound(_)));
        assert!(err.to_string().contains("missing"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_file_root_is_not_a_directory() {
        let temp = setup_proj();
        let mut out = Vec::new();
        let err = print_tree(&temp.path().join("README.md"), &ExclusionSet::default(), &mut out)
            .unwrap_err();

        assert!(matches!(err, TreeError::NotADirectory(_)));
        assert!(out.is_empty());
    }
}

// =============================================================================
// Options
// =============================================================================

mod option_tests {
    use super::*;

    #[test]
    fn test_depth_limit_on_disk() {
        let temp = setup_proj();
        let options = PrintOptions {
            max_depth: Some(1),
            ..PrintOptions::default()
        };
        let output = TreePrinter::new(options).render(temp.path()).unwrap();

        assert!(output.contains("src"));
        assert!(output.contains("README.md"));
        assert!(!output.contains("a.txt"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_summary_counts_on_disk() {
        let temp = setup_proj();
        let printer = TreePrinter::new(PrintOptions::default());
        let summary = printer.print_tree(temp.path(), &mut Vec::new()).unwrap();

        assert_eq!(summary.directories, 1);
        assert_eq!(summary.files, 3);
        assert!(summary.skipped.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory() {
        use std::os::unix::fs::PermissionsExt;

        let temp = setup_proj();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("secret.txt"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permissions are not enforced for privileged users; nothing to check then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let abort = TreePrinter::new(PrintOptions::default());
        let err = abort.print_tree(temp.path(), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, TreeError::Read { ref path, .. } if *path == locked));

        let skip = TreePrinter::new(PrintOptions {
            on_error: ErrorPolicy::Skip,
            ..PrintOptions::default()
        });
        let mut out = Vec::new();
        let summary = skip.print_tree(temp.path(), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(summary.skipped, vec![locked]);
        assert!(!output.contains("locked"));
        assert!(output.contains("README.md"));
        assert!(output.contains("a.txt"));
    }
}
