//! End-to-end tests: walk a fixture tree, build the index, and query it.
//!
//! Exercises the full pipeline the way the CLI drives it: candidate-file
//! enumeration, full index build, filtered queries, and detail lookup.

use lexi::index::build::{build_index, build_index_silent};
use lexi::index::scan::line_text;
use lexi::index::types::{Category, CategorySet};
use lexi::query::filter::{FilterQuery, filter_index, token_detail};
use lexi::utils::walk::collect_files;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

static FIXTURE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get or create the test fixture tree (singleton)
fn fixture_dir() -> PathBuf {
    FIXTURE_DIR.get_or_init(create_fixture_dir).clone()
}

fn create_fixture_dir() -> PathBuf {
    let dir = std::env::temp_dir()
        .join("lexi_test_fixtures")
        .join(format!("test_{}", std::process::id()));

    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("src")).expect("Failed to create fixture dir");
    fs::create_dir_all(dir.join(".git")).expect("Failed to create fixture dir");
    fs::create_dir_all(dir.join("CVS")).expect("Failed to create fixture dir");

    fs::write(dir.join("a.cpp"), "int foo = 1;\nfoo = foo + 1;\n").unwrap();

    fs::write(
        dir.join("src/render.h"),
        "#define MAX_FRAMES 64\nvoid fooBar(int frame_count);\n",
    )
    .unwrap();

    fs::write(
        dir.join("src/ai.nut"),
        "function think() {\n    local foo = reload-timer\n}\n",
    )
    .unwrap();

    fs::write(
        dir.join("hud.blk"),
        "panel-style:t=\"dark-red\"\nuse_outline:b=yes\n",
    )
    .unwrap();

    fs::write(dir.join("Jamfile"), "SubDir TOP render ;\nfoo = 1 ;\n").unwrap();

    // Not candidates: unknown extension, VCS metadata.
    fs::write(dir.join("notes.txt"), "foo everywhere\n").unwrap();
    fs::write(dir.join(".git/stash.cpp"), "int foo;\n").unwrap();
    fs::write(dir.join("CVS/old.cpp"), "int foo;\n").unwrap();

    dir
}

#[test]
fn test_walk_collects_sorted_candidates_only() {
    let root = fixture_dir();
    let paths = collect_files(&root);
    let names: Vec<String> = paths
        .iter()
        .map(|p| {
            p.strip_prefix(&root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    assert_eq!(
        names,
        vec!["Jamfile", "a.cpp", "hud.blk", "src/ai.nut", "src/render.h"]
    );
}

#[test]
fn test_end_to_end_source_example() {
    let root = fixture_dir();
    let a_cpp = root.join("a.cpp");
    let index = build_index_silent(&[a_cpp.clone()]).unwrap();

    assert_eq!(
        index.occurrences("int").unwrap().get(&a_cpp),
        Some(&vec![1])
    );
    assert_eq!(
        index.occurrences("foo").unwrap().get(&a_cpp),
        Some(&vec![1, 2])
    );
    assert_eq!(
        index.occurrences("1").unwrap().get(&a_cpp),
        Some(&vec![1, 2])
    );
    // Punctuation alone is never a token.
    assert!(index.occurrences("=").is_none());
    assert!(index.occurrences("+").is_none());
}

#[test]
fn test_line_lookup_exact_text() {
    let root = fixture_dir();
    assert_eq!(
        line_text(&root.join("a.cpp"), 2).unwrap(),
        "foo = foo + 1;"
    );
}

#[test]
fn test_occurrence_lists_strictly_ascending() {
    let root = fixture_dir();
    let index = build_index_silent(&collect_files(&root)).unwrap();
    for (token, occurrences) in index.tokens() {
        for (path, lines) in occurrences {
            assert!(!lines.is_empty(), "{token} in {} has no lines", path.display());
            assert!(
                lines.windows(2).all(|w| w[0] < w[1]),
                "{token} in {} is not strictly ascending: {lines:?}",
                path.display()
            );
        }
    }
}

#[test]
fn test_rebuild_is_idempotent() {
    let root = fixture_dir();
    let paths = collect_files(&root);
    let first = build_index_silent(&paths).unwrap();
    let second = build_index_silent(&paths).unwrap();

    let snapshot = |index: &lexi::index::types::InvertedIndex| {
        index
            .tokens()
            .map(|(token, occurrences)| (token.clone(), occurrences.clone()))
            .collect::<BTreeMap<_, _>>()
    };
    assert_eq!(snapshot(&first), snapshot(&second));
    assert_eq!(first.file_count(), second.file_count());
}

#[test]
fn test_category_isolation() {
    let root = fixture_dir();
    let index = build_index_silent(&collect_files(&root)).unwrap();
    for raw in ["", "foo", "*foo", "\"foo", "*\"FOO"] {
        let matches = filter_index(&index, &FilterQuery::parse(raw), &CategorySet::none());
        assert!(matches.is_empty(), "filter {raw:?} leaked tokens");
    }
}

#[test]
fn test_case_insensitive_substring_filter() {
    let root = fixture_dir();
    let index = build_index_silent(&collect_files(&root)).unwrap();
    let matches = filter_index(&index, &FilterQuery::parse("*foobar"), &CategorySet::all());

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].token, "fooBar");
    assert_eq!(matches[0].files.len(), 1);
    assert_eq!(matches[0].files[0].path, root.join("src/render.h"));
    assert_eq!(matches[0].files[0].count, 1);
}

#[test]
fn test_exact_filter_excludes_longer_tokens() {
    let root = fixture_dir();
    let index = build_index_silent(&collect_files(&root)).unwrap();
    let matches = filter_index(&index, &FilterQuery::parse("\"foo"), &CategorySet::all());

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].token, "foo");
    // `fooBar` must not leak into an exact match.
    let all = filter_index(&index, &FilterQuery::parse("foo"), &CategorySet::all());
    assert!(all.iter().any(|m| m.token == "fooBar"));
}

#[test]
fn test_block_rule_set_tokens() {
    let root = fixture_dir();
    let index = build_index_silent(&collect_files(&root)).unwrap();

    let hud = root.join("hud.blk");
    assert_eq!(
        index.occurrences("panel-style").unwrap().get(&hud),
        Some(&vec![1])
    );
    // Quoted value is indexed bare, hyphen intact.
    assert_eq!(
        index.occurrences("dark-red").unwrap().get(&hud),
        Some(&vec![1])
    );
    assert!(index.occurrences("panel").is_none());
}

#[test]
fn test_category_toggle_hides_files_and_tokens() {
    let root = fixture_dir();
    let index = build_index_silent(&collect_files(&root)).unwrap();

    let sources_only: CategorySet = [Category::Source].into_iter().collect();
    let matches = filter_index(&index, &FilterQuery::parse("foo"), &sources_only);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].token, "foo");
    assert_eq!(matches[0].files[0].path, root.join("a.cpp"));

    // Block tokens vanish entirely when their category is off.
    let panel = filter_index(&index, &FilterQuery::parse("panel-style"), &sources_only);
    assert!(panel.is_empty());
}

#[test]
fn test_token_detail_reads_line_text() {
    let root = fixture_dir();
    let index = build_index_silent(&collect_files(&root)).unwrap();

    let details = token_detail(&index, "foo", &CategorySet::all()).unwrap();
    let a_cpp = details
        .iter()
        .find(|d| d.path == root.join("a.cpp"))
        .expect("a.cpp missing from detail");
    assert_eq!(
        a_cpp.lines,
        vec![
            (1, "int foo = 1;".to_string()),
            (2, "foo = foo + 1;".to_string()),
        ]
    );
}

#[test]
fn test_progress_reports_include_final_count() {
    let root = fixture_dir();
    let paths = collect_files(&root);
    let mut reports = Vec::new();
    build_index(&paths, &mut |r| reports.push(r)).unwrap();

    let last = reports.last().expect("no progress reported");
    assert_eq!(last.scanned, paths.len());
    assert_eq!(last.total, paths.len());
}

#[test]
fn test_empty_root_builds_empty_index() {
    let paths = collect_files(std::path::Path::new("/nonexistent/lexi/tree"));
    let index = build_index_silent(&paths).unwrap();
    assert!(index.is_empty());
    let matches = filter_index(&index, &FilterQuery::parse(""), &CategorySet::all());
    assert!(matches.is_empty());
}
