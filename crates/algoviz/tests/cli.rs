use std::process::{Command, Output};

fn algoviz(args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_algoviz"))
        .args(["--quiet"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "algoviz {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

#[test]
fn tree_dump_prints_the_finished_tree() {
    let out = algoviz(&["tree", "--algorithm", "avl-tree", "--keys", "1, 2, 3", "--dump"]);
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "2 (h=2)\n  L: 1 (h=1)\n  R: 3 (h=1)\n"
    );

    let out = algoviz(&["tree", "--algorithm", "bst", "--keys", "2, 3", "--dump"]);
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "2\n  L: -\n  R: 3\n");
}

#[test]
fn catalog_query_includes_complexity() {
    let out = algoviz(&["catalog", "merge sort"]);
    let entry: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(entry["id"], "merge-sort");
    assert_eq!(entry["traced"], true);
    assert_eq!(entry["complexity"]["worst"], "O(n log n)");
    assert_eq!(entry["complexity"]["stable"], true);
}

#[test]
fn dump_conflicts_with_search() {
    let output = Command::new(env!("CARGO_BIN_EXE_algoviz"))
        .args(["tree", "--algorithm", "bst", "--keys", "1", "--dump", "--search", "1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot be used with"));
}
