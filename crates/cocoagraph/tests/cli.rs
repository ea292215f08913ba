use std::fs;
use std::path::Path;

use cocoagraph::{OutputFormat, ScanOptions, run_main};
use cocoagraph_error::ErrorKind;
use tempfile::tempdir;

fn write_project(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempdir().expect("tempdir");
    for (relative, content) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, content).expect("write fixture");
    }
    dir
}

fn base_options(root: &Path) -> ScanOptions {
    ScanOptions {
        root: root.to_path_buf(),
        output_dir: None,
        format: OutputFormat::Dot,
        ignore_dirs: vec!["Pods".to_string()],
        ignore_nodes: vec!["NSObject".to_string()],
        strict_protocols: false,
        keep_dot: false,
        parallel: false,
    }
}

fn read_artifact(summary: &cocoagraph::ScanSummary) -> String {
    fs::read_to_string(&summary.artifact).expect("read artifact")
}

#[test]
fn scans_both_dialects_into_one_graph() {
    let dir = write_project(&[
        (
            "Headers/Shape.h",
            "@interface Circle : Shape <Drawable>\n{\n}\n@end\n\
             @protocol Drawable <Renderable>\n@end\n",
        ),
        (
            "Sources/View.swift",
            "class View: UIView, Renderable {\n}\n\
             extension View: Codable {\n}\n",
        ),
    ]);

    let summary = run_main(&base_options(dir.path())).expect("run");
    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.files_skipped, 0);

    let dot = read_artifact(&summary);
    assert!(dot.contains("\"Circle\" -> \"Shape\";"));
    assert!(dot.contains("\"Circle\" -> \"Drawable\";"));
    assert!(dot.contains("\"Drawable\" -> \"Renderable\";"));
    assert!(dot.contains("\"View\" -> \"UIView\";"));
    assert!(dot.contains("\"View\" -> \"Renderable\";"));
    assert!(dot.contains("\"View\" -> \"Codable\";"));
}

#[test]
fn artifact_lands_in_project_root_by_default() {
    let dir = write_project(&[("A.h", "@interface A : B\n@end\n")]);

    let summary = run_main(&base_options(dir.path())).expect("run");
    assert_eq!(summary.artifact, dir.path().join("project.dot"));
    assert!(summary.artifact.exists());
}

#[test]
fn explicit_output_dir_is_created_and_used() {
    let dir = write_project(&[("A.h", "@interface A : B\n@end\n")]);
    let out = dir.path().join("out").join("graphs");

    let mut opts = base_options(dir.path());
    opts.output_dir = Some(out.clone());

    let summary = run_main(&opts).expect("run");
    assert_eq!(summary.artifact, out.join("project.dot"));
    assert!(summary.artifact.exists());
}

#[test]
fn pods_directory_is_never_scanned() {
    let dir = write_project(&[
        ("App/Main.h", "@interface AppController : UIViewController\n@end\n"),
        ("Pods/Vendor.h", "@interface VendorWidget : VendorBase\n@end\n"),
    ]);

    let summary = run_main(&base_options(dir.path())).expect("run");
    assert_eq!(summary.files_scanned, 1);

    let dot = read_artifact(&summary);
    assert!(dot.contains("\"AppController\""));
    assert!(!dot.contains("VendorWidget"));
    assert!(!dot.contains("VendorBase"));
}

#[test]
fn ignored_nodes_never_reach_the_artifact() {
    let dir = write_project(&[(
        "Child.h",
        "@interface Child : NSObject <NSCopying>\n@end\n",
    )]);

    let summary = run_main(&base_options(dir.path())).expect("run");
    assert_eq!(summary.classes, 1);

    let dot = read_artifact(&summary);
    assert!(dot.contains("\"Child\";"));
    assert!(!dot.contains("NSObject"));
    // NSCopying is not on the ignore list, so the conformance stays.
    assert!(dot.contains("\"Child\" -> \"NSCopying\";"));
}

#[test]
fn summary_counts_match_the_declarations() {
    let dir = write_project(&[(
        "Foo.h",
        "@interface Foo : Bar <Baz, Qux>\n{\n}\n@end\n",
    )]);

    let summary = run_main(&base_options(dir.path())).expect("run");
    assert_eq!(summary.classes, 2); // Foo, Bar
    assert_eq!(summary.protocols, 2); // Baz, Qux
    assert_eq!(summary.class_edges, 3);
    assert_eq!(summary.protocol_edges, 0);
}

#[test]
fn parallel_run_produces_identical_output() {
    let files: Vec<(String, String)> = (0..6)
        .map(|i| {
            (
                format!("Sources/File{i}.swift"),
                format!("class Type{i}: Base{i}, Proto{i} {{\n}}\n"),
            )
        })
        .collect();
    let borrowed: Vec<(&str, &str)> = files
        .iter()
        .map(|(p, c)| (p.as_str(), c.as_str()))
        .collect();
    let dir = write_project(&borrowed);

    let mut opts = base_options(dir.path());
    opts.output_dir = Some(dir.path().join("seq"));
    let sequential = run_main(&opts).expect("sequential run");

    let mut opts = base_options(dir.path());
    opts.output_dir = Some(dir.path().join("par"));
    opts.parallel = true;
    let parallel = run_main(&opts).expect("parallel run");

    assert_eq!(read_artifact(&sequential), read_artifact(&parallel));
}

#[test]
fn strict_protocols_moves_first_entry_out_of_classes() {
    let dir = write_project(&[("View.swift", "class View: UIView {\n}\n")]);

    let mut opts = base_options(dir.path());
    opts.strict_protocols = true;

    let summary = run_main(&opts).expect("run");
    let dot = read_artifact(&summary);

    // UIView must be declared inside the protocol subgraph, before the
    // class subgraph opens.
    let uiview = dot.find("\"UIView\";").expect("UIView node");
    let classes = dot.find("subgraph r2_classes").expect("class subgraph");
    assert!(uiview < classes);
    assert_eq!(summary.classes, 1);
    assert_eq!(summary.protocols, 1);
}

#[test]
fn missing_root_is_an_invalid_argument() {
    let dir = tempdir().expect("tempdir");
    let opts = base_options(&dir.path().join("does-not-exist"));

    let err = run_main(&opts).expect_err("missing root must fail");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn project_without_sources_still_renders() {
    let dir = write_project(&[("README.md", "# nothing to see\n")]);

    let summary = run_main(&base_options(dir.path())).expect("run");
    assert_eq!(summary.files_scanned, 0);
    assert_eq!(summary.classes, 0);

    let dot = read_artifact(&summary);
    assert!(dot.starts_with("strict digraph project {"));
    assert!(dot.contains("subgraph r1_protocol {"));
    assert!(dot.contains("subgraph r2_classes {"));
}

#[test]
fn custom_ignore_lists_replace_defaults() {
    let dir = write_project(&[
        ("Carthage/Dep.h", "@interface CarthageDep : CarthageBase\n@end\n"),
        ("Pods/Pod.h", "@interface PodThing : PodBase\n@end\n"),
        ("App.h", "@interface App : UIResponder\n@end\n"),
    ]);

    let mut opts = base_options(dir.path());
    opts.ignore_dirs = vec!["Carthage".to_string()];
    opts.ignore_nodes = vec!["UIResponder".to_string()];

    let summary = run_main(&opts).expect("run");
    let dot = read_artifact(&summary);

    // Carthage is pruned now, Pods no longer is.
    assert!(!dot.contains("CarthageDep"));
    assert!(dot.contains("\"PodThing\""));
    // UIResponder is ignored, NSObject no longer is.
    assert!(!dot.contains("UIResponder"));
    assert!(dot.contains("\"App\";"));
}

#[test]
fn dot_edges_collapse_under_strict_digraph() {
    // A conformance declared twice is written twice, in discovery order;
    // the strict digraph keyword leaves collapsing to graphviz.
    let dir = write_project(&[(
        "A.h",
        "@interface A : B <P>\n@end\n@interface A (Extras) <P>\n@end\n",
    )]);

    let summary = run_main(&base_options(dir.path())).expect("run");
    let dot = read_artifact(&summary);

    assert!(dot.starts_with("strict digraph"));
    assert_eq!(dot.matches("\"A\" -> \"P\";").count(), 2);
    assert_eq!(summary.class_edges, 3);
}
