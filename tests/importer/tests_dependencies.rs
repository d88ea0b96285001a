//! Dependency messages recorded for file watchers.

use css_importer::Message;
use css_importer::importer::PLUGIN_NAME;
use serde_json::json;

use crate::helpers::fixtures::{canonical, fixture, layout};
use crate::helpers::pipeline::import_file;

#[test]
fn test_dependency_recorded_once() {
    let output = import_file(&fixture("imports_foo.css"));

    let deps = output.dependencies();
    assert_eq!(deps.len(), 1);
    assert_eq!(deps[0].plugin, PLUGIN_NAME);
    assert_eq!(deps[0].file, canonical(fixture("foo.css")));
    assert_eq!(deps[0].parent.as_deref(), Some(fixture("imports_foo.css").as_path()));
}

#[test]
fn test_dependency_message_shape() {
    let dir = layout(&[("main.css", "@import 'foo';"), ("foo.css", ".foo {}")]);
    let main = dir.path().join("main.css");
    let output = import_file(&main);

    let dependencies: Vec<_> = output
        .messages
        .iter()
        .filter(|m| matches!(m, Message::Dependency(_)))
        .collect();
    assert_eq!(dependencies.len(), 1);
    assert_eq!(
        serde_json::to_value(dependencies[0]).unwrap(),
        json!({
            "type": "dependency",
            "plugin": "css-importer",
            "file": canonical(dir.path().join("foo.css")),
            "parent": main,
        })
    );
}

#[test]
fn test_transitive_dependency_parents() {
    let dir = layout(&[
        ("a.css", "@import './styles/b.css';\n.a {}"),
        ("styles/b.css", "@import './c.css';\n.b {}"),
        ("styles/c.css", ".c {}"),
    ]);
    let a = dir.path().join("a.css");
    let output = import_file(&a);

    assert_eq!(output.css, ".c {}\n.b {}\n.a {}");

    let b = canonical(dir.path().join("styles/b.css"));
    let c = canonical(dir.path().join("styles/c.css"));
    let mut edges: Vec<_> = output
        .dependencies()
        .into_iter()
        .map(|d| (d.parent.clone(), d.file.clone()))
        .collect();
    edges.sort();
    let mut expected = vec![(Some(a), b.clone()), (Some(b), c)];
    expected.sort();
    assert_eq!(edges, expected);
}

#[test]
fn test_warning_serializes_with_position() {
    let output = import_file(&fixture("fail_to_resolve.css"));

    let value = serde_json::to_value(&output.messages[0]).unwrap();
    assert_eq!(value["type"], "warning");
    assert_eq!(value["plugin"], "css-importer");
    assert_eq!(value["line"], 1);
    assert_eq!(value["column"], 1);
}
