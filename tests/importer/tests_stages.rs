//! Stages that run before the importer also run on every imported file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use css_importer::pipeline::BoxError;
use css_importer::syntax::{Declaration, Node};
use css_importer::{Plugin, PluginContext, Root};
use parking_lot::Mutex;

use crate::helpers::fixtures::{canonical, fixture, layout};
use crate::helpers::pipeline::{fs_importer, process_file};

/// Adds `prefixed: yes` to every top-level rule and records the trees it saw.
#[derive(Default)]
struct Prefixer {
    seen: Mutex<Vec<(Option<PathBuf>, Option<usize>)>>,
}

#[async_trait]
impl Plugin for Prefixer {
    fn name(&self) -> &str {
        "prefixer"
    }

    async fn transform(&self, root: &mut Root, cx: &PluginContext<'_>) -> Result<(), BoxError> {
        self.seen
            .lock()
            .push((root.source_file().map(Path::to_path_buf), cx.position()));
        for node in &mut root.nodes {
            if let Node::Rule(rule) = node {
                rule.nodes.push(Node::Decl(Declaration {
                    prop: "prefixed".to_string(),
                    value: "yes".to_string(),
                    source: None,
                }));
            }
        }
        Ok(())
    }
}

#[test]
fn test_prior_stage_applies_to_imported_rules() {
    let prefixer = Arc::new(Prefixer::default());
    let stages: Vec<Arc<dyn Plugin>> = vec![prefixer.clone(), fs_importer(&fixture(""))];
    let output = process_file(stages, &fixture("imports_foo.css")).unwrap();

    assert_eq!(
        output.css,
        ".foo { color: red; prefixed: yes; }\n.bar { color: blue; prefixed: yes; }"
    );
    assert_eq!(
        *prefixer.seen.lock(),
        vec![
            (Some(fixture("imports_foo.css")), Some(0)),
            (Some(canonical(fixture("foo.css"))), Some(0)),
        ]
    );
}

#[test]
fn test_prior_stages_keep_relative_order() {
    let first = Arc::new(Prefixer::default());
    let second = Arc::new(Prefixer::default());
    let dir = layout(&[
        ("main.css", "@import './a.css';"),
        ("a.css", "@import './b.css';\n.a {}"),
        ("b.css", ".b {}"),
    ]);
    let stages: Vec<Arc<dyn Plugin>> =
        vec![first.clone(), second.clone(), fs_importer(dir.path())];
    let output = process_file(stages, &dir.path().join("main.css")).unwrap();

    assert_eq!(
        output.css,
        ".b { prefixed: yes; prefixed: yes; }\n.a { prefixed: yes; prefixed: yes; }"
    );
    assert_eq!(first.seen.lock().len(), 3);
    assert!(second.seen.lock().iter().all(|(_, position)| *position == Some(1)));
}

#[test]
fn test_importer_first_runs_no_stages_on_nested_files() {
    let after = Arc::new(Prefixer::default());
    let stages: Vec<Arc<dyn Plugin>> = vec![fs_importer(&fixture("")), after.clone()];
    let output = process_file(stages, &fixture("imports_foo_transitively.css")).unwrap();

    assert_eq!(after.seen.lock().len(), 1);
    assert!(output.css.contains(".foo { color: red; prefixed: yes; }"));
}
