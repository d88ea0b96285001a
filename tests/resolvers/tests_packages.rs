//! Stylesheet packages resolved by the filesystem resolver.

use rstest::rstest;

use crate::helpers::fixtures::{canonical, layout};
use crate::helpers::pipeline::import_file;

#[test]
fn test_manifest_style_preferred_over_main() {
    let dir = layout(&[
        ("main.css", "@import 'theme';"),
        (
            "node_modules/theme/package.json",
            r#"{"name": "theme", "style": "css/theme.css", "main": "main.css"}"#,
        ),
        ("node_modules/theme/css/theme.css", ".styled {}"),
        ("node_modules/theme/main.css", ".main {}"),
    ]);
    let output = import_file(&dir.path().join("main.css"));

    assert_eq!(output.css, ".styled {}");
    assert_eq!(
        output.dependencies()[0].file,
        canonical(dir.path().join("node_modules/theme/css/theme.css"))
    );
}

#[rstest]
#[case(r#"{"main": "lib/theme.css"}"#, ".lib {}")]
#[case(r#"{"main": "index.js"}"#, ".index {}")]
#[case(r#"{}"#, ".index {}")]
fn test_manifest_main_and_index_fallback(#[case] manifest: &str, #[case] expected: &str) {
    let dir = layout(&[
        ("main.css", "@import 'theme';"),
        ("node_modules/theme/package.json", manifest),
        ("node_modules/theme/lib/theme.css", ".lib {}"),
        ("node_modules/theme/index.css", ".index {}"),
    ]);
    let output = import_file(&dir.path().join("main.css"));

    assert_eq!(output.css, expected);
}

#[test]
fn test_relative_imports_inside_package() {
    let dir = layout(&[
        ("src/main.css", "@import 'kit';\n.app {}"),
        ("node_modules/kit/index.css", "@import './base.css';\n.kit {}"),
        ("node_modules/kit/base.css", ".base {}"),
    ]);
    let output = import_file(&dir.path().join("src/main.css"));

    assert_eq!(output.css, ".base {}\n.kit {}\n.app {}");
    assert_eq!(output.dependencies().len(), 2);
}

#[test]
fn test_local_file_shadows_package() {
    let dir = layout(&[
        ("main.css", "@import 'theme';"),
        ("theme.css", ".local {}"),
        ("node_modules/theme/index.css", ".package {}"),
    ]);
    let output = import_file(&dir.path().join("main.css"));

    assert_eq!(output.css, ".local {}");
}

#[test]
fn test_url_import_left_alone() {
    let dir = layout(&[(
        "main.css",
        "@import url('https://fonts.example.com/css?family=Sans');\n.a {}",
    )]);
    let output = import_file(&dir.path().join("main.css"));

    assert_eq!(
        output.css,
        "@import url('https://fonts.example.com/css?family=Sans');\n.a {}"
    );
    assert_eq!(output.warnings().len(), 1);
    assert!(output.dependencies().is_empty());
}
