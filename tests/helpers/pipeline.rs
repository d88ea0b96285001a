//! Running the importer inside a processor.

use std::path::Path;
use std::sync::Arc;

use css_importer::pipeline::ProcessOutput;
use css_importer::{
    Importer, ImporterOptions, NodeResolver, NodeResolverOptions, Plugin, ProcessError,
    ProcessOptions, Processor,
};
use futures::executor::block_on;

/// Process `file` from disk with `stages`.
pub fn process_file(
    stages: Vec<Arc<dyn Plugin>>,
    file: &Path,
) -> Result<ProcessOutput, ProcessError> {
    let css = std::fs::read_to_string(file).expect("input file should be readable");
    block_on(Processor::new(stages).process(&css, ProcessOptions::for_file(file)))
}

/// An importer backed by the filesystem resolver rooted at `root`.
pub fn fs_importer(root: &Path) -> Arc<dyn Plugin> {
    let resolver = NodeResolver::new(NodeResolverOptions {
        root: Some(root.to_path_buf()),
    });
    Arc::new(Importer::new(
        ImporterOptions::default().with_resolver(resolver),
    ))
}

/// Process `file` with only a filesystem importer.
pub fn import_file(file: &Path) -> ProcessOutput {
    let root = file.parent().expect("file should have a parent");
    process_file(vec![fs_importer(root)], file).expect("processing should succeed")
}
