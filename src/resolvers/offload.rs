//! Running blocking filesystem work off the executor thread

use futures::channel::oneshot;

use super::ResolveError;

const WORKER_NAME: &str = "css-importer-fs";

/// Run `work` on its own thread. The returned future stays pending until the
/// work is done, so other resolutions keep making progress meanwhile.
///
/// Works under any executor: completion is signalled through a `futures`
/// oneshot channel, not a runtime-specific blocking pool.
pub(crate) async fn offload<T, F>(work: F) -> Result<T, ResolveError>
where
    F: FnOnce() -> Result<T, ResolveError> + Send + 'static,
    T: Send + 'static,
{
    let (done, result) = oneshot::channel();
    std::thread::Builder::new()
        .name(WORKER_NAME.to_string())
        .spawn(move || {
            // The receiver is gone when the resolution was abandoned.
            let _ = done.send(work());
        })
        .map_err(|e| ResolveError::other(format!("cannot start {WORKER_NAME} worker: {e}")))?;

    result
        .await
        .map_err(|_| ResolveError::other(format!("{WORKER_NAME} worker stopped without a result")))?
}
