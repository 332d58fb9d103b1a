use tokio::runtime::{Handle, RuntimeFlavor};
use tokio_util::sync::CancellationToken;

use crate::app::{DummylogError, Result};
use crate::emitter::Emitter;

/// Emit one message per interval until `shutdown` fires.
///
/// The interval is a fixed period: emission failures end the loop instead of
/// stretching the wait. Cancellation is checked before every wait and raced
/// against it, and a cancelled wait never emits. The only way out besides an
/// emission error is [`DummylogError::Cancelled`].
///
/// Sink writes are blocking. On a multi-thread runtime they run through
/// [`tokio::task::block_in_place`] so other tasks keep their worker, but a
/// sink that stalls forever still holds this loop until the write returns;
/// cancellation is only observed between emissions.
pub async fn run(emitter: &mut Emitter, shutdown: &CancellationToken) -> Result<()> {
    let interval = emitter.config().interval;

    tracing::info!(
        format = %emitter.config().format,
        interval = ?interval,
        "Emitter started"
    );

    loop {
        if shutdown.is_cancelled() {
            break;
        }

        tokio::select! {
            biased;

            _ = shutdown.cancelled() => break,
            _ = tokio::time::sleep(interval) => {
                emit_blocking(emitter)?;
            }
        }
    }

    tracing::debug!("Emitter cancelled");
    Err(DummylogError::Cancelled)
}

fn emit_blocking(emitter: &mut Emitter) -> Result<()> {
    match Handle::current().runtime_flavor() {
        RuntimeFlavor::MultiThread => tokio::task::block_in_place(|| emitter.emit()),
        _ => emitter.emit(),
    }
}
