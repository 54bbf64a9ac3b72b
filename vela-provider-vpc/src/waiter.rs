//! Delete waiter
//!
//! Some resources delete asynchronously: the remove call is accepted and
//! the resource lingers in a deleting state until it finally 404s. The
//! waiter polls at a fixed interval until the probe reports the resource
//! absent or the timeout elapses. There is no cancellation path other
//! than timeout expiry.

use std::time::Duration;

use vela_core::provider::{ProviderError, ProviderResult};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_DELETE_TIMEOUT: Duration = Duration::from_secs(600);

/// Poll `probe` until it reports the resource absent (`false`) or the
/// timeout elapses. Probe errors propagate immediately.
pub async fn wait_until_absent<F, Fut>(
    mut probe: F,
    interval: Duration,
    timeout: Duration,
) -> ProviderResult<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ProviderResult<bool>>,
{
    let mut waited = Duration::ZERO;

    loop {
        if !probe().await? {
            return Ok(());
        }

        if waited >= timeout {
            return Err(ProviderError::new(format!(
                "Timed out after {:?} waiting for deletion",
                timeout
            )));
        }

        tokio::time::sleep(interval).await;
        waited += interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn resolves_once_probe_reports_absent() {
        let remaining = Cell::new(3u32);
        wait_until_absent(
            || {
                let still_present = remaining.get() > 0;
                remaining.set(remaining.get().saturating_sub(1));
                async move { Ok(still_present) }
            },
            Duration::from_millis(1),
            Duration::from_secs(1),
        )
        .await
        .unwrap();
        assert_eq!(remaining.get(), 0);
    }

    #[tokio::test]
    async fn times_out_when_resource_never_disappears() {
        let err = wait_until_absent(
            || async { Ok(true) },
            Duration::from_millis(5),
            Duration::from_millis(20),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("Timed out"));
    }

    #[tokio::test]
    async fn probe_error_propagates_immediately() {
        let err = wait_until_absent(
            || async { Err(ProviderError::new("probe failed")) },
            Duration::from_millis(1),
            Duration::from_secs(1),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("probe failed"));
    }
}
