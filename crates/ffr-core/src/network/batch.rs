use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::config::FetchSettings;
use crate::network::FetchBytes;
use crate::retry::RetryStrategy;

/// Fetch a single URL, retrying according to `strategy`.
///
/// Returns `None` once every attempt has failed; the failure is logged and
/// never propagated.
pub async fn fetch_with_retry<F, S>(fetcher: &F, url: &str, strategy: &S) -> Option<Vec<u8>>
where
    F: FetchBytes,
    S: RetryStrategy,
{
    let max_attempts = strategy.max_attempts();
    let result = strategy
        .execute(|attempt| async move {
            let result = fetcher.get_bytes(url).await;
            if let Err(e) = &result {
                debug!(
                    "Fetching {} failed (attempt {}/{}): {}",
                    url,
                    attempt + 1,
                    max_attempts,
                    e
                );
            }
            result
        })
        .await;

    match result {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!("Unable to fetch {}: {}", url, e);
            None
        }
    }
}

/// Fetch every URL in fixed-size batches.
///
/// Requests within a batch run concurrently; the next batch starts only after
/// the whole previous batch has finished plus the configured cool-down.
/// `result[i]` always corresponds to `urls[i]`.
pub async fn fetch_batched<F>(
    fetcher: &F,
    urls: &[String],
    settings: &FetchSettings,
) -> Vec<Option<Vec<u8>>>
where
    F: FetchBytes,
{
    let total = urls.len();
    let mut results = Vec::with_capacity(total);

    for (batch_index, batch) in urls.chunks(settings.batch_size.max(1)).enumerate() {
        if batch_index > 0 {
            tokio::time::sleep(settings.cooldown).await;
        }

        let payloads = join_all(
            batch
                .iter()
                .map(|url| fetch_with_retry(fetcher, url, &settings.retry)),
        )
        .await;
        results.extend(payloads);

        info!("{} / {} note sequences fetched", results.len(), total);
    }

    results
}
