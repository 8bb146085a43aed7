//! Worker pool for batches of independent items.
//!
//! Items are split into contiguous chunks, one per worker, and each chunk
//! runs on tokio's blocking pool. Workers own their RNG, nothing is shared
//! between them apart from the cancellation token.

use std::sync::Arc;

use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::error::{PolicyError, PoolError};
use crate::evaluator::score;
use crate::generator::generate;
use crate::random::RandomSource;
use crate::types::{GenerationPolicy, Password, StrengthReport};

/// Generates one password per policy, in parallel.
///
/// Output order matches `policies`. A rejected policy yields an `Err` in
/// its slot without affecting the other items. With a seeded source the
/// output is reproducible for a given worker count.
pub async fn generate_many(
    policies: Vec<GenerationPolicy>,
    source: RandomSource,
    workers: usize,
    token: CancellationToken,
) -> Result<Vec<Result<Password, PolicyError>>, PoolError> {
    map_chunked(
        policies,
        workers,
        token,
        move |worker| source.worker_rng(worker),
        |rng, _index, policy| generate(&policy, &mut **rng),
    )
    .await
}

/// Scores every password, in parallel. Output order matches `passwords`.
pub async fn score_many(
    passwords: Vec<SecretString>,
    workers: usize,
    token: CancellationToken,
) -> Result<Vec<StrengthReport>, PoolError> {
    map_chunked(passwords, workers, token, |_| (), |_, _index, pwd| score(&pwd)).await
}

/// Scores every password and streams `(input index, report)` pairs through
/// `tx` as workers finish them.
///
/// Pairs arrive in completion order; the receiver re-pairs them with the
/// inputs by index.
pub async fn score_many_tx(
    passwords: Vec<SecretString>,
    workers: usize,
    token: CancellationToken,
    tx: mpsc::Sender<(usize, StrengthReport)>,
) -> Result<(), PoolError> {
    map_chunked(passwords, workers, token, |_| (), move |_, index, pwd| {
        let report = score(&pwd);
        if let Err(_e) = tx.blocking_send((index, report)) {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send strength report {}: {}", index, _e);
        }
    })
    .await?;
    Ok(())
}

async fn map_chunked<T, U, S, I, F>(
    items: Vec<T>,
    workers: usize,
    token: CancellationToken,
    init: I,
    f: F,
) -> Result<Vec<U>, PoolError>
where
    T: Send + 'static,
    U: Send + 'static,
    I: Fn(usize) -> S + Send + Sync + 'static,
    F: Fn(&mut S, usize, T) -> U + Send + Sync + 'static,
{
    let total = items.len();
    let chunks = split_chunks(items, workers);

    #[cfg(feature = "tracing")]
    tracing::debug!("processing {} items on {} workers", total, chunks.len());

    let init = Arc::new(init);
    let f = Arc::new(f);
    let mut set = JoinSet::new();

    for (worker, chunk) in chunks.into_iter().enumerate() {
        let init = Arc::clone(&init);
        let f = Arc::clone(&f);
        let token = token.clone();
        set.spawn_blocking(move || {
            let mut state = init(worker);
            let mut out = Vec::with_capacity(chunk.len());
            for (index, item) in chunk {
                if token.is_cancelled() {
                    return Err(PoolError::Cancelled);
                }
                out.push((index, f(&mut state, index, item)));
            }
            Ok(out)
        });
    }

    let mut results = Vec::with_capacity(total);
    while let Some(joined) = set.join_next().await {
        match joined? {
            Ok(part) => results.extend(part),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("batch stopped: {}", e);
                return Err(e);
            }
        }
    }

    results.sort_unstable_by_key(|(index, _)| *index);
    Ok(results.into_iter().map(|(_, value)| value).collect())
}

/// Splits `items` into at most `workers` contiguous chunks tagged with
/// their input index. Zero workers counts as one.
fn split_chunks<T>(items: Vec<T>, workers: usize) -> Vec<Vec<(usize, T)>> {
    let chunk_size = items.len().div_ceil(workers.max(1)).max(1);
    let mut chunks: Vec<Vec<(usize, T)>> = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        if index % chunk_size == 0 {
            chunks.push(Vec::with_capacity(chunk_size));
        }
        if let Some(chunk) = chunks.last_mut() {
            chunk.push((index, item));
        }
    }
    chunks
}
