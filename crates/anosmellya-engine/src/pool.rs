//! Persistent fluid workers.
//!
//! Each worker owns one delegable field kind (plant, herb or carn) for the
//! life of the pool. Every tick the field's grid is moved into the worker
//! over its start channel and moved back over its done channel, so no
//! grid is ever shared. The baby field, and any field whose worker could
//! not be spawned, is updated on the calling thread while the workers run.
//!
//! # Rendezvous
//!
//! ```text
//! caller                     worker
//!   start_tx.send(job) ───▶    start_rx.recv()
//!   (sync fields)              update(grid)
//!   done_rx.recv()    ◀───     done_tx.send(grid)
//! ```
//!
//! Dropping the start sender ends the worker's receive loop; the pool then
//! joins the thread.

use std::mem;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use smallvec::SmallVec;

use anosmellya_core::FluidKind;
use anosmellya_fluid::{update, FluidRates};
use anosmellya_grid::Grid;

use crate::config::Config;

/// Most workers a pool will spawn: one per delegable field.
pub const MAX_WORKERS: usize = FluidKind::DELEGABLE.len();

/// A grid lent to a worker for one update.
struct FluidJob {
    grid: Grid<f32>,
    rates: FluidRates,
}

struct Worker {
    kind: FluidKind,
    start_tx: Sender<FluidJob>,
    done_rx: Receiver<Grid<f32>>,
    handle: JoinHandle<()>,
}

impl Worker {
    fn spawn(kind: FluidKind) -> std::io::Result<Self> {
        let (start_tx, start_rx) = crossbeam_channel::bounded(1);
        let (done_tx, done_rx) = crossbeam_channel::bounded(1);
        let handle = thread::Builder::new()
            .name(format!("anosmellya-fluid-{kind}"))
            .spawn(move || worker_loop(kind, start_rx, done_tx))?;
        Ok(Self {
            kind,
            start_tx,
            done_rx,
            handle,
        })
    }

    /// Close the start channel and wait for the thread to finish.
    fn retire(self) {
        let Worker {
            kind,
            start_tx,
            handle,
            ..
        } = self;
        drop(start_tx);
        if handle.join().is_err() {
            tracing::error!(%kind, "fluid worker panicked");
        }
    }
}

fn worker_loop(kind: FluidKind, start_rx: Receiver<FluidJob>, done_tx: Sender<Grid<f32>>) {
    while let Ok(mut job) = start_rx.recv() {
        update(&mut job.grid, job.rates);
        if done_tx.send(job.grid).is_err() {
            break;
        }
    }
    tracing::debug!(%kind, "fluid worker exiting");
}

/// Worker count for a `max_threads` hint.
///
/// One thread is always the caller's, so at most `max_threads - 1` workers
/// are used, capped at [`MAX_WORKERS`]. Zero means "use the available
/// hardware parallelism", and unlimited if that cannot be detected.
pub fn resolve_worker_count(max_threads: usize) -> usize {
    let max_threads = if max_threads == 0 {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(usize::MAX)
    } else {
        max_threads
    };
    max_threads.saturating_sub(1).min(MAX_WORKERS)
}

/// Fluid update scheduler: a few persistent workers plus the caller.
pub struct FluidPool {
    workers: SmallVec<[Worker; MAX_WORKERS]>,
}

impl FluidPool {
    /// Spawn up to `resolve_worker_count(max_threads)` workers.
    ///
    /// A worker that cannot be spawned is logged and its field falls back
    /// to the calling thread.
    pub fn new(max_threads: usize) -> Self {
        let wanted = resolve_worker_count(max_threads);
        let mut workers = SmallVec::new();
        for &kind in FluidKind::DELEGABLE.iter().take(wanted) {
            match Worker::spawn(kind) {
                Ok(worker) => workers.push(worker),
                Err(err) => {
                    tracing::warn!(%kind, %err, "cannot spawn fluid worker, updating synchronously");
                }
            }
        }
        Self { workers }
    }

    /// A pool that updates every field on the calling thread.
    pub fn synchronous() -> Self {
        Self {
            workers: SmallVec::new(),
        }
    }

    /// Number of live worker threads.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Field kinds currently handled by a worker.
    pub fn delegated(&self) -> impl Iterator<Item = FluidKind> + '_ {
        self.workers.iter().map(|w| w.kind)
    }

    /// Disperse and evaporate all four fields, indexed by
    /// [`FluidKind::index`], returning once every field is done.
    pub fn update(&mut self, fields: &mut [Grid<f32>; 4], config: &Config) {
        let mut lent: SmallVec<[usize; MAX_WORKERS]> = SmallVec::new();
        let mut failed: SmallVec<[usize; MAX_WORKERS]> = SmallVec::new();

        for (i, worker) in self.workers.iter().enumerate() {
            let slot = &mut fields[worker.kind.index()];
            let job = FluidJob {
                grid: mem::take(slot),
                rates: config.rates(worker.kind),
            };
            match worker.start_tx.send(job) {
                Ok(()) => lent.push(i),
                Err(returned) => {
                    tracing::error!(kind = %worker.kind, "fluid worker gone, updating synchronously");
                    *slot = returned.into_inner().grid;
                    failed.push(i);
                }
            }
        }

        for kind in FluidKind::ALL {
            let delegated = lent.iter().any(|&i| self.workers[i].kind == kind);
            if !delegated {
                update(&mut fields[kind.index()], config.rates(kind));
            }
        }

        for &i in &lent {
            let worker = &self.workers[i];
            match worker.done_rx.recv() {
                Ok(grid) => fields[worker.kind.index()] = grid,
                Err(_) => {
                    // The grid went down with the worker. Every other field
                    // still has its dimensions.
                    tracing::error!(kind = %worker.kind, "fluid worker lost its field, resetting it");
                    let (width, height) = fields
                        .iter()
                        .find(|g| !g.is_empty())
                        .map(|g| (g.width(), g.height()))
                        .unwrap_or((0, 0));
                    fields[worker.kind.index()] =
                        Grid::filled(width, height, 0.0).unwrap_or_default();
                    failed.push(i);
                }
            }
        }

        if !failed.is_empty() {
            failed.sort_unstable();
            for &i in failed.iter().rev() {
                self.workers.remove(i).retire();
            }
        }
    }
}

impl Drop for FluidPool {
    fn drop(&mut self) {
        for worker in self.workers.drain(..) {
            worker.retire();
        }
    }
}
