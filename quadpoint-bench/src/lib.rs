//! Benchmark support for the quadpoint quadtree.

pub mod data_gen;

/// Initializes `env_logger` once so `RUST_LOG=debug` exposes construction
/// logging during benchmark runs.
pub fn init_logging() {
    let _ = env_logger::builder().try_init();
}
