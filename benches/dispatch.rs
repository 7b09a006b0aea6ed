//! Benchmark suite for the dispatch path
//!
//! Measures dispatcher + processor overhead with a zero latency unit, so the
//! numbers reflect validation, outcome draws and log formatting only.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use payment_gateway::{
    sample_requests, Gateway, GatewayConfig, LogSink, MemorySink, PaymentRequest, ProcessorKind,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;

fn main() {
    divan::main();
}

/// Sink that discards every line
struct NullSink;

impl LogSink for NullSink {
    fn emit(&self, _level: Level, _line: &str) {}
}

fn gateway(sink: Arc<dyn LogSink>) -> Gateway {
    let config = GatewayConfig {
        time_unit: Duration::ZERO,
        seed: Some(7),
        ..GatewayConfig::default()
    };
    Gateway::new(&config, sink)
}

/// One complete request per backend, discarding log output
#[divan::bench]
fn dispatch_samples_null_sink(bencher: divan::Bencher) {
    let gateway = gateway(Arc::new(NullSink));
    let requests = sample_requests();

    bencher.bench_local(|| gateway.run(divan::black_box(&requests)));
}

/// One complete request per backend, recording log output in memory
#[divan::bench]
fn dispatch_samples_memory_sink(bencher: divan::Bencher) {
    let sink = Arc::new(MemorySink::new());
    let gateway = gateway(sink.clone());
    let requests = sample_requests();

    bencher.bench_local(|| {
        sink.clear();
        gateway.run(divan::black_box(&requests))
    });
}

/// Requests rejected by the dispatcher guard never reach a processor
#[divan::bench]
fn dispatch_absent_details(bencher: divan::Bencher) {
    let gateway = gateway(Arc::new(NullSink));
    let request = PaymentRequest::without_details(ProcessorKind::CardNetwork, Decimal::ONE, "USD");

    bencher.bench_local(|| gateway.submit(divan::black_box(&request)));
}
