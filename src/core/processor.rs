//! Generic payment processor
//!
//! One algorithm serves every backend; a [`ProcessorProfile`] supplies the
//! per-kind field set, success probability and log wording.
//!
//! # Call sequence
//!
//! `Start → Simulating → Validating → {Failed(MissingField) | Succeeded | Failed(Declined)}`
//!
//! 1. Log the attempt (amount, currency, credential fields)
//! 2. Sleep for 1 to 3 time units, drawn uniformly
//! 3. Check required fields in declared order; stop at the first missing one
//! 4. Draw `u` in `[0, 1)`; succeed when `u < success_probability`
//!
//! The delay happens before validation, so an invalid request still waits.
//!
//! # Randomness
//!
//! Each processor owns its own generator behind a mutex. Seeding it (see
//! [`GatewayConfig::seed`]) makes a sequence of calls reproducible; the mutex
//! only serializes draws, it is never held across the sleep.

use crate::config::GatewayConfig;
use crate::core::traits::{LogSink, PaymentProcessor};
use crate::types::{FailureReason, Outcome, PaymentDetails, ProcessorKind, ProcessorProfile};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

/// Inclusive range of simulated latency, in time units
const LATENCY_UNITS: std::ops::RangeInclusive<u32> = 1..=3;

/// Profile-driven processor shared by all backend kinds
pub struct Processor<R = StdRng> {
    profile: &'static ProcessorProfile,
    sink: Arc<dyn LogSink>,
    rng: Mutex<R>,
    time_unit: Duration,
}

impl Processor<StdRng> {
    /// Create a processor for `kind` using the gateway configuration
    ///
    /// With a configured seed the generator is seeded with
    /// `seed + kind.index()`; otherwise it is seeded from OS entropy.
    pub fn new(kind: ProcessorKind, sink: Arc<dyn LogSink>, config: &GatewayConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(kind.index() as u64)),
            None => StdRng::from_entropy(),
        };
        Processor::with_rng(kind, sink, config.time_unit, rng)
    }
}

impl<R: RngCore + Send> Processor<R> {
    /// Create a processor with an explicit generator and time unit
    pub fn with_rng(
        kind: ProcessorKind,
        sink: Arc<dyn LogSink>,
        time_unit: Duration,
        rng: R,
    ) -> Self {
        Processor {
            profile: kind.profile(),
            sink,
            rng: Mutex::new(rng),
            time_unit,
        }
    }

    pub fn profile(&self) -> &'static ProcessorProfile {
        self.profile
    }

    pub fn time_unit(&self) -> Duration {
        self.time_unit
    }

    fn rng(&self) -> MutexGuard<'_, R> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn simulate_latency(&self) {
        let units = self.rng().gen_range(LATENCY_UNITS);
        let delay = self.time_unit * units;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    fn fail(&self, reason: FailureReason) -> Outcome {
        self.sink.error(&format!("Error: {}", reason));
        Outcome::Failed(reason)
    }
}

impl<R: RngCore + Send> PaymentProcessor for Processor<R> {
    fn kind(&self) -> ProcessorKind {
        self.profile.kind
    }

    fn process_payment(
        &self,
        amount: Decimal,
        currency: &str,
        details: &PaymentDetails,
    ) -> Outcome {
        let profile = self.profile;
        self.sink
            .info(&profile.describe_attempt(amount, currency, details));

        self.simulate_latency();

        if let Some(field) = profile.first_missing_field(details) {
            return self.fail(FailureReason::missing_field(profile.kind, field));
        }

        let draw: f64 = self.rng().gen();
        if draw < profile.success_probability {
            self.sink
                .info(&profile.describe_success(amount, currency, details));
            Outcome::Succeeded
        } else {
            self.fail(FailureReason::declined(profile.kind))
        }
    }
}
