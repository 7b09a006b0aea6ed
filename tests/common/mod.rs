use payment_gateway::{MemorySink, PaymentDetails, Processor, ProcessorKind};
use rand::RngCore;
use std::sync::Arc;
use std::time::Duration;

/// Generator that always draws the shortest latency and a fixed outcome value
pub struct ForcedDraw {
    outcome_bits: u64,
}

impl ForcedDraw {
    /// Outcome draw of 0.0: succeeds for every profile with p > 0
    pub fn below() -> Self {
        ForcedDraw { outcome_bits: 0 }
    }

    /// Outcome draw just under 1.0: declines for every profile with p < 1
    pub fn above() -> Self {
        ForcedDraw {
            outcome_bits: u64::MAX,
        }
    }
}

impl RngCore for ForcedDraw {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        self.outcome_bits
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub fn details(pairs: &[(&str, &str)]) -> PaymentDetails {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn processor_with(
    kind: ProcessorKind,
    rng: ForcedDraw,
    time_unit: Duration,
) -> (Processor<ForcedDraw>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let processor = Processor::with_rng(kind, sink.clone(), time_unit, rng);
    (processor, sink)
}
