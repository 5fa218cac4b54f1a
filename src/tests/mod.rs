
mod cfg;
mod jacobian;

pub use models::*;
pub use scenario::*;

use log::LevelFilter;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Once,
};

use crate::prelude::{EvaluationObserver, EvaluationReport};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .init();
    });
}

/// [CountingObserver] counts the diagnostics it receives.
#[derive(Debug, Default)]
pub struct CountingObserver {
    evaluated: AtomicUsize,
    non_finite: AtomicUsize,
}

impl CountingObserver {
    pub fn num_evaluated(&self) -> usize {
        self.evaluated.load(Ordering::Relaxed)
    }

    pub fn num_non_finite(&self) -> usize {
        self.non_finite.load(Ordering::Relaxed)
    }
}

impl EvaluationObserver for CountingObserver {
    fn evaluated(&self, _: &EvaluationReport) {
        self.evaluated.fetch_add(1, Ordering::Relaxed);
    }

    fn non_finite(&self, report: &EvaluationReport) {
        assert!(!report.standardized_residual.is_finite());
        self.non_finite.fetch_add(1, Ordering::Relaxed);
    }
}
