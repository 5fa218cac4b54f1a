use log::{trace, warn};

use crate::prelude::{Epoch, SV};

/// [EvaluationReport] describes one double difference residual evaluation.
/// It is forwarded to the [EvaluationObserver] once the numerical work is done.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EvaluationReport {
    /// Sampling [Epoch]
    pub epoch: Epoch,
    /// Epoch counter
    pub epoch_index: usize,
    /// Frequency band
    pub band: usize,
    /// Reference [SV]
    pub reference: SV,
    /// Non reference [SV]
    pub non_reference: SV,
    /// Raw residual, in meters
    pub raw_residual_m: f64,
    /// Standardized residual
    pub standardized_residual: f64,
    /// Reference ambiguity bias
    pub reference_bias: f64,
    /// Non reference ambiguity bias
    pub non_reference_bias: f64,
}

impl std::fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "epoch{}: dd_phase L{} {} - {}: raw residual: {:.10} standardized residual: {:.10} ref_bias: {:.5} non_ref_bias: {:.5}",
            self.epoch_index,
            self.band + 1,
            self.reference,
            self.non_reference,
            self.raw_residual_m,
            self.standardized_residual,
            self.reference_bias,
            self.non_reference_bias,
        )
    }
}

/// Diagnostics sink, invoked after each residual evaluation.
/// Observers are shared by parallel evaluators.
pub trait EvaluationObserver: Send + Sync {
    /// Called for every evaluation
    fn evaluated(&self, report: &EvaluationReport);

    /// Called when the standardized residual is not finite.
    /// This is a diagnostic only: the residual is still returned to the optimizer.
    fn non_finite(&self, report: &EvaluationReport);
}

/// [LogObserver] forwards diagnostics to the [log] facade.
#[derive(Debug, Copy, Clone, Default)]
pub struct LogObserver;

impl EvaluationObserver for LogObserver {
    fn evaluated(&self, report: &EvaluationReport) {
        trace!("{}", report);
    }

    fn non_finite(&self, report: &EvaluationReport) {
        warn!(
            "{}({}) - dd_phase {} - {}: residual is not finite",
            report.epoch, report.epoch_index, report.reference, report.non_reference
        );
    }
}

/// Silent observer
#[derive(Debug, Copy, Clone, Default)]
pub struct NullObserver;

impl EvaluationObserver for NullObserver {
    fn evaluated(&self, _: &EvaluationReport) {}
    fn non_finite(&self, _: &EvaluationReport) {}
}
