//! Double differenced carrier phase residual
use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::{
    constants::SPEED_OF_LIGHT_M_S,
    double_diff::DoubleDifference,
    model::SingleDifferenceModel,
    node::EpochNode,
    observer::{EvaluationObserver, EvaluationReport},
    prelude::{Config, Error, Vector3},
    provider::{Evaluation, JacobianRequest, ResidualProvider},
};

/// Rover position, reference ambiguity, non reference ambiguity.
const PARAMETER_BLOCK_SIZES: [usize; 3] = [3, 1, 1];

/// Read-only collaborators shared by all residual evaluators
/// of one optimization.
pub struct EvaluationContext<'a, M: SingleDifferenceModel> {
    /// [SingleDifferenceModel]
    pub model: &'a M,
    /// Navigation database, forwarded to the model
    pub navigation: &'a M::Navigation,
    /// [Config]
    pub cfg: &'a Config,
    /// [EvaluationObserver]
    pub observer: &'a dyn EvaluationObserver,
}

impl<M: SingleDifferenceModel> Clone for EvaluationContext<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: SingleDifferenceModel> Copy for EvaluationContext<'_, M> {}

impl<'a, M: SingleDifferenceModel> EvaluationContext<'a, M> {
    /// Builds a new [EvaluationContext] from its collaborators.
    pub fn new(
        model: &'a M,
        navigation: &'a M::Navigation,
        cfg: &'a Config,
        observer: &'a dyn EvaluationObserver,
    ) -> Self {
        Self {
            model,
            navigation,
            cfg,
            observer,
        }
    }
}

/// [DdPhaseFactor] evaluates one double differenced carrier phase observation:
/// standardized residual and its Jacobians with respect to the rover position
/// and both single difference ambiguity biases.
pub struct DdPhaseFactor<'a, M: SingleDifferenceModel> {
    ctx: EvaluationContext<'a, M>,
    node: &'a EpochNode,
    index: usize,
    dd: DoubleDifference,
    std_dev: f64,
}

impl<'a, M: SingleDifferenceModel> DdPhaseFactor<'a, M> {
    /// Builds a new [DdPhaseFactor] for the [DoubleDifference] stored at this index
    /// within the [EpochNode]. The record is captured by value, the node is borrowed
    /// for the lifetime of the optimization.
    pub fn new(
        ctx: EvaluationContext<'a, M>,
        node: &'a EpochNode,
        index: usize,
    ) -> Result<Self, Error> {
        ctx.cfg.validate()?;

        let dd = *node.double_difference(index)?;

        let std_dev = dd
            .std_dev()
            .ok_or(Error::NonPositiveVariance(index, dd.variance))?;

        if dd.band >= ctx.cfg.num_frequencies() {
            return Err(Error::InvalidFrequencyBand(dd.band));
        }

        node.rover_satellite(dd.reference)?;
        node.rover_satellite(dd.non_reference)?;
        node.baseline_correction_m(index)?;

        Ok(Self {
            ctx,
            node,
            index,
            dd,
            std_dev,
        })
    }

    /// Builds one [DdPhaseFactor] per [DoubleDifference] of this [EpochNode].
    pub fn all(ctx: EvaluationContext<'a, M>, node: &'a EpochNode) -> Result<Vec<Self>, Error> {
        let factors = (0..node.double_differences().len())
            .map(|index| Self::new(ctx, node, index))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "{}({}) - {} dd_phase factors",
            node.epoch,
            node.index,
            factors.len()
        );

        Ok(factors)
    }

    /// [DoubleDifference] this factor represents
    pub fn double_difference(&self) -> &DoubleDifference {
        &self.dd
    }

    /// Index of the [DoubleDifference] within the [EpochNode]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Measurement standard deviation (m)
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl<M: SingleDifferenceModel> ResidualProvider for DdPhaseFactor<'_, M> {
    fn parameter_block_sizes(&self) -> &[usize] {
        &PARAMETER_BLOCK_SIZES
    }

    fn residual_dimension(&self) -> usize {
        1
    }

    fn evaluate(
        &self,
        parameters: &[&[f64]],
        request: JacobianRequest,
    ) -> Result<Evaluation, Error> {
        self.check_parameters(parameters)?;

        let position_ecef_m = Vector3::from_row_slice(parameters[0]);
        let (ref_bias, non_ref_bias) = (parameters[1][0], parameters[2][0]);

        let reference = self.node.rover_satellite(self.dd.reference)?;
        let non_reference = self.node.rover_satellite(self.dd.non_reference)?;

        let sd_ref = self.ctx.model.single_difference(
            &reference.observation,
            &reference.state,
            self.ctx.navigation,
            &position_ecef_m,
            self.ctx.cfg,
        )?;

        let sd_non_ref = self.ctx.model.single_difference(
            &non_reference.observation,
            &non_reference.state,
            self.ctx.navigation,
            &position_ecef_m,
            self.ctx.cfg,
        )?;

        let band = self.dd.band;
        let frequency_hz = sd_ref.frequency_hz(band)?;
        let wavelength_m = SPEED_OF_LIGHT_M_S / frequency_hz;

        let raw_residual_m = sd_ref.phase_residual_m(band)?
            - sd_non_ref.phase_residual_m(band)?
            - self.node.baseline_correction_m(self.index)?
            - wavelength_m * (ref_bias - non_ref_bias);

        let residual = raw_residual_m / self.std_dev;

        let mut jacobians = vec![None; PARAMETER_BLOCK_SIZES.len()];

        if request.wants(0) {
            let los = (sd_ref.line_of_sight - sd_non_ref.line_of_sight) / self.std_dev;
            jacobians[0] = Some(DMatrix::from_row_slice(1, 3, los.as_slice()));
        }

        if request.wants(1) {
            jacobians[1] = Some(DMatrix::from_element(1, 1, -wavelength_m / self.std_dev));
        }

        if request.wants(2) {
            jacobians[2] = Some(DMatrix::from_element(1, 1, wavelength_m / self.std_dev));
        }

        let report = EvaluationReport {
            epoch: self.node.epoch,
            epoch_index: self.node.index,
            band,
            reference: reference.sv,
            non_reference: non_reference.sv,
            raw_residual_m,
            standardized_residual: residual,
            reference_bias: ref_bias,
            non_reference_bias: non_ref_bias,
        };

        self.ctx.observer.evaluated(&report);

        if !residual.is_finite() {
            self.ctx.observer.non_finite(&report);
        }

        Ok(Evaluation {
            residuals: DVector::from_element(1, residual),
            jacobians,
        })
    }
}
