use nalgebra::{DMatrix, DVector};

use crate::prelude::Error;

/// Which Jacobian blocks the optimizer is requesting.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum JacobianRequest<'a> {
    /// Residual only
    #[default]
    None,
    /// All parameter blocks
    All,
    /// Per block flags. Missing flags are interpreted as not requested.
    Blocks(&'a [bool]),
}

impl JacobianRequest<'_> {
    /// True if Jacobian of this parameter block is requested
    pub fn wants(&self, block: usize) -> bool {
        match self {
            Self::None => false,
            Self::All => true,
            Self::Blocks(flags) => flags.get(block).copied().unwrap_or(false),
        }
    }

    /// True if at least one Jacobian block is requested
    pub fn any(&self) -> bool {
        match self {
            Self::None => false,
            Self::All => true,
            Self::Blocks(flags) => flags.iter().any(|flag| *flag),
        }
    }
}

/// [Evaluation] returned by any [ResidualProvider].
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Residual vector
    pub residuals: DVector<f64>,
    /// One Jacobian block per parameter block (when requested),
    /// shaped (residual dimension x parameter block size).
    pub jacobians: Vec<Option<DMatrix<f64>>>,
}

impl Evaluation {
    /// Residual at this row
    pub fn residual(&self, row: usize) -> Option<f64> {
        self.residuals.get(row).copied()
    }

    /// Jacobian of this parameter block, if it was requested.
    pub fn jacobian(&self, block: usize) -> Option<&DMatrix<f64>> {
        self.jacobians.get(block)?.as_ref()
    }

    /// Jacobian of this parameter block, flattened in row-major order.
    pub fn jacobian_row_major(&self, block: usize) -> Option<Vec<f64>> {
        let jacobian = self.jacobian(block)?;
        Some(jacobian.transpose().as_slice().to_vec())
    }

    /// ½ ‖r‖²
    pub fn cost(&self) -> f64 {
        0.5 * self.residuals.norm_squared()
    }

    /// True if all residuals are finite.
    pub fn is_finite(&self) -> bool {
        self.residuals.iter().all(|r| r.is_finite())
    }
}

/// Any residual (cost function) contributing to a nonlinear least squares
/// problem implements [ResidualProvider]. The optimizer owns the parameter
/// blocks and only proposes their current values: providers never mutate them.
pub trait ResidualProvider {
    /// Size of each parameter block, in order.
    fn parameter_block_sizes(&self) -> &[usize];

    /// Dimension of the residual vector.
    fn residual_dimension(&self) -> usize;

    /// Evaluate residuals, and the requested Jacobian blocks, at this point.
    fn evaluate(
        &self,
        parameters: &[&[f64]],
        request: JacobianRequest,
    ) -> Result<Evaluation, Error>;

    /// Verifies the proposed parameter blocks match [Self::parameter_block_sizes].
    fn check_parameters(&self, parameters: &[&[f64]]) -> Result<(), Error> {
        let sizes = self.parameter_block_sizes();

        if parameters.len() != sizes.len() {
            return Err(Error::ParameterBlockCount {
                expected: sizes.len(),
                got: parameters.len(),
            });
        }

        for (block, (params, size)) in parameters.iter().zip(sizes.iter()).enumerate() {
            if params.len() != *size {
                return Err(Error::ParameterBlockSize {
                    block,
                    expected: *size,
                    got: params.len(),
                });
            }
        }

        Ok(())
    }
}
