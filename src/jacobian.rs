//! Finite difference verification of analytic Jacobians
use nalgebra::DMatrix;

use crate::{
    prelude::Error,
    provider::{Evaluation, JacobianRequest, ResidualProvider},
};

/// [JacobianCheckOptions] to run [check_jacobian]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JacobianCheckOptions {
    /// Perturbation, relative to the parameter magnitude (with a floor of 1).
    pub relative_step: f64,
}

impl Default for JacobianCheckOptions {
    fn default() -> Self {
        Self {
            relative_step: 1.0E-6,
        }
    }
}

/// Result of one [check_jacobian] run
#[derive(Debug, Clone, PartialEq)]
pub struct JacobianCheck {
    /// Analytic Jacobian, per parameter block
    pub analytic: Vec<DMatrix<f64>>,
    /// Central difference Jacobian, per parameter block
    pub numeric: Vec<DMatrix<f64>>,
    /// Maximal relative error, per parameter block
    pub max_relative_error: Vec<f64>,
}

impl JacobianCheck {
    /// True when all blocks agree within this relative tolerance.
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        self.max_relative_error
            .iter()
            .all(|err| err.is_finite() && *err <= tolerance)
    }
}

/// Evaluates and verifies the residual dimension.
fn checked_residuals<P: ResidualProvider + ?Sized>(
    provider: &P,
    parameters: &[&[f64]],
    request: JacobianRequest,
) -> Result<Evaluation, Error> {
    let evaluation = provider.evaluate(parameters, request)?;
    let expected = provider.residual_dimension();

    if evaluation.residuals.len() != expected {
        return Err(Error::ResidualDimension {
            expected,
            got: evaluation.residuals.len(),
        });
    }

    Ok(evaluation)
}

fn relative_error(analytic: f64, numeric: f64) -> f64 {
    let scale = analytic.abs().max(numeric.abs()).max(1.0);
    (analytic - numeric).abs() / scale
}

/// Compares the analytic Jacobian of this [ResidualProvider] to its
/// central difference approximation, at this point.
pub fn check_jacobian<P: ResidualProvider + ?Sized>(
    provider: &P,
    parameters: &[&[f64]],
    options: &JacobianCheckOptions,
) -> Result<JacobianCheck, Error> {
    provider.check_parameters(parameters)?;

    let rows = provider.residual_dimension();
    let evaluation = checked_residuals(provider, parameters, JacobianRequest::All)?;

    let mut blocks = parameters.iter().map(|p| p.to_vec()).collect::<Vec<_>>();

    let mut analytic = Vec::with_capacity(blocks.len());
    let mut numeric = Vec::with_capacity(blocks.len());
    let mut max_relative_error = Vec::with_capacity(blocks.len());

    for block in 0..blocks.len() {
        let cols = blocks[block].len();

        let jac = evaluation
            .jacobian(block)
            .cloned()
            .unwrap_or_else(|| DMatrix::zeros(rows, cols));

        if jac.shape() != (rows, cols) {
            return Err(Error::JacobianShape {
                block,
                expected: (rows, cols),
                got: jac.shape(),
            });
        }

        let mut num = DMatrix::<f64>::zeros(rows, cols);

        for col in 0..cols {
            let x = blocks[block][col];
            let h = options.relative_step * x.abs().max(1.0);

            blocks[block][col] = x + h;
            let plus = {
                let views = blocks.iter().map(|b| b.as_slice()).collect::<Vec<_>>();
                checked_residuals(provider, &views, JacobianRequest::None)?.residuals
            };

            blocks[block][col] = x - h;
            let minus = {
                let views = blocks.iter().map(|b| b.as_slice()).collect::<Vec<_>>();
                checked_residuals(provider, &views, JacobianRequest::None)?.residuals
            };

            blocks[block][col] = x;

            for row in 0..rows {
                num[(row, col)] = (plus[row] - minus[row]) / (2.0 * h);
            }
        }

        let err = jac
            .iter()
            .zip(num.iter())
            .map(|(a, n)| relative_error(*a, *n))
            .fold(0.0_f64, |acc, err| {
                // NaN must not be swallowed by max()
                if acc.is_nan() || err.is_nan() {
                    f64::NAN
                } else {
                    acc.max(err)
                }
            });

        analytic.push(jac);
        numeric.push(num);
        max_relative_error.push(err);
    }

    Ok(JacobianCheck {
        analytic,
        numeric,
        max_relative_error,
    })
}
