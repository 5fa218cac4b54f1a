use rand::{prelude::*, rngs::SmallRng, SeedableRng};
use rstest::*;

use log::info;

use crate::{
    prelude::{
        check_jacobian, Carrier, Config, DdPhaseFactor, Error, Evaluation, EvaluationContext,
        JacobianCheckOptions, JacobianRequest, NullObserver, ResidualProvider,
    },
    tests::{init_logger, rover_coords_ecef_m, GeometricModel, Scenario, TestNavigation},
};

use nalgebra::{DMatrix, DVector};

#[rstest]
#[case(&[Carrier::L1], 0.0)]
#[case(&[Carrier::L1, Carrier::L2], 0.05)]
#[case(&[Carrier::L1, Carrier::L5], -1.25)]
fn finite_difference_consistency(#[case] carriers: &[Carrier], #[case] baseline_m: f64) {
    init_logger();

    let cfg = Config::default().with_frequencies(carriers.len());
    let navigation = TestNavigation::default();
    let scenario = Scenario::new(carriers, baseline_m);
    let ctx = EvaluationContext::new(&GeometricModel, &navigation, &cfg, &NullObserver);

    let factors = DdPhaseFactor::all(ctx, &scenario.node).unwrap();

    let mut rng = SmallRng::seed_from_u64(1234);
    let options = JacobianCheckOptions {
        relative_step: 1.0E-5,
    };

    for _ in 0..10 {
        let offset_m = (
            rng.random_range(-50.0..50.0),
            rng.random_range(-50.0..50.0),
            rng.random_range(-50.0..50.0),
        );

        let position = rover_coords_ecef_m();

        let position = [
            position[0] + offset_m.0,
            position[1] + offset_m.1,
            position[2] + offset_m.2,
        ];

        for factor in factors.iter() {
            let ref_bias = [rng.random_range(-20.0..20.0)];
            let non_ref_bias = [rng.random_range(-20.0..20.0)];

            let parameters: [&[f64]; 3] = [&position, &ref_bias, &non_ref_bias];

            let check = check_jacobian(factor, &parameters, &options).unwrap();

            info!(
                "{} - jacobian max relative errors: {:?}",
                factor.double_difference(),
                check.max_relative_error
            );

            assert!(
                check.is_consistent(1.0E-6),
                "{}: inconsistent jacobian {:?}\nanalytic: {:?}\nnumeric: {:?}",
                factor.double_difference(),
                check.max_relative_error,
                check.analytic,
                check.numeric,
            );
        }
    }
}

/// y = a * x0 + b * x1², jacobian is deliberately wrong on x1 when `broken`.
struct Quadratic {
    broken: bool,
}

impl ResidualProvider for Quadratic {
    fn parameter_block_sizes(&self) -> &[usize] {
        &[1, 1]
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

        let (x0, x1) = (parameters[0][0], parameters[1][0]);

        let mut jacobians = vec![None, None];

        if request.wants(0) {
            jacobians[0] = Some(DMatrix::from_element(1, 1, 3.0));
        }

        if request.wants(1) {
            let dx1 = if self.broken { 2.0 * x1 } else { 4.0 * x1 };
            jacobians[1] = Some(DMatrix::from_element(1, 1, dx1));
        }

        Ok(Evaluation {
            residuals: DVector::from_element(1, 3.0 * x0 + 2.0 * x1 * x1),
            jacobians,
        })
    }
}

#[test]
fn jacobian_checker() {
    let options = JacobianCheckOptions::default();
    let parameters: [&[f64]; 2] = [&[1.5], &[-4.0]];

    let check = check_jacobian(&Quadratic { broken: false }, &parameters, &options).unwrap();
    assert!(check.is_consistent(1.0E-6), "{:?}", check.max_relative_error);
    assert_eq!(check.analytic.len(), 2);
    assert_eq!(check.numeric.len(), 2);

    let check = check_jacobian(&Quadratic { broken: true }, &parameters, &options).unwrap();
    assert!(check.max_relative_error[0] < 1.0E-6);
    assert!(check.max_relative_error[1] > 0.1);
    assert!(!check.is_consistent(1.0E-6));

    assert_eq!(
        check_jacobian(&Quadratic { broken: false }, &[&[1.5]], &options).err(),
        Some(Error::ParameterBlockCount {
            expected: 2,
            got: 1
        })
    );
}

/// Declares two residuals, returns malformed outputs.
enum Malformed {
    ShortResiduals,
    WideJacobian,
}

impl ResidualProvider for Malformed {
    fn parameter_block_sizes(&self) -> &[usize] {
        &[1]
    }

    fn residual_dimension(&self) -> usize {
        2
    }

    fn evaluate(
        &self,
        parameters: &[&[f64]],
        request: JacobianRequest,
    ) -> Result<Evaluation, Error> {
        self.check_parameters(parameters)?;

        let x = parameters[0][0];

        let (residuals, jacobian) = match self {
            Self::ShortResiduals => (
                DVector::from_element(1, x),
                DMatrix::from_element(2, 1, 1.0),
            ),
            Self::WideJacobian => (
                DVector::from_element(2, x),
                DMatrix::from_element(2, 2, 1.0),
            ),
        };

        Ok(Evaluation {
            residuals,
            jacobians: vec![request.wants(0).then_some(jacobian)],
        })
    }
}

#[test]
fn jacobian_checker_dimensions() {
    let options = JacobianCheckOptions::default();
    let parameters: [&[f64]; 1] = [&[0.5]];

    assert_eq!(
        check_jacobian(&Malformed::ShortResiduals, &parameters, &options).err(),
        Some(Error::ResidualDimension {
            expected: 2,
            got: 1
        })
    );

    assert_eq!(
        check_jacobian(&Malformed::WideJacobian, &parameters, &options).err(),
        Some(Error::JacobianShape {
            block: 0,
            expected: (2, 1),
            got: (2, 2),
        })
    );
}
