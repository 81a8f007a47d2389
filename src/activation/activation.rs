use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// A scalar activation function paired with its derivative.
///
/// Both methods take the *induced* (pre-activation) value `v`, not the
/// activation output. Backpropagation relies on this: the derivative is
/// always evaluated at the value that was fed into `function`.
pub trait Activation {
    fn function(&self, v: f64) -> f64;
    fn derivative(&self, v: f64) -> f64;
}

/// Built-in activation functions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivationFunction {
    /// Logistic sigmoid `1 / (1 + e^-v)`, range (0, 1).
    #[default]
    Sigmoid,
    /// Logistic curve with slope `a`: `1 / (1 + e^(-a·v))`.
    Logistic { a: f64 },
    Tanh,
    Arctan,
    /// `a · v`.
    Linear { a: f64 },
    /// `upper` for `v >= x0`, `lower` otherwise. Its derivative is zero
    /// everywhere, so a network built from it never learns.
    Step { upper: f64, lower: f64, x0: f64 },
}

impl Activation for ActivationFunction {
    fn function(&self, v: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => sigmoid(v),
            ActivationFunction::Logistic { a } => sigmoid(a * v),
            ActivationFunction::Tanh => v.tanh(),
            ActivationFunction::Arctan => v.atan(),
            ActivationFunction::Linear { a } => a * v,
            ActivationFunction::Step { upper, lower, x0 } => {
                if v >= *x0 { *upper } else { *lower }
            }
        }
    }

    fn derivative(&self, v: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fv = sigmoid(v);
                fv * (1.0 - fv)
            }
            ActivationFunction::Logistic { a } => {
                let fv = sigmoid(a * v);
                a * fv * (1.0 - fv)
            }
            ActivationFunction::Tanh => {
                let c = v.cosh();
                1.0 / (c * c)
            }
            ActivationFunction::Arctan => 1.0 / (1.0 + v * v),
            ActivationFunction::Linear { a } => *a,
            ActivationFunction::Step { .. } => 0.0,
        }
    }
}

impl<T: Activation + ?Sized> Activation for &T {
    fn function(&self, v: f64) -> f64 {
        (**self).function(v)
    }

    fn derivative(&self, v: f64) -> f64 {
        (**self).derivative(v)
    }
}

impl<T: Activation + ?Sized> Activation for Box<T> {
    fn function(&self, v: f64) -> f64 {
        (**self).function(v)
    }

    fn derivative(&self, v: f64) -> f64 {
        (**self).derivative(v)
    }
}

/// Logistic sigmoid, `1 / (1 + e^-v)`.
pub fn sigmoid(v: f64) -> f64 {
    1.0 / (1.0 + E.powf(-v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_derivative(act: &ActivationFunction, v: f64) -> f64 {
        let h = 1e-6;
        (act.function(v + h) - act.function(v - h)) / (2.0 * h)
    }

    #[test]
    fn sigmoid_is_bounded_and_centered() {
        assert_eq!(sigmoid(0.0), 0.5);
        for v in [-30.0, -2.0, -0.1, 0.1, 2.0, 30.0] {
            let y = sigmoid(v);
            assert!(y > 0.0 && y < 1.0, "sigmoid({v}) = {y}");
        }
    }

    #[test]
    fn sigmoid_derivative_matches_product_form() {
        let act = ActivationFunction::Sigmoid;
        for v in [-3.0, -0.5, 0.0, 0.7, 4.0] {
            let fv = act.function(v);
            assert!((act.derivative(v) - fv * (1.0 - fv)).abs() < 1e-15);
        }
        assert_eq!(act.derivative(0.0), 0.25);
    }

    #[test]
    fn smooth_derivatives_agree_with_finite_differences() {
        let acts = [
            ActivationFunction::Sigmoid,
            ActivationFunction::Logistic { a: 2.0 },
            ActivationFunction::Tanh,
            ActivationFunction::Arctan,
            ActivationFunction::Linear { a: 2.5 },
        ];
        for act in &acts {
            for v in [-1.5, -0.2, 0.0, 0.3, 2.0] {
                let analytic = act.derivative(v);
                let numeric = numeric_derivative(act, v);
                assert!(
                    (analytic - numeric).abs() < 1e-6,
                    "{act:?} at {v}: {analytic} vs {numeric}"
                );
            }
        }
    }

    #[test]
    fn logistic_with_unit_slope_is_sigmoid() {
        let logistic = ActivationFunction::Logistic { a: 1.0 };
        let plain = ActivationFunction::Sigmoid;
        for v in [-2.0, 0.0, 1.3] {
            assert_eq!(logistic.function(v), plain.function(v));
            assert_eq!(logistic.derivative(v), plain.derivative(v));
        }
    }

    #[test]
    fn step_switches_at_threshold() {
        let step = ActivationFunction::Step { upper: 1.0, lower: -1.0, x0: 0.5 };
        assert_eq!(step.function(0.5), 1.0);
        assert_eq!(step.function(0.49), -1.0);
        assert_eq!(step.derivative(3.0), 0.0);
    }

    #[test]
    fn deserializes_from_tagged_json() {
        let act: ActivationFunction = serde_json::from_str(r#"{"type":"logistic","a":2.0}"#).unwrap();
        assert_eq!(act, ActivationFunction::Logistic { a: 2.0 });
        let act: ActivationFunction = serde_json::from_str(r#"{"type":"sigmoid"}"#).unwrap();
        assert_eq!(act, ActivationFunction::Sigmoid);
    }
}
