//! Binary L2-regularized logistic regression over sparse features.
//!
//! The objective is the liblinear primal
//!
//! ```text
//! f(w) = ½‖w‖² + C · Σᵢ log(1 + exp(−yᵢ · wᵀxᵢ))
//! ```
//!
//! where every `xᵢ` carries an implicit trailing bias feature of value 1 that
//! is regularized together with the other weights. It is minimized with a
//! truncated Newton method: each step solves the Newton system approximately
//! with conjugate gradients and is then shortened by a backtracking line
//! search. Nothing is randomized, so training is reproducible.

use crate::error::{FaqError, Result};
use crate::ml::tfidf::SparseVector;

/// Armijo sufficient-decrease constant.
const ARMIJO: f64 = 1e-4;
/// Maximum step halvings per line search.
const MAX_LINE_SEARCH_STEPS: usize = 30;
/// Relative residual at which the inner CG solve stops.
const CG_TOLERANCE: f64 = 0.1;

/// Numerically stable logistic sigmoid.
pub fn sigmoid(t: f64) -> f64 {
    if t >= 0.0 {
        1.0 / (1.0 + (-t).exp())
    } else {
        let e = t.exp();
        e / (1.0 + e)
    }
}

/// Numerically stable `ln(1 + exp(t))`.
pub fn log1p_exp(t: f64) -> f64 {
    if t > 0.0 {
        t + (-t).exp().ln_1p()
    } else {
        t.exp().ln_1p()
    }
}

/// Solver settings for [`BinaryLogisticRegression::fit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverParams {
    /// Inverse regularization strength.
    pub c: f64,
    /// Maximum Newton iterations.
    pub max_iter: usize,
    /// Stop once ‖∇f‖ ≤ tolerance · ‖∇f(0)‖.
    pub tolerance: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            c: 1.0,
            max_iter: 100,
            tolerance: 1e-4,
        }
    }
}

/// A fitted binary logistic regression model.
#[derive(Debug, Clone)]
pub struct BinaryLogisticRegression {
    /// Feature weights followed by the bias weight.
    weights: Vec<f64>,
    iterations: usize,
    converged: bool,
}

struct Problem<'a> {
    features: &'a [SparseVector],
    signs: Vec<f64>,
    dim: usize,
    c: f64,
}

impl Problem<'_> {
    fn margin(&self, w: &[f64], i: usize) -> f64 {
        self.features[i].dot_dense(&w[..self.dim]) + w[self.dim]
    }

    fn margins(&self, w: &[f64]) -> Vec<f64> {
        (0..self.features.len()).map(|i| self.margin(w, i)).collect()
    }

    fn objective(&self, w: &[f64], margins: &[f64]) -> f64 {
        let reg = 0.5 * w.iter().map(|v| v * v).sum::<f64>();
        let loss: f64 = margins
            .iter()
            .zip(&self.signs)
            .map(|(z, y)| log1p_exp(-y * z))
            .sum();
        reg + self.c * loss
    }

    fn gradient(&self, w: &[f64], margins: &[f64]) -> Vec<f64> {
        let mut grad = w.to_vec();
        for (i, (z, y)) in margins.iter().zip(&self.signs).enumerate() {
            let coef = self.c * (sigmoid(y * z) - 1.0) * y;
            self.add_scaled(&mut grad, i, coef);
        }
        grad
    }

    /// Hessian-vector product with curvature weights `d`.
    fn hessian_times(&self, d: &[f64], v: &[f64]) -> Vec<f64> {
        let mut out = v.to_vec();
        for (i, di) in d.iter().enumerate() {
            let xv = self.margin(v, i);
            self.add_scaled(&mut out, i, self.c * di * xv);
        }
        out
    }

    fn add_scaled(&self, target: &mut [f64], row: usize, scale: f64) {
        for &(j, x) in self.features[row].entries() {
            if j < self.dim {
                target[j] += scale * x;
            }
        }
        target[self.dim] += scale;
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(a: &[f64]) -> f64 {
    dot(a, a).sqrt()
}

impl BinaryLogisticRegression {
    /// Fit on `features` (each of dimension `dim`) with boolean labels.
    pub fn fit(
        features: &[SparseVector],
        labels: &[bool],
        dim: usize,
        params: &SolverParams,
    ) -> Result<Self> {
        if features.is_empty() {
            return Err(FaqError::training("no training rows"));
        }
        if features.len() != labels.len() {
            return Err(FaqError::training(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        if params.c.is_nan() || params.c <= 0.0 {
            return Err(FaqError::training(format!("C must be positive, got {}", params.c)));
        }

        let problem = Problem {
            features,
            signs: labels.iter().map(|&l| if l { 1.0 } else { -1.0 }).collect(),
            dim,
            c: params.c,
        };

        let mut w = vec![0.0; dim + 1];
        let mut margins = problem.margins(&w);
        let mut f = problem.objective(&w, &margins);
        let mut grad = problem.gradient(&w, &margins);
        let initial_norm = norm(&grad);
        let stop = params.tolerance * initial_norm.max(f64::MIN_POSITIVE);

        let mut iterations = 0;
        let mut converged = initial_norm <= stop;

        while !converged && iterations < params.max_iter {
            iterations += 1;

            let curvature: Vec<f64> = margins
                .iter()
                .map(|&z| {
                    let s = sigmoid(z);
                    s * (1.0 - s)
                })
                .collect();
            let step = conjugate_gradient(&problem, &curvature, &grad);

            let slope = dot(&grad, &step);
            if slope.is_nan() || slope >= 0.0 {
                break;
            }

            let mut alpha = 1.0;
            let mut accepted = None;
            for _ in 0..MAX_LINE_SEARCH_STEPS {
                let candidate: Vec<f64> =
                    w.iter().zip(&step).map(|(wi, si)| wi + alpha * si).collect();
                let candidate_margins = problem.margins(&candidate);
                let candidate_f = problem.objective(&candidate, &candidate_margins);
                if candidate_f <= f + ARMIJO * alpha * slope {
                    accepted = Some((candidate, candidate_margins, candidate_f));
                    break;
                }
                alpha *= 0.5;
            }

            let Some((next_w, next_margins, next_f)) = accepted else {
                log::debug!("line search stalled at iteration {iterations}");
                break;
            };

            w = next_w;
            margins = next_margins;
            f = next_f;
            grad = problem.gradient(&w, &margins);
            converged = norm(&grad) <= stop;
        }

        if !w.iter().all(|v| v.is_finite()) {
            return Err(FaqError::training("solver produced non-finite weights"));
        }

        Ok(Self {
            weights: w,
            iterations,
            converged,
        })
    }

    /// Signed distance from the decision boundary; positive favours the
    /// `true` label.
    pub fn decision_function(&self, x: &SparseVector) -> f64 {
        let dim = self.weights.len() - 1;
        x.dot_dense(&self.weights[..dim]) + self.weights[dim]
    }

    /// Probability of the `true` label.
    pub fn probability(&self, x: &SparseVector) -> f64 {
        sigmoid(self.decision_function(x))
    }

    /// Newton iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the gradient tolerance was reached.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// The bias weight.
    pub fn bias(&self) -> f64 {
        self.weights[self.weights.len() - 1]
    }
}

/// Approximately solve `H · s = −g`.
fn conjugate_gradient(problem: &Problem<'_>, curvature: &[f64], grad: &[f64]) -> Vec<f64> {
    let n = grad.len();
    let mut s = vec![0.0; n];
    let mut r: Vec<f64> = grad.iter().map(|g| -g).collect();
    let mut d = r.clone();
    let mut rr = dot(&r, &r);
    let limit = CG_TOLERANCE * norm(grad);

    for _ in 0..n.max(1) {
        if rr.sqrt() <= limit {
            break;
        }
        let hd = problem.hessian_times(curvature, &d);
        let dhd = dot(&d, &hd);
        if dhd <= 0.0 {
            break;
        }
        let alpha = rr / dhd;
        for k in 0..n {
            s[k] += alpha * d[k];
            r[k] -= alpha * hd[k];
        }
        let rr_next = dot(&r, &r);
        let beta = rr_next / rr;
        for k in 0..n {
            d[k] = r[k] + beta * d[k];
        }
        rr = rr_next;
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(entries: &[(usize, f64)]) -> SparseVector {
        SparseVector::from_entries(entries.to_vec())
    }

    #[test]
    fn test_stable_helpers() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert_eq!(sigmoid(-1000.0), 0.0);
        assert_eq!(sigmoid(1000.0), 1.0);
        assert!((log1p_exp(0.0) - 2.0f64.ln()).abs() < 1e-12);
        assert!((log1p_exp(1000.0) - 1000.0).abs() < 1e-9);
        assert!(log1p_exp(-1000.0) >= 0.0);
    }

    #[test]
    fn test_separable_problem() {
        let features = vec![
            row(&[(0, 1.0)]),
            row(&[(0, 0.8), (2, 0.6)]),
            row(&[(1, 1.0)]),
            row(&[(1, 0.6), (2, 0.8)]),
        ];
        let labels = [true, true, false, false];

        let model =
            BinaryLogisticRegression::fit(&features, &labels, 3, &SolverParams::default()).unwrap();

        assert!(model.converged());
        assert!(model.iterations() <= 100);
        for (x, &label) in features.iter().zip(&labels) {
            assert_eq!(model.decision_function(x) > 0.0, label);
        }
        assert!(model.probability(&row(&[(0, 1.0)])) > 0.5);
    }

    #[test]
    fn test_single_label_learns_bias() {
        let features = vec![row(&[(0, 1.0)]), row(&[(1, 1.0)])];
        let model = BinaryLogisticRegression::fit(
            &features,
            &[false, false],
            2,
            &SolverParams::default(),
        )
        .unwrap();

        assert!(model.bias() < 0.0);
        assert!(model.decision_function(&SparseVector::default()) < 0.0);
    }

    #[test]
    fn test_is_deterministic() {
        let features = vec![row(&[(0, 1.0)]), row(&[(0, 0.5), (1, 0.5)]), row(&[(1, 1.0)])];
        let labels = [true, false, false];
        let params = SolverParams::default();

        let a = BinaryLogisticRegression::fit(&features, &labels, 2, &params).unwrap();
        let b = BinaryLogisticRegression::fit(&features, &labels, 2, &params).unwrap();
        assert_eq!(a.weights, b.weights);
    }

    #[test]
    fn test_invalid_inputs() {
        let params = SolverParams::default();
        assert!(BinaryLogisticRegression::fit(&[], &[], 1, &params).is_err());
        assert!(BinaryLogisticRegression::fit(&[row(&[(0, 1.0)])], &[], 1, &params).is_err());

        let bad = SolverParams { c: 0.0, ..params };
        assert!(matches!(
            BinaryLogisticRegression::fit(&[row(&[(0, 1.0)])], &[true], 1, &bad),
            Err(FaqError::Training(_))
        ));
    }
}
