use super::{clamp_unit, distance_squared};
use crate::opt::SolverOptions;
use crate::Float;

/// The outcome of running the inverse solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Solution<const N: usize> {
    /// The best pigment coordinates found, clamped to unit range.
    pub coordinates: [Float; N],
    /// The squared RGB distance between the forward-mapped coordinates and
    /// the target.
    pub error: Float,
    /// The number of gradient steps taken.
    pub iterations: usize,
}

impl<const N: usize> Solution<N> {
    /// Determine whether the solver reached the error margin.
    pub fn converged(&self, options: &SolverOptions) -> bool {
        self.error < options.error_margin()
    }
}

/// Invert the forward mapping with gradient descent.
///
/// Starting with 0.5 for every channel, this function repeatedly estimates the
/// gradient of the squared RGB distance between the forward-mapped guess and
/// the target with forward finite differences along each channel, and then
/// steps against the gradient scaled by the learning rate. Every step is
/// clamped to unit range, which keeps the forward mapping on its domain. The
/// descent stops once the error falls below the error margin or after the
/// maximum number of iterations, in which case the best guess so far is the
/// result.
pub(crate) fn solve<F, const N: usize>(
    target: &[Float; 3],
    forward: F,
    options: &SolverOptions,
) -> Solution<N>
where
    F: Fn(&[Float; N]) -> [Float; 3],
{
    let objective = |guess: &[Float; N]| distance_squared(&forward(guess), target);
    let epsilon = options.epsilon();
    let rate = options.learning_rate();

    let mut guess = [0.5; N];
    let mut error = objective(&guess);
    let mut best = (guess, error);

    let mut iterations = 0;
    while iterations < options.max_iterations() && options.error_margin() <= error {
        let mut gradient = [0.0; N];
        for (axis, slope) in gradient.iter_mut().enumerate() {
            let mut nudged = guess;
            nudged[axis] += epsilon;
            *slope = (objective(&nudged) - error) / epsilon;
        }

        for (coordinate, slope) in guess.iter_mut().zip(gradient) {
            *coordinate = clamp_unit(rate.mul_add(-slope, *coordinate));
        }

        error = objective(&guess);
        iterations += 1;

        if error < best.1 {
            best = (guess, error);
        }
    }

    let solution = Solution {
        coordinates: best.0,
        error: best.1,
        iterations,
    };

    if !solution.converged(options) {
        log::debug!(
            "pigment solver stopped after {} iterations with error {:e} for target {:?}",
            iterations,
            solution.error,
            target
        );
    }

    solution
}
