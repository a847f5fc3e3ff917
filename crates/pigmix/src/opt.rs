//! Helper module with the options for the inverse pigment solver.
//!
//! Converting additive RGB back into pigment space has no closed form.
//! Instead, [`PigmentColor::from_rgb`](crate::PigmentColor::from_rgb) and
//! [`PigmentColorK::from_rgb`](crate::PigmentColorK::from_rgb) run a gradient
//! descent that is controlled by the options in this module. The defaults are
//! tuned for the standard pigment cube and rarely need changing.
//!
//!
//! # Example
//!
//! ```
//! # use pigmix::opt::SolverOptions;
//! let options = SolverOptions::builder()
//!     .max_iterations(100)
//!     .build();
//!
//! assert_eq!(options.max_iterations(), 100);
//! assert_eq!(options.learning_rate(), 0.25);
//! ```

use crate::Float;

/// The step size for estimating the gradient with finite differences.
pub const EPSILON: Float = 1e-5;

/// The squared RGB distance below which the solver stops.
pub const ERROR_MARGIN: Float = 1e-3;

/// The factor applied to the gradient when updating the guess.
pub const LEARNING_RATE: Float = 0.25;

/// The iteration cap when solving for three pigment channels.
pub const THREE_CHANNEL_ITERATIONS: usize = 50;

/// The iteration cap when solving for four pigment channels.
pub const FOUR_CHANNEL_ITERATIONS: usize = 400;

#[derive(Clone, Copy, Debug, PartialEq)]
struct OptionData {
    epsilon: Float,
    error_margin: Float,
    learning_rate: Float,
    max_iterations: usize,
}

impl OptionData {
    pub const fn new(max_iterations: usize) -> Self {
        Self {
            epsilon: EPSILON,
            error_margin: ERROR_MARGIN,
            learning_rate: LEARNING_RATE,
            max_iterations,
        }
    }
}

/// A builder of solver options.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the step size for finite differences.
    ///
    /// Non-positive step sizes are ignored.
    pub fn epsilon(&mut self, epsilon: Float) -> &mut Self {
        if 0.0 < epsilon {
            self.0.epsilon = epsilon;
        }
        self
    }

    /// Set the error margin, i.e., the squared RGB distance considered close
    /// enough.
    pub fn error_margin(&mut self, margin: Float) -> &mut Self {
        self.0.error_margin = margin.max(0.0);
        self
    }

    /// Set the learning rate.
    ///
    /// Non-positive learning rates are ignored.
    pub fn learning_rate(&mut self, rate: Float) -> &mut Self {
        if 0.0 < rate {
            self.0.learning_rate = rate;
        }
        self
    }

    /// Set the maximum number of gradient steps.
    pub fn max_iterations(&mut self, iterations: usize) -> &mut Self {
        self.0.max_iterations = iterations;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> SolverOptions {
        SolverOptions(self.0)
    }
}

/// A solver options object.
///
/// The default options are those for the four-channel solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverOptions(OptionData);

impl Default for SolverOptions {
    fn default() -> Self {
        Self::FOUR_CHANNEL
    }
}

impl SolverOptions {
    /// The default options for solving for red, yellow, and blue.
    pub const THREE_CHANNEL: SolverOptions =
        SolverOptions(OptionData::new(THREE_CHANNEL_ITERATIONS));

    /// The default options for solving for red, yellow, blue, and black.
    pub const FOUR_CHANNEL: SolverOptions =
        SolverOptions(OptionData::new(FOUR_CHANNEL_ITERATIONS));

    /// Create a new builder with the default four-channel option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(Self::FOUR_CHANNEL.0)
    }

    /// Get the step size for finite differences.
    pub fn epsilon(&self) -> Float {
        self.0.epsilon
    }

    /// Get the error margin.
    pub fn error_margin(&self) -> Float {
        self.0.error_margin
    }

    /// Get the learning rate.
    pub fn learning_rate(&self) -> Float {
        self.0.learning_rate
    }

    /// Get the maximum number of gradient steps.
    pub fn max_iterations(&self) -> usize {
        self.0.max_iterations
    }
}
