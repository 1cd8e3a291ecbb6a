//! Search parameters and positional-argument resolution.
//!
//! - `Params`: grid extents, step sizes, and the relative-error threshold.
//! - `Params::from_args`: accepts 0, 4, or 5 positional tokens.
//! - `InvalidArguments`: the only failure mode; raised before any output.

use serde::Serialize;
use std::fmt;

/// Relative error of the triple (12, 12, 17), the reference angle LEGO itself uses.
pub const DEFAULT_THRESHOLD: f64 = 0.001734606680942415;

/// Upper bound on grid iterations, `x steps * (1 + y steps)`; the default grid
/// needs 30 * 31.
pub const MAX_GRID_STEPS: f64 = 1e8;

/// Positional argument counts accepted by `Params::from_args`.
pub const ACCEPTED_COUNTS: [usize; 3] = [0, 4, 5];

/// Errors surfaced while resolving parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidArguments {
    /// Argument count outside {0, 4, 5}.
    Count { got: usize },
    /// Token at `position` (0-based) is not a real number.
    Parse { position: usize, token: String },
    /// A step size that would never advance the grid.
    NonPositiveStep { name: &'static str, value: f64 },
    /// NaN or infinite parameter.
    NonFinite { name: &'static str, value: f64 },
    /// Walking the grid would take more than `MAX_GRID_STEPS` iterations.
    GridTooLarge { steps: f64 },
}

impl fmt::Display for InvalidArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count { got } => write!(f, "expected 0, 4 or 5 arguments, got {got}"),
            Self::Parse { position, token } => {
                write!(f, "argument {} is not a number: {token:?}", position + 1)
            }
            Self::NonPositiveStep { name, value } => write!(f, "{name} must be > 0, got {value}"),
            Self::NonFinite { name, value } => write!(f, "{name} must be finite, got {value}"),
            Self::GridTooLarge { steps } => write!(
                f,
                "grid needs {steps:.0} steps, at most {MAX_GRID_STEPS:.0} allowed"
            ),
        }
    }
}

impl std::error::Error for InvalidArguments {}

/// Grid and acceptance parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Params {
    pub max_x: f64,
    pub step_x: f64,
    pub max_y: f64,
    pub step_y: f64,
    /// Inclusive upper bound on `Triple::relative_error`.
    pub threshold: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_x: 15.0,
            step_x: 0.5,
            max_y: 15.0,
            step_y: 0.5,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Params {
    /// Resolve positional tokens `[maxX stepX maxY stepY [threshold]]`.
    ///
    /// Missing trailing values fall back to `Params::default()`. The result is
    /// validated, so callers can hand it straight to `Candidates::new`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, InvalidArguments> {
        if !ACCEPTED_COUNTS.contains(&args.len()) {
            return Err(InvalidArguments::Count { got: args.len() });
        }
        let values = args
            .iter()
            .enumerate()
            .map(|(position, token)| parse_real(position, token.as_ref()))
            .collect::<Result<Vec<f64>, _>>()?;

        let mut params = Self::default();
        if let [max_x, step_x, max_y, step_y, rest @ ..] = values.as_slice() {
            params.max_x = *max_x;
            params.step_x = *step_x;
            params.max_y = *max_y;
            params.step_y = *step_y;
            if let Some(threshold) = rest.first() {
                params.threshold = *threshold;
            }
        }
        params.validate()?;
        Ok(params)
    }

    /// Reject parameters the grid walk cannot terminate on.
    pub fn validate(&self) -> Result<(), InvalidArguments> {
        let fields = [
            ("maxX", self.max_x),
            ("stepX", self.step_x),
            ("maxY", self.max_y),
            ("stepY", self.step_y),
            ("threshold", self.threshold),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(InvalidArguments::NonFinite { name, value });
            }
        }
        for (name, value) in [("stepX", self.step_x), ("stepY", self.step_y)] {
            if value <= 0.0 {
                return Err(InvalidArguments::NonPositiveStep { name, value });
            }
        }
        let nx = axis_steps(self.max_x, self.step_x);
        let steps = nx * (1.0 + axis_steps(self.max_y, self.step_y));
        // an empty x axis never walks y: 0 * inf is NaN and passes
        if steps > MAX_GRID_STEPS {
            return Err(InvalidArguments::GridTooLarge { steps });
        }
        Ok(())
    }
}

fn axis_steps(max: f64, step: f64) -> f64 {
    (max / step).floor().max(0.0)
}

fn parse_real(position: usize, token: &str) -> Result<f64, InvalidArguments> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| InvalidArguments::Parse {
            position,
            token: token.to_string(),
        })
}
