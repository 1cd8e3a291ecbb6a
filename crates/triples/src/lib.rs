//! Near-Pythagorean triples for angled LEGO builds.
//!
//! A triple is a pair of legs `(x, y)` on a half-stud (or other step) grid whose
//! hypotenuse lands close to an integer or half-integer length. The pipeline is
//! strictly one pass: resolve `Params`, walk the `Candidates` grid, keep the
//! triples whose relative error stays under the threshold, sort by angle, format.
//!
//! Code cross-refs: `params::Params`, `grid::Candidates`, `triple::Triple`,
//! `format::NumberFormat`.

pub mod format;
pub mod grid;
pub mod params;
pub mod triple;

pub use format::{summary_line, triple_line, NumberFormat};
pub use grid::{Candidates, StepRange};
pub use params::{InvalidArguments, Params, DEFAULT_THRESHOLD, MAX_GRID_STEPS};
pub use triple::{Triple, TripleRecord};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Enumerate, filter and sort all triples accepted under `params`.
///
/// Pre: `params` passed `Params::validate`.
/// Post: every returned triple satisfies `is_valid(params.threshold)`; angles are
/// non-decreasing and equal angles keep grid order.
pub fn generate_triples(params: &Params) -> Vec<Triple> {
    let mut out: Vec<Triple> = Candidates::new(params)
        .filter(|t| t.is_valid(params.threshold))
        .collect();
    // sort_by is stable
    out.sort_by(|a, b| a.angle().total_cmp(&b.angle()));
    out
}

/// Render the full LaTeX listing: one line per triple plus the summary line.
pub fn render_listing(triples: &[Triple], fmt: &NumberFormat) -> Vec<String> {
    let mut lines: Vec<String> = triples.iter().map(|t| triple_line(t, fmt)).collect();
    lines.push(summary_line(triples.len()));
    lines
}
