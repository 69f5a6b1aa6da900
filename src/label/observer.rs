//! Progress reporting hooks for the label search.
//!
//! Observers only watch: the search never reads anything back from them, so
//! results are identical whichever observer is attached.

use num_traits::Float;

/// Receives progress events from a running search.
///
/// Only [`message`](SearchObserver::message) is required. The provided event
/// methods format human-readable lines and route them through it.
pub trait SearchObserver<F: Float> {
    /// Receives one human-readable progress line.
    fn message(&mut self, message: &str);

    /// A popped cell improved on the best distance found so far.
    fn improved(&mut self, distance: F, probes: usize) {
        self.message(&format!(
            "found best {:.4} after {probes} probes",
            to_f64(distance)
        ));
    }

    /// The queue drained; `distance` is the final best distance.
    fn finished(&mut self, probes: usize, distance: F) {
        self.message(&format!("num probes: {probes}"));
        self.message(&format!("best distance: {}", to_f64(distance)));
    }
}

#[inline]
pub(crate) fn to_f64<F: Float>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// The silent observer.
impl<F: Float> SearchObserver<F> for () {
    #[inline]
    fn message(&mut self, _message: &str) {}

    #[inline]
    fn improved(&mut self, _distance: F, _probes: usize) {}

    #[inline]
    fn finished(&mut self, _probes: usize, _distance: F) {}
}

impl<F: Float, O: SearchObserver<F> + ?Sized> SearchObserver<F> for &mut O {
    #[inline]
    fn message(&mut self, message: &str) {
        (**self).message(message);
    }

    #[inline]
    fn improved(&mut self, distance: F, probes: usize) {
        (**self).improved(distance, probes);
    }

    #[inline]
    fn finished(&mut self, probes: usize, distance: F) {
        (**self).finished(probes, distance);
    }
}

/// Forwards progress lines to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<F: Float> SearchObserver<F> for LogObserver {
    fn message(&mut self, message: &str) {
        log::debug!("{message}");
    }
}

/// Adapts a closure taking each progress line.
///
/// # Example
///
/// ```
/// use polylabel::label::{polylabel_with, FnObserver, LabelOptions};
/// use polylabel::polygon::Polygon;
///
/// let square = Polygon::from_coords(&[
///     vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
/// ]);
///
/// let mut lines = Vec::new();
/// let mut observer = FnObserver(|line: &str| lines.push(line.to_owned()));
/// polylabel_with(&square, &LabelOptions::default(), &mut observer);
///
/// assert!(lines.iter().any(|l| l.starts_with("num probes: ")));
/// ```
pub struct FnObserver<C>(pub C);

impl<F: Float, C: FnMut(&str)> SearchObserver<F> for FnObserver<C> {
    fn message(&mut self, message: &str) {
        (self.0)(message);
    }
}

impl<C> std::fmt::Debug for FnObserver<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnObserver")
    }
}
