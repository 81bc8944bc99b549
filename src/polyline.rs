//! Polyline representation for route geometries.
//!
//! Points are decoded `(lat, lon)` tuples. Conversion from provider formats
//! (GeoJSON `[lon, lat]` pairs) happens in the provider adapters.

use serde::{Deserialize, Serialize};

use crate::haversine::haversine_m;

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }

    /// Total great-circle length in meters.
    pub fn length_m(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| haversine_m(pair[0], pair[1]))
            .sum()
    }

    /// Indices of roughly `target_samples` evenly strided points.
    ///
    /// The stride is `max(1, len / target_samples)`. The last point is always
    /// included. Fewer than two points yields no samples.
    pub fn sample_indices(&self, target_samples: usize) -> Vec<usize> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        let stride = (n / target_samples.max(1)).max(1);
        let mut indices: Vec<usize> = (0..n).step_by(stride).collect();
        if indices.last() != Some(&(n - 1)) {
            indices.push(n - 1);
        }
        indices
    }

    /// Precompute cumulative arc lengths for repeated projections.
    pub fn measure(&self) -> MeasuredPolyline<'_> {
        let mut cumulative_m = Vec::with_capacity(self.points.len());
        let mut total = 0.0;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                total += haversine_m(self.points[i - 1], *point);
            }
            cumulative_m.push(total);
        }
        MeasuredPolyline {
            points: &self.points,
            cumulative_m,
        }
    }
}

/// Where a point falls relative to a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Planar distance in degrees to the nearest point on the route.
    pub distance_deg: f64,
    /// Arc length in meters from the route start to that nearest point.
    pub progress_m: f64,
}

/// A polyline borrowed together with its cumulative arc lengths.
#[derive(Debug, Clone)]
pub struct MeasuredPolyline<'a> {
    points: &'a [(f64, f64)],
    cumulative_m: Vec<f64>,
}

impl MeasuredPolyline<'_> {
    pub fn total_m(&self) -> f64 {
        self.cumulative_m.last().copied().unwrap_or(0.0)
    }

    /// Project `point` onto the nearest segment.
    ///
    /// Distances are flat degrees (longitude is not scaled by latitude), so
    /// this is only meaningful at city scale. The first segment wins ties.
    pub fn project(&self, point: (f64, f64)) -> Option<Projection> {
        match self.points {
            [] => None,
            [only] => Some(Projection {
                distance_deg: planar_distance_deg(*only, point),
                progress_m: 0.0,
            }),
            points => {
                let mut best: Option<(f64, usize, f64)> = None;
                for (i, pair) in points.windows(2).enumerate() {
                    let (t, d2) = project_onto_segment(pair[0], pair[1], point);
                    if best.is_none_or(|(best_d2, _, _)| d2 < best_d2) {
                        best = Some((d2, i, t));
                    }
                }
                best.map(|(d2, i, t)| {
                    let segment_m = self.cumulative_m[i + 1] - self.cumulative_m[i];
                    Projection {
                        distance_deg: d2.sqrt(),
                        progress_m: self.cumulative_m[i] + t * segment_m,
                    }
                })
            }
        }
    }
}

/// Flat Euclidean distance in degrees between two (lat, lon) points.
pub fn planar_distance_deg(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dlat = a.0 - b.0;
    let dlon = a.1 - b.1;
    (dlat * dlat + dlon * dlon).sqrt()
}

/// Returns the clamped segment parameter and the squared distance to the foot.
fn project_onto_segment(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> (f64, f64) {
    let (ax, ay) = (a.1, a.0);
    let (bx, by) = (b.1, b.0);
    let (px, py) = (p.1, p.0);
    let (dx, dy) = (bx - ax, by - ay);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / len2).clamp(0.0, 1.0)
    };
    let fx = ax + t * dx - px;
    let fy = ay + t * dy - py;
    (t, fx * fx + fy * fy)
}
