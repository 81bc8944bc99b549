//! Plain-text route description.

use std::fmt::Write;

use crate::model::{FeatureSummary, MobilityProfile};

const RULE_WIDTH: usize = 72;

/// Inputs for [`describe`].
#[derive(Debug, Clone, Copy)]
pub struct RouteSummary<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub profile: MobilityProfile,
    pub distance_m: u64,
    pub duration_min: u64,
    pub features: &'a [FeatureSummary],
}

/// Render a description that lists used features in travel order, or states
/// the route is already optimal when there are none.
pub fn describe(summary: &RouteSummary<'_>) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let comfort = if summary.features.is_empty() {
        " (optimal)"
    } else {
        " with improved comfort"
    };

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "ACCESSIBLE ROUTE FOR {}{}", summary.profile.label().to_uppercase(), comfort);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "From: {}", summary.origin);
    let _ = writeln!(out, "To: {}", summary.destination);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Distance: {} m | Travel time: {} min",
        summary.distance_m, summary.duration_min
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "ACCESSIBILITY OBJECTS ON THE ROUTE:");
    let _ = writeln!(out, "{}", rule);

    if summary.features.is_empty() {
        let _ = writeln!(out, "The route is already optimal in time and distance.");
        let _ = writeln!(out, "No accessibility objects found nearby.");
    } else {
        for (i, feature) in summary.features.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, feature.label);
            let _ = writeln!(out, "   {}", feature.description);
            if !feature.address.is_empty() {
                let _ = writeln!(out, "   {}", feature.address);
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "The route passes these objects for your safety and comfort.");
    }

    out.push_str("\nHave a pleasant and safe trip!");
    out
}
