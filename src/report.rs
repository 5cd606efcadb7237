//! Plain-text summary of a solve and its hoist assignments.

use std::fmt::Write;

use crate::hoist::HoistAssignment;
use crate::results::SolveResult;

/// Render a textual summary of a solve.
///
/// Reactions are listed in support order, followed by the extrema with their
/// allowable checks and, when given, the suggested hoist for each support.
#[must_use]
pub fn render_report(result: &SolveResult, assignments: &[HoistAssignment]) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Truss analysis ({} elements, {} supports)",
        result.element_count,
        result.reactions.len()
    )
    .expect("writing to string cannot fail");

    for reaction in &result.reactions {
        writeln!(
            &mut output,
            "  {:<6} x = {:>6.2} m  R = {:>10.1} N  ({:>8.1} kg)",
            reaction.label, reaction.position_m, reaction.force_n, reaction.mass_kg
        )
        .expect("writing to string cannot fail");
    }

    writeln!(
        &mut output,
        "Max bending moment: {:.1} N·m {}",
        result.max_moment_nm,
        verdict(result.moment_ok)
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Max deflection: {:.3e} m {}",
        result.max_deflection_m,
        verdict(result.deflection_ok)
    )
    .expect("writing to string cannot fail");

    if !assignments.is_empty() {
        output.push_str("Hoists:\n");
    }
    for assignment in assignments {
        let written = match &assignment.hoist {
            Some(hoist) => writeln!(
                &mut output,
                "  {:<6} needs {:>6.0} kg -> {} (WLL {:.0} kg){}",
                assignment.label,
                assignment.required_kg,
                hoist.name,
                hoist.wll_kg,
                if assignment.is_under_capacity() {
                    " UNDER CAPACITY"
                } else {
                    ""
                }
            ),
            None => writeln!(
                &mut output,
                "  {:<6} needs {:>6.0} kg -> no hoist in catalog",
                assignment.label, assignment.required_kg
            ),
        };
        written.expect("writing to string cannot fail");
    }

    output
}

/// Bracketed pass/fail marker; empty when no allowable was supplied.
fn verdict(check: Option<bool>) -> &'static str {
    match check {
        Some(true) => "[OK]",
        Some(false) => "[EXCEEDS ALLOWABLE]",
        None => "",
    }
}
