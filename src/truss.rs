//! Finite-element solve of a rigging truss hung from hoists.

use log::{debug, warn};
use nalgebra::DVector;

use crate::assembly::{self, GlobalSystem};
use crate::cholesky::Cholesky;
use crate::constraints::Partition;
use crate::errors::SolveError;
use crate::mesh::{vertical_dof, Mesh};
use crate::model::{BeamModel, LoadCase, SolveOptions};
use crate::postprocess::{self, Response};
use crate::results::{SolveResult, SupportReaction};

/// Relative equilibrium error above which a warning is logged.
const EQUILIBRIUM_TOLERANCE: f64 = 1.0e-6;

/// Solve the truss for support reactions, bending moments and deflections.
///
/// The span is split into uniform Euler–Bernoulli elements carrying the
/// self-weight (plus any smeared motor weight) as a line load. Fixtures are
/// applied at their nearest node, amplified by the dynamic factor. Each
/// support pins the vertical displacement of its nearest node to a straight
/// line through the first support inclined at the tilt angle.
///
/// # Errors
///
/// Returns [`SolveError::InvalidModel`] when an input is out of range, checked
/// before any matrix work, and [`SolveError::SingularSystem`] when the supports
/// leave the truss free to move as a rigid body.
///
/// # Examples
/// ```
/// use trussrig::{solve, BeamModel, LoadCase, SolveOptions, Support};
///
/// let model = BeamModel::new(10.0, 5.0e6, 5.0);
/// let options = SolveOptions::with_supports(vec![Support::at(0.0), Support::at(10.0)]);
/// let result = solve(&model, &LoadCase::new(), &options).expect("simply supported truss");
/// assert!((result.reactions[0].force_n - 245.25).abs() < 1.0e-4);
/// assert!((result.max_moment_nm - 613.125).abs() < 1.0e-4);
/// ```
pub fn solve(
    model: &BeamModel,
    load_case: &LoadCase,
    options: &SolveOptions,
) -> Result<SolveResult, SolveError> {
    model.validate()?;
    load_case.validate(model)?;
    options.validate(model)?;

    let ei = model.flexural_rigidity_nm2;
    let gravity = load_case.gravity_m_s2;
    let element_count = options.effective_element_count();
    let mesh = Mesh::uniform(model.span_m, element_count);
    let line_load = load_case.line_load_n_per_m(model, options.supports.len());
    debug!(
        "meshing {} m span into {} elements ({} dofs), line load {:.3} N/m",
        model.span_m,
        element_count,
        mesh.dof_count(),
        line_load
    );

    let system = assembly::assemble(&mesh, ei, line_load, load_case);
    let partition = Partition::new(&mesh, &options.supports, options.tilt_rad())?;
    debug!(
        "{} free dofs, {} prescribed",
        partition.free.len(),
        partition.constrained.len()
    );

    let (displacements, constrained_forces) = solve_partitioned(&system, &partition)?;
    let response = postprocess::recover(&mesh, ei, line_load, &displacements);

    let reactions = distribute_reactions(options, &partition, &constrained_forces, gravity);
    let applied = load_case.total_applied_force_n(model, options.supports.len());
    let total: f64 = reactions.iter().map(|r| r.force_n).sum();
    let equilibrium_residual_n = total - applied;
    if equilibrium_residual_n.abs() > EQUILIBRIUM_TOLERANCE * applied.abs().max(1.0) {
        warn!(
            "reactions sum to {total:.3} N against {applied:.3} N applied ({equilibrium_residual_n:+.3e} N)"
        );
    }

    Ok(build_result(
        model,
        &mesh,
        response,
        reactions,
        equilibrium_residual_n,
    ))
}

/// Solve `Kff·d_f = Ff − Kfc·d_c` and recover `R = Kcf·d_f + Kcc·d_c − Fc`.
///
/// Returns the full displacement vector and one reaction per prescribed DOF.
fn solve_partitioned(
    system: &GlobalSystem,
    partition: &Partition,
) -> Result<(DVector<f64>, DVector<f64>), SolveError> {
    let free = &partition.free;
    let constrained = &partition.constrained;
    let d_c = &partition.prescribed;

    let k_ff = Partition::block(&system.stiffness, free, free);
    let k_fc = Partition::block(&system.stiffness, free, constrained);
    let k_cf = Partition::block(&system.stiffness, constrained, free);
    let k_cc = Partition::block(&system.stiffness, constrained, constrained);
    let f_f = Partition::slice(&system.load, free);
    let f_c = Partition::slice(&system.load, constrained);

    let rhs = f_f - &k_fc * d_c;
    let d_f = Cholesky::factor(&k_ff)?.solve(&rhs);
    let reactions = &k_cf * &d_f + &k_cc * d_c - f_c;

    Ok((partition.scatter(&d_f), reactions))
}

/// Map prescribed-DOF reactions back onto the supports.
///
/// Supports that snapped onto the same node split its reaction evenly.
fn distribute_reactions(
    options: &SolveOptions,
    partition: &Partition,
    constrained_forces: &DVector<f64>,
    gravity: f64,
) -> Vec<SupportReaction> {
    options
        .supports
        .iter()
        .enumerate()
        .map(|(index, support)| {
            let node = partition.support_nodes[index];
            let sharing = partition.supports_sharing_node(index);
            if sharing > 1 {
                warn!(
                    "support {} shares node {node} with {} other support(s); splitting its reaction",
                    support.display_label(index),
                    sharing - 1
                );
            }
            let force_n = partition
                .constrained_index(vertical_dof(node))
                .map_or(0.0, |i| constrained_forces[i])
                / sharing as f64;
            SupportReaction {
                label: support.display_label(index),
                position_m: support.position_m,
                force_n,
                mass_kg: force_n / gravity,
            }
        })
        .collect()
}

/// Assemble the public result and run the allowable checks.
fn build_result(
    model: &BeamModel,
    mesh: &Mesh,
    response: Response,
    reactions: Vec<SupportReaction>,
    equilibrium_residual_n: f64,
) -> SolveResult {
    let moment_ok = postprocess::check_allowable(response.max_moment_nm, model.allowable_moment_nm);
    let deflection_ok =
        postprocess::check_allowable(response.max_deflection_m, model.allowable_deflection_m);
    if moment_ok == Some(false) {
        warn!(
            "bending moment {:.1} N·m exceeds allowable {:.1} N·m",
            response.max_moment_nm,
            model.allowable_moment_nm.unwrap_or_default()
        );
    }
    if deflection_ok == Some(false) {
        warn!(
            "deflection {:.4} m exceeds allowable {:.4} m",
            response.max_deflection_m,
            model.allowable_deflection_m.unwrap_or_default()
        );
    }
    debug!(
        "max moment {:.3} N·m, max deflection {:.3e} m",
        response.max_moment_nm, response.max_deflection_m
    );

    SolveResult {
        reactions,
        max_moment_nm: response.max_moment_nm,
        max_deflection_m: response.max_deflection_m,
        deflections_m: response.deflections_m,
        moments_nm: response.moments_nm,
        node_positions_m: mesh.nodes().to_vec(),
        moment_ok,
        deflection_ok,
        element_count: mesh.element_count(),
        equilibrium_residual_n,
    }
}
