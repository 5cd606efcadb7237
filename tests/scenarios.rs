#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use trussrig::{
    solve, suggest_hoists, BeamModel, Fixture, HoistRequirement, HoistType, LoadCase, ModelError,
    SingularError, SolveError, SolveOptions, Support,
};

fn ten_metre_truss() -> BeamModel {
    BeamModel::new(10.0, 5.0e6, 5.0)
}

fn end_supports(span: f64) -> SolveOptions {
    SolveOptions::with_supports(vec![Support::at(0.0), Support::at(span)])
}

fn catalog() -> Vec<HoistType> {
    vec![
        HoistType::new("h500", "Half tonne", 500.0),
        HoistType::new("h1000", "One tonne", 1_000.0),
        HoistType::new("h250", "Quarter tonne", 250.0),
    ]
}

#[test]
fn simply_supported_scenario_matches_hand_calculation() {
    let result = solve(&ten_metre_truss(), &LoadCase::new(), &end_supports(10.0))
        .expect("simply supported truss solves");

    assert!(result.max_deflection_m > 0.0);
    assert!(result.max_deflection_m < 0.01);
    assert_relative_eq!(result.max_moment_nm, 5.0 * 9.81 * 100.0 / 8.0, max_relative = 1.0e-6);
    for reaction in &result.reactions {
        assert_relative_eq!(reaction.force_n, 245.25, max_relative = 1.0e-6);
    }
    assert_eq!(result.node_positions_m.len(), 25);
    assert_eq!(result.deflections_m.len(), 25);
}

#[test]
fn reactions_balance_applied_load() {
    let model = BeamModel::new(12.0, 4.0e6, 7.5);
    let loads = LoadCase::new()
        .with_fixture(Fixture::new(1.3, 24.0, 4))
        .with_fixture(Fixture::new(1.3, 12.0, 2))
        .with_fixture(Fixture::new(7.9, 30.0, 3))
        .with_fixture(Fixture::new(12.0, 50.0, 1))
        .with_smeared_motor_weight(29.0);
    let supports = vec![
        Support::labelled(0.5, "SL"),
        Support::labelled(5.0, "C"),
        Support::labelled(11.0, "SR"),
    ];

    for tilt_deg in [0.0, 0.5, -2.0, 3.0] {
        let options = SolveOptions::with_supports(supports.clone()).with_tilt_deg(tilt_deg);
        let result = solve(&model, &loads, &options).expect("three-point hang solves");
        let applied = loads.total_applied_force_n(&model, supports.len());
        assert_relative_eq!(result.total_reaction_n(), applied, max_relative = 1.0e-6);
        assert_relative_eq!(result.equilibrium_residual_n, 0.0, epsilon = 1.0e-6 * applied);
        assert_eq!(result.support_labels(), vec!["SL", "C", "SR"]);
    }
}

#[test]
fn symmetric_truss_has_equal_reactions() {
    let model = BeamModel::new(8.0, 3.0e6, 12.0);
    let result = solve(&model, &LoadCase::new(), &end_supports(8.0)).expect("truss solves");
    let expected = 12.0 * 8.0 * 9.81 / 2.0;
    assert_relative_eq!(result.reactions[0].force_n, expected, max_relative = 1.0e-7);
    assert_relative_eq!(result.reactions[1].force_n, expected, max_relative = 1.0e-7);
    assert_relative_eq!(
        result.reactions[0].force_n,
        result.reactions[1].force_n,
        max_relative = 1.0e-8
    );
}

#[test]
fn tilt_never_loads_the_raised_support() {
    let model = ten_metre_truss();
    let loads = LoadCase::new().with_fixture(Fixture::new(3.0, 20.0, 2));
    let applied = loads.total_applied_force_n(&model, 2);

    let mut previous: Option<(f64, f64)> = None;
    for tilt_deg in [0.0, 1.0, 2.5, 5.0] {
        let options = end_supports(10.0).with_tilt_deg(tilt_deg);
        let result = solve(&model, &loads, &options).expect("tilted truss solves");
        let pivot = result.reactions[0].force_n;
        let raised = result.reactions[1].force_n;

        // A straight-line settlement is a rigid-body motion for a determinate
        // hang, so the reactions may stay put but must never move the wrong way.
        if let Some((last_pivot, last_raised)) = previous {
            assert!(raised <= last_raised + 1.0e-6 * applied);
            assert!(pivot >= last_pivot - 1.0e-6 * applied);
        }
        assert_relative_eq!(pivot + raised, applied, max_relative = 1.0e-6);

        let far_node = result.deflections_m.len() - 1;
        let lift = tilt_deg.to_radians().tan() * 10.0;
        assert_relative_eq!(result.deflections_m[far_node], lift, epsilon = 1.0e-12);
        assert_relative_eq!(result.deflections_m[0], 0.0, epsilon = 1.0e-12);

        previous = Some((pivot, raised));
    }
}

#[test]
fn zero_rigidity_is_invalid() {
    let model = BeamModel::new(10.0, 0.0, 5.0);
    let error = solve(&model, &LoadCase::new(), &end_supports(10.0))
        .expect_err("EI = 0 is rejected");
    assert!(matches!(
        error,
        SolveError::InvalidModel(ModelError::NonPositiveFlexuralRigidity { .. })
    ));
    assert!(!error.is_singular());
}

#[test]
fn fixtures_off_the_span_are_invalid() {
    let loads = LoadCase::new().with_fixture(Fixture::new(10.5, 10.0, 1));
    let error = solve(&ten_metre_truss(), &loads, &end_supports(10.0))
        .expect_err("fixture beyond the end is rejected");
    assert_eq!(
        error,
        SolveError::InvalidModel(ModelError::FixtureOutsideSpan {
            index: 0,
            position_m: 10.5
        })
    );
}

#[test]
fn single_support_is_singular() {
    let options = SolveOptions::with_supports(vec![Support::at(2.0)]);
    let error = solve(&ten_metre_truss(), &LoadCase::new(), &options)
        .expect_err("single pick point is a mechanism");
    assert!(error.is_singular());
}

#[test]
fn coincident_supports_are_singular() {
    let options = SolveOptions::with_supports(vec![Support::at(4.0), Support::at(4.0)]);
    let error = solve(&ten_metre_truss(), &LoadCase::new(), &options)
        .expect_err("coincident pick points are a mechanism");
    assert_eq!(
        error,
        SolveError::SingularSystem(SingularError::UnderConstrained {
            constrained_nodes: 1
        })
    );
}

#[test]
fn no_supports_are_singular() {
    let error = solve(&ten_metre_truss(), &LoadCase::new(), &SolveOptions::default())
        .expect_err("free-floating truss is a mechanism");
    assert!(error.is_singular());
}

#[test]
fn hoists_match_smallest_adequate_rating() {
    let requirements = [
        HoistRequirement::new("SL", 150.0),
        HoistRequirement::new("SR", 420.0),
    ];
    let assignments = suggest_hoists(&requirements, &catalog());
    let rated: Vec<f64> = assignments
        .iter()
        .map(|a| a.hoist.as_ref().expect("catalog not empty").wll_kg)
        .collect();
    assert_eq!(rated, vec![250.0, 500.0]);

    let fallback = suggest_hoists(&[HoistRequirement::new("C", 1_500.0)], &catalog());
    let hoist = fallback[0].hoist.as_ref().expect("catalog not empty");
    assert_relative_eq!(hoist.wll_kg, 1_000.0);
    assert!(fallback[0].is_under_capacity());
}

#[test]
fn solve_feeds_hoist_selection() {
    let model = BeamModel::new(10.0, 5.0e6, 20.0);
    let loads = LoadCase::new()
        .with_dynamic_factor(1.0)
        .with_fixture(Fixture::new(5.0, 100.0, 2));
    let result = solve(&model, &loads, &end_supports(10.0)).expect("truss solves");

    // 200 kg self-weight plus 200 kg of fixtures, split evenly.
    let kg = result.reactions_kg();
    assert_relative_eq!(kg[0], 200.0, max_relative = 1.0e-7);
    assert_relative_eq!(kg[1], 200.0, max_relative = 1.0e-7);

    let assignments = suggest_hoists(&result.hoist_requirements(), &catalog());
    for assignment in &assignments {
        let hoist = assignment.hoist.as_ref().expect("catalog not empty");
        assert_eq!(hoist.id, "h250");
        assert!(!assignment.is_under_capacity());
    }
}

#[test]
fn result_serialises_with_descriptive_fields() {
    let result = solve(&ten_metre_truss(), &LoadCase::new(), &end_supports(10.0))
        .expect("truss solves");
    let json = serde_json::to_value(&result).expect("result serialises");
    assert!(json["reactions"][0]["force_n"].is_number());
    assert!(json["max_moment_nm"].is_number());
    assert!(json["moment_ok"].is_null());
}
