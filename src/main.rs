use std::error::Error;

use trussrig::{
    render_report, solve, suggest_hoists, BeamModel, Fixture, HoistType, LoadCase, SolveOptions,
    Support,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // A 12 m box truss carrying two rows of moving lights, flown from three
    // points with the downstage end trimmed 1° high.
    let model = BeamModel::new(12.0, 4.2e6, 7.5)
        .with_allowable_moment(9_000.0)
        .with_allowable_deflection(12.0 / 300.0);

    let catalog = vec![
        HoistType::new("lv-250", "Lodestar 250 kg", 250.0).with_self_weight(22.0),
        HoistType::new("lv-500", "Lodestar 500 kg", 500.0).with_self_weight(29.0),
        HoistType::new("lv-1000", "Lodestar 1000 kg", 1_000.0).with_self_weight(55.0),
    ];

    let loads = LoadCase::new()
        .with_fixture(Fixture::new(1.5, 24.0, 4))
        .with_fixture(Fixture::new(4.5, 24.0, 4))
        .with_fixture(Fixture::new(7.5, 24.0, 4))
        .with_fixture(Fixture::new(10.5, 24.0, 4))
        .with_smeared_motors(&catalog[1]);

    let options = SolveOptions::with_supports(vec![
        Support::labelled(0.5, "SL"),
        Support::labelled(6.0, "C"),
        Support::labelled(11.5, "SR"),
    ])
    .with_tilt_deg(1.0);

    let result = solve(&model, &loads, &options)?;
    let assignments = suggest_hoists(&result.hoist_requirements(), &catalog);

    println!("{}", render_report(&result, &assignments));
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
