use step_tracker_core::{build_day_summary, build_training_summary, config::Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: reads STEP_TRACKER_WEIGHT_KG / STEP_TRACKER_HEIGHT, falling back to sample values
    let cfg = Config::from_env();
    let profile = cfg.profile(
        cfg.weight.is_none().then_some(70.0),
        cfg.height.is_none().then_some(1.75),
    )?;

    print!("{}", build_day_summary("9000,1h20m", profile.weight, profile.height));
    for record in ["4200,Бег,35m", "2500,Ходьба,40m", "1000,Плавание,1h"] {
        match build_training_summary(record, profile.weight, profile.height) {
            Ok(report) => print!("{report}"),
            Err(e) => eprintln!("{record}: {e}"),
        }
    }
    Ok(())
}
