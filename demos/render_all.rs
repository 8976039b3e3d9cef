use std::path::PathBuf;
use wrist_rotations::movement::Movement;
use wrist_rotations::session::{Session, SessionConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Optional: output directory, then a TOML config file
    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "rotation_frames".into()));
    let config = match args.next() {
        Some(path) => SessionConfig::from_toml_file(path)?,
        None => SessionConfig::default(),
    };

    let session = Session::new(config)?;
    let renderer = session.config().plot.svg;
    std::fs::create_dir_all(&out_dir)?;

    let s = "-".repeat(50);
    for movement in Movement::ALL {
        let frame = session.render_default(movement)?;
        let stem = out_dir.join(movement.slug());

        frame.write_svg(&renderer, stem.with_extension("svg"))?;
        frame.write_json(stem.with_extension("json"))?;
        if frame.write_trajectory_csv(stem.with_extension("csv"))? {
            println!("Wrote trajectory: {}", stem.with_extension("csv").display());
        }

        println!("{}", s);
        print!("{}", frame.to_text());
        println!("Figure: {}", stem.with_extension("svg").display());
    }

    Ok(())
}
