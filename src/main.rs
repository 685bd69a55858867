use hab_sim::io::csv::write_trajectory_file;
use hab_sim::io::json::{write_summary_file, FlightSummary};
use hab_sim::sim::event::EventKind;
use hab_sim::{
    simulate, BalloonConfig, ConstantWind, LaunchSite, LiftGas, SimConfig, StandardAtmosphere,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // -----------------------------------------------------------------------
    // Flight: "Aurora-1" latex sounding balloon
    // -----------------------------------------------------------------------
    let config = BalloonConfig {
        gross_mass: 1.0,               // kg  (payload + envelope)
        lift_gas: LiftGas::Helium,
        max_volume: 6.0,               // m^3 envelope burst volume
        percent_lift_gas: 23.0,        // fill fraction at sea level
        buoyant_force_scalar: 1.0,
        drag_coefficient_ascent: 0.47, // sphere
        parachute_drag_coefficient: 1.0,
        parachute_area: 1.0,           // m^2
        ascent_rate: None,
        descent_rate_parachute: None,
    };

    let launch = LaunchSite {
        latitude: 32.0,
        longitude: 42.0,
        altitude: 10.0,
        time: 0.0,
    };

    let sim = SimConfig::default();
    let wind = ConstantWind::new(90.0, 8.0); // 8 m/s toward the east

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let log = match simulate(&config, &launch, &sim, &StandardAtmosphere, &wind) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("simulation failed: {e}");
            std::process::exit(1);
        }
    };

    let summary = FlightSummary::from_log(&log);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  BALLOON FLIGHT PREDICTION — Aurora-1");
    println!("====================================================================");
    println!();
    println!("  Launch Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Gross mass:    {:>8.1} kg    Lift gas:     {:>8}",
        config.gross_mass, "Helium"
    );
    println!(
        "  Max volume:    {:>8.1} m^3   Gas fill:     {:>7.0} %",
        config.max_volume, config.percent_lift_gas
    );
    println!(
        "  Cd (ascent):   {:>8.2}       Chute Cd/A:   {:.1} / {:.1} m^2",
        config.drag_coefficient_ascent,
        config.parachute_drag_coefficient,
        config.parachute_area
    );
    println!(
        "  Launch site:   {:.3}N {:.3}E at {:.0} m",
        launch.latitude, launch.longitude, launch.altitude
    );
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for event in &log.events {
        match &event.kind {
            EventKind::Launch => {
                println!("  LAUNCH    t={:>7.0}s", event.time);
            }
            EventKind::Burst { altitude, volume } => {
                println!(
                    "  BURST     t={:>7.0}s   alt={:>8.0}m   volume={:.2} m^3",
                    event.time, altitude, volume
                );
            }
            EventKind::Landing {
                latitude,
                longitude,
            } => {
                println!(
                    "  LANDING   t={:>7.0}s   at {:.4}N {:.4}E",
                    event.time, latitude, longitude
                );
            }
        }
    }
    println!();

    println!("  Flight Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Peak altitude: {:>8.0} m   ({:.2} km)",
        summary.peak_altitude_m,
        summary.peak_altitude_m / 1000.0
    );
    println!("  Flight time:   {:>8.0} s", summary.flight_time_s);
    println!(
        "  Landing speed: {:>8.1} m/s",
        summary.landing_speed_ms
    );
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:>9}  {:>8}  {:>9}  {:>9}  {:>8}",
        "t (s)", "alt (m)", "vz (m/s)", "lat", "lon", "phase"
    );
    println!("  {}", "─".repeat(62));

    let sample_interval = (log.frames.len() / 25).max(1);
    for (i, f) in log.frames.iter().enumerate() {
        if i % sample_interval != 0 && i != log.frames.len() - 1 {
            continue;
        }
        println!(
            "  {:>8.0}  {:>9.1}  {:>8.2}  {:>9.4}  {:>9.4}  {:>8}",
            f.time,
            f.altitude,
            f.velocity.z,
            f.latitude,
            f.longitude,
            f.phase.as_str()
        );
    }

    println!();
    println!("  Simulation: {} steps, dt={} s", log.frames.len(), sim.dt);
    println!("====================================================================");
    println!();

    // -----------------------------------------------------------------------
    // Optional exports: hab-sim [trajectory.csv] [summary.json]
    // -----------------------------------------------------------------------
    let args: Vec<String> = std::env::args().collect();
    if let Some(csv_path) = args.get(1) {
        if let Err(e) = write_trajectory_file(csv_path, &log.frames) {
            eprintln!("failed to write {csv_path}: {e}");
        } else {
            println!("  trajectory written to {csv_path}");
        }
    }
    if let Some(json_path) = args.get(2) {
        if let Err(e) = write_summary_file(json_path, &summary) {
            eprintln!("failed to write {json_path}: {e}");
        } else {
            println!("  summary written to {json_path}");
        }
    }
}
