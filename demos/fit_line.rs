//! Fit the line y = x / 2 from a handful of placed points and print the
//! resulting curve. Run with `RUST_LOG=debug` to see per-sweep errors.

use curvefit::{Session, SweepConfig, Topology};

fn main() -> curvefit::Result<()> {
    env_logger::init();

    let mut session = Session::new(Topology::default(), SweepConfig::default())?;

    // Points on y = x / 2 across a canvas-like domain.
    for i in -5..=5 {
        let x = f64::from(i) * 40.0;
        session.add_point(x, x / 2.0);
    }

    session.start();
    let mut sweeps = 0_u32;
    while session.is_running() && sweeps < 20_000 {
        session.tick()?;
        sweeps += 1;
        if sweeps % 1000 == 0 {
            if let Some(err) = session.mean_error() {
                println!("sweep {sweeps:>6}: mean error {err:.4e}");
            }
        }
    }

    match session.mean_error() {
        Some(err) => println!(
            "finished after {sweeps} sweeps, mean error {err:.4e} (running: {})",
            session.is_running()
        ),
        None => println!("no points, nothing trained"),
    }

    println!("\n{:>8} {:>12} {:>12}", "x", "predicted", "target");
    let mut x = -200.0;
    while x <= 200.0 {
        let y = session.evaluate(x)?;
        println!("{x:>8.1} {y:>12.4} {:>12.4}", x / 2.0);
        x += 50.0;
    }

    Ok(())
}
