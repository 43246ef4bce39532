//! sorter — reference warehouse scenario for the rust_wh framework.
//!
//! Eight robots cycle between 4 loaders, 16 dumps, and 2 chargers on a
//! walled 14×20 floor.  Writes a grid-visualizer trace and prints a run
//! summary.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use wh_core::{Cell, SimConfig, Tick};
use wh_grid::Grid;
use wh_output::{TraceObserver, VisualizerWriter};
use wh_sim::{CoordinatorBuilder, Event};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:  u64 = 42;
const TICKS: u64 = 50;

const HEIGHT: u16 = 14;
const WIDTH:  u16 = 20;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== sorter — rust_wh warehouse coordinator ===");
    println!("Floor: {HEIGHT}x{WIDTH}  |  Ticks: {TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Build the floor: open room with a one-cell wall ring.
    let grid = Grid::from_fn(HEIGHT, WIDTH, |c: Cell| {
        c.row > 0 && c.row < HEIGHT - 1 && c.col > 0 && c.col < WIDTH - 1
    });

    // 2. Stations: loaders along the top row, dumps along the bottom,
    //    chargers between the loaders and the wall.
    let loaders: Vec<Cell> = (2u16..=5).map(|col| Cell::new(1, col)).collect();
    let dumps: Vec<Cell> = (2u16..18).map(|col| Cell::new(12, col)).collect();
    let chargers = vec![Cell::new(1, 7), Cell::new(1, 8)];

    // 3. Fleet: a 4×2 block of robots near the loaders.
    let starts: Vec<Cell> = (2u16..=5)
        .flat_map(|row| (2u16..=3).map(move |col| Cell::new(row, col)))
        .collect();
    println!(
        "Stations: {} loaders, {} dumps, {} chargers  |  Robots: {}",
        loaders.len(),
        dumps.len(),
        chargers.len(),
        starts.len()
    );

    // 4. Build the coordinator.
    let mut coordinator = CoordinatorBuilder::new(grid, starts, loaders, dumps, chargers)
        .config(SimConfig { seed: SEED, ..SimConfig::default() })
        .build()?;

    // 5. Set up the visualizer trace, starting with the t = 0 configuration.
    std::fs::create_dir_all("output")?;
    let mut writer = VisualizerWriter::create(Path::new("output/sorter-trace.txt"))?;
    writer.write_config(Tick::ZERO, coordinator.positions())?;
    let mut obs = TraceObserver::new(writer);

    // 6. Run.
    let t0 = Instant::now();
    let mut pickups = 0usize;
    let mut deliveries = 0usize;
    {
        struct CountingObserver<'a, O: wh_sim::SimObserver> {
            inner:      &'a mut O,
            pickups:    &'a mut usize,
            deliveries: &'a mut usize,
        }
        impl<O: wh_sim::SimObserver> wh_sim::SimObserver for CountingObserver<'_, O> {
            fn on_tick_end(&mut self, snapshot: &wh_sim::TickSnapshot) {
                for e in &snapshot.events {
                    match e {
                        Event::ArrivedLoader { .. } => *self.pickups += 1,
                        Event::ArrivedDump { .. } => *self.deliveries += 1,
                        _ => {}
                    }
                }
                self.inner.on_tick_end(snapshot);
            }
            fn on_sim_end(&mut self, final_tick: Tick) {
                self.inner.on_sim_end(final_tick);
            }
        }

        let mut counting = CountingObserver {
            inner:      &mut obs,
            pickups:    &mut pickups,
            deliveries: &mut deliveries,
        };
        coordinator.run_ticks(TICKS, &mut counting);
    }
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Summary.
    println!("Run complete in {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    println!("  pickups    : {pickups}");
    println!("  deliveries : {deliveries}");
    println!("  trace      : output/sorter-trace.txt");
    println!();

    // 8. Final fleet table.
    println!("{:<8} {:<12} {:<10}", "Robot", "Cell", "Battery");
    println!("{}", "-".repeat(32));
    for (i, (&pos, state)) in coordinator
        .positions()
        .iter()
        .zip(coordinator.states())
        .enumerate()
    {
        println!("{:<8} {:<12} {:<10}", i, pos.to_string(), state.battery);
    }

    Ok(())
}
