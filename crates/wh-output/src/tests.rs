//! Unit tests for wh-output.

#[cfg(test)]
mod helpers {
    use wh_core::{AgentId, Cell, Tick};
    use wh_sim::{Event, TickSnapshot};

    /// A hand-built snapshot with two agents and two events.
    pub fn snapshot(t: u64) -> TickSnapshot {
        TickSnapshot {
            t:         Tick(t),
            positions: vec![Cell::new(1, 2), Cell::new(0, 3)],
            goals:     vec![Cell::new(0, 0), Cell::new(0, 3)],
            batteries: vec![997, 1_000],
            events:    vec![
                Event::ArrivedLoader {
                    agent:       AgentId(1),
                    at:          Cell::new(0, 3),
                    dwell_steps: 12,
                },
                Event::Battery { agent: AgentId(0), value: 997 },
            ],
        }
    }
}

// ── Visualizer trace format ───────────────────────────────────────────────────

#[cfg(test)]
mod visualizer {
    use wh_core::{Cell, Tick};

    use crate::writer::OutputWriter;
    use crate::VisualizerWriter;

    #[test]
    fn config_lines_use_x_y_order_with_trailing_commas() {
        let mut w = VisualizerWriter::from_writer(Vec::new());
        w.write_config(Tick(0), &[Cell::new(2, 5), Cell::new(0, 1)]).unwrap();
        w.write_config(Tick(1), &[Cell::new(1, 5), Cell::new(0, 2)]).unwrap();

        let bytes = w.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        // x = col, y = row.
        assert_eq!(text, "0:(5,2),(1,0),\n1:(5,1),(2,0),\n");
    }

    #[test]
    fn write_tick_appends_snapshot_positions() {
        let mut w = VisualizerWriter::from_writer(Vec::new());
        w.write_tick(&super::helpers::snapshot(7)).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // idempotent

        let text = String::from_utf8(w.into_inner().unwrap()).unwrap();
        assert_eq!(text, "7:(2,1),(3,0),\n");
    }
}

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_backend {
    use crate::writer::OutputWriter;
    use crate::CsvWriter;

    #[test]
    fn creates_both_files_with_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick(&super::helpers::snapshot(1)).unwrap();
        w.write_tick(&super::helpers::snapshot(2)).unwrap();
        w.finish().unwrap();

        let events = std::fs::read_to_string(dir.path().join("events.csv")).unwrap();
        let mut lines = events.lines();
        assert_eq!(lines.next(), Some("tick,kind,agent,row,col,value"));
        assert_eq!(lines.next(), Some("1,arrived_loader,1,0,3,12"));
        assert_eq!(lines.next(), Some("1,battery,0,,,997"));
        assert_eq!(events.lines().count(), 1 + 4); // header + 2 events × 2 ticks

        let positions = std::fs::read_to_string(dir.path().join("positions.csv")).unwrap();
        let mut lines = positions.lines();
        assert_eq!(lines.next(), Some("tick,agent,row,col,battery"));
        assert_eq!(lines.next(), Some("1,0,1,2,997"));
        assert_eq!(lines.next(), Some("1,1,0,3,1000"));
        assert_eq!(positions.lines().count(), 1 + 2 * 2); // header + 2 agents × 2 ticks
    }
}

// ── Observer bridge over a live run ───────────────────────────────────────────

#[cfg(test)]
mod observer {
    use wh_core::{Cell, SimConfig};
    use wh_grid::Grid;
    use wh_sim::CoordinatorBuilder;

    use crate::{CsvWriter, TraceObserver, VisualizerWriter};

    fn tiny_run(n: u64, obs: &mut impl wh_sim::SimObserver) {
        let mut coordinator = CoordinatorBuilder::new(
            Grid::open(3, 3),
            vec![Cell::new(1, 1)],
            vec![Cell::new(0, 0)],
            vec![Cell::new(2, 2)],
            vec![Cell::new(0, 2)],
        )
        .config(SimConfig { seed: 0, ..SimConfig::default() })
        .build()
        .unwrap();
        coordinator.run_ticks(n, obs);
    }

    #[test]
    fn records_every_tick_without_errors() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = TraceObserver::new(writer);
        tiny_run(10, &mut obs);
        assert!(obs.take_error().is_none());

        let positions = std::fs::read_to_string(dir.path().join("positions.csv")).unwrap();
        // header + 1 agent × 10 ticks
        assert_eq!(positions.lines().count(), 11);
    }

    #[test]
    fn visualizer_trace_has_one_line_per_tick() {
        let mut obs = TraceObserver::new(VisualizerWriter::from_writer(Vec::new()));
        tiny_run(5, &mut obs);
        assert!(obs.take_error().is_none());

        let text = String::from_utf8(obs.into_writer().into_inner().unwrap()).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with("1:("));
    }
}
