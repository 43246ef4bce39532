//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv` — one row per lifecycle event, in log order.
//! - `positions.csv` — one row per agent per tick.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use wh_core::Cell;
use wh_sim::{Event, TickSnapshot};

use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    positions: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["tick", "kind", "agent", "row", "col", "value"])?;

        let mut positions = Writer::from_path(dir.join("positions.csv"))?;
        positions.write_record(["tick", "agent", "row", "col", "battery"])?;

        Ok(Self {
            events,
            positions,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick(&mut self, snapshot: &TickSnapshot) -> OutputResult<()> {
        for event in &snapshot.events {
            let (kind, agent, cell, value) = event_fields(event);
            self.events.write_record(&[
                snapshot.t.0.to_string(),
                kind.to_string(),
                agent.to_string(),
                cell.map(|c| c.row.to_string()).unwrap_or_default(),
                cell.map(|c| c.col.to_string()).unwrap_or_default(),
                value.map(|v| v.to_string()).unwrap_or_default(),
            ])?;
        }

        for (i, &pos) in snapshot.positions.iter().enumerate() {
            self.positions.write_record(&[
                snapshot.t.0.to_string(),
                i.to_string(),
                pos.row.to_string(),
                pos.col.to_string(),
                snapshot.batteries[i].to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.positions.flush()?;
        Ok(())
    }
}

/// Flatten an event into `(kind, agent, cell, value)` CSV fields.
fn event_fields(event: &Event) -> (&'static str, u32, Option<Cell>, Option<u32>) {
    match *event {
        Event::ArrivedLoader { agent, at, dwell_steps } => {
            ("arrived_loader", agent.0, Some(at), Some(dwell_steps))
        }
        Event::ArrivedDump { agent, at }       => ("arrived_dump", agent.0, Some(at), None),
        Event::ArrivedCharger { agent, at }    => ("arrived_charger", agent.0, Some(at), None),
        Event::DwellFinished { agent }         => ("dwell_finished", agent.0, None, None),
        Event::Battery { agent, value }        => ("battery", agent.0, None, Some(value)),
        Event::LeaveCharger { agent }          => ("leave_charger", agent.0, None, None),
        Event::GoalLoader { agent, goal }      => ("goal_loader", agent.0, Some(goal), None),
        Event::GoalDump { agent, goal }        => ("goal_dump", agent.0, Some(goal), None),
        Event::GoalCharge { agent, goal }      => ("goal_charge", agent.0, Some(goal), None),
        Event::LoaderClaimed { agent, station }  => ("loader_claimed", agent.0, Some(station), None),
        Event::DumpClaimed { agent, station }    => ("dump_claimed", agent.0, Some(station), None),
        Event::ChargerClaimed { agent, station } => ("charger_claimed", agent.0, Some(station), None),
        Event::GoalUnreachable { agent, goal } => ("goal_unreachable", agent.0, Some(goal), None),
    }
}
