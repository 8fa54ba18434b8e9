//! Tabular result sets produced by evaluation runs.
use crate::error::EvalError;
use anyhow::Result;
use std::path::Path;

/// Dense per-timestep table of one rollout.
///
/// Each row holds the physical observation channels of one executed step,
/// followed by the reward and the auxiliary metrics. Rows are in timestep
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeRecord {
    rows: Vec<Vec<f32>>,
}

impl EpisodeRecord {
    /// Constructs a record from row-major data.
    pub fn new(rows: Vec<Vec<f32>>) -> Self {
        Self { rows }
    }

    /// Number of rows, one per executed step.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` if the record has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row-major access to the table.
    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }
}

/// Row-wise union of episode records across seeded rollouts.
///
/// Each appended episode is tagged with its simulation index in the trailing
/// column; rows keep their insertion order, so the index column partitions
/// the set back into individual episodes.
#[derive(Debug, Clone)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<f32>>,
}

impl ResultSet {
    /// Constructs an empty result set with the given column headers.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Column headers.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of accumulated rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Row-major access to the accumulated data.
    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    /// Appends one episode, tagging each row with the simulation index.
    ///
    /// Fails if the episode width plus the index column does not match the
    /// header width.
    pub fn push_episode(&mut self, record: EpisodeRecord, sim_ix: usize) -> Result<()> {
        for mut row in record.rows {
            if row.len() + 1 != self.columns.len() {
                return Err(EvalError::Configuration(format!(
                    "episode row has {} values, result set expects {}",
                    row.len(),
                    self.columns.len() - 1
                ))
                .into());
            }
            row.push(sim_ix as f32);
            self.rows.push(row);
        }
        Ok(())
    }

    /// Writes the result set to `path` as CSV with a header row.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path.as_ref())?;
        wtr.write_record(&self.columns)?;
        for row in self.rows.iter() {
            wtr.write_record(row.iter().map(|v| v.to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }
}
