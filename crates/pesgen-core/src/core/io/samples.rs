use crate::core::scan::{InteractionOrder, ScanJob};
use crate::engine::progress::{Progress, ProgressReporter};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum SampleWriteError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV writing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

const HEADER: [&str; 4] = ["order", "type_index", "sample", "distance"];

#[derive(Debug, Serialize)]
struct SampleRecord {
    order: InteractionOrder,
    type_index: u32,
    sample: usize,
    distance: f64,
}

/// Writes every sample point of every job as CSV with the header
/// `order,type_index,sample,distance`. Returns the number of data rows written.
#[instrument(level = "debug", skip_all, fields(jobs = jobs.len()))]
pub fn write_samples<W: Write>(
    jobs: &[ScanJob],
    writer: W,
    reporter: &ProgressReporter,
) -> Result<usize, SampleWriteError> {
    write_records(jobs, writer, reporter, "<writer>")
}

pub fn write_samples_to_path(
    jobs: &[ScanJob],
    path: &Path,
    reporter: &ProgressReporter,
) -> Result<usize, SampleWriteError> {
    let label = path.to_string_lossy().to_string();
    let file = File::create(path).map_err(|e| SampleWriteError::Io {
        path: label.clone(),
        source: e,
    })?;
    let rows = write_records(jobs, file, reporter, &label)?;
    debug!("Wrote {} sample rows to {:?}", rows, path);
    Ok(rows)
}

fn write_records<W: Write>(
    jobs: &[ScanJob],
    writer: W,
    reporter: &ProgressReporter,
    label: &str,
) -> Result<usize, SampleWriteError> {
    let csv_err = |source: csv::Error| SampleWriteError::Csv {
        path: label.to_string(),
        source,
    };

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(HEADER).map_err(csv_err)?;
    let mut rows = 0;

    reporter.report(Progress::TaskStart {
        total_steps: jobs.len() as u64,
    });
    for job in jobs {
        for (sample, distance) in job.samples().enumerate() {
            csv_writer
                .serialize(SampleRecord {
                    order: job.order,
                    type_index: job.type_index,
                    sample,
                    distance,
                })
                .map_err(csv_err)?;
            rows += 1;
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    csv_writer.flush().map_err(|e| SampleWriteError::Io {
        path: label.to_string(),
        source: e,
    })?;
    Ok(rows)
}
