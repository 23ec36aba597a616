use crate::core::scan::{InteractionOrder, ScanJob};
use crate::engine::config::ScanConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument, warn};

pub const DEFAULT_LARGE_SCAN_THRESHOLD: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    /// Jobs visiting more cluster geometries than this are flagged as expensive.
    pub large_scan_threshold: u64,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            large_scan_threshold: DEFAULT_LARGE_SCAN_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub order: InteractionOrder,
    pub jobs: usize,
    pub samples: usize,
    pub configurations: u64,
}

/// The independent scan jobs of a configuration, pair jobs first, each order in
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanPlan {
    jobs: Vec<ScanJob>,
    large_jobs: Vec<usize>,
}

impl ScanPlan {
    pub fn jobs(&self) -> &[ScanJob] {
        &self.jobs
    }

    pub fn jobs_for(&self, order: InteractionOrder) -> impl Iterator<Item = &ScanJob> {
        self.jobs.iter().filter(move |job| job.order == order)
    }

    /// Jobs whose configuration count exceeded the threshold the plan was built with.
    pub fn large_jobs(&self) -> impl Iterator<Item = &ScanJob> {
        self.large_jobs.iter().map(|&i| &self.jobs[i])
    }

    pub fn total_samples(&self) -> usize {
        self.jobs
            .iter()
            .fold(0usize, |acc, job| acc.saturating_add(job.sample_count()))
    }

    pub fn total_configurations(&self) -> u64 {
        self.jobs
            .iter()
            .fold(0u64, |acc, job| acc.saturating_add(job.configuration_count()))
    }

    /// Per-order totals for every order that has at least one job.
    pub fn summary(&self) -> Vec<OrderSummary> {
        InteractionOrder::ALL
            .into_iter()
            .filter_map(|order| {
                let mut jobs = self.jobs_for(order).peekable();
                jobs.peek()?;
                let mut summary = OrderSummary {
                    order,
                    jobs: 0,
                    samples: 0,
                    configurations: 0,
                };
                for job in jobs {
                    summary.jobs += 1;
                    summary.samples = summary.samples.saturating_add(job.sample_count());
                    summary.configurations =
                        summary.configurations.saturating_add(job.configuration_count());
                }
                Some(summary)
            })
            .collect()
    }
}

#[instrument(skip_all, name = "plan_workflow")]
pub fn run(
    config: &ScanConfig,
    options: &PlanOptions,
    reporter: &ProgressReporter,
) -> Result<ScanPlan, EngineError> {
    reporter.phase("Expanding scans", || {
        let total = config.job_count();
        info!("Expanding {} scan declaration(s) into jobs.", total);
        reporter.report(Progress::TaskStart {
            total_steps: total as u64,
        });

        let mut jobs = Vec::with_capacity(total);
        let mut large_jobs = Vec::new();
        for spec in config.specs() {
            debug!("Expanding {} {} scan(s).", spec.len(), spec.order());
            for job in spec.jobs() {
                let configurations = job.configuration_count();
                if configurations > options.large_scan_threshold {
                    warn!(
                        "Scan {} visits {} configurations ({} samples per distance); consider a larger step for a first run.",
                        job.label(),
                        configurations,
                        job.sample_count()
                    );
                    large_jobs.push(jobs.len());
                }
                jobs.push(job);
                reporter.report(Progress::TaskIncrement);
            }
        }

        reporter.report(Progress::TaskFinish);
        Ok(ScanPlan { jobs, large_jobs })
    })
}
