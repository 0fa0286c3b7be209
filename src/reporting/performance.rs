use std::time::{Duration, Instant};
use sysinfo::System;

/// The number of bytes in a megabyte for memory calculations
const BYTES_PER_MB: f64 = 1_048_576.0;

/// Result of timing a single render operation
#[derive(Debug, Clone)]
pub struct OperationTiming {
    pub operation: String,
    pub duration: Duration,
    pub items_processed: usize,
}

impl OperationTiming {
    /// Throughput in items per second
    pub fn throughput(&self) -> f64 {
        if self.duration.as_millis() > 0 {
            self.items_processed as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Handle returned by `start_operation`, closed by `finish_operation`
pub struct OperationTimer {
    operation: String,
    started: Instant,
}

/// Collects per-operation timings and process memory for one render.
pub struct PerformanceProfiler {
    started: Instant,
    operations: Vec<OperationTiming>,
}

impl PerformanceProfiler {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            operations: Vec::new(),
        }
    }

    pub fn start_operation(&mut self, operation: &str) -> OperationTimer {
        OperationTimer {
            operation: operation.to_string(),
            started: Instant::now(),
        }
    }

    pub fn finish_operation(&mut self, timer: OperationTimer, items_processed: usize) {
        self.operations.push(OperationTiming {
            operation: timer.operation,
            duration: timer.started.elapsed(),
            items_processed,
        });
    }

    pub fn operations(&self) -> &[OperationTiming] {
        &self.operations
    }

    /// Resident memory of this process in MB, when the system exposes it
    pub fn process_memory_mb(&self) -> Option<f64> {
        let mut system = System::new();
        let pid = sysinfo::get_current_pid().ok()?;
        system.refresh_processes(sysinfo::ProcessesToUpdate::Some(&[pid]), true);
        let process = system.process(pid)?;
        Some(process.memory() as f64 / BYTES_PER_MB)
    }

    /// Print the collected timings to stdout
    pub fn display_summary(&self) {
        println!("\nPerformance summary");
        println!("  total: {:.1?}", self.started.elapsed());
        for timing in &self.operations {
            if timing.items_processed > 0 {
                println!(
                    "  {}: {:.1?} ({} items, {:.0}/s)",
                    timing.operation,
                    timing.duration,
                    timing.items_processed,
                    timing.throughput()
                );
            } else {
                println!("  {}: {:.1?}", timing.operation, timing.duration);
            }
        }
        if let Some(memory_mb) = self.process_memory_mb() {
            println!("  memory: {memory_mb:.1} MB");
        }
    }
}

impl Default for PerformanceProfiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_timing_recorded() {
        let mut profiler = PerformanceProfiler::new();
        let timer = profiler.start_operation("load_thefts");
        profiler.finish_operation(timer, 100);

        assert_eq!(profiler.operations().len(), 1);
        assert_eq!(profiler.operations()[0].operation, "load_thefts");
        assert_eq!(profiler.operations()[0].items_processed, 100);
    }

    #[test]
    fn test_throughput_zero_for_instant_operations() {
        let timing = OperationTiming {
            operation: "noop".to_string(),
            duration: Duration::from_millis(0),
            items_processed: 10,
        };
        assert_eq!(timing.throughput(), 0.0);
    }

    #[test]
    fn test_throughput_positive() {
        let timing = OperationTiming {
            operation: "load".to_string(),
            duration: Duration::from_millis(500),
            items_processed: 50,
        };
        assert!((timing.throughput() - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_display_summary_does_not_panic() {
        let mut profiler = PerformanceProfiler::new();
        let timer = profiler.start_operation("render");
        profiler.finish_operation(timer, 0);
        profiler.display_summary();
    }
}
