//! Text formatting utilities for the status bar.

use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory())
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB for the status bar.
///
/// # Arguments
/// * `memory_mb` - Memory usage in megabytes
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("内存: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("内存: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_memory_mb() {
        assert_eq!(format_memory_mb(512.5), "内存: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "内存: 2.00 GB");
    }

    #[test]
    fn test_current_memory_is_non_negative() {
        assert!(get_current_memory_mb() >= 0.0);
    }
}
