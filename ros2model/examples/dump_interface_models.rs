//! Interface Model Dump Tool
//!
//! Scans a directory for .msg, .srv, and .action files, extracts the
//! structural model of each one, and prints the models back in spec-file
//! form together with per-kind counts.
//!
//! Usage:
//!   cargo run --example dump_interface_models -- <interface_dir>
//!   cargo run --example dump_interface_models -- <interface_dir> --quiet

use ros2model::{InterfaceKind, scan_dir};
use std::env;
use std::path::Path;
use std::process::ExitCode;

/// Per-kind model counts
#[derive(Debug, Default)]
struct ScanStats {
    msg_files: usize,
    srv_files: usize,
    action_files: usize,
}

impl ScanStats {
    fn total(&self) -> usize {
        self.msg_files + self.srv_files + self.action_files
    }

    fn record(&mut self, kind: InterfaceKind, count: usize) {
        match kind {
            InterfaceKind::Message => self.msg_files += count,
            InterfaceKind::Service => self.srv_files += count,
            InterfaceKind::Action => self.action_files += count,
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <interface_dir> [--quiet]", args[0]);
        eprintln!("\nExample:");
        eprintln!("  {} /opt/ros/jazzy/share/std_srvs/srv", args[0]);
        return ExitCode::FAILURE;
    }

    let dir = Path::new(&args[1]);
    let quiet = args.get(2).is_some_and(|arg| arg == "--quiet" || arg == "-q");

    if !dir.is_dir() {
        eprintln!("Error: not a directory: {}", dir.display());
        return ExitCode::FAILURE;
    }

    let mut stats = ScanStats::default();

    for kind in [
        InterfaceKind::Message,
        InterfaceKind::Service,
        InterfaceKind::Action,
    ] {
        let models = match scan_dir(kind, dir) {
            Ok(models) => models,
            Err(error) => {
                eprintln!("Error scanning {} for .{} files: {}", dir.display(), kind, error);
                return ExitCode::FAILURE;
            }
        };

        stats.record(kind, models.len());

        if !quiet {
            for model in &models {
                println!("{model}");
            }
        }
    }

    println!("Scanned {}", dir.display());
    println!("  message files (.msg): {}", stats.msg_files);
    println!("  service files (.srv): {}", stats.srv_files);
    println!("  action files (.action): {}", stats.action_files);
    println!("  total: {}", stats.total());

    ExitCode::SUCCESS
}
