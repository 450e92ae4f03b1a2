// Debug logging module for asynchronous decision logging
//
// Fire-and-forget JSONL writes so the main request/response cycle never
// blocks on disk. A disabled logger is a pure no-op and never touches the
// tokio runtime, which keeps the solver callable from synchronous tests.

use log::error;
use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::grid::GridModel;

/// Represents a single debug log entry
#[derive(Debug, Serialize)]
struct DebugLogEntry<'a> {
    token: &'a str,
    grid: &'a GridModel,
    timestamp: String,
}

#[derive(Clone)]
pub struct DebugLogger {
    log_file_path: String,
    enabled: bool,
}

impl DebugLogger {
    /// Creates an enabled debug logger, truncating any previous log file.
    /// Falls back to a disabled logger if the file cannot be created.
    pub fn new(log_file_path: &str) -> Self {
        match std::fs::File::create(log_file_path) {
            Ok(_) => {
                log::info!("Debug logging enabled: {}", log_file_path);
                DebugLogger {
                    log_file_path: log_file_path.to_string(),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create debug log file '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a disabled debug logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger {
            log_file_path: String::new(),
            enabled: false,
        }
    }

    /// Logs one tick's decision asynchronously (fire-and-forget)
    pub fn log_decision(&self, grid: &GridModel, token: &str) {
        if !self.enabled {
            return;
        }

        let path = self.log_file_path.clone();
        let grid = grid.clone();
        let token = token.to_string();

        tokio::spawn(async move {
            Self::append_entry(path, grid, token).await;
        });
    }

    /// Internal async function that performs the actual file write
    async fn append_entry(path: String, grid: GridModel, token: String) {
        let entry = DebugLogEntry {
            token: &token,
            grid: &grid,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        let line = match serde_json::to_string(&entry) {
            Ok(json_line) => format!("{}\n", json_line),
            Err(e) => {
                error!("Failed to serialize debug log entry: {}", e);
                return;
            }
        };

        match OpenOptions::new().append(true).open(&path).await {
            Ok(mut file) => {
                if let Err(e) = file.write_all(line.as_bytes()).await {
                    error!("Failed to write debug log entry: {}", e);
                } else if let Err(e) = file.flush().await {
                    error!("Failed to flush debug log: {}", e);
                }
            }
            Err(e) => error!("Failed to open debug log file '{}': {}", path, e),
        }
    }
}
