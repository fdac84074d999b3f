use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use once_cell::sync::Lazy;
use chrono::Local;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Longest body snippet written for a single request or response
const MAX_BODY_LOG: usize = 500;

/// Initialize logging to a file
pub fn init() -> std::io::Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".grouppick")
        .join("logs");

    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join(format!("grouppick_{}.log", timestamp));

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }

    log("=== grouppick started ===");

    Ok(log_path)
}

/// Log a message with timestamp
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() > MAX_BODY_LOG {
        let cut = (0..=MAX_BODY_LOG)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}... ({} bytes total)", &body[..cut], body.len())
    } else {
        body.to_string()
    }
}

/// Log an outgoing HTTP request
pub fn log_request(method: &str, url: &str, body: Option<&str>) {
    match body {
        Some(body) => log(&format!("--> {} {} {}", method, url, truncate_body(body))),
        None => log(&format!("--> {} {}", method, url)),
    }
}

/// Log an HTTP response (truncated for readability)
pub fn log_response(url: &str, status: u16, body: &str) {
    log(&format!("<-- {} {} {}", status, url, truncate_body(body)));
}

/// Log an event
pub fn log_event(event: &str) {
    log(&format!("[EVENT] {}", event));
}

/// Restore the terminal and record the panic before the default hook runs
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        log(&format!("[PANIC] {}", info));
        default_hook(info);
    }));
}
