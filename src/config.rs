use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "LivroPonto";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upload cap for calendar PDFs (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Get the application data directory.
/// `LIVRO_PONTO_DATA_DIR` when set, otherwise ~/LivroPonto (user-visible).
pub fn app_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LIVRO_PONTO_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(APP_NAME)
}

/// SQLite file backing the professional record store.
pub fn database_path() -> PathBuf {
    app_data_dir().join("ponto.db")
}

/// Staging area for uploaded calendar PDFs (scoped temp files).
pub fn uploads_dir() -> PathBuf {
    app_data_dir().join("uploads")
}

/// Listen address: `LIVRO_PONTO_BIND` when set, otherwise 127.0.0.1:5000.
pub fn bind_addr() -> SocketAddr {
    std::env::var("LIVRO_PONTO_BIND")
        .ok()
        .and_then(|addr| addr.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 5000)))
}

/// Fallback tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "info,livro_ponto=debug".to_string()
}
