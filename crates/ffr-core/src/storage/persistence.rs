use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::chart::Chart;
use crate::error::{Error, Result};
use crate::storage::codec;

/// Encode `charts` and write them to `path`, replacing any existing file.
pub fn save_charts<P: AsRef<Path>>(charts: &[Chart], path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = codec::encode(charts)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;

    info!("Saved {} charts to {}", charts.len(), path.display());
    Ok(())
}

/// Read and decode the chart file at `path`.
pub fn load_charts<P: AsRef<Path>>(path: P) -> Result<Vec<Chart>> {
    let path = path.as_ref();
    info!("Loading charts from {}", path.display());

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let charts = codec::decode(&bytes).map_err(|e| match e {
        Error::Parse(msg) | Error::CorruptData(msg) => {
            Error::CorruptData(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })?;

    info!("Parsed {} charts", charts.len());
    Ok(charts)
}
