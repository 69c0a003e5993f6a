use std::path::PathBuf;

use waste_app::DB_FILE_NAME;

const APP_DIR_NAME: &str = "waste-tracker";

#[derive(Debug, Clone)]
pub struct DataDirResolution {
    pub dir: PathBuf,
    pub matched_existing: bool,
}

pub fn config_dir() -> Result<PathBuf, String> {
    xdg_base("XDG_CONFIG_HOME", ".config").map(|base| base.join(APP_DIR_NAME))
}

/// An explicit directory wins; otherwise the XDG data directory is used.
pub fn resolve_data_dir(explicit: Option<&str>) -> Result<DataDirResolution, String> {
    let dir = match explicit {
        Some(path) => expand_home(path)?,
        None => xdg_base("XDG_DATA_HOME", ".local/share")?.join(APP_DIR_NAME),
    };
    let matched_existing = dir.join(DB_FILE_NAME).exists();
    Ok(DataDirResolution {
        dir,
        matched_existing,
    })
}

fn xdg_base(var: &str, fallback: &str) -> Result<PathBuf, String> {
    if let Ok(value) = std::env::var(var)
        && !value.is_empty()
    {
        return Ok(PathBuf::from(value));
    }
    Ok(home()?.join(fallback))
}

fn home() -> Result<PathBuf, String> {
    std::env::var("HOME")
        .map(PathBuf::from)
        .map_err(|err| format!("resolve HOME: {}", err))
}

fn expand_home(path: &str) -> Result<PathBuf, String> {
    if path == "~" {
        return home();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home()?.join(rest));
    }
    Ok(PathBuf::from(path))
}
