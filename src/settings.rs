// registrar/src/settings.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_DATA_FILE: &str = "Enrollments.json";
const SETTINGS_FILE: &str = "registrar.toml";

/// Optional settings, merged user config dir -> working directory.
/// Everything has a default so the program runs without any file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Roster file path; relative paths resolve against the working
    /// directory. Defaults to `Enrollments.json`.
    pub data_file: Option<PathBuf>,
}

fn merge(a: &mut Settings, b: &Settings) {
    if b.data_file.is_some() {
        a.data_file = b.data_file.clone();
    }
}

fn read_file(path: &Path) -> Option<Settings> {
    let text = fs::read_to_string(path).ok()?;
    match toml::from_str(&text) {
        Ok(settings) => Some(settings),
        Err(err) => {
            debug!(path = %path.display(), %err, "ignoring unreadable settings file");
            None
        }
    }
}

impl Settings {
    pub fn load(workdir: &Path) -> Self {
        let mut merged = Settings::default();
        if let Some(proj) = ProjectDirs::from("dev", "registrar", "registrar") {
            if let Some(user) = read_file(&proj.config_dir().join(SETTINGS_FILE)) {
                merge(&mut merged, &user);
            }
        }
        if let Some(local) = read_file(&workdir.join(SETTINGS_FILE)) {
            merge(&mut merged, &local);
        }
        merged
    }

    pub fn data_path(&self, workdir: &Path) -> PathBuf {
        match &self.data_file {
            Some(p) if p.is_absolute() => p.clone(),
            Some(p) => workdir.join(p),
            None => workdir.join(DEFAULT_DATA_FILE),
        }
    }
}
