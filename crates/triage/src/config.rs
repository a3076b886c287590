use crate::decision::Bucket;
use crate::error::{Result, TriageError};
use crate::index::ScanOptions;
use chrono::{DateTime, Local};
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};
use xdg::BaseDirectories;

pub const LOG_FILE_ENV: &str = "TRIAGE_LOG_FILE";

/// Settings read from `triage.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub buckets: BucketConfig,
    pub include_hidden: bool,
    pub ignore: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BucketConfig {
    pub private: Option<PathBuf>,
    pub general: Option<PathBuf>,
    pub defer: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TriageError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }
}

/// Absolute destination directories for each bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketPaths {
    pub private: PathBuf,
    pub general: PathBuf,
    pub defer: PathBuf,
}

impl BucketPaths {
    /// Sibling directories of `work_dir`, named after each bucket.
    pub fn siblings_of(work_dir: &Path) -> Self {
        Self::resolve(work_dir, &BucketConfig::default())
    }

    pub fn resolve(work_dir: &Path, config: &BucketConfig) -> Self {
        let pick = |configured: &Option<PathBuf>, bucket: Bucket| {
            let relative = configured
                .clone()
                .unwrap_or_else(|| Path::new("..").join(bucket.as_str()));
            normalize(&work_dir.join(relative))
        };

        Self {
            private: pick(&config.private, Bucket::Private),
            general: pick(&config.general, Bucket::General),
            defer: pick(&config.defer, Bucket::Defer),
        }
    }

    pub fn path(&self, bucket: Bucket) -> &Path {
        match bucket {
            Bucket::Private => &self.private,
            Bucket::General => &self.general,
            Bucket::Defer => &self.defer,
        }
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub work_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub dry_run: bool,
}

pub struct Config {
    pub work_dir: PathBuf,
    pub buckets: BucketPaths,
    pub log_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub scan: ScanOptions,
    pub dry_run: bool,
}

impl Config {
    pub fn new(overrides: ConfigOverrides) -> Result<Self> {
        let work_dir = match overrides.work_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let work_dir = work_dir.canonicalize().map_err(|e| {
            TriageError::Config(format!(
                "Cannot access working directory {}: {}",
                work_dir.display(),
                e
            ))
        })?;

        let config_path = overrides.config_file.or_else(|| {
            BaseDirectories::with_prefix("triage")
                .ok()
                .and_then(|xdg| xdg.find_config_file("triage.toml"))
        });

        let file_config = match config_path.as_ref() {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        let log_path = resolve_log_path(
            overrides.log_file,
            std::env::var(LOG_FILE_ENV).ok(),
            Local::now(),
        )?;

        Ok(Self {
            buckets: BucketPaths::resolve(&work_dir, &file_config.buckets),
            scan: ScanOptions {
                include_hidden: file_config.include_hidden,
                ignore: file_config.ignore,
                exclude: Vec::new(),
            },
            work_dir,
            log_path,
            config_path,
            dry_run: overrides.dry_run,
        })
    }

    pub fn ensure_log_directory(&self) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| TriageError::LogFile {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn ensure_bucket_directories(&self) -> Result<()> {
        for bucket in Bucket::ALL {
            let dir = self.buckets.path(bucket);
            std::fs::create_dir_all(dir).map_err(|e| {
                TriageError::Config(format!(
                    "Failed to create {} bucket at {}: {}",
                    bucket,
                    dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

/// Command-line value first, then the environment, then a timestamped file
/// next to the running executable.
pub fn resolve_log_path(
    cli_value: Option<PathBuf>,
    env_value: Option<String>,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    if let Some(path) = cli_value {
        return Ok(path);
    }

    if let Some(path) = env_value.filter(|v| !v.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let exe = std::env::current_exe()
        .map_err(|e| TriageError::Config(format!("Cannot locate executable: {}", e)))?;
    let exe_dir = exe
        .parent()
        .ok_or_else(|| TriageError::Config("Executable has no parent directory".to_string()))?;

    Ok(default_log_path(exe_dir, now))
}

pub fn default_log_path(exe_dir: &Path, now: DateTime<Local>) -> PathBuf {
    exe_dir
        .join("logs")
        .join(format!("triage-{}.log", now.format("%Y%m%d-%H%M%S")))
}

/// Lexically resolve `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
