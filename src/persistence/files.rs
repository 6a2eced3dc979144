use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the data directory, both local and in the home directory
pub const DATA_DIR_NAME: &str = ".focus-hub";

/// Environment variable that points focus-hub at an explicit data directory
pub const DATA_DIR_ENV: &str = "FOCUS_HUB_DIR";

const COUNTERS_FILE: &str = "counters.json";
const LOG_FILE: &str = "focus-hub.log";

/// Directory holding the session tally and the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Resolve from the process environment: `$FOCUS_HUB_DIR`, then a
    /// `.focus-hub` in the current directory or any parent, then `~/.focus-hub`
    pub fn locate() -> Result<Self> {
        let cwd = env::current_dir().context("Could not determine current directory")?;
        let explicit = env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        Self::resolve(explicit, &cwd, dirs::home_dir())
    }

    /// Pure resolution rule behind `locate`
    pub fn resolve(explicit: Option<PathBuf>, cwd: &Path, home: Option<PathBuf>) -> Result<Self> {
        if let Some(root) = explicit.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(Self { root });
        }

        let local = cwd
            .ancestors()
            .map(|dir| dir.join(DATA_DIR_NAME))
            .find(|candidate| candidate.is_dir());
        if let Some(root) = local {
            return Ok(Self { root });
        }

        match home {
            Some(home) => Ok(Self {
                root: home.join(DATA_DIR_NAME),
            }),
            None => bail!("Could not determine home directory; set {}", DATA_DIR_ENV),
        }
    }

    /// Create a fresh `.focus-hub` inside `parent`. Fails if one is already there.
    pub fn init_in(parent: &Path) -> Result<Self> {
        let root = parent.join(DATA_DIR_NAME);
        match fs::create_dir(&root) {
            Ok(()) => Ok(Self { root }),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                bail!("Data directory already exists: {}", root.display())
            }
            Err(e) => {
                Err(e).with_context(|| format!("Failed to create directory: {}", root.display()))
            }
        }
    }

    /// Make sure the directory exists on disk
    pub fn ensure(self) -> Result<Self> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create directory: {}", self.root.display()))?;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Key -> integer store backing `--persist-sessions`
    pub fn counters_file(&self) -> PathBuf {
        self.root.join(COUNTERS_FILE)
    }

    pub fn log_file(&self) -> PathBuf {
        self.root.join(LOG_FILE)
    }
}

/// Replace `path` with `content` in one step: write a sibling temp file,
/// sync it, then rename over the target
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to stage a write in {}", dir.display()))?;
    staged
        .write_all(content.as_bytes())
        .and_then(|()| staged.as_file().sync_all())
        .context("Failed to write staged file")?;
    staged
        .persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

/// File content, or an empty string when the file is not there yet
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e).with_context(|| format!("Failed to read file: {}", path.display())),
    }
}
