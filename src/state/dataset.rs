use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::data::{Dataset, Solution};
use crate::table::sort::Column;

/// Dataset compiled into the binary, used when no file is configured
const BUNDLED_DATASET: &str = include_str!("../../data/solutions.json");

/// Errors raised while loading a comparison dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or does not match the dataset shape
    #[error("invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A row has a blank name
    #[error("every solution needs a name")]
    EmptyName,

    /// Two rows share a name, so rows cannot be told apart
    #[error("duplicate solution name: {0}")]
    DuplicateName(String),

    /// A cost is blank in at least one unit
    #[error("{solution}: {column} is blank in at least one unit (use \"N/A\" instead)")]
    EmptyCost { solution: String, column: Column },
}

/// Where the active dataset came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetOrigin {
    /// Compiled-in default
    Bundled,
    /// Loaded from a file on disk
    File(PathBuf),
}

impl fmt::Display for DatasetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetOrigin::Bundled => f.write_str("bundled dataset"),
            DatasetOrigin::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Dataset {
    /// Parse and validate a dataset from JSON text
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Read, parse and validate a dataset file
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&json)?;
        info!("📁 Loaded {} solutions from {}", dataset.solutions.len(), path.display());
        Ok(dataset)
    }

    /// The dataset shipped with the application
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Pick the dataset to show at startup.
    ///
    /// Lookup order:
    /// 1. `explicit` (the `--data` flag or `PRIVACY_TABLE_DATA`)
    /// 2. `solutions.json` in the user config directory, if present:
    ///    - Linux: ~/.config/privacy-aint-free/solutions.json
    ///    - macOS: ~/Library/Application Support/privacy-aint-free/solutions.json
    ///    - Windows: %APPDATA%\privacy-aint-free\solutions.json
    /// 3. the bundled dataset
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, DatasetOrigin), DatasetError> {
        if let Some(path) = explicit {
            return Ok((Self::from_path(path)?, DatasetOrigin::File(path.to_path_buf())));
        }

        if let Some(path) = user_dataset_path().filter(|path| path.is_file()) {
            return Ok((Self::from_path(&path)?, DatasetOrigin::File(path)));
        }

        debug!("No dataset file configured, using bundled data");
        Ok((Self::bundled()?, DatasetOrigin::Bundled))
    }

    /// Check what the table relies on: unique non-blank names
    /// and a display string for every cost in every unit
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut seen = HashSet::new();

        for solution in self.rows() {
            let name = solution.name.trim();
            if name.is_empty() {
                return Err(DatasetError::EmptyName);
            }
            if !seen.insert(name) {
                return Err(DatasetError::DuplicateName(name.to_string()));
            }
            check_costs(solution)?;
        }

        Ok(())
    }

    /// Baseline followed by the solutions, in authored order
    pub fn rows(&self) -> impl Iterator<Item = &Solution> {
        std::iter::once(&self.baseline).chain(self.solutions.iter())
    }
}

fn check_costs(solution: &Solution) -> Result<(), DatasetError> {
    let costs = [
        (Column::EthTransfer, Some(&solution.eth_transfer)),
        (Column::Erc20Transfer, solution.erc20_transfer.as_ref()),
        (Column::Erc20Approval, solution.erc20_approval.as_ref()),
    ];

    for (column, cost) in costs {
        if cost.is_some_and(|cost| !cost.is_complete()) {
            return Err(DatasetError::EmptyCost {
                solution: solution.name.clone(),
                column,
            });
        }
    }

    Ok(())
}

/// Location of the optional user-provided dataset
pub fn user_dataset_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("privacy-aint-free");
    path.push("solutions.json");
    Some(path)
}

/// Load a dataset file on the async runtime (used by "Open dataset…")
pub async fn load_dataset_async(path: PathBuf) -> Result<Dataset, String> {
    let json = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| DatasetError::Io { path: path.clone(), source }.to_string())?;

    let dataset = Dataset::from_json(&json).map_err(|e| e.to_string())?;
    info!("📁 Loaded {} solutions from {}", dataset.solutions.len(), path.display());
    Ok(dataset)
}
