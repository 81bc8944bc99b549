//! Local OSRM dataset for pedestrian routing.
//!
//! Downloads a Geofabrik extract and runs the MLD preprocessing stages inside
//! the `osrm/osrm-backend` image so integration runs can start their own
//! `osrm-routed` instead of using the public demo server.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::{debug, info};

const OSRM_IMAGE: &str = "osrm/osrm-backend";

/// Pedestrian Lua profile bundled in the OSRM image.
const FOOT_PROFILE: &str = "/opt/foot.lua";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeofabrikRegion {
    /// Geofabrik path, e.g. "russia/central-fed-district".
    pub path: String,
}

impl GeofabrikRegion {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Last path segment, used for file names.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().filter(|name| !name.is_empty()).unwrap_or("region")
    }

    pub fn download_url(&self) -> String {
        format!("https://download.geofabrik.de/{}-latest.osm.pbf", self.path)
    }
}

#[derive(Debug, Clone)]
pub struct OsrmDatasetConfig {
    pub region: GeofabrikRegion,
    /// Parent of the per-region working directories.
    pub data_root: PathBuf,
}

impl OsrmDatasetConfig {
    pub fn new(region: GeofabrikRegion, data_root: impl Into<PathBuf>) -> Self {
        Self {
            region,
            data_root: data_root.into(),
        }
    }

    /// Working directory for this region's foot extraction.
    fn work_dir(&self) -> io::Result<PathBuf> {
        let root = if self.data_root.is_absolute() {
            self.data_root.clone()
        } else {
            std::env::current_dir()?.join(&self.data_root)
        };
        Ok(root.join(format!("{}-foot", self.region.name())))
    }
}

/// A preprocessed dataset ready for `osrm-routed --algorithm mld`.
#[derive(Debug, Clone)]
pub struct OsrmDataset {
    pub data_dir: PathBuf,
    pub osrm_base: PathBuf,
    pub pbf_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum OsrmDataError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("download failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{stage} failed: docker exited with {status}")]
    Stage { stage: &'static str, status: std::process::ExitStatus },
}

/// MLD preprocessing pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Extract,
    Partition,
    Customize,
}

impl Stage {
    const PIPELINE: [Stage; 3] = [Stage::Extract, Stage::Partition, Stage::Customize];

    fn binary(self) -> &'static str {
        match self {
            Stage::Extract => "osrm-extract",
            Stage::Partition => "osrm-partition",
            Stage::Customize => "osrm-customize",
        }
    }

    /// Artifact extensions whose presence means the stage already ran.
    fn outputs(self) -> &'static [&'static str] {
        match self {
            Stage::Extract => &["osrm"],
            Stage::Partition => &["osrm.partition", "osrm.cells"],
            Stage::Customize => &["osrm.mldgr"],
        }
    }

    fn is_done(self, osrm_base: &Path) -> bool {
        self.outputs()
            .iter()
            .all(|ext| osrm_base.with_extension(ext).exists())
    }
}

impl OsrmDataset {
    fn layout(data_dir: PathBuf, region: &GeofabrikRegion) -> Self {
        Self {
            pbf_path: data_dir.join(format!("{}-latest.osm.pbf", region.name())),
            osrm_base: data_dir.join(format!("{}-latest.osrm", region.name())),
            data_dir,
        }
    }

    /// Download and preprocess, skipping every step whose output exists.
    pub fn ensure(config: &OsrmDatasetConfig) -> Result<Self, OsrmDataError> {
        let data_dir = config.work_dir()?;
        fs::create_dir_all(&data_dir)?;
        let dataset = Self::layout(data_dir, &config.region);

        if !dataset.pbf_path.exists() {
            let url = config.region.download_url();
            info!(%url, "downloading region extract");
            download(&url, &dataset.pbf_path)?;
        }

        for stage in Stage::PIPELINE {
            if stage.is_done(&dataset.osrm_base) {
                debug!(stage = stage.binary(), "up to date");
                continue;
            }
            info!(stage = stage.binary(), "preprocessing");
            dataset.run(stage)?;
        }

        Ok(dataset)
    }

    /// Path of the `.osrm` base inside a container that mounts `data_dir` at `/data`.
    pub fn container_path(&self) -> String {
        container_path(&self.osrm_base)
    }

    fn run(&self, stage: Stage) -> Result<(), OsrmDataError> {
        let mut command = Command::new("docker");
        command
            .args(["run", "--rm", "-t", "-v"])
            .arg(format!("{}:/data", self.data_dir.display()))
            .arg(OSRM_IMAGE)
            .arg(stage.binary());
        match stage {
            Stage::Extract => command
                .arg("-p")
                .arg(FOOT_PROFILE)
                .arg(container_path(&self.pbf_path)),
            Stage::Partition | Stage::Customize => command.arg(container_path(&self.osrm_base)),
        };

        let status = command.status()?;
        if !status.success() {
            return Err(OsrmDataError::Stage {
                stage: stage.binary(),
                status,
            });
        }
        Ok(())
    }
}

/// Stream `url` to `dest` through a temporary file so an interrupted
/// download never looks complete.
fn download(url: &str, dest: &Path) -> Result<(), OsrmDataError> {
    let mut response = reqwest::blocking::get(url)?.error_for_status()?;
    let partial = dest.with_extension("part");
    {
        let mut file = BufWriter::new(File::create(&partial)?);
        io::copy(&mut response, &mut file)?;
    }
    fs::rename(&partial, dest)?;
    Ok(())
}

fn container_path(host_path: &Path) -> String {
    let name = host_path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    format!("/data/{}", name)
}
