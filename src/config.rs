use anyhow::Context;
use homedir::my_home;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Key for the YouTube Data API, passed per call to the lookup client.
    #[serde(default)]
    pub youtube_api_key: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(&default_base_path()?)
    }

    pub fn load_with(base_path: &Path) -> anyhow::Result<Self> {
        let path = base_path.join("config.yaml");

        // create new if does not exist
        if !path.exists() {
            fs::create_dir_all(base_path)
                .with_context(|| format!("creating {}", base_path.display()))?;
            fs::write(&path, serde_yml::to_string(&Self::default())?)?;
        }

        let raw =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_yml::from_str(&raw).context("config is malformed")?;
        Ok(config)
    }

    pub fn save_to(&self, base_path: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(base_path)?;
        fs::write(base_path.join("config.yaml"), serde_yml::to_string(self)?)?;
        Ok(())
    }
}

fn default_base_path() -> anyhow::Result<PathBuf> {
    let home = my_home()
        .context("could not determine home directory")?
        .context("home directory path is empty")?;
    Ok(home.join(".config").join("ytinfo"))
}
