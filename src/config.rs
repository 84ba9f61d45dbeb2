use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::TrackError;
use crate::gridworld::model::{Model, DEFAULT_HORIZONTAL_GRID_UNIT, DEFAULT_VERTICAL_GRID_UNIT};
use crate::position::{Metres, Position, PONTIANAK};
use crate::track_analysis::TrackAnalyzer;
use crate::track_point::TrackPoint;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalysisConfig {
    pub resting_range: Metres,
    #[serde(default)]
    pub grid: GridConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GridConfig {
    pub center: Position,
    pub north_south_grid_unit: Metres,
    pub east_west_grid_unit: Metres,
    pub vertical_grid_unit: Metres,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            center: PONTIANAK,
            north_south_grid_unit: DEFAULT_HORIZONTAL_GRID_UNIT,
            east_west_grid_unit: DEFAULT_HORIZONTAL_GRID_UNIT,
            vertical_grid_unit: DEFAULT_VERTICAL_GRID_UNIT,
        }
    }
}

impl GridConfig {
    pub fn model(&self) -> Model {
        Model::new(
            self.center,
            self.north_south_grid_unit,
            self.east_west_grid_unit,
            self.vertical_grid_unit,
        )
    }

    fn validate(&self) -> Result<()> {
        for (name, unit) in [
            ("northSouthGridUnit", self.north_south_grid_unit),
            ("eastWestGridUnit", self.east_west_grid_unit),
            ("verticalGridUnit", self.vertical_grid_unit),
        ] {
            if !unit.is_finite() || unit <= 0. {
                bail!("`{name}` must be a positive distance, got {unit}");
            }
        }
        Ok(())
    }
}

impl AnalysisConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = AnalysisConfig::from_json(&json)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        info!("loaded analysis config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.resting_range.is_finite() || self.resting_range < 0. {
            bail!(
                "`restingRange` must be a non-negative distance, got {}",
                self.resting_range
            );
        }
        self.grid.validate()
    }

    pub fn analyzer(&self, track_points: Vec<TrackPoint>) -> Result<TrackAnalyzer, TrackError> {
        TrackAnalyzer::new(track_points, self.resting_range)
    }
}
