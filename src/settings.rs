use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

/// How the schedule step is prefilled when a draft starts: start date
/// `lead_days` out, end date `window_days` out. Defaults, not rules — the
/// validator only ever requires end-after-start.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDefaults {
    pub lead_days: i64,
    pub window_days: i64,
}

impl Default for ScheduleDefaults {
    fn default() -> Self {
        Self {
            lead_days: 1,
            window_days: 7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserSettings {
    schedule_defaults: ScheduleDefaults,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            schedule_defaults: ScheduleDefaults::default(),
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn schedule_defaults(&self) -> ScheduleDefaults {
        self.data.read().unwrap().schedule_defaults
    }

    pub fn update_schedule_defaults(&self, defaults: ScheduleDefaults) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            guard.schedule_defaults = defaults;
            self.persist(&guard)?;
        }
        Ok(())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn defaults_are_tomorrow_for_a_week() {
        let defaults = ScheduleDefaults::default();
        assert_eq!(defaults.lead_days, 1);
        assert_eq!(defaults.window_days, 7);
    }

    #[test]
    fn updates_persist_across_reopen() {
        let dir = std::env::temp_dir().join(format!("billaboard-settings-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");

        let store = SettingsStore::new(path.clone()).unwrap();
        store
            .update_schedule_defaults(ScheduleDefaults {
                lead_days: 2,
                window_days: 14,
            })
            .unwrap();

        let reopened = SettingsStore::new(path).unwrap();
        let defaults = reopened.schedule_defaults();
        assert_eq!(defaults.lead_days, 2);
        assert_eq!(defaults.window_days, 14);

        fs::remove_dir_all(&dir).unwrap();
    }
}
