use std::path::PathBuf;

use time::macros::format_description;
use time::Date;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Optional JSON file to seed the in-memory store from.
    pub seed_file: Option<PathBuf>,
    /// Week anchor for the report; defaults to today when unset.
    pub week_anchor: Option<Date>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let seed_file = std::env::var("PANTRYPLAN_SEED").ok().map(PathBuf::from);
        let week_anchor = match std::env::var("PANTRYPLAN_ANCHOR") {
            Ok(raw) => Some(Date::parse(
                &raw,
                format_description!("[year]-[month]-[day]"),
            )?),
            Err(_) => None,
        };
        Ok(Self {
            seed_file,
            week_anchor,
        })
    }
}
