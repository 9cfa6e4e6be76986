//! Social profile rows and platform exclusivity
//!
//! A platform may be claimed by at most one social-profile row. The option
//! set shown in each row's selector is re-derived after every add, remove and
//! change: other rows' claims are hidden, the row's own selection stays.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::rows::{RowId, RowList};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Facebook,
    Twitter,
    Instagram,
    YouTube,
    LinkedIn,
    Pinterest,
    SoundCloud,
    Tumblr,
}

impl Platform {
    /// Selector order
    pub const ALL: [Platform; 8] = [
        Platform::Facebook,
        Platform::Twitter,
        Platform::Instagram,
        Platform::YouTube,
        Platform::LinkedIn,
        Platform::Pinterest,
        Platform::SoundCloud,
        Platform::Tumblr,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
            Platform::YouTube => "YouTube",
            Platform::LinkedIn => "LinkedIn",
            Platform::Pinterest => "Pinterest",
            Platform::SoundCloud => "SoundCloud",
            Platform::Tumblr => "Tumblr",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown social platform: {}", s))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialProfile {
    pub platform: Option<Platform>,
    pub url: String,
}

/// Options one row's selector should offer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformOptions {
    pub row: RowId,
    pub selected: Option<Platform>,
    pub options: Vec<Platform>,
}

/// Social profile rows with platform exclusivity enforced
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SocialProfiles {
    rows: RowList<SocialProfile, 0>,
}

impl SocialProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from rows in order. A platform repeated in a later row wins over
    /// the earlier claim.
    pub fn from_rows(rows: impl IntoIterator<Item = SocialProfile>) -> Self {
        let mut profiles = Self::new();
        for row in rows {
            let platform = row.platform;
            let id = profiles.rows.push(SocialProfile {
                platform: None,
                url: row.url,
            });
            profiles.set_platform(id, platform);
        }
        profiles
    }

    pub fn add(&mut self) -> RowId {
        self.rows.add()
    }

    pub fn remove(&mut self, id: RowId) -> Option<SocialProfile> {
        self.rows.remove(id)
    }

    /// Assign (or clear) a row's platform.
    ///
    /// Another row holding the same platform loses it. Returns `false` when
    /// the row does not exist.
    pub fn set_platform(&mut self, id: RowId, platform: Option<Platform>) -> bool {
        if !self.rows.contains(id) {
            return false;
        }
        if let Some(platform) = platform {
            for (other, row) in self.rows.iter_mut() {
                if other != id && row.platform == Some(platform) {
                    tracing::debug!(
                        "Platform {} moved from social profile {} to {}",
                        platform,
                        other,
                        id
                    );
                    row.platform = None;
                }
            }
        }
        if let Some(row) = self.rows.get_mut(id) {
            row.platform = platform;
        }
        true
    }

    pub fn set_url(&mut self, id: RowId, url: impl Into<String>) -> bool {
        match self.rows.get_mut(id) {
            Some(row) => {
                row.url = url.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: RowId) -> Option<&SocialProfile> {
        self.rows.get(id)
    }

    pub fn rows(&self) -> &RowList<SocialProfile, 0> {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Platforms currently claimed by any row, in row order
    pub fn selected_platforms(&self) -> Vec<Platform> {
        self.rows.values().filter_map(|row| row.platform).collect()
    }

    /// Platforms the given row's selector offers
    pub fn options_for(&self, id: RowId) -> Vec<Platform> {
        let own = self.rows.get(id).and_then(|row| row.platform);
        let claimed = self.selected_platforms();
        Platform::ALL
            .into_iter()
            .filter(|p| !claimed.contains(p) || Some(*p) == own)
            .collect()
    }

    /// Recompute every row's option set
    pub fn resolve(&self) -> Vec<PlatformOptions> {
        self.rows
            .iter()
            .map(|(id, row)| PlatformOptions {
                row: id,
                selected: row.platform,
                options: self.options_for(id),
            })
            .collect()
    }
}

impl Serialize for SocialProfiles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SocialProfiles {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<SocialProfile>::deserialize(deserializer)?;
        Ok(Self::from_rows(rows))
    }
}
