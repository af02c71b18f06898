use std::fmt::{self, Display};
use std::str::FromStr;

use itertools::Itertools;
use strum_macros::{EnumIter, IntoStaticStr};
use thiserror::Error;

use crate::{check_index, Result, TableError};

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, EnumIter, IntoStaticStr)]
pub enum ACMode {
    #[strum(serialize = "cool")]
    Cool,
    #[strum(serialize = "dry")]
    Dry,
    #[strum(serialize = "fan_only")]
    FanOnly,
}

impl ACMode {
    /// Token understood by the climate entity's `hvac_mode`.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl Display for ACMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("Invalid AC mode")]
pub struct InvalidAcMode;

impl FromStr for ACMode {
    type Err = InvalidAcMode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cool" => Ok(ACMode::Cool),
            "dry" => Ok(ACMode::Dry),
            "fan_only" | "fan-only" | "fan" => Ok(ACMode::FanOnly),
            _ => Err(InvalidAcMode),
        }
    }
}

pub const AC_MODES: &[ACMode] = &[ACMode::Cool, ACMode::Dry, ACMode::FanOnly];

#[derive(Debug, Clone, Copy)]
pub struct ModeTable {
    modes: &'static [ACMode],
}

impl Default for ModeTable {
    fn default() -> Self {
        Self::new(AC_MODES)
    }
}

impl ModeTable {
    pub const fn new(modes: &'static [ACMode]) -> Self {
        ModeTable { modes }
    }

    pub fn modes(&self) -> &'static [ACMode] {
        self.modes
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ACMode> {
        self.modes.iter().copied()
    }

    pub fn as_strs(&self) -> Vec<&'static str> {
        self.iter().map(|m| m.as_str()).collect()
    }

    pub fn get(&self, index: usize) -> Result<ACMode> {
        trace!("looking up mode {}", index);
        check_index(index, self.len())?;
        Ok(self.modes[index])
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            warn!("mode table is empty");
            return Err(TableError::EmptyTable);
        }
        if let Some(dup) = self.iter().duplicates().next() {
            warn!("mode {} listed more than once", dup);
            return Err(TableError::DuplicateMode(dup));
        }
        Ok(())
    }
}

impl IntoIterator for ModeTable {
    type Item = &'static ACMode;
    type IntoIter = std::slice::Iter<'static, ACMode>;

    fn into_iter(self) -> Self::IntoIter {
        self.modes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn modes_in_display_order() {
        assert_eq!(ModeTable::default().as_strs(), vec!["cool", "dry", "fan_only"]);
    }

    #[test]
    fn mode_count_matches_data() {
        let table = ModeTable::default();
        assert_eq!(table.len(), 3);
        assert_eq!(table.iter().count(), table.len());
        assert!(!table.is_empty());
    }

    #[test]
    fn mode_tokens_non_empty_and_distinct() {
        let table = ModeTable::default();
        let mut tokens: Vec<_> = (0..table.len())
            .map(|i| table.get(i).unwrap().as_str())
            .collect();
        assert!(tokens.iter().all(|t| !t.is_empty()));
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), table.len());
    }

    #[test]
    fn every_mode_is_listed() {
        let table = ModeTable::default();
        assert!(ACMode::iter().all(|m| table.modes().contains(&m)));
    }

    #[test]
    fn out_of_range() {
        let table = ModeTable::default();
        assert_eq!(table.get(2), Ok(ACMode::FanOnly));
        assert_eq!(
            table.get(3),
            Err(TableError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn parse_round_trips_display() {
        for mode in ACMode::iter() {
            assert_eq!(mode.to_string().parse::<ACMode>().unwrap(), mode);
        }
        assert_eq!("FAN".parse::<ACMode>().unwrap(), ACMode::FanOnly);
        assert_eq!("fan-only".parse::<ACMode>().unwrap(), ACMode::FanOnly);
        assert!("heat".parse::<ACMode>().is_err());
    }

    #[test]
    fn validate_rejects_bad_tables() {
        assert_eq!(ModeTable::new(&[]).validate(), Err(TableError::EmptyTable));
        assert_eq!(
            ModeTable::new(&[ACMode::Cool, ACMode::Dry, ACMode::Cool]).validate(),
            Err(TableError::DuplicateMode(ACMode::Cool))
        );
        assert_eq!(ModeTable::default().validate(), Ok(()));
    }
}
