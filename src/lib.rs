#[macro_use]
extern crate log;

use thiserror::Error;

pub mod mode;
pub mod unit;

pub use mode::{ACMode, ModeTable, AC_MODES};
pub use unit::{ACUnit, UnitField, UnitTable, AC_UNITS};

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Index {index} out of range for table of length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("Table is empty")]
    EmptyTable,
    #[error("Mode {0} is listed more than once")]
    DuplicateMode(ACMode),
    #[error("Unit {index} has an empty {field}")]
    EmptyField { index: usize, field: UnitField },
    #[error("Entity id {0} is used by more than one unit")]
    DuplicateEntityId(&'static str),
}

pub type Result<T> = std::result::Result<T, TableError>;

/// Supported operating modes, in display order.
pub fn modes() -> ModeTable {
    ModeTable::default()
}

/// Configured AC units, in display order.
pub fn ac_units() -> UnitTable {
    UnitTable::default()
}

pub fn validate() -> Result<()> {
    modes().validate()?;
    ac_units().validate()
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        warn!("index {} out of range, table length {}", index, len);
        Err(TableError::OutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_tables_are_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn index_three_is_out_of_range_on_both_tables() {
        assert_eq!(
            modes().get(3),
            Err(TableError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            ac_units().get(3).map(|u| u.name),
            Err(TableError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn tables_are_shareable_across_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<ModeTable>();
        assert_sync::<UnitTable>();

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| ac_units().entity_id(1).map(str::to_owned)))
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                Ok("climate.office_ac".to_string())
            );
        }
    }
}
