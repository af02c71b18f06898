extern crate pretty_env_logger;
#[macro_use]
extern crate log;

use eyre::{eyre, Result, WrapErr};
use oled_remote::{ac_units, modes, ACUnit, UnitField};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
enum Opt {
    /// List supported modes
    Modes,
    /// List configured AC units
    Units,
    Unit {
        /// Position of the unit in the list
        index: usize,

        /// Only print this field (name, entity_id, temp_sensor, mode_sensor)
        #[structopt(short, long)]
        field: Option<UnitField>,
    },
    Find {
        /// Climate entity id, e.g. climate.office_ac
        entity_id: String,
    },
    /// Validate the compiled tables
    Check,
}

fn print_unit(index: usize, unit: &ACUnit) {
    println!(
        "{}\t{}\t{}\t{}\t{}",
        index, unit.name, unit.entity_id, unit.temp_sensor_id, unit.mode_sensor_id
    );
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    color_eyre::install()?;

    let opts = Opt::from_args();

    debug!("opts: {:?}", opts);

    match opts {
        Opt::Modes => modes().iter().for_each(|m| println!("{}", m)),
        Opt::Units => ac_units()
            .iter()
            .enumerate()
            .for_each(|(i, u)| print_unit(i, u)),
        Opt::Unit { index, field } => {
            let unit = ac_units()
                .get(index)
                .wrap_err_with(|| format!("Could not read unit {}", index))?;
            match field {
                Some(f) => println!("{}", unit.field(f)),
                None => print_unit(index, unit),
            }
        }
        Opt::Find { entity_id } => {
            let units = ac_units();
            let index = units
                .position(&entity_id)
                .ok_or_else(|| eyre!("No unit controls {}", entity_id))?;
            println!("{}\t{}", index, units.name(index)?);
        }
        Opt::Check => {
            oled_remote::validate().wrap_err("Compiled tables are inconsistent")?;
            info!("tables validated");
            println!(
                "{} modes, {} units: ok",
                modes().len(),
                ac_units().len()
            );
        }
    }

    Ok(())
}
