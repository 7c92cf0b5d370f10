use crate::collection::Garage;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CarId;
use crate::store::CarStore;

/// Single-record detail lookup. An unknown id is a rendered "not found"
/// state, not an error.
pub fn run<S: CarStore>(garage: &Garage<S>, id: CarId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match garage.get(id) {
        Some(car) => result.listed_cars.push(car.clone()),
        None => result.add_message(CmdMessage::warning("Car not found!")),
    }

    Ok(result)
}
