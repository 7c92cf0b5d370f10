use crate::collection::Garage;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GarageError, Result};
use crate::model::CarId;
use crate::store::CarStore;
use std::io::{self, Write};

pub fn run<S: CarStore>(
    garage: &mut Garage<S>,
    id: CarId,
    skip_confirm: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(car) = garage.get(id) else {
        result.add_message(CmdMessage::info(format!(
            "No car with id {}; nothing to delete.",
            id
        )));
        return Ok(result);
    };

    // Confirm before mutating. Declining is a plain no-op.
    if !skip_confirm {
        println!(
            "Are you sure you want to delete this car? {} {} (id {})",
            car.brand, car.model, car.id
        );
        print!("[Y] To delete: ");
        io::stdout().flush().map_err(GarageError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(GarageError::Io)?;

        if input.trim() != "Y" {
            result.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(result);
        }
    }

    if let Some(car) = garage.delete(id)? {
        result.add_message(CmdMessage::success(format!(
            "Car deleted (id {}): {} {}",
            car.id, car.brand, car.model
        )));
        result.affected_cars.push(car);
    }

    Ok(result)
}
