use crate::collection::Garage;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CarFields;
use crate::store::CarStore;

pub fn run<S: CarStore>(garage: &mut Garage<S>, fields: CarFields) -> Result<CmdResult> {
    let car = garage.create(fields)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Car added (id {}): {} {}",
        car.id, car.brand, car.model
    )));
    result.affected_cars.push(car);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_a_car_and_reports_success() {
        let mut garage = Garage::open(InMemoryStore::new()).unwrap();
        let fields = CarFields::new("VW".into(), "Golf".into(), 2020, 15000.0);

        let result = run(&mut garage, fields).unwrap();

        assert_eq!(result.affected_cars.len(), 1);
        assert!(result.messages[0].content.contains("VW Golf"));
        assert_eq!(garage.cars().len(), 1);
    }

    #[test]
    fn invalid_fields_are_rejected() {
        let mut garage = Garage::open(InMemoryStore::new()).unwrap();
        let fields = CarFields::new("VW".into(), "Golf".into(), 2020, 0.0);

        assert!(run(&mut garage, fields).is_err());
        assert!(garage.cars().is_empty());
    }
}
