use crate::collection::Garage;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CarFields, CarId};
use crate::store::CarStore;

pub fn run<S: CarStore>(
    garage: &mut Garage<S>,
    id: CarId,
    fields: CarFields,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match garage.update(id, fields)? {
        Some(car) => {
            result.add_message(CmdMessage::success(format!(
                "Car updated (id {}): {} {}",
                car.id, car.brand, car.model
            )));
            result.affected_cars.push(car);
        }
        None => {
            result.add_message(CmdMessage::info(format!(
                "No car with id {}; nothing to update.",
                id
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    fn fields(model: &str, price: f64) -> CarFields {
        CarFields::new("Honda".into(), model.into(), 2019, price)
    }

    #[test]
    fn updates_fields_and_keeps_id() {
        let mut garage = Garage::open(InMemoryStore::new()).unwrap();
        let created = add::run(&mut garage, fields("Jazz", 9500.0)).unwrap();
        let id = created.affected_cars[0].id;

        let result = run(&mut garage, id, fields("Civic", 19000.0)).unwrap();

        assert_eq!(result.affected_cars[0].id, id);
        assert_eq!(garage.cars()[0].model, "Civic");
    }

    #[test]
    fn absent_id_reports_info_without_mutating() {
        let mut garage = Garage::open(InMemoryStore::new()).unwrap();
        add::run(&mut garage, fields("Jazz", 9500.0)).unwrap();

        let result = run(&mut garage, 42, fields("Civic", 19000.0)).unwrap();

        assert!(result.affected_cars.is_empty());
        assert!(result.messages[0].content.contains("No car with id 42"));
        assert_eq!(garage.cars()[0].model, "Jazz");
    }
}
