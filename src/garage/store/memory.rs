use super::CarStore;
use crate::error::Result;
use crate::model::Car;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    cars: Vec<Car>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Car>> {
        Ok(self.cars.clone())
    }

    fn save(&mut self, cars: &[Car]) -> Result<()> {
        self.cars = cars.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::CarFields;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_car(mut self, id: u64, brand: &str, model: &str) -> Self {
            let car = Car::new(
                id,
                CarFields::new(brand.to_string(), model.to_string(), 2020, 15000.0),
            );
            let mut cars = self.store.load().unwrap();
            cars.push(car);
            self.store.save(&cars).unwrap();
            self
        }

        pub fn with_cars(mut self, count: usize) -> Self {
            let mut cars = self.store.load().unwrap();
            for i in 0..count {
                let fields = CarFields::new(
                    format!("Brand {}", i + 1),
                    format!("Model {}", i + 1),
                    2020,
                    10000.0 + i as f64,
                );
                cars.push(Car::new(i as u64 + 1, fields));
            }
            self.store.save(&cars).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn fixture_builds_a_populated_store() {
        let fixture = StoreFixture::new().with_cars(3).with_car(9, "VW", "Golf");
        let cars = fixture.store.load().unwrap();
        assert_eq!(cars.len(), 4);
        assert_eq!(cars[3].id, 9);
        assert_eq!(cars[3].brand, "VW");
    }
}
