use super::CarStore;
use crate::error::{GarageError, Result};
use crate::model::Car;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "cars.json";

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(GarageError::Io)?;
        }
        Ok(())
    }
}

impl CarStore for FileStore {
    fn load(&self) -> Result<Vec<Car>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(data_file).map_err(GarageError::Io)?;
        // A present but unparseable file is surfaced as an error rather than
        // silently replaced with an empty collection.
        let cars: Vec<Car> = serde_json::from_str(&content).map_err(GarageError::Serialization)?;
        Ok(cars)
    }

    fn save(&mut self, cars: &[Car]) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        let content = serde_json::to_string_pretty(cars).map_err(GarageError::Serialization)?;
        fs::write(self.data_file(), content).map_err(GarageError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CarFields;
    use tempfile::TempDir;

    fn car(id: u64, brand: &str) -> Car {
        Car::new(
            id,
            CarFields::new(brand.to_string(), "Test".to_string(), 2020, 15000.0),
        )
    }

    #[test]
    fn load_from_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let cars = vec![car(1, "Toyota"), car(2, "Honda")];
        store.save(&cars).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, cars);
    }

    #[test]
    fn save_overwrites_prior_snapshot() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store.save(&[car(1, "Toyota"), car(2, "Honda")]).unwrap();
        store.save(&[car(2, "Honda")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 2);
    }

    #[test]
    fn save_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("garage");
        let mut store = FileStore::new(nested.clone());

        store.save(&[car(1, "VW")]).unwrap();
        assert!(nested.join("cars.json").exists());
    }

    #[test]
    fn malformed_data_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("cars.json"), "not json").unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.load(),
            Err(GarageError::Serialization(_))
        ));
    }

    #[test]
    fn on_disk_shape_is_a_plain_array_of_objects() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save(&[car(7, "VW")]).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("cars.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let obj = &value.as_array().unwrap()[0];
        assert_eq!(obj["id"], 7);
        assert_eq!(obj["brand"], "VW");
        assert_eq!(obj["model"], "Test");
        assert_eq!(obj["year"], 2020);
        assert_eq!(obj["price"], 15000.0);
    }
}
