//! # Collection Manager
//!
//! [`Garage`] owns the canonical in-memory car collection. All mutation flows
//! through its operation set; consumers only ever see borrowed records or
//! derived projections.
//!
//! Every successful mutation writes a full snapshot through the [`CarStore`]
//! before returning, then invokes the registered change listeners with the
//! updated collection. Callers that need to stay in sync (a rendering layer,
//! for instance) subscribe instead of re-reading the store.
//!
//! Identity is a monotonic counter seeded from the highest persisted id, so
//! ids stay unique across restarts without depending on the wall clock.

use crate::error::Result;
use crate::model::{Car, CarFields, CarId};
use crate::store::CarStore;

/// Callback invoked with the full collection after every successful mutation.
pub type ChangeListener = Box<dyn FnMut(&[Car])>;

pub struct Garage<S: CarStore> {
    store: S,
    cars: Vec<Car>,
    next_id: CarId,
    listeners: Vec<ChangeListener>,
}

impl<S: CarStore> Garage<S> {
    /// Load the persisted collection and seed the id counter past every
    /// existing id.
    pub fn open(store: S) -> Result<Self> {
        let cars = store.load()?;
        let next_id = cars.iter().map(|c| c.id).max().map_or(1, |max| max + 1);
        Ok(Self {
            store,
            cars,
            next_id,
            listeners: Vec::new(),
        })
    }

    /// The canonical collection, in insertion order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Identity lookup, used by the detail view.
    pub fn get(&self, id: CarId) -> Option<&Car> {
        self.cars.iter().find(|c| c.id == id)
    }

    /// Validate `fields`, assign a fresh id, and append the new car.
    ///
    /// On validation failure nothing is mutated and the error carries the
    /// user-facing message.
    pub fn create(&mut self, fields: CarFields) -> Result<Car> {
        fields.validate()?;
        let car = Car::new(self.next_id, fields);
        self.next_id += 1;
        self.cars.push(car.clone());
        self.commit()?;
        Ok(car)
    }

    /// Validate `fields` and replace the car with identity `id` in place,
    /// keeping its position and id.
    ///
    /// Returns `Ok(None)` without mutating anything when `id` does not exist.
    pub fn update(&mut self, id: CarId, fields: CarFields) -> Result<Option<Car>> {
        fields.validate()?;
        let Some(pos) = self.cars.iter().position(|c| c.id == id) else {
            return Ok(None);
        };
        let car = Car::new(id, fields);
        self.cars[pos] = car.clone();
        self.commit()?;
        Ok(Some(car))
    }

    /// Remove the car with identity `id`, keeping the order of the rest.
    ///
    /// Returns `Ok(None)` when `id` does not exist. Confirmation prompts
    /// belong to the caller; this always deletes.
    pub fn delete(&mut self, id: CarId) -> Result<Option<Car>> {
        let Some(pos) = self.cars.iter().position(|c| c.id == id) else {
            return Ok(None);
        };
        let car = self.cars.remove(pos);
        self.commit()?;
        Ok(Some(car))
    }

    /// Derived projection: every car whose brand contains `brand_filter` as a
    /// case-insensitive substring, in collection order. An empty filter
    /// matches everything.
    pub fn query(&self, brand_filter: &str) -> Vec<Car> {
        let needle = brand_filter.to_lowercase();
        self.cars
            .iter()
            .filter(|c| c.brand.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Register a listener to be called after every successful mutation.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    fn commit(&mut self) -> Result<()> {
        self.store.save(&self.cars)?;
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in &mut listeners {
            listener(&self.cars);
        }
        self.listeners = listeners;
        Ok(())
    }
}
