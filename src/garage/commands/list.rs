use crate::collection::Garage;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CarStore;

/// List the collection, optionally narrowed to brands containing `brand_filter`.
pub fn run<S: CarStore>(garage: &Garage<S>, brand_filter: &str) -> Result<CmdResult> {
    let listed = garage.query(brand_filter);
    Ok(CmdResult::default().with_listed_cars(listed))
}
