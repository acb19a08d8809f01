use serde::{de::DeserializeOwned, Deserialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::error::SalesError;

/// One entry of the price catalogue file.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Product {
    pub title: String,
    pub price: f64,
}

/// One entry of the sales file. Other keys in the object (ids, dates) are ignored.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct SaleRecord {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
}

/// Reads a JSON array of records from `path`.
///
/// The whole file is treated as one unit: a single malformed entry fails the load.
pub fn read_json<T, P>(path: P) -> Result<Vec<T>, SalesError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SalesError::from_io(path.to_path_buf(), e))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            SalesError::from_io(path.to_path_buf(), e.into())
        } else {
            SalesError::Parse {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}
