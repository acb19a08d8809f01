use log::warn;
use std::collections::HashMap;

use crate::records::{Product, SaleRecord};

pub type PriceCatalogue = HashMap<String, f64>;

#[derive(Debug, PartialEq, Default)]
pub struct SalesTotal {
    pub total: f64,
    /// Product names of the sales that had no catalogue entry, in input order.
    pub unmatched: Vec<String>,
}

/// Indexes products by title. A repeated title keeps the price of its last occurrence.
pub fn create_price_catalogue(products: &[Product]) -> PriceCatalogue {
    let mut catalogue = PriceCatalogue::with_capacity(products.len());
    for product in products {
        catalogue.insert(product.title.clone(), product.price);
    }

    catalogue
}

pub fn calculate_total_sales(sales: &[SaleRecord], catalogue: &PriceCatalogue) -> SalesTotal {
    let mut result = SalesTotal::default();

    for sale in sales {
        match catalogue.get(&sale.product) {
            Some(price) => result.total += price * sale.quantity,
            None => {
                warn!("Product '{}' not found.", sale.product);
                result.unmatched.push(sale.product.clone());
            }
        }
    }

    result
}
