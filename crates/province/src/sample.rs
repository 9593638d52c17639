//! Sample data for tests and demos.

use crate::producer::ProducerData;
use crate::province::ProvinceData;

/// The "Asia" province: three producers, demand 30, price 20.
pub fn sample_province_data() -> ProvinceData {
    ProvinceData {
        name: "Asia".to_string(),
        producers: vec![
            ProducerData::new("Byzantium", 10, 9),
            ProducerData::new("Attalia", 12, 10),
            ProducerData::new("Sinope", 10, 6),
        ],
        demand: 30,
        price: 20,
    }
}
