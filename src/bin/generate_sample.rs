use std::path::PathBuf;

use serde::Serialize;

/// One row of the e-commerce shipping table, column names as published.
#[derive(Serialize)]
struct Shipment {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Warehouse_block")]
    warehouse_block: &'static str,
    #[serde(rename = "Mode_of_Shipment")]
    mode_of_shipment: &'static str,
    #[serde(rename = "Customer_care_calls")]
    customer_care_calls: u32,
    #[serde(rename = "Customer_rating")]
    customer_rating: u32,
    #[serde(rename = "Cost_of_the_Product")]
    cost_of_the_product: u32,
    #[serde(rename = "Prior_purchases")]
    prior_purchases: u32,
    #[serde(rename = "Product_importance")]
    product_importance: &'static str,
    #[serde(rename = "Gender")]
    gender: &'static str,
    #[serde(rename = "Discount_offered")]
    discount_offered: u32,
    #[serde(rename = "Weight_in_gms")]
    weight_in_gms: u32,
    #[serde(rename = "Reached.on.Time_Y.N")]
    reached_on_time: u8,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[lo, hi]`.
    fn range(&mut self, lo: u32, hi: u32) -> u32 {
        lo + (self.next_f64() * (hi - lo + 1) as f64) as u32
    }

    /// Pick from `(value, weight)` pairs.
    fn weighted<T: Copy>(&mut self, choices: &[(T, f64)]) -> T {
        let total: f64 = choices.iter().map(|(_, w)| w).sum();
        let mut roll = self.next_f64() * total;
        for &(value, weight) in choices {
            if roll < weight {
                return value;
            }
            roll -= weight;
        }
        choices[choices.len() - 1].0
    }
}

const ROWS: u32 = 2000;

fn main() {
    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("files/input/shipping-data.csv"));

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).expect("Failed to create output directory");
    }

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path).expect("Failed to create output file");

    for id in 1..=ROWS {
        let mode = rng.weighted(&[("Ship", 0.68), ("Flight", 0.16), ("Road", 0.16)]);
        // Heavier parcels go by ship more often; light ones fly.
        let weight_in_gms = match mode {
            "Flight" => rng.range(1000, 4500),
            "Road" => rng.range(1000, 6000),
            _ => rng.range(1000, 7800),
        };
        let discount_offered = if rng.next_f64() < 0.2 {
            rng.range(11, 65)
        } else {
            rng.range(1, 10)
        };

        let row = Shipment {
            id,
            warehouse_block: rng.weighted(&[
                ("A", 1.0),
                ("B", 1.0),
                ("C", 1.0),
                ("D", 1.0),
                ("F", 2.0),
            ]),
            mode_of_shipment: mode,
            customer_care_calls: rng.range(2, 7),
            customer_rating: rng.range(1, 5),
            cost_of_the_product: rng.range(96, 310),
            prior_purchases: rng.range(2, 10),
            product_importance: rng.weighted(&[("low", 0.48), ("medium", 0.43), ("high", 0.09)]),
            gender: rng.weighted(&[("F", 0.5), ("M", 0.5)]),
            discount_offered,
            weight_in_gms,
            reached_on_time: u8::from(discount_offered > 10 || rng.next_f64() < 0.5),
        };
        writer.serialize(row).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output file");

    println!("Wrote {ROWS} shipments to {}", output_path.display());
}
