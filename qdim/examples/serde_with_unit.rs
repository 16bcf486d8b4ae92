//! Example demonstrating the serde_with_unit helper module.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use qdim::{Kilometres, Litres, Minutes};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug)]
    struct Refuel {
        // Serialized with its unit symbol.
        #[serde(with = "qdim::serde_with_unit")]
        distance: Kilometres,

        // Serialized as the bare count.
        fuel: Litres,

        #[serde(with = "qdim::serde_with_unit")]
        stop: Minutes<i32>,
    }

    let data = Refuel {
        distance: Kilometres::new(412.5_f64),
        fuel: Litres::new(38.2_f64),
        stop: Minutes::<i32>::new(12),
    };

    let json = serde_json::to_string_pretty(&data).unwrap();
    println!("Serialized:\n{json}\n");

    let restored: Refuel = serde_json::from_str(&json).unwrap();
    println!("Deserialized: {} / {} / {}", restored.distance, restored.fuel, restored.stop);

    let wrong = r#"{"distance":{"value":1.0,"unit":"mi"},"fuel":1.0,"stop":{"value":1,"unit":"min"}}"#;
    match serde_json::from_str::<Refuel>(wrong) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("Rejected: {e}"),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
