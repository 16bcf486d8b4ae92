//! Shows how structurally built units are named through the registry.

use qdim::registry::{self, Downcast};
use qdim::{Decimetres, Joule, Metres, Minutes, Newtons, Seconds};

fn describe(label: &str, unit: Downcast) {
    match unit {
        Downcast::Named(entry) => println!("{label}: named unit {} ({})", entry.name, entry.symbol),
        Downcast::Scaled { dimension, ratio } => {
            println!("{label}: {} scaled by {ratio} -> {unit}", dimension.name)
        }
        Downcast::Unknown { .. } => println!("{label}: no declared dimension -> {unit}"),
    }
}

fn main() {
    describe("dm³", Decimetres::new(1.0_f64).pow::<3>().resolved_unit());
    describe("N·m", (Newtons::new(2.0_f64) * Metres::new(3.0_f64)).resolved_unit());
    describe("1/min", (1.0_f64 / Minutes::new(1.0_f64)).resolved_unit());
    describe("m·s", (Metres::new(1.0_f64) * Seconds::new(1.0_f64)).resolved_unit());

    let work = (Newtons::new(2.0_f64) * Metres::new(3.0_f64)).downcast::<Joule>();
    println!("2 N × 3 m = {work}");

    println!("{} units registered:", registry::units().count());
    for entry in registry::units() {
        println!("  {:<22} {:>4}  ratio {}", entry.name, entry.symbol, entry.ratio);
    }
}
