//! Minimal end-to-end example: mixed-unit arithmetic, exact conversion and an explicit cast.

use qdim::{quantity_cast, Hours, Kilometres, Metre, Metres, MetresPerSecond, Minutes, Seconds};

fn main() {
    let d = Kilometres::new(1.5_f64) + Metres::new(250.0_f64);
    assert_eq!(d.to::<Metre>().count(), 1750.0);
    println!("1.5 km + 250 m = {d}");

    let run = MetresPerSecond::<i32>::new(10) * Hours::<i32>::new(2);
    println!("10 m/s for 2 h = {run} = {}", run.to::<Metre>());

    let lap: Minutes<i64> = quantity_cast(Seconds::<f64>::new(150.0));
    assert_eq!(lap.count(), 2);
    println!("150 s cast to whole minutes = {lap}");
}
