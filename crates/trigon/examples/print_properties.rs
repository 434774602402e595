//! Print the report for a few fixed triangles in every bundled locale.
//!
//! Run with `cargo run -p trigon --example print_properties`.

use trigon::{Catalog, Locale, Report, Triangle};

fn main() {
    let triangles = [
        Triangle::from_legs(3.0, 4.0),
        Triangle::from_sides(5.0, 5.0, 5.0),
        Triangle::from_sides(4.0, 4.0, 6.5),
    ];
    for locale in Locale::ALL {
        let labels = Catalog::builtin(locale);
        println!("== {locale}");
        for t in &triangles {
            match t {
                Ok(t) => println!("{}\n", Report::new(t).render(&labels)),
                Err(e) => eprintln!("error: {e}"),
            }
        }
    }
}
