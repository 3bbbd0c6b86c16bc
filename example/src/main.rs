// example/src/main.rs

use brine_enumer::{EnumError, Enumer};

// Bring the generated types into scope:
use example_app::generated::{Color, Gapped, Pill, Prime};

fn main() -> Result<(), EnumError> {
    // Canonical strings come straight out of the generated tables.
    for pill in Pill::VALUES {
        println!("{:?} = {}", pill, pill);
    }

    // Reverse lookup, through the trait and through `FromStr`.
    let blue = Color::from_name("Blue")?;
    let ten: Gapped = "ten".parse()?;
    println!("from_name(\"Blue\") = {:?}, \"ten\".parse() = {:?}", blue, ten);

    // Protocol adapters.
    let json = Prime::P41.to_json()?;
    println!("P41 as JSON = {}", String::from_utf8_lossy(&json));
    println!("back from JSON = {:?}", Prime::from_json(&json)?);

    match Color::from_text(b"Purple") {
        Ok(c)    => println!("unexpected color {}", c),
        Err(err) => println!("error: {}", err),
    }

    Ok(())
}
