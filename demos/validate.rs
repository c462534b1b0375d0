use tunnus::*;

fn main() {
    println!("=== Personal Identity Numbers ===\n");

    let pins = [
        "170583+123C",
        "311280-888Y",
        "171001A413L",
        "311280-8880", // wrong control symbol
        "290200-900B", // 1900 was not a leap year
    ];

    for pin in &pins {
        match parse_pin(pin) {
            Ok(p) => println!(
                "  {pin} => valid (born {}, {:?})",
                p.date_of_birth(),
                p.gender()
            ),
            Err(e) => println!("  {pin} => INVALID: {e}"),
        }
    }

    println!("\n=== Business IDs ===\n");

    for id in ["0737546-2", "592509-6", "0737546-3", "0000006-0"] {
        match parse_business_id(id) {
            Ok(_) => println!("  {id} => valid"),
            Err(e) => println!("  {id} => INVALID: {e}"),
        }
    }

    println!("\n=== VAT numbers ===\n");

    for vat in ["FI15728600", "fi07375462", "15728600", "010101-123N"] {
        match parse_vat(vat) {
            Ok(v) => println!("  {vat} => valid (business ID {})", v.business_id()),
            Err(e) => println!("  {vat} => INVALID: {e}"),
        }
    }

    println!("\n=== FINUIDs ===\n");

    for id in ["10011187H", "10011187J"] {
        println!("  {id} => {}", validate_finuid(id));
    }
}
