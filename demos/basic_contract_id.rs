use mobilityid::din;

fn main() {
    // Build from separate fields; the check digit is computed
    let id = din::new_no_check_digit("NL", "TNM", "012204").expect("fields should be valid");
    println!("canonical:            {id}");
    println!("compact:              {}", id.to_compact_string());
    println!("compact, no check:    {}", id.to_compact_string_no_check_digit());
    println!("party ID:             {}", id.party_id());
    println!("compact party ID:     {}", id.compact_party_id());

    // Parse any of the accepted notations
    println!("\nParsing:");
    for input in ["NL-TNM-012204-5", "nl*tnm*012204*5", "NLTNM0122045", "NL-TNM-012204"] {
        match din::parse(input) {
            Ok(parsed) => println!(
                "  {input:<18} -> {parsed} (check digit {})",
                parsed
                    .check_digit()
                    .map_or_else(|| "absent".to_string(), |c| c.to_string())
            ),
            Err(e) => println!("  {input:<18} -> error: {e}"),
        }
    }

    // IDs serialize as their canonical string
    let json = serde_json::to_string(&id).expect("serialization cannot fail");
    println!("\nJSON: {json}");
}
