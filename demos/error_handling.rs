use mobilityid::{ContractIdError, din};

fn main() {
    let inputs = [
        "NL-TNM-012204-5",
        "NL-TNM-012204-4",
        "ZZ-ABC-123456",
        "DE-ABC-12345678",
        "not-an-id",
    ];

    for input in inputs {
        match din::parse(input) {
            Ok(id) => println!("{input}: ok ({id})"),
            Err(ContractIdError::CheckDigitMismatch { provided, computed }) => {
                println!("{input}: typo? check digit should be '{computed}', not '{provided}'")
            }
            Err(e) => match e.field() {
                Some(field) => println!("{input}: invalid {field}: {e}"),
                None => println!("{input}: {e}"),
            },
        }
    }
}
