#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(id) = mobilityid::din::parse(s) else {
        return;
    };

    // Whatever parsed must parse back to the same ID from every string form.
    let canonical = mobilityid::din::parse(&id.to_string()).expect("canonical form must parse");
    assert_eq!(canonical, id);
    let compact = mobilityid::din::parse(&id.to_compact_string()).expect("compact form must parse");
    assert_eq!(compact, id);
});
