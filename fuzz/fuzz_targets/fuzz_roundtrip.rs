#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|bytes: u64| {
    // The canonical form must reproduce the exact value when re-parsed
    let size = datasize::ByteSize::new(bytes);
    let reparsed = datasize::parse_str(&size.to_string());
    assert_eq!(reparsed, Ok(size));
});
