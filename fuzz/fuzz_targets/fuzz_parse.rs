#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must not panic on any input; errors still carry a usable fallback
    if let Err(err) = datasize::parse(data) {
        let _ = err.fallback();
        let _ = err.to_string();
    }
});
