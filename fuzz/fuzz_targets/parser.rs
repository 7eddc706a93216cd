#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Avoid pathological allocations in the harness itself; libFuzzer will still mutate below this.
    if data.len() > 64 * 1024 {
        return;
    }
    let src = String::from_utf8_lossy(data);
    let _ = minijs::tokenize(&src);
    if let Err(err) = minijs::parse_source(&src) {
        let _ = err.to_diagnostic(&src);
    }
});
