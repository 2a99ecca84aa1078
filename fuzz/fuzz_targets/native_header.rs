#![no_main]

use bindcov_scan::{NativeScanner, ScanConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Header scanning never fails, malformed lines are skipped
    let config = ScanConfig::default();
    let api = NativeScanner::new(&config).scan(text);

    for func in &api.functions {
        let _ = func.signature();
        for arg in &func.args {
            let _ = arg.signature_type();
        }
    }
    for name in &api.enums {
        assert!(!name.ends_with("_COUNT"));
    }
});
