#![no_main]

use bindcov_scan::{BindingScanner, DecoratorTable, ScanConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let config = ScanConfig::default();
    let decorators = DecoratorTable::parse(text);

    // Unterminated literals are errors, everything else is scanned
    if let Ok(api) = BindingScanner::new(&config).scan(text) {
        for func in &api.functions {
            let _ = func.signature();
            for arg in &func.args {
                let _ = decorators.expanded_name(arg);
            }
        }
        for warning in &api.warnings {
            let _ = warning.to_string();
        }
    }
});
