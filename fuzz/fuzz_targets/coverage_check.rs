#![no_main]

use bindcov_coverage::{check, RuleSet};
use bindcov_scan::{BindingScanner, NativeScanner, ScanConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // First half is the header, second half the binding source
    let mid = (0..=text.len() / 2)
        .rev()
        .find(|idx| text.is_char_boundary(*idx))
        .unwrap_or(0);
    let (header, source) = text.split_at(mid);

    let config = ScanConfig::default();
    let native = NativeScanner::new(&config).scan(header);
    let Ok(binding) = BindingScanner::new(&config).scan(source) else {
        return;
    };

    let report = check(&native, &binding, &RuleSet::builtin());
    assert_eq!(report.functions.len(), native.functions.len());

    let summary = report.function_summary;
    assert!((0.0..=100.0).contains(&summary.completion()));
    assert!((0.0..=100.0).contains(&summary.total_completion()));
    let _ = report.to_string();
});
