#![no_main]

use entail::{parse, parse_canonical, ResourceLimits, Validator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let Ok(expr) = parse(s) else {
            return;
        };
        if !Validator::new().is_valid(&expr) {
            return;
        }
        let rendered = expr.canonical().to_string();
        let reread = parse_canonical(&rendered, &ResourceLimits::default())
            .expect("canonical rendering must read back");
        assert_eq!(reread.canonical().to_string(), rendered);
    }
});
