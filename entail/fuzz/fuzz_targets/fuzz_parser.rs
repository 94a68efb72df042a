#![no_main]

use entail::Engine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut engine = Engine::new();

        if engine.add_source(s, "fuzz_input").is_ok() {
            let _ = engine.validated();
        }
    }
});
