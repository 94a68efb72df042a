#![no_main]

use entail::Engine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|depth: u8| {
    let engine = Engine::new();

    let depth = (depth as usize % 150) + 1;

    let mut expr = String::from("p");
    for _ in 0..depth {
        expr = format!("(not {})", expr);
    }

    let _ = engine.check(&expr, "fuzz_nested");
});
