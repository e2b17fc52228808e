#![no_main]

use libfuzzer_sys::fuzz_target;
use protansim::{ProtanopeModel, Rgb, simulate_rgb8};

fuzz_target!(|data: (f64, f64, f64, Vec<u8>)| {
    // Never panic expected, out of range channels must come back as errors
    let rgb = Rgb::new(data.0, data.1, data.2);
    if let Ok(simulation) = ProtanopeModel::shared().simulate(rgb) {
        assert!(simulation.rgb.is_within(0., 255.));
    }
    let mut pixels = data.3;
    let report = simulate_rgb8(&mut pixels);
    assert!(report.failed <= pixels.len() / 3);
});
