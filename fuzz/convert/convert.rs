#![no_main]

use libfuzzer_sys::fuzz_target;
use protansim::{XyY, Xyz, xyy_to_xyz, xyz_to_rgb, xyz_to_xyy};

fuzz_target!(|data: (f64, f64, f64)| {
    // Never panic expected, including for zero and non-finite inputs
    let xyz = Xyz::new(data.0, data.1, data.2);
    _ = xyz_to_rgb(xyy_to_xyz(xyz_to_xyy(xyz)));
    _ = xyz_to_rgb(xyy_to_xyz(XyY::new(data.0, data.1, data.2)));
});
