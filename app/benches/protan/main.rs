/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use criterion::{Criterion, criterion_group, criterion_main};
use protansim::{ProtanopeModel, Rgb, get_proto_color, rgb_to_xyz, simulate_rgb8, xyz_to_rgb};
use rand::Rng;
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();
    let pixels = (0..256 * 256 * 3)
        .map(|_| rng.random::<u8>())
        .collect::<Vec<_>>();

    c.bench_function("protansim: rgb -> xyz -> rgb", |b| {
        b.iter(|| {
            for i in 0..=255 {
                let v = i as f64;
                black_box(xyz_to_rgb(rgb_to_xyz(Rgb::new(v, 255. - v, v)).unwrap()));
            }
        })
    });

    c.bench_function("protansim: get_proto_color", |b| {
        b.iter(|| {
            for i in 0..=255 {
                let v = i as f64;
                black_box(get_proto_color(Rgb::new(v, 255. - v, v)).unwrap());
            }
        })
    });

    c.bench_function("protansim: model construction", |b| {
        b.iter(|| black_box(ProtanopeModel::new()))
    });

    c.bench_function("protansim: RGB8 256x256", |b| {
        let mut dst = pixels.clone();
        b.iter(|| {
            dst.copy_from_slice(&pixels);
            black_box(simulate_rgb8(&mut dst));
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
