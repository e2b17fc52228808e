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
use protansim::{ProtanopeModel, Rgb, rgb_to_xyz};
use std::ops::Add;

/// Per-band accumulation of the simulation error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Deviation {
    /// Sum of squared XYZ distances between source and simulated pixels.
    pub(crate) square_sum: f64,
    pub(crate) points: usize,
    pub(crate) out_of_gamut: usize,
    pub(crate) failures: usize,
}

impl Add for Deviation {
    type Output = Deviation;

    fn add(self, rhs: Self) -> Self::Output {
        Deviation {
            square_sum: self.square_sum + rhs.square_sum,
            points: self.points + rhs.points,
            out_of_gamut: self.out_of_gamut + rhs.out_of_gamut,
            failures: self.failures + rhs.failures,
        }
    }
}

impl Deviation {
    /// Root-mean-square XYZ distance, zero for an empty frame.
    pub(crate) fn rmsd(&self) -> f64 {
        if self.points == 0 {
            return 0.;
        }
        (self.square_sum / self.points as f64).sqrt()
    }
}

/// Replaces every RGB pixel of `pixels` with its protanope rendition.
///
/// A pixel that fails to convert is logged and kept as it was.
pub(crate) fn simulate_band(model: &ProtanopeModel, pixels: &mut [u8]) -> Deviation {
    let mut deviation = Deviation::default();
    for px in pixels.chunks_exact_mut(3) {
        let source: Rgb<f64> = Rgb::new(px[0], px[1], px[2]).into();
        deviation.points += 1;

        let simulation = match model.simulate(source) {
            Ok(simulation) => simulation,
            Err(e) => {
                log::warn!("Pixel {source:?} left unchanged: {e}");
                deviation.failures += 1;
                continue;
            }
        };

        if let (Ok(xyz), Ok(seen)) = (rgb_to_xyz(source), rgb_to_xyz(simulation.rgb)) {
            let distance = xyz.euclidean_distance(seen);
            deviation.square_sum += distance * distance;
        }
        deviation.out_of_gamut += simulation.out_of_gamut as usize;

        let rgb = simulation.rgb.cast::<u8>();
        px[0] = rgb.r;
        px[1] = rgb.g;
        px[2] = rgb.b;
    }
    deviation
}

/// Splits the frame into row bands and simulates them on `threads` workers.
pub(crate) fn simulate_frame(
    pixels: &mut [u8],
    row_stride: usize,
    threads: usize,
) -> Deviation {
    let rows = pixels.len() / row_stride.max(1);
    if rows == 0 {
        return Deviation::default();
    }
    let rows_per_band = rows.div_ceil(threads.max(1));
    let band_size = rows_per_band * row_stride;
    let model = ProtanopeModel::shared();

    std::thread::scope(|s| {
        let workers = pixels
            .chunks_mut(band_size)
            .map(|band| s.spawn(move || simulate_band(model, band)))
            .collect::<Vec<_>>();
        workers
            .into_iter()
            .map(|worker| {
                worker.join().unwrap_or_else(|_| {
                    log::error!("Simulation worker panicked, its band is incomplete");
                    Deviation::default()
                })
            })
            .fold(Deviation::default(), |acc, d| acc + d)
    })
}
