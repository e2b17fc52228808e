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
//! Protanope appearance model.
//!
//! A color is projected along its protanope confusion line onto the vision
//! curve, which passes through the three stimuli a protanope perceives like
//! a normal observer: 470 nm, 575 nm and white.

use crate::convert::{rgb_to_xyz, xyz_to_rgb};
use crate::curve::{Line, QuadraticPolynomial};
use crate::err::SimulationError;
use crate::matrix::{XyY, Xyz};
use crate::primaries::{
    ChromaticityTriple, PROTAN_CONFUSION_POINT, SPECTRAL_470, SPECTRAL_575, SRGB_PRIMARIES,
    WHITE_D50,
};
use crate::rgb::Rgb;
use log::{debug, trace};
use std::sync::LazyLock;

static PROTANOPE_MODEL: LazyLock<ProtanopeModel> = LazyLock::new(|| {
    let model = ProtanopeModel::new();
    debug!(
        "Protanope vision curve y = {}x² + {}x + {}",
        model.vision_curve.a, model.vision_curve.b, model.vision_curve.c
    );
    model
});

/// Fixed geometry of the protanope simulation.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct ProtanopeModel {
    pub confusion_point: XyY,
    pub vision_curve: QuadraticPolynomial,
    pub primaries: ChromaticityTriple,
}

/// Outcome of simulating one color.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct ProtanSimulation {
    /// Rounded and clamped into `[0, 255]`.
    pub rgb: Rgb<f64>,
    /// Result before rounding and clamping.
    pub unclamped: Rgb<f64>,
    /// Perceived chromaticity, with protan-adapted luminance.
    pub perceived: XyY,
    /// The curve intersection fell outside the gamut and was moved back
    /// onto a primary edge.
    pub gamut_clipped: bool,
    /// `unclamped` was outside `[0, 255]`.
    pub out_of_gamut: bool,
}

/// Luminance as seen with a weak long-wavelength response.
///
/// <http://nvlpubs.nist.gov/nistpubs/jres/33/jresv33n6p407_A1b.pdf>
#[inline]
pub fn protan_luminance(xyz: Xyz) -> f64 {
    -0.460 * xyz.x + 1.359 * xyz.y + 0.101 * xyz.z
}

impl Default for ProtanopeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtanopeModel {
    pub fn new() -> Self {
        ProtanopeModel {
            confusion_point: PROTAN_CONFUSION_POINT,
            vision_curve: QuadraticPolynomial::interpolate(SPECTRAL_470, SPECTRAL_575, WHITE_D50),
            primaries: SRGB_PRIMARIES,
        }
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> &'static ProtanopeModel {
        &PROTANOPE_MODEL
    }

    /// Every color on this line looks the same to a protanope as `xyy`.
    #[inline]
    pub fn confusion_line(&self, xyy: XyY) -> Line {
        Line::through(self.confusion_point, xyy)
    }

    /// Moves a point lying beyond the green edges of the gamut back along
    /// the confusion line. Left of green the blue-green edge applies,
    /// otherwise the green-red edge.
    ///
    /// The result may still map to RGB outside `[0, 255]`.
    pub fn move_within_gamut(&self, confusion_line: Line, xyy: XyY) -> (XyY, bool) {
        let green = self.primaries.green;
        let edge = if xyy.x < green.x {
            Line::through(self.primaries.blue, green)
        } else {
            Line::through(green, self.primaries.red)
        };

        if xyy.y > edge.eval(xyy.x) {
            if let Some(moved) = confusion_line.intersect(edge, xyy.yb) {
                return (moved, true);
            }
        }
        (xyy, false)
    }

    pub fn simulate(&self, rgb: Rgb<f64>) -> Result<ProtanSimulation, SimulationError> {
        let xyz = rgb_to_xyz(rgb)?;
        let xyy = xyz.to_xyy();

        let confusion_line = self.confusion_line(xyy);
        let intersection = self
            .vision_curve
            .intersect_line(confusion_line, protan_luminance(xyz))?;
        let (perceived, gamut_clipped) = self.move_within_gamut(confusion_line, intersection);

        let unclamped = xyz_to_rgb(perceived.to_xyz());
        let out_of_gamut = !unclamped.is_within(0., 255.);
        if out_of_gamut {
            trace!("Protan simulation of {rgb:?} clamped from {unclamped:?}");
        }

        Ok(ProtanSimulation {
            rgb: unclamped.round().clamp(0., 255.),
            unclamped,
            perceived,
            gamut_clipped,
            out_of_gamut,
        })
    }
}

/// Estimates the color a protanope perceives for `rgb`, channels in `[0, 255]`.
pub fn get_proto_color(rgb: Rgb<f64>) -> Result<Rgb<f64>, SimulationError> {
    Ok(ProtanopeModel::shared().simulate(rgb)?.rgb)
}

/// Tally of an in-place buffer simulation.
#[derive(Clone, Debug, Copy, Default, PartialEq, Eq)]
pub struct BufferSimulation {
    /// Pixels that fell outside the displayable range and were clamped.
    pub out_of_gamut: usize,
    /// Pixels that could not be simulated and were left unchanged.
    pub failed: usize,
    /// Pixel index of the first failure.
    pub first_failure: Option<usize>,
}

impl ProtanopeModel {
    /// Simulates an interleaved 8-bit RGB buffer in place.
    ///
    /// Every pixel is visited even if some of them fail; failed pixels keep
    /// their source value. Trailing bytes that do not form a whole pixel are
    /// left untouched.
    pub fn simulate_rgb8(&self, buffer: &mut [u8]) -> BufferSimulation {
        let mut report = BufferSimulation::default();
        for (index, px) in buffer.chunks_exact_mut(3).enumerate() {
            let simulation = match self.simulate(Rgb::new(px[0], px[1], px[2]).into()) {
                Ok(simulation) => simulation,
                Err(err) => {
                    debug!("Pixel {index} left unchanged: {err}");
                    report.failed += 1;
                    if report.first_failure.is_none() {
                        report.first_failure = Some(index);
                    }
                    continue;
                }
            };
            let rgb = simulation.rgb.cast::<u8>();
            px[0] = rgb.r;
            px[1] = rgb.g;
            px[2] = rgb.b;
            report.out_of_gamut += simulation.out_of_gamut as usize;
        }
        report
    }
}

/// [`ProtanopeModel::simulate_rgb8`] with the process-wide model.
pub fn simulate_rgb8(buffer: &mut [u8]) -> BufferSimulation {
    ProtanopeModel::shared().simulate_rgb8(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::xyy_to_xyz;
    use rand::Rng;

    fn assert_near(actual: Rgb<f64>, expected: Rgb<f64>, tolerance: f64) {
        let d = actual - expected;
        assert!(
            d.r.abs() <= tolerance && d.g.abs() <= tolerance && d.b.abs() <= tolerance,
            "{actual:?} is not within {tolerance} of {expected:?}"
        );
    }

    #[test]
    fn vision_curve_passes_through_anchors() {
        let model = ProtanopeModel::shared();
        for anchor in [SPECTRAL_470, SPECTRAL_575, WHITE_D50] {
            assert!((model.vision_curve.eval(anchor.x) - anchor.y).abs() < 1e-12);
        }
        assert!(model.vision_curve.a < 0.);
    }

    #[test]
    fn flat_confusion_line_leaves_gamut() {
        let rgb = xyz_to_rgb(xyy_to_xyz(XyY::new(0.3, 0.253, 0.5)));
        assert!(rgb.b > 255.);

        let clipped = Rgb::new(rgb.r, rgb.g, 255.);
        let simulation = ProtanopeModel::shared().simulate(clipped).unwrap();
        assert_near(simulation.rgb, Rgb::new(165., 182., 255.), 0.5);
        assert!(simulation.out_of_gamut);
        assert!(!simulation.gamut_clipped);
        assert_eq!(get_proto_color(clipped).unwrap(), simulation.rgb);
    }

    #[test]
    fn neutrals_are_preserved() {
        for v in (0..=255).step_by(17) {
            let grey = Rgb::dup(v as f64);
            assert_eq!(get_proto_color(grey).unwrap(), grey);
        }
    }

    #[test]
    fn black_resolves_to_white_chromaticity() {
        let simulation = ProtanopeModel::shared().simulate(Rgb::dup(0.)).unwrap();
        assert_eq!(simulation.rgb, Rgb::dup(0.));
        assert!((simulation.perceived.x - WHITE_D50.x).abs() < 1e-9);
        assert!((simulation.perceived.y - WHITE_D50.y).abs() < 1e-9);
        assert_eq!(simulation.perceived.yb, 0.);
    }

    #[test]
    fn red_loses_its_hue() {
        let proto = get_proto_color(Rgb::new(255., 0., 0.)).unwrap();
        assert_near(proto, Rgb::new(99., 91., 6.), 1.);
    }

    #[test]
    fn colors_on_vision_curve_are_nearly_fixed() {
        let model = ProtanopeModel::shared();
        for x in [0.30, 0.32, 0.34, 0.36, 0.40] {
            let on_curve = XyY::new(x, model.vision_curve.eval(x), 0.3);
            let rgb = xyz_to_rgb(on_curve.to_xyz()).round().clamp(0., 255.);
            let once = get_proto_color(rgb).unwrap();
            let twice = get_proto_color(once).unwrap();
            assert_near(once, rgb, 4.);
            assert_near(twice, once, 4.);
        }
    }

    #[test]
    fn yellow_green_is_clipped_to_gamut_edge() {
        let model = ProtanopeModel::shared();
        let simulation = model.simulate(Rgb::new(120., 255., 0.)).unwrap();
        assert!(simulation.gamut_clipped);
        assert!(simulation.perceived.x > model.primaries.green.x);
        let edge = Line::through(model.primaries.green, model.primaries.red);
        assert!((simulation.perceived.y - edge.eval(simulation.perceived.x)).abs() < 1e-9);
        assert_near(simulation.rgb, Rgb::new(125., 255., 0.), 1.);
    }

    #[test]
    fn inside_curve_point_is_not_clipped() {
        let simulation = ProtanopeModel::shared()
            .simulate(Rgb::new(10., 200., 30.))
            .unwrap();
        assert!(!simulation.gamut_clipped);
        assert!(ProtanopeModel::shared().primaries.contains(simulation.perceived));
    }

    #[test]
    fn out_of_range_channel_is_rejected() {
        let err = get_proto_color(Rgb::new(256., 0., 0.)).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidGammaInput(_)));
        assert!(get_proto_color(Rgb::new(0., -1., 0.)).is_err());
    }

    #[test]
    fn random_colors_stay_in_range() {
        let mut rng = rand::rng();
        for _ in 0..5000 {
            let rgb = Rgb::new(
                rng.random_range(0..=255u8),
                rng.random_range(0..=255u8),
                rng.random_range(0..=255u8),
            );
            let simulation = ProtanopeModel::shared().simulate(rgb.into()).unwrap();
            assert!(simulation.rgb.is_within(0., 255.));
            assert_eq!(simulation.rgb, simulation.rgb.round());
        }
    }

    #[test]
    fn buffer_matches_single_pixels() {
        let mut buffer = vec![255u8, 0, 0, 128, 128, 128, 10, 200, 30, 7];
        let expected = [
            get_proto_color(Rgb::new(255., 0., 0.)).unwrap(),
            get_proto_color(Rgb::dup(128.)).unwrap(),
            get_proto_color(Rgb::new(10., 200., 30.)).unwrap(),
        ];
        let report = simulate_rgb8(&mut buffer);
        assert_eq!(report.failed, 0);
        assert_eq!(report.first_failure, None);
        for (px, expected) in buffer.chunks_exact(3).zip(expected) {
            assert_eq!(Rgb::new(px[0], px[1], px[2]).cast::<f64>(), expected);
        }
        assert_eq!(buffer[9], 7);
    }

    fn curve_out_of_reach() -> ProtanopeModel {
        ProtanopeModel {
            vision_curve: QuadraticPolynomial::new(1., 0., 10.),
            ..ProtanopeModel::new()
        }
    }

    #[test]
    fn missing_intersection_reaches_caller() {
        let err = curve_out_of_reach().simulate(Rgb::dup(128.)).unwrap_err();
        assert!(matches!(err, SimulationError::NoCurveIntersection { .. }));
    }

    #[test]
    fn buffer_failures_leave_pixels_unchanged() {
        let source = vec![255u8, 0, 0, 128, 128, 128, 10, 200, 30];
        let mut buffer = source.clone();
        let report = curve_out_of_reach().simulate_rgb8(&mut buffer);
        assert_eq!(report.failed, 3);
        assert_eq!(report.first_failure, Some(0));
        assert_eq!(report.out_of_gamut, 0);
        assert_eq!(buffer, source);
    }

    #[test]
    fn shared_model_across_threads() {
        let reference = get_proto_color(Rgb::new(40., 120., 200.)).unwrap();
        std::thread::scope(|s| {
            let handles = (0..4)
                .map(|_| s.spawn(|| get_proto_color(Rgb::new(40., 120., 200.)).unwrap()))
                .collect::<Vec<_>>();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), reference);
            }
        });
    }
}
