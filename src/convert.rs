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
use crate::err::SimulationError;
use crate::gamma::{linear_to_srgb_gamma, srgb_to_linear_gamma};
use crate::matrix::{SRGB_TO_XYZ_D50, XYZ_D50_TO_SRGB, XyY, Xyz};
use crate::rgb::Rgb;

/// Converts 8-bit range sRGB (D65) into CIE XYZ relative to D50.
///
/// Fails when a channel lies outside `[0, 255]`.
#[inline]
pub fn rgb_to_xyz(rgb: Rgb<f64>) -> Result<Xyz, SimulationError> {
    let linear = Rgb::new(
        srgb_to_linear_gamma(rgb.r / 255.)?,
        srgb_to_linear_gamma(rgb.g / 255.)?,
        srgb_to_linear_gamma(rgb.b / 255.)?,
    );
    Ok(Xyz::from_linear_rgb(linear, SRGB_TO_XYZ_D50))
}

/// Converts CIE XYZ (D50) to 8-bit range sRGB. Nothing is clamped, so
/// colors outside the sRGB gamut come back outside `[0, 255]`.
#[inline]
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb<f64> {
    let linear = xyz.to_linear_rgb(XYZ_D50_TO_SRGB);
    Rgb::new(
        255. * linear_to_srgb_gamma(linear.r),
        255. * linear_to_srgb_gamma(linear.g),
        255. * linear_to_srgb_gamma(linear.b),
    )
}

#[inline]
pub fn xyz_to_xyy(xyz: Xyz) -> XyY {
    xyz.to_xyy()
}

#[inline]
pub fn xyy_to_xyz(xyy: XyY) -> Xyz {
    xyy.to_xyz()
}
