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
use crate::matrix::{Chromaticity, XyY};

/// Three primaries spanning a display gamut in the xy plane.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct ChromaticityTriple {
    pub red: XyY,
    pub green: XyY,
    pub blue: XyY,
}

/// sRGB primaries in xyY, obtained by running full-intensity red, green and
/// blue through the D50-adapted conversion.
pub const SRGB_PRIMARIES: ChromaticityTriple = ChromaticityTriple {
    red: XyY::new(0.648427223687212, 0.33085610147277805, 0.2225045),
    green: XyY::new(0.32114218947031314, 0.5978731460291832, 0.7168786),
    blue: XyY::new(0.15588297522548386, 0.06604079049922723, 0.0606169),
};

/// The D50 white point in xyY.
pub const WHITE_D50: XyY = Chromaticity::D50.to_xyyb();

/// The 470 nm spectral locus point, CIE publication 15.
pub const SPECTRAL_470: XyY = XyY::new(0.12412, 0.05780, 0.090980);

/// The 575 nm spectral locus point, CIE publication 15.
pub const SPECTRAL_575: XyY = XyY::new(0.47877, 0.52020, 0.915400);

/// Point every protanope confusion line passes through.
pub const PROTAN_CONFUSION_POINT: XyY = XyY::new(0.747, 0.253, 1.0);

#[inline]
fn edge_sign(p: Chromaticity, a: XyY, b: XyY) -> f64 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

impl ChromaticityTriple {
    /// Whether the chromaticity lies inside the triangle or on its boundary.
    pub fn contains(&self, xyy: XyY) -> bool {
        let p = xyy.chromaticity();
        let d0 = edge_sign(p, self.red, self.green);
        let d1 = edge_sign(p, self.green, self.blue);
        let d2 = edge_sign(p, self.blue, self.red);

        let has_negative = d0 < 0. || d1 < 0. || d2 < 0.;
        let has_positive = d0 > 0. || d1 > 0. || d2 > 0.;
        !(has_negative && has_positive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamut_membership() {
        assert!(SRGB_PRIMARIES.contains(WHITE_D50));
        assert!(SRGB_PRIMARIES.contains(SRGB_PRIMARIES.green));
        assert!(!SRGB_PRIMARIES.contains(PROTAN_CONFUSION_POINT));
        assert!(!SRGB_PRIMARIES.contains(SPECTRAL_470));
        assert!(!SRGB_PRIMARIES.contains(XyY::new(0.3, 0.7, 1.)));
    }

    #[test]
    fn confusion_point_is_right_of_gamut() {
        assert!(PROTAN_CONFUSION_POINT.x > SRGB_PRIMARIES.red.x);
    }
}
