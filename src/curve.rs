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
use crate::matrix::XyY;
use crate::mlaf::mlaf;

/// Coefficients of `y = a·x² + b·x + c` in the xy plane.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct QuadraticPolynomial {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticPolynomial {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        mlaf(mlaf(self.c, self.b, x), self.a * x, x)
    }

    /// The contribution of `p0` to the Lagrange basis through `p0`, `p1`, `p2`.
    #[inline]
    fn lagrange_term(p0: XyY, p1: XyY, p2: XyY) -> Self {
        let a = p0.y / ((p0.x - p1.x) * (p0.x - p2.x));
        Self {
            a,
            b: a * -p1.x + a * -p2.x,
            c: a * p1.x * p2.x,
        }
    }

    /// Unique quadratic passing through three points with distinct `x`.
    pub fn interpolate(p0: XyY, p1: XyY, p2: XyY) -> Self {
        let t0 = Self::lagrange_term(p0, p1, p2);
        let t1 = Self::lagrange_term(p1, p0, p2);
        let t2 = Self::lagrange_term(p2, p0, p1);
        Self {
            a: t0.a + t1.a + t2.a,
            b: t0.b + t1.b + t2.b,
            c: t0.c + t1.c + t2.c,
        }
    }

    /// Intersects the curve with `line`, stamping the result with luminance `yb`.
    ///
    /// Takes the `+√D` root of `a·x² + (b - m)·x + (c - line.b) = 0`.
    pub fn intersect_line(&self, line: Line, yb: f64) -> Result<XyY, SimulationError> {
        let a = self.a;
        let b = self.b - line.m;
        let c = self.c - line.b;
        let discriminant = b * b - 4. * a * c;
        if discriminant.is_nan() || discriminant < 0. {
            return Err(SimulationError::NoCurveIntersection { discriminant });
        }
        let x = (-b + discriminant.sqrt()) / (2. * a);
        Ok(XyY::new(x, line.eval(x), yb))
    }
}

/// Slope-intercept line `y = m·x + b`.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Line {
    pub m: f64,
    pub b: f64,
}

impl Line {
    pub const fn new(m: f64, b: f64) -> Self {
        Self { m, b }
    }

    /// Line through two chromaticities. Points are ordered by `x` first so
    /// the same pair always gives bit-identical coefficients; the caller
    /// guarantees the `x` values differ.
    pub fn through(p0: XyY, p1: XyY) -> Self {
        let (p0, p1) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };
        let m = (p1.y - p0.y) / (p1.x - p0.x);
        Self { m, b: p0.y - m * p0.x }
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        mlaf(self.b, self.m, x)
    }

    /// Crossing point of two lines, `None` when parallel.
    pub fn intersect(&self, other: Line, yb: f64) -> Option<XyY> {
        let dm = self.m - other.m;
        if dm == 0. {
            return None;
        }
        let x = (other.b - self.b) / dm;
        Some(XyY::new(x, other.eval(x), yb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_passes_through_points() {
        let p = [
            XyY::new(0.1, 0.2, 1.),
            XyY::new(0.4, 0.7, 1.),
            XyY::new(0.9, 0.1, 1.),
        ];
        let poly = QuadraticPolynomial::interpolate(p[0], p[1], p[2]);
        for point in p {
            assert!((poly.eval(point.x) - point.y).abs() < 1e-12);
        }
    }

    #[test]
    fn interpolation_of_known_parabola() {
        let f = |x: f64| 2. * x * x - 3. * x + 0.5;
        let poly = QuadraticPolynomial::interpolate(
            XyY::new(-1., f(-1.), 0.),
            XyY::new(0.5, f(0.5), 0.),
            XyY::new(2., f(2.), 0.),
        );
        assert!((poly.a - 2.).abs() < 1e-12);
        assert!((poly.b + 3.).abs() < 1e-12);
        assert!((poly.c - 0.5).abs() < 1e-12);
    }

    #[test]
    fn line_is_order_independent() {
        let a = XyY::new(0.747, 0.253, 1.);
        let b = XyY::new(0.3, 0.4, 1.);
        let l0 = Line::through(a, b);
        let l1 = Line::through(b, a);
        assert_eq!(l0, l1);
        assert!((l0.eval(0.747) - 0.253).abs() < 1e-12);
        assert!((l0.eval(0.3) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn line_crossing() {
        let l0 = Line::new(1., 0.);
        let l1 = Line::new(-1., 1.);
        let p = l0.intersect(l1, 0.25).unwrap();
        assert!((p.x - 0.5).abs() < 1e-12);
        assert!((p.y - 0.5).abs() < 1e-12);
        assert_eq!(p.yb, 0.25);
        assert!(l0.intersect(Line::new(1., 3.), 0.).is_none());
    }

    #[test]
    fn curve_line_roots() {
        // y = x² meets y = 1 at x = ±1; with a > 0 the +√D root is x = 1.
        let poly = QuadraticPolynomial::new(1., 0., 0.);
        let p = poly.intersect_line(Line::new(0., 1.), 0.5).unwrap();
        assert!((p.x - 1.).abs() < 1e-12);
        assert!((p.y - 1.).abs() < 1e-12);
        // With a < 0 the same root expression picks the smaller x.
        let poly = QuadraticPolynomial::new(-1., 0., 0.);
        let p = poly.intersect_line(Line::new(0., -1.), 0.5).unwrap();
        assert!((p.x + 1.).abs() < 1e-12);
    }

    #[test]
    fn missing_intersection_is_reported() {
        let poly = QuadraticPolynomial::new(1., 0., 0.);
        let err = poly.intersect_line(Line::new(0., -1.), 0.5).unwrap_err();
        assert_eq!(err, SimulationError::NoCurveIntersection { discriminant: -4. });
    }
}
