use std::fmt;

use crate::transform::Transform;

/// Number of fractional digits of every component in a style string.
pub const STYLE_DIGITS: usize = 16;

// A double has at most 1074 fractional digits, so this prints it exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Formats `value` in fixed-point notation with exactly `digits` fractional digits.
///
/// Rounding is done on the exact decimal expansion of the double, with ties
/// going away from zero. Negative zero prints without a sign, magnitudes of
/// `1e21` and above fall back to exponential notation (`1e+21`), and non-finite
/// values print as `NaN`, `Infinity` or `-Infinity`. This matches the number
/// formatting that CSS and canvas consumers of style strings expect.
///
/// # Example
///
/// ```
/// use planar_transform::style::format_fixed;
///
/// assert_eq!(format_fixed(1.0, 4), "1.0000");
/// assert_eq!(format_fixed(0.25, 1), "0.3");
/// assert_eq!(format_fixed(-0.0, 2), "0.00");
/// ```
pub fn format_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude.is_infinite() {
        return format!("{sign}Infinity");
    }
    if magnitude >= 1e21 {
        return format!("{sign}{}", format!("{:e}", magnitude).replacen('e', "e+", 1));
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();
    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        increment_decimal(&mut kept);
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(sign.len() + kept.len() + 1);
    out.push_str(sign);
    out.extend(kept[..int_len].iter().map(|&b| b as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|&b| b as char));
    }
    out
}

// adds one unit in the last place of an ascii digit string
fn increment_decimal(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

impl Transform {
    /// Serializes as `matrix(ax,ay,bx,by,tx,ty)` for styling systems.
    ///
    /// Each component is printed by [`format_fixed`] with [`STYLE_DIGITS`]
    /// fractional digits.
    ///
    /// # Example
    ///
    /// ```
    /// use planar_transform::Transform;
    ///
    /// let t = Transform::translation_matrix(&(10.0, -2.5))?;
    /// assert_eq!(
    ///     t.to_style_string(),
    ///     "matrix(1.0000000000000000,0.0000000000000000,0.0000000000000000,\
    ///      1.0000000000000000,10.0000000000000000,-2.5000000000000000)"
    /// );
    /// # Ok::<(), planar_transform::TransformError>(())
    /// ```
    pub fn to_style_string(&self) -> String {
        let parts: Vec<String> = self
            .components()
            .iter()
            .map(|v| format_fixed(*v, STYLE_DIGITS))
            .collect();
        format!("matrix({})", parts.join(","))
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_style_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::TransformError, params::Angle};
    use planar_matrix::MatrixAlgebra;

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(1.0, 16), "1.0000000000000000");
        assert_eq!(format_fixed(0.1, 16), "0.1000000000000000");
        assert_eq!(format_fixed(-2.5, 3), "-2.500");
        assert_eq!(format_fixed(123.456, 0), "123");
        assert_eq!(format_fixed(0.0, 0), "0");
    }

    #[test]
    fn test_format_fixed_rounding() {
        // exact ties round away from zero
        assert_eq!(format_fixed(0.25, 1), "0.3");
        assert_eq!(format_fixed(-0.25, 1), "-0.3");
        assert_eq!(format_fixed(2.5, 0), "3");
        // 0.35 is stored slightly below the tie
        assert_eq!(format_fixed(0.35, 1), "0.3");
        assert_eq!(format_fixed(9.99, 1), "10.0");
        assert_eq!(format_fixed(6.123233995736766e-17, 16), "0.0000000000000001");
    }

    #[test]
    fn test_format_fixed_signs_and_special_values() {
        assert_eq!(format_fixed(-0.0, 16), "0.0000000000000000");
        assert_eq!(format_fixed(-1e-20, 4), "-0.0000");
        assert_eq!(format_fixed(1e21, 2), "1e+21");
        assert_eq!(format_fixed(-1.5e22, 2), "-1.5e+22");
        assert_eq!(format_fixed(f64::NAN, 2), "NaN");
        assert_eq!(format_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }

    #[test]
    fn test_identity_style_string() {
        assert_eq!(
            Transform::identity_matrix().to_string(),
            "matrix(1.0000000000000000,0.0000000000000000,0.0000000000000000,\
             1.0000000000000000,0.0000000000000000,0.0000000000000000)"
        );
    }

    #[test]
    fn test_scale_inverse_style_string() -> Result<(), TransformError> {
        let mut t = Transform::scale_matrix(2.0)?;
        let inv = t.invert()?.ok_or(TransformError::Singular)?;
        t.compose(&inv)?;
        assert!(t.is_identity_matrix());
        assert_eq!(
            t.to_style_string(),
            "matrix(1.0000000000000000,0.0000000000000000,0.0000000000000000,1.0000000000000000,0.0000000000000000,0.0000000000000000)"
        );
        Ok(())
    }

    #[test]
    fn test_rotation_style_string() -> Result<(), TransformError> {
        let t = Transform::rotation_matrix(Angle::Radians(std::f64::consts::FRAC_PI_2))?;
        assert_eq!(
            t.to_style_string(),
            "matrix(0.0000000000000001,1.0000000000000000,-1.0000000000000000,\
             0.0000000000000001,0.0000000000000000,0.0000000000000000)"
        );
        Ok(())
    }
}
