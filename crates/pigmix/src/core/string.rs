use crate::error::ColorFormatError;
use crate::Float;

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates.
pub(crate) fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.trim();
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(1 + factor * index..1 + factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

/// Format the 24-bit color in hashed hexadecimal format.
pub(crate) fn format_hashed(
    bytes: &[u8; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [r, g, b] = *bytes;
    f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
}

// --------------------------------------------------------------------------------------------------------------------

const PIGMENT_PREFIX: &str = "pigment";

/// Parse a pigment color in functional notation.
///
/// The notation is `pigment(` followed by three or four space-separated
/// floating point numbers in unit range and `)`. The numbers are the red,
/// yellow, blue, and optional black channel, in that order. A missing black
/// channel is zero.
pub(crate) fn parse_pigment(s: &str) -> Result<[Float; 4], ColorFormatError> {
    let s = s.trim();
    let body = s
        .get(..PIGMENT_PREFIX.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(PIGMENT_PREFIX))
        .and_then(|_| s.get(PIGMENT_PREFIX.len()..))
        .ok_or(ColorFormatError::UnknownFormat)?
        .trim_start();

    let body = body
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)?;
    let body = body
        .strip_suffix(')')
        .ok_or(ColorFormatError::NoClosingParenthesis)?;

    fn parse_coordinate(s: Option<&str>) -> Result<Float, ColorFormatError> {
        let t = s.ok_or(ColorFormatError::MissingCoordinate)?;
        let n = t
            .parse::<Float>()
            .map_err(|_| ColorFormatError::MalformedFloat)?;
        if (0.0..=1.0).contains(&n) {
            Ok(n)
        } else {
            Err(ColorFormatError::OutOfRangeCoordinate)
        }
    }

    let mut iter = body.split_whitespace();
    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    let c4 = match iter.next() {
        None => 0.0,
        some => parse_coordinate(some)?,
    };
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok([c1, c2, c3, c4])
}

/// Format the pigment coordinates in functional notation.
///
/// Without an explicit precision, coordinates are rounded to five digits after
/// the decimal, with trailing zeros dropped.
pub(crate) fn format_pigment(
    coordinates: &[Float; 4],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str(PIGMENT_PREFIX)?;
    f.write_str("(")?;

    let factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    for (index, coordinate) in coordinates.iter().enumerate() {
        let c = (coordinate * factor).round() / factor;
        if c == c.trunc() {
            f.write_fmt(format_args!("{:.0}", c))?;
        } else {
            f.write_fmt(format_args!("{}", c))?;
        }

        if index < 3 {
            f.write_str(" ")?;
        }
    }

    f.write_str(")")
}

#[cfg(test)]
mod test {
    use super::{parse_hashed, parse_pigment, ColorFormatError};

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("  #FfA000 ")?, [0xff_u8, 0xa0, 0x00]);
        assert_eq!(parse_hashed("fff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse_hashed("#ff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hashed("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#00000g"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_parse_pigment() -> Result<(), ColorFormatError> {
        assert_eq!(parse_pigment("pigment(1 0 0.5)")?, [1.0, 0.0, 0.5, 0.0]);
        assert_eq!(
            parse_pigment(" PIGMENT ( 0.25  0.5 0 1 ) ")?,
            [0.25, 0.5, 0.0, 1.0]
        );
        assert_eq!(
            parse_pigment("ryb(1 0 0)"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            parse_pigment("pig"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            parse_pigment("pigment 1 0 0)"),
            Err(ColorFormatError::NoOpeningParenthesis)
        );
        assert_eq!(
            parse_pigment("pigment(1 0 0"),
            Err(ColorFormatError::NoClosingParenthesis)
        );
        assert_eq!(
            parse_pigment("pigment(1 0)"),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            parse_pigment("pigment(1 0..1 0)"),
            Err(ColorFormatError::MalformedFloat)
        );
        assert_eq!(
            parse_pigment("pigment(1 2 0)"),
            Err(ColorFormatError::OutOfRangeCoordinate)
        );
        assert_eq!(
            parse_pigment("pigment(1 0 0 0 0)"),
            Err(ColorFormatError::TooManyCoordinates)
        );

        Ok(())
    }
}
