use nom::character::complete::{char, one_of, space0, u32 as decimal};
use nom::combinator::{all_consuming, opt};
use nom::sequence::{delimited, preceded, separated_pair};
use nom::IResult;

use crate::error::ConfigError;

/// A pixel size with an optional frame rate, as written on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
    pub frame_rate: Option<u32>,
}

/// `WIDTHxHEIGHT` optionally followed by `@FPS`, e.g. `1920x1080@60`.
pub fn resolution(i: &str) -> IResult<&str, Resolution> {
    let (i, (width, height)) = separated_pair(decimal, one_of("xX"), decimal)(i)?;
    let (i, frame_rate) = opt(preceded(char('@'), decimal))(i)?;
    Ok((i, Resolution { width, height, frame_rate }))
}

pub fn parse_resolution(text: &str) -> Result<Resolution, ConfigError> {
    let (_, parsed) = all_consuming(delimited(space0, resolution, space0))(text)
        .map_err(|_| ConfigError::InvalidResolution(text.to_string()))?;
    if parsed.width == 0 || parsed.height == 0 || parsed.frame_rate == Some(0) {
        return Err(ConfigError::ZeroDimension);
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_only() {
        assert_eq!(
            parse_resolution("1920x1080"),
            Ok(Resolution { width: 1920, height: 1080, frame_rate: None })
        );
    }

    #[test]
    fn size_and_rate() {
        assert_eq!(
            parse_resolution(" 854X480@30 "),
            Ok(Resolution { width: 854, height: 480, frame_rate: Some(30) })
        );
    }

    #[test]
    fn leaves_trailing_input() {
        let (rest, r) = resolution("640x360@24fps").unwrap();
        assert_eq!(rest, "fps");
        assert_eq!(r.frame_rate, Some(24));
    }

    #[test]
    fn rejects_garbage() {
        for text in ["", "1920", "1920x", "x1080", "1920*1080", "1920x1080@", "1920x1080fps", "-1x5"] {
            assert_eq!(parse_resolution(text), Err(ConfigError::InvalidResolution(text.to_string())), "{}", text);
        }
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(parse_resolution("0x1080"), Err(ConfigError::ZeroDimension));
        assert_eq!(parse_resolution("10x10@0"), Err(ConfigError::ZeroDimension));
    }
}
