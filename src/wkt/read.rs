//! WKT reading operations.

use std::fmt;

use geo::{Coord, LineString, Point};

use crate::geom::Geometry;
use crate::types::GeomType;

/// Why a WKT string failed to parse.
///
/// Parse failures are fatal to the validation pipeline: nothing downstream
/// can run without a parsed tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The type keyword is not POINT, LINESTRING, or POLYGON.
    UnknownType { keyword: String },
    /// Unbalanced parentheses, missing separators, bad numeric tokens, or
    /// trailing garbage after the closing parenthesis.
    MalformedSyntax { detail: String },
    /// No coordinates at all: blank input, `EMPTY`, or `()`.
    EmptyCoordinateList,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownType { keyword } => {
                write!(f, "unknown geometry type keyword {keyword:?}")
            }
            ParseError::MalformedSyntax { detail } => write!(f, "malformed WKT: {detail}"),
            ParseError::EmptyCoordinateList => write!(f, "geometry has no coordinates"),
        }
    }
}

/// Parse a WKT string of the form `TYPE (coordinate-list)` into a [`Geometry`].
///
/// Only syntactic shape is checked here. Semantic rules (vertex minimums,
/// ring closure, coordinate bounds) belong to the validation stages, so a
/// one-point LINESTRING or an unclosed ring parses without error.
pub fn parse_wkt(text: &str) -> Result<Geometry, ParseError> {
    let mut parser = Parser::new(text);

    parser.skip_ws();
    if parser.at_end() {
        return Err(ParseError::EmptyCoordinateList);
    }

    let keyword = parser.keyword();
    let ty = match GeomType::from_wkt_keyword(&keyword) {
        Some(ty) => ty,
        None => return Err(ParseError::UnknownType { keyword }),
    };

    parser.skip_ws();
    if parser.eat_keyword("EMPTY") {
        return Err(ParseError::EmptyCoordinateList);
    }

    let geom = match ty {
        GeomType::Point => Geometry::Point(Point::from(parser.point_body()?)),
        GeomType::LineString => Geometry::LineString(LineString::from(parser.coord_list()?)),
        GeomType::Polygon => Geometry::Polygon(parser.ring_list()?),
    };

    parser.skip_ws();
    if !parser.at_end() {
        return Err(ParseError::MalformedSyntax {
            detail: format!("trailing input after geometry: {:?}", parser.rest()),
        });
    }
    Ok(geom)
}

/// Minimal cursor over the input bytes. WKT is ASCII; any non-ASCII byte
/// simply fails the token it appears in.
struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn rest(&self) -> &str {
        &self.text[self.pos..]
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Consume a run of ASCII letters.
    fn keyword(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        self.text[start..self.pos].to_string()
    }

    /// Consume `keyword` (case-insensitive) if it is next; report whether it was.
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let saved = self.pos;
        if self.keyword().eq_ignore_ascii_case(keyword) {
            true
        } else {
            self.pos = saved;
            false
        }
    }

    fn expect(&mut self, expected: u8) -> Result<(), ParseError> {
        self.skip_ws();
        match self.peek() {
            Some(b) if b == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(b) => Err(ParseError::MalformedSyntax {
                detail: format!("expected '{}', found '{}'", expected as char, b as char),
            }),
            None => Err(ParseError::MalformedSyntax {
                detail: format!("expected '{}', found end of input", expected as char),
            }),
        }
    }

    /// Consume one numeric token as a finite f64.
    fn number(&mut self) -> Result<f64, ParseError> {
        self.skip_ws();
        let start = self.pos;
        while matches!(self.peek(),
            Some(b) if b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.' | b'e' | b'E'))
        {
            self.pos += 1;
        }
        let token = &self.text[start..self.pos];
        if token.is_empty() {
            return Err(ParseError::MalformedSyntax {
                detail: match self.peek() {
                    Some(b) => format!("expected a number, found '{}'", b as char),
                    None => "expected a number, found end of input".to_string(),
                },
            });
        }
        let value: f64 = token.parse().map_err(|_| ParseError::MalformedSyntax {
            detail: format!("invalid number {token:?}"),
        })?;
        // "1e999" parses to infinity; coordinates must stay finite
        if !value.is_finite() {
            return Err(ParseError::MalformedSyntax {
                detail: format!("non-finite coordinate {token:?}"),
            });
        }
        Ok(value)
    }

    /// `x y` pair.
    fn coord(&mut self) -> Result<Coord<f64>, ParseError> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(Coord { x, y })
    }

    /// `( x y )` — exactly one coordinate.
    fn point_body(&mut self) -> Result<Coord<f64>, ParseError> {
        self.expect(b'(')?;
        self.skip_ws();
        if self.peek() == Some(b')') {
            return Err(ParseError::EmptyCoordinateList);
        }
        let coord = self.coord()?;
        self.expect(b')')?;
        Ok(coord)
    }

    /// `( x y, x y, ... )` — one or more comma-separated coordinates.
    fn coord_list(&mut self) -> Result<Vec<Coord<f64>>, ParseError> {
        self.expect(b'(')?;
        self.skip_ws();
        if self.peek() == Some(b')') {
            return Err(ParseError::EmptyCoordinateList);
        }
        let mut coords = vec![self.coord()?];
        loop {
            self.skip_ws();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    coords.push(self.coord()?);
                }
                Some(b')') => {
                    self.pos += 1;
                    return Ok(coords);
                }
                Some(b) => {
                    return Err(ParseError::MalformedSyntax {
                        detail: format!("expected ',' or ')', found '{}'", b as char),
                    });
                }
                None => {
                    return Err(ParseError::MalformedSyntax {
                        detail: "expected ',' or ')', found end of input".to_string(),
                    });
                }
            }
        }
    }

    /// `( ring, ring, ... )` — one or more nested coordinate lists.
    fn ring_list(&mut self) -> Result<Vec<LineString<f64>>, ParseError> {
        self.expect(b'(')?;
        self.skip_ws();
        if self.peek() == Some(b')') {
            return Err(ParseError::EmptyCoordinateList);
        }
        let mut rings = vec![LineString::from(self.coord_list()?)];
        loop {
            self.skip_ws();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    rings.push(LineString::from(self.coord_list()?));
                }
                Some(b')') => {
                    self.pos += 1;
                    return Ok(rings);
                }
                Some(b) => {
                    return Err(ParseError::MalformedSyntax {
                        detail: format!("expected ',' or ')', found '{}'", b as char),
                    });
                }
                None => {
                    return Err(ParseError::MalformedSyntax {
                        detail: "expected ',' or ')', found end of input".to_string(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ParseError, parse_wkt};
    use crate::geom::Geometry;
    use geo::{Coord, LineString, Point};

    #[test]
    fn parses_point() {
        assert_eq!(parse_wkt("POINT (30 10)"), Ok(Geometry::Point(Point::new(30.0, 10.0))));
    }

    #[test]
    fn parses_negative_and_scientific_coordinates() {
        assert_eq!(
            parse_wkt("POINT (-1.5e2 +0.25)"),
            Ok(Geometry::Point(Point::new(-150.0, 0.25)))
        );
    }

    #[test]
    fn keyword_is_case_insensitive() {
        assert_eq!(parse_wkt("point (1 2)"), Ok(Geometry::Point(Point::new(1.0, 2.0))));
        assert_eq!(parse_wkt("LineString (0 0, 1 1)"), parse_wkt("LINESTRING (0 0, 1 1)"));
    }

    #[test]
    fn tolerates_irregular_whitespace() {
        assert_eq!(
            parse_wkt("  LINESTRING(0 0 ,  1   1,2 2)  "),
            Ok(Geometry::LineString(LineString::from(vec![
                (0.0, 0.0),
                (1.0, 1.0),
                (2.0, 2.0)
            ])))
        );
    }

    #[test]
    fn parses_polygon_with_hole() {
        let geom = parse_wkt(
            "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 4 2, 4 4, 2 4, 2 2))",
        )
        .unwrap();
        match geom {
            Geometry::Polygon(rings) => {
                assert_eq!(rings.len(), 2);
                assert_eq!(rings[0].0.len(), 5);
                assert_eq!(rings[1].0[0], Coord { x: 2.0, y: 2.0 });
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn semantic_defects_still_parse() {
        // too few points and unclosed rings are validation findings, not parse errors
        assert!(parse_wkt("LINESTRING (1 1)").is_ok());
        assert!(parse_wkt("POLYGON ((0 0, 1 0, 1 1, 0 1))").is_ok());
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        assert_eq!(
            parse_wkt("CIRCLE (0 0)"),
            Err(ParseError::UnknownType { keyword: "CIRCLE".to_string() })
        );
    }

    #[test]
    fn leading_parenthesis_is_an_unknown_type() {
        assert_eq!(
            parse_wkt("(0 0)"),
            Err(ParseError::UnknownType { keyword: String::new() })
        );
    }

    #[test]
    fn blank_and_empty_inputs_have_no_coordinates() {
        assert_eq!(parse_wkt(""), Err(ParseError::EmptyCoordinateList));
        assert_eq!(parse_wkt("   "), Err(ParseError::EmptyCoordinateList));
        assert_eq!(parse_wkt("POINT EMPTY"), Err(ParseError::EmptyCoordinateList));
        assert_eq!(parse_wkt("LINESTRING ()"), Err(ParseError::EmptyCoordinateList));
        assert_eq!(parse_wkt("POLYGON ()"), Err(ParseError::EmptyCoordinateList));
        assert_eq!(parse_wkt("POLYGON (())"), Err(ParseError::EmptyCoordinateList));
    }

    #[test]
    fn unbalanced_parentheses_are_malformed() {
        assert!(matches!(
            parse_wkt("LINESTRING (0 0, 1 1"),
            Err(ParseError::MalformedSyntax { .. })
        ));
        assert!(matches!(
            parse_wkt("POINT (30 10"),
            Err(ParseError::MalformedSyntax { .. })
        ));
        assert!(matches!(
            parse_wkt("POLYGON ((0 0, 1 0, 1 1, 0 0)"),
            Err(ParseError::MalformedSyntax { .. })
        ));
    }

    #[test]
    fn trailing_garbage_is_malformed() {
        assert!(matches!(
            parse_wkt("POINT (30 10) extra"),
            Err(ParseError::MalformedSyntax { .. })
        ));
        assert!(matches!(
            parse_wkt("POINT (30 10))"),
            Err(ParseError::MalformedSyntax { .. })
        ));
    }

    #[test]
    fn missing_separators_are_malformed() {
        // a point body holds exactly one coordinate
        assert!(matches!(
            parse_wkt("POINT (30 10, 20 20)"),
            Err(ParseError::MalformedSyntax { .. })
        ));
        assert!(matches!(
            parse_wkt("LINESTRING (0 0 1 1 2 2)"),
            Err(ParseError::MalformedSyntax { .. })
        ));
    }

    #[test]
    fn non_numeric_and_non_finite_tokens_are_malformed() {
        assert!(matches!(
            parse_wkt("POINT (abc 10)"),
            Err(ParseError::MalformedSyntax { .. })
        ));
        assert!(matches!(
            parse_wkt("POINT (1.2.3 10)"),
            Err(ParseError::MalformedSyntax { .. })
        ));
        assert!(matches!(
            parse_wkt("POINT (NaN 10)"),
            Err(ParseError::MalformedSyntax { .. })
        ));
        assert!(matches!(
            parse_wkt("POINT (1e999 10)"),
            Err(ParseError::MalformedSyntax { .. })
        ));
    }
}
