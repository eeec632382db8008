//! Reading [`Complex`] values in the stream form, `<re> <im> <suffix>`.
//!
//! Each number is the longest prefix of the input that reads as a float (sign, digits, '.',
//! exponent, or `inf`/`nan`), after skipping leading whitespace. Whatever follows a number
//! is left for the next read, so `3 4 i`, `3 4i` and the [`Display`](std::fmt::Display)
//! output `3+4i` all read as `3 + 4i`.
//!
//! The suffix is the next whitespace delimited token. It is conventionally `i`, but it is
//! never interpreted: any token is accepted and discarded.
use std::io::{self, BufRead};
use std::str::FromStr;

use crate::Complex;
use crate::error::{Part, ReadError};

/// Reads consecutive [`Complex`] values out of a buffered byte stream.
///
/// ```
/// use complex::ComplexReader;
///
/// let mut reader = ComplexReader::new("3 4 i\n-1+0.5i".as_bytes());
///
/// assert_eq!(reader.read_complex().unwrap().to_string(), "3+4i");
/// assert_eq!(reader.read_complex().unwrap().to_string(), "-1+0.5i");
/// assert!(reader.read_complex().is_err());
/// ```
#[derive(Debug)]
pub struct ComplexReader<R> {
    reader: R,
    token: Vec<u8>,
    /// Set once the stream returns an io error, which ends iteration.
    io_failed: bool,
}

/// Reads a single [`Complex`] from a buffered stream. Shorthand for building a
/// [`ComplexReader`] and calling [`ComplexReader::read_complex`] once.
///
/// Only the bytes up to the end of the suffix are consumed.
pub fn read_complex<R>(reader: R) -> Result<Complex, ReadError>
where
    R: BufRead,
{
    ComplexReader::new(reader).read_complex()
}

impl<R> ComplexReader<R>
where
    R: BufRead,
{
    /// Wraps a buffered stream.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            token: Vec::with_capacity(32),
            io_failed: false,
        }
    }

    /// Returns a reference to the underlying stream.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwraps the underlying stream. Any input after the last value read is left unconsumed.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads the next value: a real part, an imaginary part and a discarded suffix.
    ///
    /// If either number fails to parse, or the input ends early, the whole read fails.
    /// The bytes consumed up to the failure are not put back.
    pub fn read_complex(&mut self) -> Result<Complex, ReadError> {
        let result = self.read_parts();

        if let Err(ReadError::Io(_)) = result {
            self.io_failed = true;
        }

        result
    }

    fn read_parts(&mut self) -> Result<Complex, ReadError> {
        let re = self.read_float(Part::Real)?;
        let im = self.read_float(Part::Imaginary)?;

        self.read_suffix()?;
        check_suffix(&self.token);

        Ok(Complex::new(re, im))
    }

    fn read_float(&mut self, part: Part) -> Result<f64, ReadError> {
        self.token.clear();
        self.scan(false, |byte| byte.is_ascii_whitespace())?;

        let mut prefix = FloatPrefix::Start;
        let at_eof = self.scan(true, |byte| prefix.advance(byte))?;

        if self.token.is_empty() && at_eof {
            return Err(ReadError::MissingToken(part));
        }

        let value = parse_float(&self.token, part);
        if value.is_ok() {
            return value;
        }

        // a failed number takes the rest of its token with it, so the error shows all of it.
        self.scan(true, |byte| !byte.is_ascii_whitespace())?;

        match parse_float(&self.token, part) {
            Err(err) => Err(err),
            Ok(_) => value,
        }
    }

    fn read_suffix(&mut self) -> Result<(), ReadError> {
        self.token.clear();
        self.scan(false, |byte| byte.is_ascii_whitespace())?;
        self.scan(true, |byte| !byte.is_ascii_whitespace())?;

        if self.token.is_empty() {
            Err(ReadError::MissingToken(Part::Suffix))
        } else {
            Ok(())
        }
    }

    /// Consumes bytes while `accept` returns true, appending them to `self.token` if `keep`
    /// is set. The first rejected byte is left in the stream. Returns true if the scan
    /// stopped at EOF.
    fn scan<F>(&mut self, keep: bool, mut accept: F) -> Result<bool, ReadError>
    where
        F: FnMut(u8) -> bool,
    {
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(ReadError::Io(err)),
            };

            if buf.is_empty() {
                return Ok(true);
            }

            let mut used = 0;
            let mut rejected = false;

            for &byte in buf {
                if !accept(byte) {
                    rejected = true;
                    break;
                }

                if keep {
                    self.token.push(byte);
                }

                used += 1;
            }

            self.reader.consume(used);

            if rejected {
                return Ok(false);
            }
        }
    }
}

impl<R> Iterator for ComplexReader<R>
where
    R: BufRead,
{
    type Item = Result<Complex, ReadError>;

    /// Yields values until the stream runs out. Trailing whitespace ends iteration cleanly,
    /// a truncated value yields an error. After an io error, iteration stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.io_failed {
            return None;
        }

        match self.read_complex() {
            Err(ReadError::MissingToken(Part::Real)) => None,
            result => Some(result),
        }
    }
}

impl FromStr for Complex {
    type Err = ReadError;

    /// Parses a string in the stream form (`"3 -4 i"`, `"3-4i"`). Only whitespace may
    /// follow the suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut reader = ComplexReader::new(s.as_bytes());
        let value = reader.read_complex()?;

        match String::from_utf8_lossy(reader.into_inner())
            .split_ascii_whitespace()
            .next()
        {
            Some(trailing) => Err(ReadError::TrailingInput(trailing.to_owned())),
            None => Ok(value),
        }
    }
}

/// Tracks how far a byte sequence has gotten through the float grammar, so a number can be
/// read without looking past its last byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FloatPrefix {
    Start,
    Sign,
    Int,
    /// A '.' with no integer digits before it.
    Dot,
    Frac,
    Exp,
    ExpSign,
    ExpDigits,
    /// Partway through `inf` or `nan` (case insensitive), with `matched` bytes so far.
    Word {
        word: &'static [u8],
        matched: usize,
    },
}

impl FloatPrefix {
    /// Steps to the next state if `byte` can extend the number, returning false otherwise.
    fn advance(&mut self, byte: u8) -> bool {
        let next = match (*self, byte) {
            (Self::Start, b'+' | b'-') => Self::Sign,
            (Self::Start | Self::Sign, b'i' | b'I') => Self::Word {
                word: b"inf",
                matched: 1,
            },
            (Self::Start | Self::Sign, b'n' | b'N') => Self::Word {
                word: b"nan",
                matched: 1,
            },
            (Self::Start | Self::Sign | Self::Int, b'0'..=b'9') => Self::Int,
            (Self::Start | Self::Sign, b'.') => Self::Dot,
            (Self::Int, b'.') => Self::Frac,
            (Self::Dot | Self::Frac, b'0'..=b'9') => Self::Frac,
            (Self::Int | Self::Frac, b'e' | b'E') => Self::Exp,
            (Self::Exp, b'+' | b'-') => Self::ExpSign,
            (Self::Exp | Self::ExpSign | Self::ExpDigits, b'0'..=b'9') => Self::ExpDigits,
            (Self::Word { word, matched }, _)
                if matched < word.len() && byte.to_ascii_lowercase() == word[matched] =>
            {
                Self::Word {
                    word,
                    matched: matched + 1,
                }
            }
            _ => return false,
        };

        *self = next;
        true
    }
}

fn parse_float(token: &[u8], part: Part) -> Result<f64, ReadError> {
    let token = std::str::from_utf8(token).map_err(|_| ReadError::InvalidUtf8(part))?;

    token.parse::<f64>().map_err(|source| ReadError::Float {
        part,
        token: token.to_owned(),
        source,
    })
}

fn check_suffix(suffix: &[u8]) {
    if suffix != b"i" {
        tracing::debug!(
            message = "discarding unexpected complex number suffix",
            suffix = %String::from_utf8_lossy(suffix)
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Read};

    use super::*;

    struct BrokenStream;

    impl Read for BrokenStream {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
        }
    }

    #[test]
    fn test_read_basic() {
        let c = read_complex("3 4 i".as_bytes()).unwrap();
        assert_eq!(c, Complex::new(3.0, 4.0));

        let c = read_complex("  -2.5\n\t1e3   i  ".as_bytes()).unwrap();
        assert_eq!(c, Complex::new(-2.5, 1000.0));
    }

    #[test]
    fn test_read_glued_forms() {
        assert_eq!("3+4i".parse::<Complex>().unwrap(), Complex::new(3.0, 4.0));
        assert_eq!("3-4i".parse::<Complex>().unwrap(), Complex::new(3.0, -4.0));
        assert_eq!(read_complex("3 4i".as_bytes()).unwrap(), Complex::new(3.0, 4.0));
        assert_eq!(
            read_complex("-.5e1+2.25E-1i".as_bytes()).unwrap(),
            Complex::new(-5.0, 0.225)
        );

        // the suffix is still required
        let err = "3+4".parse::<Complex>().unwrap_err();
        assert!(matches!(err, ReadError::MissingToken(Part::Suffix)));
    }

    #[test]
    fn test_display_reads_back() {
        let values = [
            Complex::new(3.0, 4.0),
            Complex::new(3.0, -4.0),
            Complex::new(3.0, 0.0),
            Complex::new(-0.125, 1e-7),
            Complex::new(1e20, -123.456),
            Complex::new(f64::INFINITY, f64::NEG_INFINITY),
        ];

        for c in values {
            assert_eq!(c.to_string().parse::<Complex>().unwrap(), c);
        }

        let nan = Complex::new(1.0, f64::NAN).to_string().parse::<Complex>().unwrap();
        assert_eq!(nan.re(), 1.0);
        assert!(nan.im().is_nan());
    }

    #[test]
    fn test_suffix_is_not_validated() {
        let c = read_complex("1 2 j".as_bytes()).unwrap();
        assert_eq!(c, Complex::new(1.0, 2.0));

        let c: Complex = "1 2 whatever".parse().unwrap();
        assert_eq!(c, Complex::new(1.0, 2.0));
    }

    #[test]
    fn test_read_failures() {
        let err = read_complex("x 2 i".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadError::Float { part: Part::Real, .. }));

        let err = read_complex("1 two i".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ReadError::Float { part: Part::Imaginary, ref token, .. } if token == "two"
        ));

        // an exponent with no digits is not a number
        let err = read_complex("1e i 2 i".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ReadError::Float { part: Part::Real, ref token, .. } if token == "1e"
        ));

        let err = read_complex("1 2".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadError::MissingToken(Part::Suffix)));

        let err = read_complex("   ".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadError::MissingToken(Part::Real)));

        let err = read_complex(&b"1 \xff\xfe i"[..]).unwrap_err();
        assert!(matches!(err, ReadError::InvalidUtf8(Part::Imaginary)));
    }

    #[test]
    fn test_from_str_trailing() {
        let err = "1 2 i 3".parse::<Complex>().unwrap_err();
        assert!(matches!(err, ReadError::TrailingInput(ref s) if s == "3"));

        assert_eq!(
            "\n1 2 i\n".parse::<Complex>().unwrap(),
            Complex::new(1.0, 2.0)
        );
    }

    #[test]
    fn test_special_values() {
        let c: Complex = "inf NaN i".parse().unwrap();
        assert_eq!(c.re(), f64::INFINITY);
        assert!(c.im().is_nan());

        let c: Complex = "-INF+nani".parse().unwrap();
        assert_eq!(c.re(), f64::NEG_INFINITY);
        assert!(c.im().is_nan());
    }

    #[test]
    fn test_tokens_split_across_buffer_boundaries() {
        // a 1 byte buffer forces every token to straddle 'fill_buf' calls
        let input = "12.5 -0.125 i 7+8i";
        let mut reader = ComplexReader::new(BufReader::with_capacity(1, input.as_bytes()));

        assert_eq!(reader.read_complex().unwrap(), Complex::new(12.5, -0.125));
        assert_eq!(reader.read_complex().unwrap(), Complex::new(7.0, 8.0));
    }

    #[test]
    fn test_iterator() {
        let reader = ComplexReader::new("1 1 i 2+2i\n\n".as_bytes());
        let values = reader.collect::<Result<Vec<_>, _>>().unwrap();

        assert_eq!(values, vec![Complex::new(1.0, 1.0), Complex::new(2.0, 2.0)]);

        let mut truncated = ComplexReader::new("1 1 i 2".as_bytes());
        assert!(truncated.next().unwrap().is_ok());
        assert!(matches!(
            truncated.next(),
            Some(Err(ReadError::MissingToken(Part::Imaginary)))
        ));
    }

    #[test]
    fn test_iterator_stops_after_io_error() {
        let mut reader = ComplexReader::new(BufReader::new(BrokenStream));

        assert!(matches!(reader.next(), Some(Err(ReadError::Io(_)))));
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_leaves_rest_of_stream() {
        let mut reader = ComplexReader::new("1 2 i rest".as_bytes());
        reader.read_complex().unwrap();

        let mut rest = String::new();
        reader.into_inner().read_line(&mut rest).unwrap();
        assert_eq!(rest, " rest");
    }
}
