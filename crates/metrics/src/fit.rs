//! Fitted model parameters.
//!
//! A fit log is free-form text in which the fitted parameters appear as
//! `name = value` lines. Parameters `a`, `b` and `c` map to the model's
//! `c`, `q` and `z` respectively.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use symbpe_core::{BpeError, Result};

/// Zipf-Mandelbrot parameters: `f(r) = c^z / (q + r)^z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitParams {
    pub c: f64,
    pub q: f64,
    pub z: f64,
}

impl FitParams {
    pub fn new(c: f64, q: f64, z: f64) -> Self {
        Self { c, q, z }
    }

    /// Model frequency at 1-based rank `rank`.
    #[inline]
    pub fn frequency(&self, rank: usize) -> f64 {
        self.c.powf(self.z) / (self.q + rank as f64).powf(self.z)
    }

    /// Read parameters from a fit log file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BpeError::io(path, e))?;
        Self::parse(&content)
    }

    /// Parse parameters from fit log text. Later assignments win.
    pub fn parse(content: &str) -> Result<Self> {
        static ASSIGNMENT: OnceLock<Regex> = OnceLock::new();
        let re = ASSIGNMENT.get_or_init(|| {
            Regex::new(r"(?m)^\s*(\w+)\s*=\s*([+-]?\d*\.?\d+(?:[eE][+-]?\d+)?)")
                .expect("Invalid fit assignment pattern")
        });

        let (mut c, mut q, mut z) = (None, None, None);

        for caps in re.captures_iter(content) {
            let slot = match &caps[1] {
                "a" => &mut c,
                "b" => &mut q,
                "c" => &mut z,
                _ => continue,
            };
            let value = caps[2].parse::<f64>().map_err(|e| BpeError::Parse {
                line: line_of(content, caps.get(0).map_or(0, |m| m.start())),
                message: format!("invalid number '{}': {}", &caps[2], e),
            })?;
            *slot = Some(value);
        }

        match (c, q, z) {
            (Some(c), Some(q), Some(z)) => Ok(Self { c, q, z }),
            _ => Err(BpeError::Parse {
                line: 0,
                message: "fit log must define a, b and c".to_string(),
            }),
        }
    }
}

/// 1-based line number of byte offset `pos`.
fn line_of(content: &str, pos: usize) -> usize {
    content[..pos].matches('\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let log = "Final set of parameters\n\
                   =======================\n\
                   a               = 2.5\n\
                   b  = -0.75\n\
                   c = 1.2e+00\n\
                   dummy = 9\n";
        let params = FitParams::parse(log).unwrap();

        assert_eq!(params, FitParams::new(2.5, -0.75, 1.2));
    }

    #[test]
    fn test_later_assignment_wins() {
        let params = FitParams::parse("a = 1\nb = 2\nc = 3\na = 4\n").unwrap();
        assert_eq!(params.c, 4.0);
    }

    #[test]
    fn test_missing_parameter() {
        let err = FitParams::parse("a = 1\nb = 2\n").unwrap_err();
        assert!(matches!(err, BpeError::Parse { .. }));
    }

    #[test]
    fn test_frequency() {
        let params = FitParams::new(2.0, 0.0, 1.0);
        assert_eq!(params.frequency(1), 2.0);
        assert_eq!(params.frequency(4), 0.5);
    }
}
