//! Packed integer codes for board cells.
//!
//! Three layouts are supported:
//! - `reference`: the 4D layout `(c << 6) + (l << 4) + (r << 2) + o`, two bits per axis.
//!   Only boards with 4 dimensions and side at most 4.
//! - `bits`: `max(1, ceil(log2(side)))` bits per axis, axis 0 in the most significant
//!   field. Coincides with `reference` for 4D boards of side 3 and 4.
//! - `flat`: the row-major index in base `side`, axis 0 most significant.

use crate::core::config::BoardConfig;
use crate::core::coord::Coord;
use crate::core::error::{LineError, Result};
use std::str::FromStr;

const REFERENCE_DIMENSIONS: usize = 4;
const REFERENCE_BITS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellEncoding {
    /// `Reference` when the board allows it, `BitPacked` otherwise
    #[default]
    Auto,
    Reference,
    BitPacked,
    Flat,
}

impl CellEncoding {
    /// Replaces `Auto` with the concrete layout used for `config`
    pub fn resolve(self, config: &BoardConfig) -> CellEncoding {
        match self {
            CellEncoding::Auto => {
                if config.dimensions() == REFERENCE_DIMENSIONS && config.side() <= 4 {
                    CellEncoding::Reference
                } else {
                    CellEncoding::BitPacked
                }
            }
            other => other,
        }
    }

    /// Fails if some cell of the board can't be represented without loss
    pub fn check(self, config: &BoardConfig) -> Result<()> {
        match self.resolve(config) {
            CellEncoding::Reference => {
                if config.dimensions() != REFERENCE_DIMENSIONS {
                    return Err(LineError::invalid_configuration(format!(
                        "the reference encoding needs 4 dimensions, got {}",
                        config.dimensions()
                    )));
                }
                if config.side() > 1 << REFERENCE_BITS {
                    return Err(LineError::invalid_configuration(format!(
                        "the reference encoding holds sides up to 4, got {}",
                        config.side()
                    )));
                }
                Ok(())
            }
            CellEncoding::BitPacked => {
                let total = bits_per_axis(config.side()) as usize * config.dimensions();
                if total > u64::BITS as usize {
                    return Err(LineError::invalid_configuration(format!(
                        "bit packing needs {} bits per cell, at most 64 are available",
                        total
                    )));
                }
                Ok(())
            }
            CellEncoding::Flat => {
                if (config.side() as u64)
                    .checked_pow(config.dimensions() as u32)
                    .is_none()
                {
                    return Err(LineError::invalid_configuration(format!(
                        "a board of side {} in {} dimensions has more cells than a u64 can index",
                        config.side(),
                        config.dimensions()
                    )));
                }
                Ok(())
            }
            CellEncoding::Auto => unreachable!("resolved above"),
        }
    }

    pub fn encode(self, config: &BoardConfig, coord: &Coord) -> Result<u64> {
        self.check(config)?;
        if !config.contains(coord) {
            return Err(LineError::invalid_cell(coord.to_string(), config));
        }

        let side = config.side() as u64;
        let code = match self.field_bits(config) {
            Some(bits) => coord
                .values()
                .iter()
                .fold(0u64, |code, &v| code.checked_shl(bits).unwrap_or(0) | v as u64),
            None => coord
                .values()
                .iter()
                .fold(0u64, |code, &v| code * side + v as u64),
        };

        Ok(code)
    }

    pub fn decode(self, config: &BoardConfig, code: u64) -> Result<Coord> {
        self.check(config)?;

        let mut rest = code;
        let mut values = vec![0usize; config.dimensions()];
        match self.field_bits(config) {
            Some(bits) => {
                let field = u64::MAX >> (u64::BITS - bits);
                for value in values.iter_mut().rev() {
                    *value = (rest & field) as usize;
                    rest = rest.checked_shr(bits).unwrap_or(0);
                }
            }
            None => {
                let side = config.side() as u64;
                for value in values.iter_mut().rev() {
                    *value = (rest % side) as usize;
                    rest /= side;
                }
            }
        }

        let coord = Coord::new(values);
        if rest != 0 || !config.contains(&coord) {
            return Err(LineError::invalid_cell(format!("code {}", code), config));
        }

        Ok(coord)
    }

    /// Largest code any cell of the board maps to
    pub fn max_code(self, config: &BoardConfig) -> Result<u64> {
        let corner = Coord::new(vec![config.side() - 1; config.dimensions()]);
        self.encode(config, &corner)
    }

    /// Width of each axis field for the bit layouts, `None` for `Flat`
    fn field_bits(self, config: &BoardConfig) -> Option<u32> {
        match self.resolve(config) {
            CellEncoding::Reference => Some(REFERENCE_BITS),
            CellEncoding::BitPacked => Some(bits_per_axis(config.side())),
            _ => None,
        }
    }
}

/// `max(1, ceil(log2(side)))`
fn bits_per_axis(side: usize) -> u32 {
    if side <= 2 {
        1
    } else {
        usize::BITS - (side - 1).leading_zeros()
    }
}

impl FromStr for CellEncoding {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(CellEncoding::Auto),
            "reference" => Ok(CellEncoding::Reference),
            "bits" => Ok(CellEncoding::BitPacked),
            "flat" => Ok(CellEncoding::Flat),
            _ => Err(LineError::invalid_configuration(format!(
                "unknown cell encoding '{}' (expected auto, reference, bits or flat)",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(values: &[usize]) -> Coord {
        Coord::new(values.to_vec())
    }

    #[test]
    fn reference_layout() {
        let config = BoardConfig::default();
        let enc = CellEncoding::Reference;
        assert_eq!(enc.encode(&config, &coord(&[1, 2, 3, 0])).unwrap(), 108);
        assert_eq!(enc.encode(&config, &coord(&[3, 3, 3, 3])).unwrap(), 255);
        assert_eq!(enc.decode(&config, 108).unwrap(), coord(&[1, 2, 3, 0]));
    }

    #[test]
    fn reference_rejects_other_boards() {
        let enc = CellEncoding::Reference;
        assert!(enc.check(&BoardConfig::new(4, 5).unwrap()).is_err());
        assert!(enc.check(&BoardConfig::new(3, 3).unwrap()).is_err());
        assert!(enc.check(&BoardConfig::new(4, 2).unwrap()).is_ok());
    }

    #[test]
    fn auto_picks_reference_for_4d() {
        assert_eq!(
            CellEncoding::Auto.resolve(&BoardConfig::default()),
            CellEncoding::Reference
        );
        assert_eq!(
            CellEncoding::Auto.resolve(&BoardConfig::new(4, 5).unwrap()),
            CellEncoding::BitPacked
        );
        assert_eq!(
            CellEncoding::Auto.resolve(&BoardConfig::new(2, 3).unwrap()),
            CellEncoding::BitPacked
        );
    }

    #[test]
    fn field_widths() {
        assert_eq!(bits_per_axis(1), 1);
        assert_eq!(bits_per_axis(2), 1);
        assert_eq!(bits_per_axis(3), 2);
        assert_eq!(bits_per_axis(4), 2);
        assert_eq!(bits_per_axis(5), 3);
        assert_eq!(bits_per_axis(8), 3);
        assert_eq!(bits_per_axis(9), 4);
    }

    #[test]
    fn bit_packed_matches_reference_on_4x4x4x4() {
        let config = BoardConfig::default();
        let c = coord(&[3, 0, 2, 1]);
        assert_eq!(
            CellEncoding::BitPacked.encode(&config, &c).unwrap(),
            CellEncoding::Reference.encode(&config, &c).unwrap()
        );
    }

    #[test]
    fn bit_packed_overflow() {
        // 3 bits per axis, 22 axes
        assert!(CellEncoding::BitPacked
            .check(&BoardConfig::new(22, 5).unwrap())
            .is_err());
        assert!(CellEncoding::BitPacked
            .check(&BoardConfig::new(21, 5).unwrap())
            .is_ok());
    }

    #[test]
    fn flat_layout() {
        let config = BoardConfig::new(3, 3).unwrap();
        let enc = CellEncoding::Flat;
        assert_eq!(enc.encode(&config, &coord(&[1, 0, 2])).unwrap(), 11);
        assert_eq!(enc.decode(&config, 26).unwrap(), coord(&[2, 2, 2]));
        assert_eq!(enc.max_code(&config).unwrap(), 26);
    }

    #[test]
    fn decode_rejects_codes_off_the_board() {
        let config = BoardConfig::new(2, 3).unwrap();
        // field value 3 on a side-3 board
        assert!(matches!(
            CellEncoding::BitPacked.decode(&config, 0b0011),
            Err(LineError::InvalidCell { ref cell, .. }) if cell == "code 3"
        ));
        // bits above the last field
        assert!(CellEncoding::BitPacked.decode(&config, 0b1_0000).is_err());
        assert!(CellEncoding::Flat.decode(&config, 9).is_err());
    }

    #[test]
    fn encode_rejects_cells_off_the_board() {
        let config = BoardConfig::default();
        assert!(matches!(
            CellEncoding::Reference.encode(&config, &coord(&[4, 0, 0, 0])),
            Err(LineError::InvalidCell { ref cell, .. }) if cell == "(4, 0, 0, 0)"
        ));
        // wrong number of axes
        assert!(matches!(
            CellEncoding::Flat.encode(&config, &coord(&[0, 0])),
            Err(LineError::InvalidCell { .. })
        ));
    }

    #[test]
    fn parse() {
        assert_eq!("bits".parse::<CellEncoding>().unwrap(), CellEncoding::BitPacked);
        assert!("base64".parse::<CellEncoding>().is_err());
    }
}
