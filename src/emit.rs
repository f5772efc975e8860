use crate::core::config::BoardConfig;
use crate::core::coord::Coord;
use crate::core::error::{LineError, Result};
use crate::core::line::{Line, LineSet};
use crate::encoding::CellEncoding;
use crate::games::hypercube_index::LineIndex;
use fixedbitset::FixedBitSet;
use std::fmt::{self, Write};
use std::fs;
use std::io::{self, Write as _};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `[[code, ...], ...]`, one inner array per line
    #[default]
    Json,
    /// `LINES` and `LINE_MAP` constants, ready to be included in a crate
    Rust,
}

impl FromStr for OutputFormat {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "rust" => Ok(OutputFormat::Rust),
            _ => Err(LineError::invalid_configuration(format!(
                "unknown output format '{}' (expected json or rust)",
                s
            ))),
        }
    }
}

/// Packs every cell of every line. Fails before producing anything if the encoding
/// can't hold the board.
pub fn encode_lines<'a>(
    config: &BoardConfig,
    lines: impl IntoIterator<Item = &'a Line>,
    encoding: CellEncoding,
) -> Result<Vec<Vec<u64>>> {
    encoding.check(config)?;

    lines
        .into_iter()
        .map(|line| {
            line.cells()
                .iter()
                .map(|cell| encoding.encode(config, cell))
                .collect::<Result<Vec<u64>>>()
        })
        .collect()
}

pub fn to_json(config: &BoardConfig, lines: &LineSet, encoding: CellEncoding) -> Result<String> {
    let packed = encode_lines(config, lines, encoding)?;
    Ok(serde_json::to_string(&packed)?)
}

/// Lookup tables keyed by packed cell code, the way a game storing its board by code
/// reads them. Codes that name no cell (gaps in the bit layouts) map to no lines.
pub struct CodedTables {
    /// Packed cells of every line
    pub lines: Vec<Vec<u64>>,
    /// Line ids through each code, `max_code + 1` entries
    pub line_map: Vec<Vec<usize>>,
    /// Cells of every line as 64-bit words: bit `code % 64` of word `code / 64`
    pub line_bitsets: Vec<Vec<u64>>,
}

pub fn coded_tables(index: &LineIndex, encoding: CellEncoding) -> Result<CodedTables> {
    let config = index.config();
    let lines = encode_lines(config, index.lines(), encoding)?;

    let max_code = encoding.max_code(config)?;
    let code_space = usize::try_from(max_code)
        .ok()
        .and_then(|max| max.checked_add(1))
        .ok_or_else(|| {
            LineError::invalid_configuration(format!(
                "codes up to {} are too large for lookup tables",
                max_code
            ))
        })?;

    let mut line_map = vec![Vec::new(); code_space];
    for cell in 0..index.num_cells() {
        let code = encoding.encode(config, &Coord::from_flat_index(cell, config))?;
        line_map[code as usize] = index
            .lines_through_index(cell)
            .map(<[usize]>::to_vec)
            .unwrap_or_default();
    }

    let words = (code_space + 63) / 64;
    let line_bitsets = lines
        .iter()
        .map(|codes| {
            let mut bitset = FixedBitSet::with_capacity(code_space);
            for &code in codes {
                bitset.insert(code as usize);
            }

            let mut blocks = vec![0u64; words];
            for bit in bitset.ones() {
                blocks[bit / 64] |= 1 << (bit % 64);
            }
            blocks
        })
        .collect();

    Ok(CodedTables {
        lines,
        line_map,
        line_bitsets,
    })
}

/// Rust source with the `LINES`, `LINE_MAP` and `LINE_BITSETS` constants. Cells are
/// addressed by their packed code in all three.
pub fn to_rust(index: &LineIndex, encoding: CellEncoding) -> Result<String> {
    let config = index.config();
    let tables = coded_tables(index, encoding)?;
    let int = rust_int_type(encoding.max_code(config)?);

    let mut out = String::new();
    write_tables(&mut out, config, encoding.resolve(config), int, &tables)?;
    Ok(out)
}

fn write_tables(
    out: &mut String,
    config: &BoardConfig,
    encoding: CellEncoding,
    int: &str,
    tables: &CodedTables,
) -> fmt::Result {
    writeln!(
        out,
        "// {} winning lines of the {}-dimensional board of side {}, {:?} cell encoding",
        tables.lines.len(),
        config.dimensions(),
        config.side(),
        encoding,
    )?;
    writeln!(
        out,
        "pub const LINES: [[{}; {}]; {}] = [",
        int,
        config.side(),
        tables.lines.len()
    )?;
    for line in &tables.lines {
        writeln!(out, "    [{}],", join(line))?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "// indexed by cell code")?;
    writeln!(
        out,
        "pub const LINE_MAP: [&[usize]; {}] = [",
        tables.line_map.len()
    )?;
    for ids in &tables.line_map {
        writeln!(out, "    &[{}],", join(ids))?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "// bit `code % 64` of word `code / 64`")?;
    writeln!(
        out,
        "pub const LINE_BITSETS: [[u64; {}]; {}] = [",
        tables.line_bitsets.first().map_or(0, Vec::len),
        tables.line_bitsets.len()
    )?;
    for blocks in &tables.line_bitsets {
        let words: Vec<String> = blocks.iter().map(|w| format!("{:#x}", w)).collect();
        writeln!(out, "    [{}],", words.join(", "))?;
    }
    writeln!(out, "];")
}

pub fn render(
    config: &BoardConfig,
    lines: &LineSet,
    encoding: CellEncoding,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(config, lines, encoding),
        OutputFormat::Rust => to_rust(&LineIndex::build(config, lines), encoding),
    }
}

/// Writes already rendered output to `path`, or to stdout when there is none
pub fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, rendered)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Smallest unsigned type that holds `max`
fn rust_int_type(max: u64) -> &'static str {
    if max <= u8::MAX as u64 {
        "u8"
    } else if max <= u16::MAX as u64 {
        "u16"
    } else if max <= u32::MAX as u64 {
        "u32"
    } else {
        "u64"
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
