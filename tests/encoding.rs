use hyperlines::core::config::BoardConfig;
use hyperlines::core::error::LineError;
use hyperlines::emit::{encode_lines, to_json};
use hyperlines::encoding::CellEncoding;
use hyperlines::games::hypercube::hypercube_lines;

/// Splits a reference code into its four 2-bit fields
fn unpack(code: u64) -> Vec<usize> {
    vec![
        (code >> 6 & 3) as usize,
        (code >> 4 & 3) as usize,
        (code >> 2 & 3) as usize,
        (code & 3) as usize,
    ]
}

#[test]
fn reference_codes_unpack_to_the_line_cells() {
    for side in 1..=4 {
        let config = BoardConfig::new(4, side).unwrap();
        let lines = hypercube_lines(&config);
        let packed = encode_lines(&config, &lines, CellEncoding::Reference).unwrap();

        for (line, codes) in lines.iter().zip(&packed) {
            assert_eq!(codes.len(), side);
            for (cell, &code) in line.cells().iter().zip(codes) {
                assert!(code < 256);
                assert_eq!(unpack(code), cell.values());
            }
        }
    }
}

#[test]
fn every_encoding_decodes_back() {
    let boards = [(2, 3), (3, 5), (4, 4), (5, 2)];
    let encodings = [
        CellEncoding::Auto,
        CellEncoding::BitPacked,
        CellEncoding::Flat,
    ];

    for (d, s) in boards {
        let config = BoardConfig::new(d, s).unwrap();
        let lines = hypercube_lines(&config);
        for encoding in encodings {
            for line in &lines {
                for cell in line.cells() {
                    let code = encoding.encode(&config, cell).unwrap();
                    assert_eq!(&encoding.decode(&config, code).unwrap(), cell);
                }
            }
        }
    }
}

#[test]
fn reference_rejects_side_5() {
    let config = BoardConfig::new(4, 5).unwrap();
    let lines = hypercube_lines(&config);
    assert!(matches!(
        to_json(&config, &lines, CellEncoding::Reference),
        Err(LineError::InvalidConfiguration { .. })
    ));
    // auto falls back to bit packing
    assert!(to_json(&config, &lines, CellEncoding::Auto).is_ok());
}

#[test]
fn default_json_output() {
    let config = BoardConfig::default();
    let lines = hypercube_lines(&config);
    let json = to_json(&config, &lines, CellEncoding::Auto).unwrap();

    let parsed: Vec<Vec<u64>> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 520);
    assert!(parsed.iter().all(|line| line.len() == 4));
    // lines are sorted cell by cell, so codes ascend within each line
    assert!(parsed.iter().all(|line| line.windows(2).all(|w| w[0] < w[1])));
    // the first row and the main diagonal
    assert!(parsed.contains(&vec![0, 1, 2, 3]));
    assert!(parsed.contains(&vec![0, 85, 170, 255]));
}
