// Copyright 2025 the Bitmap RLE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Encoding and decoding whole bitmaps through the public API.

use bitmap_rle::codec::{self, DecodeError, Limits};
use bitmap_rle::grid::ShapeError;
use bitmap_rle::{Error, Grid};
use bitmap_rle_tests::{heart, HEART, HEART_ENCODED};

#[test]
fn heart_encodes() {
    assert_eq!(codec::encode(&heart()), HEART_ENCODED);
    assert_eq!(codec::encode_rows(HEART).unwrap(), HEART_ENCODED);
}

#[test]
fn heart_decodes() {
    let grid = codec::decode(HEART_ENCODED).unwrap();
    assert_eq!(grid.to_strings(), HEART);
    assert_eq!((grid.width(), grid.height()), (9, 8));
}

#[test]
fn folded_rows_are_marked_once() {
    let rows = ["ab", "cc", "cc", "cc", "ab"];
    let encoded = codec::encode_rows(rows).unwrap();
    let tokens: Vec<&str> = encoded.split('/').collect();
    assert_eq!(tokens, ["ab", "2c3", "ab"]);
    assert_eq!(codec::decode(&encoded).unwrap().to_strings(), rows);
}

#[test]
fn char_rows_encode_like_string_rows() {
    let char_rows = HEART.map(|row| row.chars().collect::<Vec<_>>());
    let grid = Grid::from_char_rows(char_rows).unwrap();
    assert_eq!(codec::encode(&grid), HEART_ENCODED);
}

#[test]
fn round_trips() {
    let grids: &[&[&str]] = &[
        &["a"],
        &["aaa", "aaa", "bbb"],
        &["ab", "ba"],
        &["ab", "ab", "ba", "ba", "ab"],
        &["zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"],
        &["<>", "<>", "<>", "<>", "<>", "<>", "<>", "<>", "<>", "<>", "<>", "<>"],
        &[" .:-=+*%@", "@%*+=-:. "],
    ];
    for rows in grids {
        let grid = Grid::from_rows(*rows).unwrap();
        let encoded = codec::encode(&grid);
        let decoded = codec::decode(&encoded).unwrap();
        assert_eq!(decoded, grid, "{encoded:?}");
        // Encoding the decoded grid gives a string which decodes to the same grid.
        let re_encoded = codec::encode(&decoded);
        assert_eq!(codec::decode(&re_encoded).unwrap(), grid, "{re_encoded:?}");
    }
}

#[test]
fn hand_written_input() {
    // Explicit run lengths and repeats of 1 are fine.
    let grid = codec::decode("1a2b1/3b2").unwrap();
    assert_eq!(grid.to_strings(), ["abb", "bbb", "bbb"]);
}

#[test]
fn digit_symbols_cannot_be_encoded() {
    assert!(matches!(
        codec::encode_rows(["a1a"]),
        Err(Error::InvalidSymbol { row: 0, column: 1, .. })
    ));
}

#[test]
fn malformed_strings_are_rejected() {
    assert!(matches!(
        codec::decode("3a/3"),
        Err(Error::Decode {
            token: 1,
            source: DecodeError::EmptyRow
        })
    ));
    assert!(matches!(
        codec::decode("0a"),
        Err(Error::Decode {
            token: 0,
            source: DecodeError::ZeroRun { offset: 0 }
        })
    ));
    assert!(matches!(
        codec::decode("ab/ab/ab0"),
        Err(Error::Decode {
            token: 2,
            source: DecodeError::ZeroRepeat
        })
    ));
    assert!(matches!(
        codec::decode("ab/abc"),
        Err(Error::Shape(ShapeError::Ragged { row: 1, .. }))
    ));
}

#[test]
fn limits_bound_decoding() {
    let limits = Limits {
        max_width: 9,
        max_height: 8,
        max_cells: 72,
    };
    assert_eq!(
        codec::decode_with_limits(HEART_ENCODED, &limits).unwrap(),
        heart()
    );

    let narrow = Limits {
        max_width: 8,
        ..limits
    };
    assert!(matches!(
        codec::decode_with_limits(HEART_ENCODED, &narrow),
        Err(Error::Decode {
            token: 0,
            source: DecodeError::RunTooLong { .. }
        })
    ));

    let short = Limits {
        max_height: 7,
        ..limits
    };
    assert!(matches!(
        codec::decode_with_limits(HEART_ENCODED, &short),
        Err(Error::Decode {
            token: 5,
            source: DecodeError::RepeatTooLong { limit: 7 }
        })
    ));

    let few_cells = Limits {
        max_cells: 71,
        ..limits
    };
    assert!(matches!(
        codec::decode_with_limits(HEART_ENCODED, &few_cells),
        Err(Error::Decode {
            token: 5,
            source: DecodeError::TooManyCells { limit: 71 }
        })
    ));
}

#[test]
fn tiny_input_cannot_request_a_huge_grid() {
    for (encoded, token) in [
        ("65535a65535", 0),
        ("65535a/65535a65534", 1),
        ("a4096/4096a4096", 1),
    ] {
        assert!(
            matches!(
                codec::decode(encoded),
                Err(Error::Decode {
                    token: t,
                    source: DecodeError::TooManyCells {
                        limit: Limits::DEFAULT_MAX_CELLS
                    },
                }) if t == token
            ),
            "{encoded:?}"
        );
    }
}
