#![no_main]

use libfuzzer_sys::fuzz_target;
use poxx::markup::{split_references, Piece};
use pretty_assertions::assert_eq;

fuzz_target!(|text: &str| {
    let joined = split_references(text)
        .into_iter()
        .map(|piece| match piece {
            Piece::Text(text) => String::from(text),
            Piece::CharRef(code) => format!("&#{code};"),
            Piece::EntityRef(name) => format!("&{name};"),
        })
        .collect::<String>();

    // Splitting loses nothing.
    assert_eq!(joined, text);
});
