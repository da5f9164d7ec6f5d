#![no_main]

use libfuzzer_sys::fuzz_target;
use poxx::markup::start_tags;
use poxx::munge::munge;
use poxx::placeholder::placeholders;
use pretty_assertions::assert_eq;

fn tag_names(text: &str) -> Vec<String> {
    start_tags(text)
        .expect("Reading the tags should succeed")
        .into_iter()
        .map(|tag| tag.name)
        .collect()
}

fuzz_target!(|text: &str| {
    let munged = munge(text).expect("Munging should succeed");

    // Munging only replaces ASCII letters, so the markup structure
    // must survive.
    assert_eq!(tag_names(text), tag_names(&munged));

    // Placeholders outside of markup are copied as they are.
    if !text.contains(['<', '&']) {
        for placeholder in placeholders(text) {
            assert!(munged.contains(placeholder), "lost {placeholder:?}");
        }
    }
});
