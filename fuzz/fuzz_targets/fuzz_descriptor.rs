//! Fuzz testing for the descriptor parser.
//!
//! This fuzz target feeds arbitrary text to the descriptor parser to
//! ensure malformed input fails with an error instead of panicking, and
//! that anything accepted survives an emit/reparse cycle unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;

use ffbtab::Descriptor;

fuzz_target!(|text: &str| {
    let Ok(descriptor) = Descriptor::parse(text) else {
        return;
    };

    let reparsed = Descriptor::parse(&descriptor.emit())
        .expect("an accepted descriptor must reparse from its own emit");
    assert_eq!(descriptor, reparsed);
});
