//! Basic usage: check a property over byte-decoded integers and shrink the
//! counterexample.
//!
//! Run with: cargo run --example basic_usage

use curtail::{
    ByteStream, CheckConfig, Generator, GeneratorError, PropertyError, check_with_config,
};

/// Decodes two big-endian bytes into a u16.
struct TwoBytes;

impl Generator<u16> for TwoBytes {
    fn generate(&self, stream: &mut dyn ByteStream) -> Result<u16, GeneratorError> {
        let mut buf = [0u8; 2];
        stream.read_exact(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }
}

fn main() {
    let config = CheckConfig::default().with_seed(2024);
    let report = check_with_config(
        TwoBytes,
        |n: &u16| {
            if *n < 1000 {
                Ok(())
            } else {
                Err(PropertyError::new(format!("{} is not below 1000", n)))
            }
        },
        config,
    )
    .expect("run is seeded");

    println!("seed:        {}", report.seed());
    println!("verdict:     {}", if report.is_pass() { "pass" } else { "fail" });
    println!("passed:      {}", report.passed().len());
    println!("failures:    {}", report.failures().len());

    if let Some(minimal) = report.minimal() {
        println!(
            "minimal:     {} (provenance {:02x?})",
            minimal.value(),
            minimal.provenance()
        );
    }
}
