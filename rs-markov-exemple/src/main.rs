use rs_markov_core::io::read_content;
use rs_markov_core::{GenerationError, MarkovGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: rs-markov-exemple [file] [phrase_range_size] [output_size] [seed]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args.first().map(String::as_str).unwrap_or("./data/sample.txt");
    let phrase_range_size: i64 = args.get(1).map(|s| s.parse()).transpose()?.unwrap_or(2);
    let output_size: i64 = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(20);
    let seed: Option<u64> = args.get(3).map(|s| s.parse()).transpose()?;

    // Each call gets its own freshly read buffer
    let content = read_content(path)?;

    // A fixed seed always gives the same text for the same file
    let mut generator = match seed {
        Some(seed) => MarkovGenerator::seeded(seed),
        None => MarkovGenerator::from_entropy(),
    };

    println!("Generated:{}", generator.generate(Some(&content), phrase_range_size, output_size)?);

    // Invalid parameters come back as typed errors with a fixed message
    match generator.generate(Some(&content), 0, output_size) {
        Ok(_) => println!("Should not happen"),
        Err(GenerationError::InvalidRangeSize) => println!("Range 0 is invalid: {}", GenerationError::InvalidRangeSize),
        Err(e) => println!("Unexpected error: {e}"),
    }
    match generator.generate(None, phrase_range_size, output_size) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("No file: {e}"),
    }

    // Same file, growing prefixes: longer prefixes copy the source more closely
    for range in 1..=3 {
        match generator.generate(Some(&content), range, output_size.max(range)) {
            Ok(text) => println!("Range {range}:{text}"),
            Err(e) => println!("Range {range}: {e}"),
        }
    }

    Ok(())
}
