use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a whole file into a fresh byte buffer.
///
/// - No decoding is done here; the generator tolerates arbitrary bytes
/// - Each call returns its own buffer, nothing is rewound or reused
pub fn read_content<P: AsRef<Path>>(filename: P) -> io::Result<Vec<u8>> {
	let mut contents = Vec::new();
	File::open(filename)?.read_to_end(&mut contents)?;
	Ok(contents)
}
