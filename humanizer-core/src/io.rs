use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Marker inserted before the extension of humanized output files.
pub const OUTPUT_MARKER: &str = "human";

/// Reads a whole text document.
///
/// - Line endings are normalized to `\n` so paragraph splitting is stable
pub fn read_document<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let contents = fs::read_to_string(filename)?;
	Ok(contents.replace("\r\n", "\n"))
}

/// Writes a document, creating or truncating the file.
pub fn write_document<P: AsRef<Path>>(filename: P, contents: &str) -> io::Result<()> {
	fs::write(filename, contents)
}

/// Builds the output path of a humanized document.
///
/// Example:
/// `data/input.txt` → `data/input.human.txt`
/// `notes` → `notes.human`
pub fn build_output_path<P: AsRef<Path>>(input_path: P) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut file_name = file_stem.to_os_string();
	file_name.push(".");
	file_name.push(OUTPUT_MARKER);
	if let Some(extension) = input_path.extension() {
		file_name.push(".");
		file_name.push(extension);
	}

	Ok(parent.join(file_name))
}

/// Returns `true` if the path looks like a file produced by [`build_output_path`].
pub fn is_output_path<P: AsRef<Path>>(path: P) -> bool {
	path.as_ref()
		.file_stem()
		.and_then(|stem| Path::new(stem).extension())
		.is_some_and(|marker| marker == OUTPUT_MARKER)
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists the documents with a given extension in a directory.
///
/// Returns full paths, sorted, skipping previously humanized outputs.
pub fn list_documents<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) && !is_output_path(&path) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}
