use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a text file and returns its whole content as a `String`.
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./datasets/tiny_shakespeare.txt"` → `"tiny_shakespeare"`
/// - `"tiny_shakespeare.txt"` → `"tiny_shakespeare"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
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

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths).
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() {
			if path.extension() == Some(std::ffi::OsStr::new(extension)) {
				if let Some(name) = path.file_name() {
					files.push(name.to_string_lossy().to_string());
				}
			}
		}
	}

	Ok(files)
}

/// Loads every `.txt` dataset in a directory.
///
/// Returns a mapping from dataset name (file stem) to raw text content,
/// ready to be handed to `Generator::new`.
pub fn load_datasets<P: AsRef<Path>>(dir: P) -> io::Result<HashMap<String, String>> {
	let mut datasets = HashMap::new();

	for file in list_files(&dir, "txt")? {
		let path = dir.as_ref().join(&file);
		datasets.insert(get_filename(&path)?, read_file(&path)?);
	}

	Ok(datasets)
}
