//! Option loading and per-file processing.

use std::collections::hash_map::Entry;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use decomment::{
    describe_spans, kept_slices, CategoryFlags, Decommenter, LanguageProfile, Options, Tokenizer,
};
use rustc_hash::FxHashMap;

use crate::{Args, CliError};

/// Write buffer size for output files.
pub const BLOCK_SIZE: usize = 32 * 1024;

/// Options file (if any), then `--language`, `--remove` and `--keep`.
pub fn load_options(args: &Args) -> Result<Options, CliError> {
    let mut options = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&json).map_err(|source| CliError::ConfigFile {
                path: path.clone(),
                source,
            })?
        }
        None => Options::default(),
    };
    if let Some(language) = &args.language {
        options.language = Some(language.clone());
    }
    args.apply_flags(&mut options.flags);
    Ok(options)
}

/// Process every input file. Status lines and span dumps go to `out`.
///
/// Missing inputs are skipped with a warning. The first configuration or
/// I/O error stops the run.
pub fn run(args: &Args, out: &mut dyn Write) -> Result<(), CliError> {
    let engine = Decommenter::new(load_options(args)?)?;
    let files: Vec<&Path> = args
        .files
        .iter()
        .filter(|path| {
            let found = path.is_file();
            if !found {
                tracing::warn!("source file {:?} not found", path.display().to_string());
            }
            found
        })
        .map(PathBuf::as_path)
        .collect();

    if let (Some(out_dir), false) = (args.out_dir.as_deref(), args.show_spans) {
        check_destinations(&files, out_dir)?;
    }
    for path in files {
        process_file(&engine, path, args, out)?;
    }
    Ok(())
}

/// Fail before writing anything if two inputs share a file name.
fn check_destinations(files: &[&Path], out_dir: &Path) -> Result<(), CliError> {
    let mut seen: FxHashMap<PathBuf, &Path> = FxHashMap::default();
    for &path in files {
        match seen.entry(destination(path, Some(out_dir))) {
            Entry::Occupied(entry) => {
                return Err(CliError::OutputCollision {
                    dest: entry.key().clone(),
                    first: entry.get().to_path_buf(),
                    second: path.to_path_buf(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(path);
            }
        }
    }
    Ok(())
}

#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
fn process_file(
    engine: &Decommenter,
    path: &Path,
    args: &Args,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = extension_language(path);
    let profile = engine.profile(engine.language().or(extension.as_deref()))?;

    if args.show_spans {
        let dump = describe_spans(&text, profile);
        return writeln!(out, "{}:", path.display())
            .and_then(|()| out.write_all(dump.as_bytes()))
            .map_err(stdout_error);
    }

    let dest = destination(path, args.out_dir.as_deref());
    write_kept(&dest, &text, profile, engine.flags())?;

    let verb = if args.out_dir.is_some() {
        "Created"
    } else {
        "Updated"
    };
    writeln!(out, "{verb} \"{}\"", dest.display()).map_err(stdout_error)
}

/// Lowercased file extension, used as the language key.
fn extension_language(path: &Path) -> Option<String> {
    path.extension()
        .and_then(OsStr::to_str)
        .map(str::to_lowercase)
}

fn destination(path: &Path, out_dir: Option<&Path>) -> PathBuf {
    match (out_dir, path.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        (Some(dir), None) => dir.join(path),
        (None, _) => path.to_path_buf(),
    }
}

fn write_kept(
    dest: &Path,
    text: &str,
    profile: &LanguageProfile,
    flags: CategoryFlags,
) -> Result<(), CliError> {
    let write_error = |source: io::Error| CliError::Write {
        path: dest.to_path_buf(),
        source,
    };

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    let file = File::create(dest).map_err(write_error)?;
    let mut writer = BufWriter::with_capacity(BLOCK_SIZE, file);
    for slice in kept_slices(text, Tokenizer::new(text, profile), flags) {
        writer.write_all(slice.as_bytes()).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}

fn stdout_error(source: io::Error) -> CliError {
    CliError::Write {
        path: PathBuf::from("<stdout>"),
        source,
    }
}
