// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

const TEMP_PREFIX: &str = ".flashtree.tmp.";

fn io_at(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Folder name for a workspace id. Names that are unsafe on any common filesystem become `~`
/// followed by the lowercase hex of their bytes.
fn encode_persisted_id_segment(segment: &str) -> String {
    if is_portable_folder_name(segment) {
        return segment.to_owned();
    }

    let mut out = String::with_capacity(1 + segment.len() * 2);
    out.push('~');
    for byte in segment.bytes() {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

fn is_portable_folder_name(segment: &str) -> bool {
    let Some(first) = segment.chars().next() else {
        return false;
    };
    if matches!(first, '~' | '.') || segment.ends_with(&[' ', '.'][..]) {
        return false;
    }
    let stem = segment.split('.').next().unwrap_or(segment);
    if is_reserved_device_name(stem) {
        return false;
    }
    !segment
        .chars()
        .any(|ch| ch.is_control() || "<>:\"/\\|?*".contains(ch))
}

fn is_reserved_device_name(stem: &str) -> bool {
    let upper = stem.to_ascii_uppercase();
    if matches!(upper.as_str(), "CON" | "PRN" | "AUX" | "NUL") {
        return true;
    }
    let numbered = upper
        .strip_prefix("COM")
        .or_else(|| upper.strip_prefix("LPT"));
    numbered.is_some_and(|digit| matches!(digit.as_bytes(), [b'1'..=b'9']))
}

fn refuse_symlink(path: &Path) -> Result<(), StoreError> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => Err(StoreError::SymlinkRefused {
            path: path.to_path_buf(),
        }),
        Err(err) if err.kind() != io::ErrorKind::NotFound => Err(io_at(path)(err)),
        _ => Ok(()),
    }
}

fn temp_path_beside(dir: &Path, path: &Path) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    dir.join(format!("{TEMP_PREFIX}{name}.{}.{nanos}", std::process::id()))
}

// Windows refuses to rename onto an existing file.
fn replace_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Err(err) if cfg!(windows) && to.exists() => {
            fs::remove_file(to).map_err(|_| err)?;
            fs::rename(from, to)
        }
        other => other,
    }
}

/// Replaces `path` (a file directly inside `dir`) with `contents` through a temp file and a
/// rename, so readers see either the old or the new file.
fn write_atomic(
    dir: &Path,
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    fs::create_dir_all(dir).map_err(io_at(dir))?;
    refuse_symlink(path)?;

    let tmp = temp_path_beside(dir, path);
    let written = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp)
        .and_then(|mut file| {
            file.write_all(contents)?;
            if durability == WriteDurability::Durable {
                file.sync_all()?;
            }
            Ok(())
        });
    if let Err(err) = written {
        let _ = fs::remove_file(&tmp);
        return Err(io_at(&tmp)(err));
    }

    if let Err(err) = replace_file(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_at(path)(err));
    }

    #[cfg(unix)]
    {
        if durability == WriteDurability::Durable {
            fs::File::open(dir)
                .and_then(|handle| handle.sync_all())
                .map_err(io_at(dir))?;
        }
    }

    Ok(())
}
