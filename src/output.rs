use std::fs;
use std::path::{Component, Path};

use anyhow::{bail, Context, Result};
use log::info;

/// Reset `dir` so it exists and is empty.
///
/// Runs once per dashboard run, before any artifact is written. Whatever the
/// directory held before (a previous run's output or anything else) is
/// removed. Deletion is not transactional: a failure part-way leaves the
/// directory partially emptied.
pub fn reset_output_dir(dir: &Path) -> Result<()> {
    if !dir.components().any(|c| matches!(c, Component::Normal(_))) {
        bail!("refusing to reset output directory {:?}", dir);
    }

    match fs::symlink_metadata(dir) {
        Ok(meta) if meta.is_dir() => {
            let stale = fs::read_dir(dir)
                .with_context(|| format!("listing {}", dir.display()))?
                .count();
            fs::remove_dir_all(dir)
                .with_context(|| format!("clearing {}", dir.display()))?;
            info!("cleared {} ({stale} stale entries)", dir.display());
        }
        Ok(_) => bail!("{} exists and is not a directory", dir.display()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("inspecting {}", dir.display()));
        }
    }

    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn wipes_stale_entries() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");
        fs::create_dir(&out).unwrap();
        for i in 0..6 {
            fs::write(out.join(format!("stale-{i}.txt")), "old").unwrap();
        }
        fs::create_dir(out.join("nested")).unwrap();
        fs::write(out.join("nested/keep.png"), "old").unwrap();

        reset_output_dir(&out).unwrap();

        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn creates_missing_directory_with_parents() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("site/docs");

        reset_output_dir(&out).unwrap();

        assert!(out.is_dir());
    }

    #[test]
    fn refuses_root_like_paths() {
        for path in ["", ".", "..", "/"] {
            assert!(reset_output_dir(Path::new(path)).is_err(), "{path:?} was accepted");
        }
    }

    #[test]
    fn refuses_a_regular_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");
        fs::write(&out, "not a directory").unwrap();

        assert!(reset_output_dir(&out).is_err());
        assert!(out.is_file());
    }
}
