//! Durable single-slot persistence for the last raw input string.
//!
//! One fixed file stands in for a key-value slot: absence reads as the
//! empty string, and saving the empty string clears the slot.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory under the user's home holding tagkit state.
pub const C_STORE_DIR_NAME: &str = ".tagkit";
/// Fixed slot file name for the last raw input.
pub const C_STORE_FILE_NAME: &str = "input.tsv";

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("USERPROFILE").map(PathBuf::from))
        .or_else(|| {
            let drive = env::var_os("HOMEDRIVE")?;
            let path = env::var_os("HOMEPATH")?;
            Some(PathBuf::from(drive).join(path))
        })
}

/// Slot path under an explicit base directory.
pub fn derive_slot_path(path_dir_base: &Path) -> PathBuf {
    path_dir_base.join(C_STORE_DIR_NAME).join(C_STORE_FILE_NAME)
}

/// Slot path under the user's home, `None` when no home is resolvable.
pub fn derive_default_slot_path() -> Option<PathBuf> {
    Some(derive_slot_path(&home_dir()?))
}

/// Read the slot; an absent file is the empty string, never an error.
pub fn load_last_input(path_slot: &Path) -> Result<String, String> {
    match fs::read_to_string(path_slot) {
        Ok(c_raw) => Ok(c_raw),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(format!(
            "Failed to read input slot {}: {e}",
            path_slot.display()
        )),
    }
}

/// Write the slot; an empty string clears it instead.
pub fn save_last_input(path_slot: &Path, c_raw: &str) -> Result<(), String> {
    if c_raw.is_empty() {
        clear_last_input(path_slot)?;
        return Ok(());
    }

    let path_dir_parent = path_slot.parent().ok_or_else(|| {
        format!(
            "Failed to derive slot parent directory: {}",
            path_slot.display()
        )
    })?;
    fs::create_dir_all(path_dir_parent).map_err(|e| {
        format!(
            "Failed to create slot directory {}: {e}",
            path_dir_parent.display()
        )
    })?;
    fs::write(path_slot, c_raw).map_err(|e| {
        format!(
            "Failed to write input slot {}: {e}",
            path_slot.display()
        )
    })
}

/// Remove the slot. Returns whether a saved value existed.
pub fn clear_last_input(path_slot: &Path) -> Result<bool, String> {
    match fs::remove_file(path_slot) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(format!(
            "Failed to clear input slot {}: {e}",
            path_slot.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    static N_TEST_DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

    fn _make_test_base() -> PathBuf {
        let n_seq = N_TEST_DIR_SEQ.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "tagkit_store_test_{}_{n_seq}",
            std::process::id()
        ))
    }

    #[test]
    fn slot_path_uses_fixed_key() {
        let path_slot = derive_slot_path(Path::new("/home/someone"));
        assert_eq!(path_slot, PathBuf::from("/home/someone/.tagkit/input.tsv"));
    }

    #[test]
    fn absent_slot_reads_as_empty_string() {
        let path_slot = derive_slot_path(&_make_test_base());
        assert_eq!(load_last_input(&path_slot).unwrap(), "");
    }

    #[test]
    fn save_then_load_round_trips_exact_string() {
        let path_base = _make_test_base();
        let path_slot = derive_slot_path(&path_base);
        let c_raw = "A\tB\n1\t\tJohn\tDoe";

        save_last_input(&path_slot, c_raw).unwrap();
        assert_eq!(load_last_input(&path_slot).unwrap(), c_raw);

        let _ = fs::remove_dir_all(&path_base);
    }

    #[test]
    fn saving_empty_string_clears_the_slot() {
        let path_base = _make_test_base();
        let path_slot = derive_slot_path(&path_base);

        save_last_input(&path_slot, "something").unwrap();
        save_last_input(&path_slot, "").unwrap();
        assert_eq!(load_last_input(&path_slot).unwrap(), "");
        assert!(!path_slot.exists());

        let _ = fs::remove_dir_all(&path_base);
    }

    #[test]
    fn clear_reports_whether_a_value_existed() {
        let path_base = _make_test_base();
        let path_slot = derive_slot_path(&path_base);

        assert!(!clear_last_input(&path_slot).unwrap());
        save_last_input(&path_slot, "roster").unwrap();
        assert!(clear_last_input(&path_slot).unwrap());
        assert!(!clear_last_input(&path_slot).unwrap());

        let _ = fs::remove_dir_all(&path_base);
    }
}
