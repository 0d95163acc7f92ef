use std::io::Write;

use camino::Utf8Path;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Name for a scratch file that is renamed into place once fully written.
pub fn tmp_file_name() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();

    format!("tmp_obj_{suffix}")
}

/// Write `bytes` to a scratch file in `dir`, then rename it to `dest`.
///
/// The scratch file is removed again if either step fails.
pub fn write_via_temp(dir: &Utf8Path, dest: &Utf8Path, bytes: &[u8]) -> std::io::Result<()> {
    let temp_path = dir.join(tmp_file_name());

    let result = std::fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(bytes)?;
        drop(file);
        std::fs::rename(&temp_path, dest)
    });

    if result.is_err() && temp_path.exists() {
        let _ = std::fs::remove_file(&temp_path);
    }
    result
}
