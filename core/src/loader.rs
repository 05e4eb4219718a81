//! Loaders for the two on-disk input files: the microprogram control store
//! and the guest program image.
//!
//! Both loaders are tolerant of a missing file — they leave the
//! corresponding store untouched rather than returning an error — matching
//! the reference implementation's behavior of treating `fopen` failure as
//! "nothing to load" instead of a fatal condition.

use std::fs;
use std::path::Path;

use crate::control_store::{ControlStore, SIZE as CONTROL_STORE_SIZE};
use crate::memory::{Memory, INIT_LEN, PROGRAM_BASE};

/// Load up to [`CONTROL_STORE_SIZE`] little-endian 64-bit words from `path`
/// into `store`, one word per control-store slot, stopping early if the file
/// is shorter. Slots beyond the end of the file are left at whatever
/// `store` already held.
///
/// Does nothing if `path` cannot be opened or read.
pub fn load_control_store(store: &mut ControlStore, path: &Path) {
    let Ok(bytes) = fs::read(path) else {
        return;
    };

    for (index, chunk) in bytes.chunks_exact(8).enumerate().take(CONTROL_STORE_SIZE) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        store.set(index, u64::from_le_bytes(word));
    }
}

/// Load a guest program image from `path` into `memory`.
///
/// The file format is a 4-byte little-endian length prefix followed by that
/// many bytes of program data. The first [`INIT_LEN`] bytes of `memory` are
/// a fixed-size initialization block always written as part of the load
/// (zero-filled if the file is shorter than that); the remaining bytes of
/// the file, if any, are copied starting at [`PROGRAM_BASE`].
///
/// Does nothing if `path` cannot be opened or read, or if the file is
/// shorter than the 4-byte length prefix.
pub fn load_program(memory: &mut Memory, path: &Path) {
    let Ok(bytes) = fs::read(path) else {
        return;
    };
    if bytes.len() < 4 {
        return;
    }

    let mut len_prefix = [0u8; 4];
    len_prefix.copy_from_slice(&bytes[..4]);
    let declared_len = u32::from_le_bytes(len_prefix) as usize;

    let body = &bytes[4..];
    let usable_len = declared_len.min(body.len());

    let init_len = usable_len.min(INIT_LEN);
    memory.load(0, &body[..init_len], INIT_LEN);

    if usable_len > INIT_LEN {
        let rest = &body[INIT_LEN..usable_len];
        memory.load(PROGRAM_BASE, rest, rest.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("mic1-core-test-{name}-{}", std::process::id()));
        path
    }

    #[test]
    fn missing_control_store_file_leaves_store_untouched() {
        let mut store = ControlStore::new();
        load_control_store(&mut store, Path::new("/nonexistent/path/does-not-exist.rom"));
        assert_eq!(store.fetch(arbitrary_int::u9::new(0)).raw(), 0);
    }

    #[test]
    fn missing_program_file_leaves_memory_untouched() {
        let mut memory = Memory::new();
        load_program(&mut memory, Path::new("/nonexistent/path/does-not-exist.bin"));
        assert_eq!(memory.read_byte(0), 0);
    }

    #[test]
    fn control_store_loads_words_in_order() {
        let path = temp_path("control-store");
        let mut file = fs::File::create(&path).expect("create temp file");
        file.write_all(&1u64.to_le_bytes()).unwrap();
        file.write_all(&2u64.to_le_bytes()).unwrap();
        drop(file);

        let mut store = ControlStore::new();
        load_control_store(&mut store, &path);
        fs::remove_file(&path).ok();

        assert_eq!(store.fetch(arbitrary_int::u9::new(0)).raw(), 1);
        assert_eq!(store.fetch(arbitrary_int::u9::new(1)).raw(), 2);
    }

    #[test]
    fn program_splits_init_block_from_program_body() {
        let path = temp_path("program");
        let mut body = vec![0xAAu8; INIT_LEN];
        body.extend_from_slice(&[0x11, 0x22, 0x33]);

        let mut file = fs::File::create(&path).expect("create temp file");
        file.write_all(&(body.len() as u32).to_le_bytes()).unwrap();
        file.write_all(&body).unwrap();
        drop(file);

        let mut memory = Memory::new();
        load_program(&mut memory, &path);
        fs::remove_file(&path).ok();

        assert_eq!(memory.read_byte(0), 0xAA);
        assert_eq!(memory.read_byte((INIT_LEN - 1) as u32), 0xAA);
        assert_eq!(memory.read_byte(PROGRAM_BASE as u32), 0x11);
        assert_eq!(memory.read_byte(PROGRAM_BASE as u32 + 2), 0x33);
    }

    #[test]
    fn program_shorter_than_init_block_is_zero_filled() {
        let path = temp_path("short-program");
        let body = [0x7Fu8; 5];

        let mut file = fs::File::create(&path).expect("create temp file");
        file.write_all(&(body.len() as u32).to_le_bytes()).unwrap();
        file.write_all(&body).unwrap();
        drop(file);

        let mut memory = Memory::new();
        load_program(&mut memory, &path);
        fs::remove_file(&path).ok();

        assert_eq!(memory.read_byte(0), 0x7F);
        assert_eq!(memory.read_byte(4), 0x7F);
        assert_eq!(memory.read_byte(5), 0);
        assert_eq!(memory.read_byte((INIT_LEN - 1) as u32), 0);
    }
}
