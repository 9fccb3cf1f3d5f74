// crates/shared-kernel/src/value_objects/file_mode.rs
use std::fmt;

const S_IFMT: u32 = 0o170_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFLNK: u32 = 0o120_000;

/// Unix-style mode bits of a directory entry, rendered like `ls -l` (`-rw-r--r--`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
#[repr(transparent)]
pub struct FileMode(u32);

impl FileMode {
    pub const fn new(mode: u32) -> Self {
        Self(mode)
    }

    fn type_char(self) -> char {
        match self.0 & S_IFMT {
            S_IFDIR => 'd',
            S_IFLNK => 'l',
            _ => '-',
        }
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FLAGS: [(u32, char); 9] = [
            (0o400, 'r'),
            (0o200, 'w'),
            (0o100, 'x'),
            (0o040, 'r'),
            (0o020, 'w'),
            (0o010, 'x'),
            (0o004, 'r'),
            (0o002, 'w'),
            (0o001, 'x'),
        ];
        let mut out = String::with_capacity(10);
        out.push(self.type_char());
        for (bit, ch) in FLAGS {
            out.push(if self.0 & bit != 0 { ch } else { '-' });
        }
        f.write_str(&out)
    }
}
