use core::ops::Deref;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Encode;
use crate::ops::EncodeRef;

/// An error raised when a path does not point where it should.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("file or directory at path \"{}\" does not exist", .0.display())]
    NotExists(PathBuf),
    #[error("path \"{}\" does not point to a file", .0.display())]
    NotAFile(PathBuf),
    #[error("path \"{}\" does not point to a directory", .0.display())]
    NotADirectory(PathBuf),
}

macro_rules! checked_path {
    ($(#[$meta:meta])* $name:ident, $check:ident, $error:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(PathBuf);

        impl $name {
            /// Checks the filesystem and wraps the path.
            pub fn new(path: impl Into<PathBuf>) -> Result<Self, PathError> {
                let path = path.into();
                if !path.exists() {
                    return Err(PathError::NotExists(path));
                }
                if !path.$check() {
                    return Err(PathError::$error(path));
                }
                Ok(Self(path))
            }

            #[inline]
            pub fn as_path(&self) -> &Path {
                &self.0
            }

            #[inline]
            pub fn into_inner(self) -> PathBuf {
                self.0
            }
        }

        impl Deref for $name {
            type Target = Path;

            #[inline]
            fn deref(&self) -> &Path {
                &self.0
            }
        }

        impl AsRef<Path> for $name {
            #[inline]
            fn as_ref(&self) -> &Path {
                &self.0
            }
        }

        impl Encode for $name {
            #[inline]
            fn encode_ref(&self) -> EncodeRef<'_> {
                EncodeRef::Opaque
            }
        }
    };
}

checked_path! {
    /// A path that pointed to an existing file when it was created.
    FilePath, is_file, NotAFile
}

checked_path! {
    /// A path that pointed to an existing directory when it was created.
    DirectoryPath, is_dir, NotADirectory
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{DirectoryPath, FilePath, PathError};

    #[test]
    fn checks_the_filesystem() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("bar");
        fs::write(&file, b"").unwrap();
        let dir = tmp.path().join("baz");
        fs::create_dir(&dir).unwrap();

        assert_eq!(FilePath::new(&file).unwrap().as_path(), file);
        assert_eq!(DirectoryPath::new(&dir).unwrap().as_path(), dir);

        assert!(matches!(FilePath::new(&dir), Err(PathError::NotAFile(_))));
        assert!(matches!(DirectoryPath::new(&file), Err(PathError::NotADirectory(_))));

        let missing = tmp.path().join("missing");
        let err = FilePath::new(&missing).unwrap_err();
        assert!(matches!(err, PathError::NotExists(_)));
        assert!(err.to_string().ends_with("missing\" does not exist"));
    }
}
