//! In-Memory File System Implementation
//!
//! A pure in-memory tree rooted at a single directory. Every path accepted
//! here is canonical (see [`super::path::resolve`]).

use super::path::{self, segments};
use super::types::*;

/// In-memory virtual file system.
#[derive(Debug, Clone)]
pub struct InMemoryFs {
    root: Node,
}

impl InMemoryFs {
    /// Create a new empty in-memory filesystem.
    pub fn new() -> Self {
        Self { root: Node::empty_dir() }
    }

    /// Walk from the root to the node named by `path`.
    pub fn lookup(&self, path: &str) -> Result<&Node, FsError> {
        let mut current = &self.root;
        for part in segments(path) {
            current = match current {
                Node::Directory(dir) => dir.get(part).ok_or_else(|| FsError::NotFound {
                    path: path.to_string(),
                })?,
                Node::File(_) => {
                    return Err(FsError::NotDirectory { path: path.to_string() })
                }
            };
        }
        Ok(current)
    }

    pub fn lookup_mut(&mut self, path: &str) -> Result<&mut Node, FsError> {
        let mut current = &mut self.root;
        for part in segments(path) {
            current = match current {
                Node::Directory(dir) => dir.get_mut(part).ok_or_else(|| FsError::NotFound {
                    path: path.to_string(),
                })?,
                Node::File(_) => {
                    return Err(FsError::NotDirectory { path: path.to_string() })
                }
            };
        }
        Ok(current)
    }

    /// Resolve `path` and require it to be a directory.
    pub fn directory(&self, path: &str) -> Result<&Directory, FsError> {
        self.lookup(path)?
            .as_directory()
            .ok_or_else(|| FsError::NotDirectory { path: path.to_string() })
    }

    pub fn directory_mut(&mut self, path: &str) -> Result<&mut Directory, FsError> {
        self.lookup_mut(path)?
            .as_directory_mut()
            .ok_or_else(|| FsError::NotDirectory { path: path.to_string() })
    }

    pub fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    pub fn is_directory(&self, path: &str) -> bool {
        self.directory(path).is_ok()
    }

    /// Read the content of the file at `path`.
    pub fn read_file(&self, path: &str) -> Result<&str, FsError> {
        match self.lookup(path)? {
            Node::File(file) => Ok(&file.content),
            Node::Directory(_) => Err(FsError::IsDirectory { path: path.to_string() }),
        }
    }

    /// Create a directory and any missing ancestors. Existing directories are
    /// left alone; a file in the way is an error.
    pub fn mkdir_all(&mut self, path: &str) -> Result<(), FsError> {
        let mut current = path::ROOT.to_string();
        for part in segments(path) {
            let dir = self.directory_mut(&current)?;
            match dir.get(part) {
                Some(Node::Directory(_)) => {}
                Some(Node::File(_)) => {
                    return Err(FsError::AlreadyExists { path: path::join(&current, part) })
                }
                None => {
                    dir.insert(part, Node::empty_dir());
                }
            }
            current = path::join(&current, part);
        }
        Ok(())
    }

    /// Write a file, creating parent directories as needed.
    pub fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let parent = path::dirname(path);
        let name = segments(path).last().ok_or_else(|| FsError::IsDirectory {
            path: path.to_string(),
        })?;
        self.mkdir_all(&parent)?;
        let dir = self.directory_mut(&parent)?;
        if let Some(Node::Directory(_)) = dir.get(name) {
            return Err(FsError::IsDirectory { path: path.to_string() });
        }
        dir.insert(name, Node::file(content));
        Ok(())
    }

    /// Remove `name` from the directory at `parent` and hand back the subtree.
    pub fn detach(&mut self, parent: &str, name: &str) -> Result<Node, FsError> {
        self.directory_mut(parent)?
            .remove(name)
            .ok_or_else(|| FsError::NotFound { path: path::join(parent, name) })
    }

    /// Canonical paths of every node, depth first, root included.
    pub fn get_all_paths(&self) -> Vec<String> {
        fn walk(dir: &Directory, prefix: &str, out: &mut Vec<String>) {
            for (name, node) in &dir.children {
                let child = path::join(prefix, name);
                out.push(child.clone());
                if let Node::Directory(sub) = node {
                    walk(sub, &child, out);
                }
            }
        }

        let mut paths = vec![path::ROOT.to_string()];
        if let Node::Directory(root) = &self.root {
            walk(root, path::ROOT, &mut paths);
        }
        paths
    }
}

impl Default for InMemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InMemoryFs {
        let mut fs = InMemoryFs::new();
        fs.write_file("/home/a.txt", "a").unwrap();
        fs.mkdir_all("/home/docs").unwrap();
        fs
    }

    #[test]
    fn test_lookup_root() {
        let fs = InMemoryFs::new();
        assert!(fs.lookup("/").unwrap().is_directory());
        assert!(fs.directory("/").unwrap().is_empty());
    }

    #[test]
    fn test_lookup_nested() {
        let fs = sample();
        assert!(fs.lookup("/home").unwrap().is_directory());
        assert!(fs.lookup("/home/a.txt").unwrap().is_file());
        assert_eq!(
            fs.lookup("/home/missing"),
            Err(FsError::NotFound { path: "/home/missing".to_string() })
        );
    }

    #[test]
    fn test_lookup_through_file_fails() {
        let fs = sample();
        assert_eq!(
            fs.lookup("/home/a.txt/x"),
            Err(FsError::NotDirectory { path: "/home/a.txt/x".to_string() })
        );
        assert!(fs.directory("/home/a.txt").is_err());
    }

    #[test]
    fn test_read_file() {
        let fs = sample();
        assert_eq!(fs.read_file("/home/a.txt").unwrap(), "a");
        assert!(matches!(fs.read_file("/home"), Err(FsError::IsDirectory { .. })));
    }

    #[test]
    fn test_mkdir_all_over_file() {
        let mut fs = sample();
        assert!(matches!(
            fs.mkdir_all("/home/a.txt/sub"),
            Err(FsError::AlreadyExists { .. })
        ));
        fs.mkdir_all("/home/docs/deep/er").unwrap();
        assert!(fs.is_directory("/home/docs/deep/er"));
    }

    #[test]
    fn test_detach() {
        let mut fs = sample();
        let node = fs.detach("/home", "docs").unwrap();
        assert!(node.is_directory());
        assert!(!fs.exists("/home/docs"));
        assert!(matches!(fs.detach("/home", "docs"), Err(FsError::NotFound { .. })));
    }

    #[test]
    fn test_get_all_paths() {
        let fs = sample();
        assert_eq!(
            fs.get_all_paths(),
            vec!["/", "/home", "/home/a.txt", "/home/docs"]
        );
    }
}
