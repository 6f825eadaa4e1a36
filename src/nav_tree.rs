// ========================================
// sidenav: サイドバーのファイルツリー
// ========================================
//
// 入力ファイルのパスをルートディレクトリからの相対パスとして入れ子にし、
// サイドバーのリンク一覧として描画する。

use crate::error::{PanelError, Result};
use std::path::{Component, Path, PathBuf};

/// ツリーのノード（ディレクトリまたはファイル）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavNode {
    pub name: String,
    pub is_dir: bool,
    pub url: String,
    /// 追加順を保持する
    pub children: Vec<NavNode>,
}

impl NavNode {
    pub fn file(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            url: url.into(),
            children: Vec::new(),
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            url: "#".to_string(),
            children: Vec::new(),
        }
    }

    pub fn child(&self, name: &str) -> Option<&NavNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// 子ディレクトリを取得し、なければ作成する
    fn dir_entry(&mut self, name: &str) -> Result<&mut NavNode> {
        let index = match self.children.iter().position(|c| c.name == name) {
            Some(index) if self.children[index].is_dir => index,
            Some(_) => return Err(self.duplicate(name)),
            None => {
                self.children.push(NavNode::dir(name));
                self.children.len() - 1
            }
        };
        Ok(&mut self.children[index])
    }

    fn add_child(&mut self, child: NavNode) -> Result<()> {
        if self.child(&child.name).is_some() {
            return Err(self.duplicate(&child.name));
        }
        self.children.push(child);
        Ok(())
    }

    fn duplicate(&self, name: &str) -> PanelError {
        PanelError::DuplicateNavEntry {
            name: name.to_string(),
            parent: self.name.clone(),
        }
    }
}

/// サイドバーに並べるファイルツリー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTree {
    root_dir: PathBuf,
    root: NavNode,
}

impl NavTree {
    /// ルートノードはindex.htmlを指す
    pub fn new<P: AsRef<Path>>(root_dir: P) -> Self {
        let root_dir = normalize(root_dir.as_ref());
        let name = root_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .or_else(|| {
                std::env::current_dir()
                    .ok()
                    .and_then(|d| d.file_name().map(|n| n.to_string_lossy().into_owned()))
            })
            .unwrap_or_else(|| ".".to_string());

        Self {
            root_dir,
            root: NavNode::file(name, "index.html"),
        }
    }

    pub fn from_paths<I, S, P>(files: I, root_dir: P) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        P: AsRef<Path>,
    {
        let mut tree = Self::new(root_dir);
        for file in files {
            tree.add_path(file.as_ref())?;
        }
        Ok(tree)
    }

    pub fn root(&self) -> &NavNode {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// ファイルを追加（ディレクトリは無視）
    /// リンク先は入力パスに`.html`を付けたもの
    pub fn add_path(&mut self, file: &str) -> Result<()> {
        if Path::new(file).is_dir() {
            log::debug!("Skipping directory {}", file);
            return Ok(());
        }

        let normalized = normalize(Path::new(file));
        let relative = if self.root_dir.as_os_str().is_empty() {
            normalized.as_path()
        } else {
            normalized
                .strip_prefix(&self.root_dir)
                .map_err(|_| PanelError::PathOutsideRoot {
                    path: file.to_string(),
                    root: self.root_dir.display().to_string(),
                })?
        };

        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let Some((leaf, dirs)) = parts.split_last() else {
            return Err(PanelError::PathOutsideRoot {
                path: file.to_string(),
                root: self.root_dir.display().to_string(),
            });
        };

        // ルートはファイル扱いのノードだが子を持てる
        let mut node = &mut self.root;
        for dir in dirs {
            node = node.dir_entry(dir)?;
        }
        node.add_child(NavNode::file(leaf.as_str(), format!("{}.html", file)))?;
        log::debug!("Added {} to sidebar tree", file);
        Ok(())
    }

    /// 確認用のテキスト表示（深さ分の`|`、ディレクトリは`+`）
    pub fn tree_view(&self) -> String {
        let mut out = String::new();
        write_tree_view(&self.root, 0, &mut out);
        out
    }
}

fn write_tree_view(node: &NavNode, indent: usize, out: &mut String) {
    out.push_str(&"|".repeat(indent));
    if node.is_dir {
        out.push('+');
    }
    out.push_str(&node.name);
    out.push('\n');
    for child in &node.children {
        write_tree_view(child, indent + 1, out);
    }
}

/// `.`を取り除き、`..`は一つ上に戻す（ファイルシステムは参照しない）
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
