use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入文件不存在、无法读取或不是合法的 UTF-8
    #[error("读取文件失败 ({path:?}): {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// 输出文件无法写入
    #[error("写入文件失败 ({path:?}): {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    /// 创建文件读取错误
    pub fn read_failed(path: impl AsRef<Path>, source: io::Error) -> Self {
        AppError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 创建文件写入错误
    pub fn write_failed(path: impl AsRef<Path>, source: io::Error) -> Self {
        AppError::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn is_read(&self) -> bool {
        matches!(self, AppError::Read { .. })
    }

    pub fn is_write(&self) -> bool {
        matches!(self, AppError::Write { .. })
    }

    /// 出错的文件路径
    pub fn path(&self) -> &Path {
        match self {
            AppError::Read { path, .. } | AppError::Write { path, .. } => path,
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
