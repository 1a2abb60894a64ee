//! 发送侧媒体流
//!
//! 媒体元素的 `stream` 字段在构造时被摘要与探测读取一次，之后由发送流程再次完整读取。
//! 流的来源决定谁负责释放：按路径打开的文件由元素持有，最后一个句柄释放时关闭；
//! 调用方提供的流移交给元素，本模块不会主动关闭它。

use std::fmt;
use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use bytes::Bytes;
use flare_media::ReadSeek;

use crate::error::{MessageError, Result};

/// 流来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamOrigin {
    /// 内存数据
    Memory,
    /// 调用方提供的流
    Caller,
    /// 构造函数按路径打开的文件
    File(PathBuf),
}

/// 媒体流句柄
///
/// 克隆得到的是同一底层流的共享句柄，读取位置也是共享的。
#[derive(Clone)]
pub struct MediaStream {
    origin: StreamOrigin,
    inner: Arc<Mutex<Box<dyn ReadSeek>>>,
}

impl MediaStream {
    /// 包装内存数据
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self::with_origin(StreamOrigin::Memory, Box::new(Cursor::new(data.into())))
    }

    /// 接管调用方提供的流
    pub fn from_reader<R: ReadSeek + 'static>(reader: R) -> Self {
        Self::with_origin(StreamOrigin::Caller, Box::new(reader))
    }

    /// 按路径打开文件，句柄归返回的流所有
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MessageError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::with_origin(
            StreamOrigin::File(path.to_path_buf()),
            Box::new(file),
        ))
    }

    fn with_origin(origin: StreamOrigin, reader: Box<dyn ReadSeek>) -> Self {
        Self {
            origin,
            inner: Arc::new(Mutex::new(reader)),
        }
    }

    pub fn origin(&self) -> &StreamOrigin {
        &self.origin
    }

    /// 是否为构造函数打开并持有的文件句柄
    pub fn is_owned_file(&self) -> bool {
        matches!(self.origin, StreamOrigin::File(_))
    }

    /// 在一次加锁内访问底层流
    pub fn with_reader<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut dyn ReadSeek) -> std::result::Result<T, E>,
        E: From<io::Error>,
    {
        let mut guard = self.lock()?;
        f(&mut **guard)
    }

    /// 从头读取全部内容，完成后重新定位到起始位置
    pub fn read_all(&self) -> io::Result<Vec<u8>> {
        self.with_reader(|reader| {
            reader.seek(SeekFrom::Start(0))?;
            let mut data = Vec::new();
            reader.read_to_end(&mut data)?;
            reader.seek(SeekFrom::Start(0))?;
            Ok(data)
        })
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Box<dyn ReadSeek>>> {
        self.inner
            .lock()
            .map_err(|_| io::Error::other("media stream lock poisoned"))
    }
}

impl Read for MediaStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.lock()?.read(buf)
    }
}

impl Seek for MediaStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.lock()?.seek(pos)
    }
}

impl fmt::Debug for MediaStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaStream")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
