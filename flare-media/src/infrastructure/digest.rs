//! 摘要计算
//!
//! 单次遍历内容，同时喂给 MD5 与 SHA1，并统计长度。

use std::io::{self, Read, Seek, SeekFrom};

use sha1::{Digest, Sha1};

use crate::domain::models::MediaDigest;

/// 默认读取块大小
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;
/// 读取块大小上限，超出的取值按上限处理
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// 计算内存内容的摘要
pub fn digest_bytes(data: &[u8]) -> MediaDigest {
    let md5 = md5::compute(data);
    let sha1 = Sha1::digest(data);

    let mut digest = MediaDigest {
        md5: md5.0,
        length: data.len() as u64,
        ..MediaDigest::default()
    };
    digest.sha1.copy_from_slice(&sha1);
    digest
}

/// 计算流的摘要
///
/// 从起始位置读到结尾，完成后重新定位到起始位置。
pub fn digest_stream<R: Read + Seek + ?Sized>(reader: &mut R) -> io::Result<MediaDigest> {
    digest_stream_with_chunk(reader, DEFAULT_CHUNK_SIZE)
}

/// 以指定块大小计算流的摘要
///
/// 块大小被限制在 `1..=MAX_CHUNK_SIZE` 内。
pub fn digest_stream_with_chunk<R: Read + Seek + ?Sized>(
    reader: &mut R,
    chunk_size: usize,
) -> io::Result<MediaDigest> {
    reader.seek(SeekFrom::Start(0))?;

    let mut md5 = md5::Context::new();
    let mut sha1 = Sha1::new();
    let mut buf = vec![0u8; chunk_size.clamp(1, MAX_CHUNK_SIZE)];
    let mut length = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        md5.consume(&buf[..n]);
        sha1.update(&buf[..n]);
        length += n as u64;
    }

    reader.seek(SeekFrom::Start(0))?;

    let mut digest = MediaDigest {
        md5: md5.compute().0,
        length,
        ..MediaDigest::default()
    };
    digest.sha1.copy_from_slice(&sha1.finalize());

    tracing::trace!(length, md5 = %digest.md5_hex(), "stream digest computed");
    Ok(digest)
}
