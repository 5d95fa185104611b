use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("모든 필드를 입력해주세요.")]
    MissingBookFields,
    #[error("URL을 입력해주세요.")]
    MissingUrl,
}

#[derive(Error, Debug)]
pub enum BookError {
    #[error("{}", .0)]
    Validation(#[from] ValidationError),
    #[error("파일 시스템 오류: {}", .0)]
    Fs(#[from] std::io::Error),
    #[error("qr encode error: {0}")]
    QrEncode(#[from] qrcode::types::QrError),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("time format error: {0}")]
    TimeFormat(#[from] time::error::Format),
    #[error("config dir not found")]
    ConfigDir,
    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("toml parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("log file not found")]
    LogFileNotFound,
}

pub(crate) type BookResult<T> = Result<T, BookError>;
