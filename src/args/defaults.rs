pub(crate) const DEFAULT_USER_AGENT: &str = concat!("seqprobe/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_HOST: &str = "127.0.0.1";
pub(crate) const DEFAULT_PORT: u16 = 8080;
pub(crate) const DEFAULT_PATH: &str = "/albums";
pub(crate) const DEFAULT_OUTPUT_DIR: &str = ".";
