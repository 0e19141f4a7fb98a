pub mod calc;
pub mod entries;
pub mod init;
pub mod misc;
pub mod session;
pub mod tape;
