pub mod holidays;
pub mod init;
pub mod plan;
pub mod root;
