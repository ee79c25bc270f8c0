pub mod header;
pub mod init_config;
pub mod month;
