pub mod audio;
pub mod fetch;
pub mod observability;
