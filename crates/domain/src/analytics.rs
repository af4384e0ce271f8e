pub mod decode;
pub mod sort;
