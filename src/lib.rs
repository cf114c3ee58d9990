pub mod demo;
pub mod errors;
pub mod heap;
pub mod linked_list;
pub mod options;
