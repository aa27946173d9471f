//! Request execution: transport abstraction and the default HTTP stack.

pub mod http;
